// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use vec1::Vec1;

use crate::coeffs::CalibrationSample;

/// Get beam parameters at an arbitrary frequency from a table of calibration
/// samples (which must be in ascending frequency order).
///
/// Between samples, every squint and FWHM is linearly interpolated
/// independently. Outside of the sampled frequencies, the slope of the edge
/// segment is used to extrapolate; values are *not* clamped to the edge
/// samples. If `freq_mhz` exactly matches a sample's frequency, that sample is
/// returned unaltered. A table with a single sample always gives that sample's
/// parameters.
///
/// The FWHMs shrink with frequency, so extrapolating far enough above a table
/// gives FWHMs that are 0 or negative (e.g. a few hundred MHz above the
/// MeerKAT S-band table). Such parameters are still returned; check them with
/// [`CalibrationSample::has_positive_widths`].
pub fn interp_sample(samples: &Vec1<CalibrationSample>, freq_mhz: f64) -> CalibrationSample {
    if samples.len() == 1 {
        return CalibrationSample {
            freq_mhz,
            ..*samples.first()
        };
    }

    let i = match samples.binary_search_by(|s| s.freq_mhz.total_cmp(&freq_mhz)) {
        Ok(i) => return samples[i],
        // `i` is where `freq_mhz` would be inserted; off either end of the
        // table, use the nearest segment.
        Err(i) => i.clamp(1, samples.len() - 1),
    };
    let lower = &samples[i - 1];
    let upper = &samples[i];
    let t = (freq_mhz - lower.freq_mhz) / (upper.freq_mhz - lower.freq_mhz);
    CalibrationSample {
        freq_mhz,
        h: lower.h.lerp(&upper.h, t),
        v: lower.v.lerp(&upper.v, t),
    }
}
