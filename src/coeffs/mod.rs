// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Embedded beam-model coefficient tables.
//!
//! The tables were derived from MeerKAT holography measurements averaged at 60
//! degrees elevation (see katholog's `build_holography_database.py` and
//! `tabulate_beam_parameters.py`). The pointing errors ("squints") were
//! determined in the aperture plane by phase fitting, and the FWHM values were
//! measured in the beam plane along axis-aligned cuts through the beam
//! centres.
//!
//! Each table is a CSV file compiled into the library. The first line names
//! the columns and the second gives their units:
//!
//! ```text
//! freq, Hx squint, Hy squint, Vx squint, Vy squint, Hx fwhm, Hy fwhm, Vx fwhm, Vy fwhm
//! MHz,    arcmin,    arcmin,    arcmin,    arcmin,  arcmin,  arcmin,  arcmin,  arcmin
//! ```

mod error;

pub use error::CoeffTableError;

use serde::{Deserialize, Serialize};
use vec1::Vec1;

use crate::{constants::ARCMIN_PER_DEG, Band, BeamError};

/// The number of lines at the top of a table that aren't samples.
const NUM_HEADER_LINES: usize = 2;

/// Frequency, then four squints and four FWHMs.
const NUM_COLUMNS: usize = 9;

lazy_static::lazy_static! {
    static ref L_BAND_2020: Vec1<CalibrationSample> =
        parse_coeff_table(include_str!("tables/l_band_2020.csv"))
            .expect("embedded L-band table is valid");

    static ref UHF_BAND_2020: Vec1<CalibrationSample> =
        parse_coeff_table(include_str!("tables/uhf_band_2020.csv"))
            .expect("embedded UHF-band table is valid");

    static ref S_BAND_2020: Vec1<CalibrationSample> =
        parse_coeff_table(include_str!("tables/s_band_2020.csv"))
            .expect("embedded S-band table is valid");
}

/// Beam-centre offsets and widths of a single polarisation. All values are in
/// degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolParams {
    /// Pointing offset along x.
    pub squint_x_deg: f64,

    /// Pointing offset along y.
    pub squint_y_deg: f64,

    /// Full width at half maximum along x.
    pub fwhm_x_deg: f64,

    /// Full width at half maximum along y.
    pub fwhm_y_deg: f64,
}

impl PolParams {
    /// Linearly interpolate (or extrapolate, if `t` is outside [0, 1]) every
    /// value independently between `self` (`t` = 0) and `other` (`t` = 1).
    pub(crate) fn lerp(&self, other: &PolParams, t: f64) -> PolParams {
        let lerp = |a: f64, b: f64| a + t * (b - a);
        PolParams {
            squint_x_deg: lerp(self.squint_x_deg, other.squint_x_deg),
            squint_y_deg: lerp(self.squint_y_deg, other.squint_y_deg),
            fwhm_x_deg: lerp(self.fwhm_x_deg, other.fwhm_x_deg),
            fwhm_y_deg: lerp(self.fwhm_y_deg, other.fwhm_y_deg),
        }
    }
}

/// Beam parameters for both polarisations at one frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationSample {
    pub freq_mhz: f64,

    /// The H (horizontal) polarisation.
    pub h: PolParams,

    /// The V (vertical) polarisation.
    pub v: PolParams,
}

impl CalibrationSample {
    /// Are all of the FWHMs greater than 0? This is only false for parameters
    /// extrapolated far outside of a table's frequencies (or for NaN
    /// parameters); the beam isn't meaningful there.
    pub fn has_positive_widths(&self) -> bool {
        [
            self.h.fwhm_x_deg,
            self.h.fwhm_y_deg,
            self.v.fwhm_x_deg,
            self.v.fwhm_y_deg,
        ]
        .iter()
        .all(|&fwhm| fwhm > 0.0)
    }
}

/// Get the calibration samples associated with a band identifier, e.g.
/// "MKAT-AA-L-JIM-2020". The samples are in ascending frequency order.
pub fn samples_for(band_id: &str) -> Result<&'static [CalibrationSample], BeamError> {
    Band::from_name(band_id).map(Band::samples)
}

pub(crate) fn table(band: Band) -> &'static Vec1<CalibrationSample> {
    match band {
        Band::L2020 => &*L_BAND_2020,
        Band::Uhf2020 => &*UHF_BAND_2020,
        Band::S2020 => &*S_BAND_2020,
    }
}

/// Parse the text of a coefficient table. Squints and FWHMs are converted
/// from arcminutes to degrees. Blank lines are ignored; line numbers in errors
/// are 1-indexed and include the header.
pub fn parse_coeff_table(text: &str) -> Result<Vec1<CalibrationSample>, CoeffTableError> {
    let mut samples: Vec<CalibrationSample> = vec![];
    for (i, line) in text.lines().enumerate().skip(NUM_HEADER_LINES) {
        let line_num = i + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != NUM_COLUMNS {
            return Err(CoeffTableError::NumColumns {
                line: line_num,
                expected: NUM_COLUMNS,
                got: fields.len(),
            });
        }
        let mut values = [0.0; NUM_COLUMNS];
        for (value, field) in values.iter_mut().zip(fields) {
            *value = field
                .parse()
                .map_err(|source| CoeffTableError::ParseFloat {
                    line: line_num,
                    value: field.to_string(),
                    source,
                })?;
        }
        let [freq_mhz, hx_squint, hy_squint, vx_squint, vy_squint, hx_fwhm, hy_fwhm, vx_fwhm, vy_fwhm] =
            values;

        if let Some(prev) = samples.last() {
            // Written this way so that NaN frequencies are also rejected.
            if !(freq_mhz > prev.freq_mhz) {
                return Err(CoeffTableError::NotAscending {
                    line: line_num,
                    freq_mhz,
                    prev_freq_mhz: prev.freq_mhz,
                });
            }
        }
        if let Some(&fwhm) = [hx_fwhm, hy_fwhm, vx_fwhm, vy_fwhm]
            .iter()
            .find(|&&fwhm| !(fwhm > 0.0))
        {
            return Err(CoeffTableError::NonPositiveFwhm {
                line: line_num,
                fwhm,
            });
        }

        samples.push(CalibrationSample {
            freq_mhz,
            h: PolParams {
                squint_x_deg: hx_squint / ARCMIN_PER_DEG,
                squint_y_deg: hy_squint / ARCMIN_PER_DEG,
                fwhm_x_deg: hx_fwhm / ARCMIN_PER_DEG,
                fwhm_y_deg: hy_fwhm / ARCMIN_PER_DEG,
            },
            v: PolParams {
                squint_x_deg: vx_squint / ARCMIN_PER_DEG,
                squint_y_deg: vy_squint / ARCMIN_PER_DEG,
                fwhm_x_deg: vx_fwhm / ARCMIN_PER_DEG,
                fwhm_y_deg: vy_fwhm / ARCMIN_PER_DEG,
            },
        });
    }

    Vec1::try_from_vec(samples).map_err(|_| CoeffTableError::Empty)
}
