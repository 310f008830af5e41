// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The cosine aperture taper.
//!
//! A cosine-tapered aperture illumination has the far-field voltage pattern
//! `cos(pi rr) / (1 - 4 rr^2)` (Essential Radio Astronomy, Condon & Ransom,
//! 2016, page 83). While the sidelobe levels may match measurements only
//! coincidentally, the main lobe fits MeerKAT holography well.

use crate::{
    constants::{FRAC_PI_4, PI, TAPER_FIRST_NULL, TAPER_SCALE},
    coeffs::PolParams,
};

/// How close `1 - 4 rr^2` must get to 0 before the taper is replaced by its
/// limit. The error introduced either side of this is at most a few 1e-8.
const SINGULARITY_TOLERANCE: f64 = 1e-7;

/// The taper's voltage response at the FWHM-normalised radius `r`. `r` = 0
/// gives 1, and `r` = 0.5 gives `sqrt(0.5)` (i.e. half power).
///
/// If `clip_sidelobes` is true, everything beyond the first null is zero.
pub(crate) fn cosine_taper(r: f64, clip_sidelobes: bool) -> f64 {
    let rr = r * TAPER_SCALE;
    if clip_sidelobes && rr >= TAPER_FIRST_NULL {
        return 0.0;
    }

    let denom = 1.0 - 4.0 * rr * rr;
    // The numerator and denominator share a root at rr = 1/2.
    if denom.abs() < SINGULARITY_TOLERANCE {
        FRAC_PI_4
    } else {
        (PI * rr).cos() / denom
    }
}

/// The voltage response of a single polarisation at sky offset (`x`, `y`)
/// [degrees]. The beam is an ellipse centred on the squint, with independent
/// widths along each axis.
pub(crate) fn pattern(x: f64, y: f64, params: &PolParams, clip_sidelobes: bool) -> f64 {
    let dx = (x - params.squint_x_deg) / params.fwhm_x_deg;
    let dy = (y - params.squint_y_deg) / params.fwhm_y_deg;
    cosine_taper((dx * dx + dy * dy).sqrt(), clip_sidelobes)
}

/// Total intensity from the two co-polarised voltage responses.
pub(crate) fn stokes_i(hh: f64, vv: f64) -> f64 {
    0.5 * (hh * hh + vv * vv)
}
