// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision.
 */

pub use std::f64::consts::{FRAC_PI_4, PI};

/// Identifier of the MeerKAT L-band model derived from 2020 holography.
pub const MKAT_AA_L_JIM_2020: &str = "MKAT-AA-L-JIM-2020";

/// Identifier of the MeerKAT UHF-band model derived from 2020 holography.
pub const MKAT_AA_UHF_JIM_2020: &str = "MKAT-AA-UHF-JIM-2020";

/// Identifier of the MeerKAT S-band model derived from 2020 holography.
pub const MKAT_AA_S_JIM_2020: &str = "MKAT-AA-S-JIM-2020";

/// Scales a FWHM-normalised radius such that the cosine taper's half-power
/// point lands on a normalised radius of 0.5. This is the root of
/// `cos(pi * rr) / (1 - 4 rr^2) = sqrt(0.5)` near 1, solved to 1e-15.
pub const TAPER_SCALE: f64 = 1.1889647809329453;

/// The (scaled) radius of the first null of the cosine taper. Voltage
/// responses beyond this are sidelobes.
pub const TAPER_FIRST_NULL: f64 = 1.5;

/// The embedded coefficient tables are in arcminutes; everything else is in
/// degrees.
pub const ARCMIN_PER_DEG: f64 = 60.0;
