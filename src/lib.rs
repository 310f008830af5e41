// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Simplified primary beam models for the MeerKAT radio telescope.

The beams are modelled with a cosine aperture taper, parameterised by
frequency-dependent pointing offsets and beam widths measured with holography.
The model is fast and closed-form; it does not attempt to model per-antenna
variations.

```no_run
use katbeam::{square_grid, JimBeam, MKAT_AA_UHF_JIM_2020};

let beam = JimBeam::new(MKAT_AA_UHF_JIM_2020)?;
let (x, y) = square_grid(10.0, 128);
let hh = beam.hh(x.view(), y.view(), 800.0)?;
assert_eq!(hh.dim(), (128, 128));
# Ok::<(), katbeam::BeamError>(())
```
 */

pub mod band;
pub mod beam;
pub mod coeffs;
pub mod constants;
mod error;

// Re-exports.
pub use band::Band;
pub use beam::{interp_sample, square_grid, JimBeam, Pol};
pub use coeffs::{samples_for, CalibrationSample, CoeffTableError, PolParams};
pub use constants::{MKAT_AA_L_JIM_2020, MKAT_AA_S_JIM_2020, MKAT_AA_UHF_JIM_2020};
pub use error::BeamError;
