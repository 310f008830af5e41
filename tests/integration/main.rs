// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod beam_models;

use katbeam::{BeamError, JimBeam};

/// Get the Stokes I response of a source at a sky offset [degrees] over a
/// number of frequency channels, as a data-reduction pipeline would.
fn stokes_i_spectrum(
    band_id: &str,
    x_deg: f64,
    y_deg: f64,
    freqs_mhz: &[f64],
) -> Result<Vec<f64>, BeamError> {
    let beam = JimBeam::new(band_id)?;
    Ok(freqs_mhz
        .iter()
        .map(|&f| beam.calc_at(katbeam::Pol::I, x_deg, y_deg, f))
        .collect())
}
