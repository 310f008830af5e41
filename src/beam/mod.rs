// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code for MeerKAT primary beam calculations.
//!
//! [`JimBeam`] models the co-polarised primary beams of a MeerKAT dish with a
//! cosine aperture taper, parameterised by frequency-dependent pointing
//! offsets ("squints") and full width at half maximum (FWHM) beam widths. The
//! parameters come from holography measurements (see [`crate::coeffs`]).
//!
//! Notes on using this model:
//!
//! - It is a simplification. The actual beam varies per antenna and depends on
//!   environmental factors.
//! - Per-antenna pointing errors during an observation often exceed 1 arcmin,
//!   so the effective imaging primary beam will be slightly broader. This
//!   could be approximated by averaging several individual beams with
//!   respective pointing errors inserted.
//! - Depending on the use case, reference pointing (or another technique) may
//!   be needed to remove antenna pointing errors before this model applies.

mod grid;
mod interp;
mod taper;

pub use grid::square_grid;
pub use interp::interp_sample;

use log::{debug, trace, warn};
use ndarray::{prelude::*, Zip};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use vec1::Vec1;

use crate::{coeffs::CalibrationSample, Band, BeamError};
use grid::co_broadcast;
use taper::{pattern, stokes_i};

/// The beam responses that can be calculated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Pol {
    /// The H co-polarised voltage beam.
    HH,

    /// The V co-polarised voltage beam.
    VV,

    /// The Stokes I (total intensity) power beam, `(HH^2 + VV^2) / 2`.
    I,
}

/// A MeerKAT simplified primary beam model for a single band.
#[derive(Debug, Clone)]
pub struct JimBeam {
    band: Band,
    samples: &'static Vec1<CalibrationSample>,
    clip_sidelobes: bool,
}

static_assertions::assert_impl_all!(JimBeam: Send, Sync, Clone);

impl JimBeam {
    /// Create a beam model from a band identifier, e.g.
    /// "MKAT-AA-UHF-JIM-2020". Unknown identifiers are rejected.
    pub fn new(name: &str) -> Result<JimBeam, BeamError> {
        Ok(JimBeam::from_band(Band::from_name(name)?))
    }

    /// Create a beam model for a known band.
    pub fn from_band(band: Band) -> JimBeam {
        let samples = crate::coeffs::table(band);
        debug!(
            "Using beam model {band} ({}); {} calibration samples between {} and {} MHz",
            band.description(),
            samples.len(),
            samples.first().freq_mhz,
            samples.last().freq_mhz,
        );
        JimBeam {
            band,
            samples,
            clip_sidelobes: false,
        }
    }

    /// If `clip` is true, voltage responses beyond the first null of the
    /// taper are set to zero, i.e. the model's sidelobes are removed. This is
    /// off by default.
    pub fn with_null_clipping(mut self, clip: bool) -> JimBeam {
        self.clip_sidelobes = clip;
        self
    }

    /// The identifier of this model.
    pub fn name(&self) -> &'static str {
        self.band.name()
    }

    /// The band this model is for.
    pub fn band(&self) -> Band {
        self.band
    }

    /// The calibration samples used by this model, in ascending frequency
    /// order.
    pub fn samples(&self) -> &'static [CalibrationSample] {
        self.samples.as_slice()
    }

    /// Get the squints and FWHMs of both polarisations at a frequency. See
    /// [`interp_sample`] for how frequencies between and outside of the
    /// calibration samples are handled.
    pub fn interp_params(&self, freq_mhz: f64) -> CalibrationSample {
        let lowest = self.samples.first().freq_mhz;
        let highest = self.samples.last().freq_mhz;
        if freq_mhz < lowest || freq_mhz > highest {
            debug!(
                "{freq_mhz} MHz is outside of the {} calibration samples ({lowest} - {highest} MHz); extrapolating",
                self.band
            );
        }

        let params = interp_sample(self.samples, freq_mhz);
        trace!("Beam parameters at {freq_mhz} MHz: {params:?}");
        if freq_mhz.is_finite() && !params.has_positive_widths() {
            warn!(
                "{freq_mhz} MHz is too far outside of the {} calibration samples; extrapolated FWHMs aren't positive and the beam is meaningless",
                self.band
            );
        }
        params
    }

    /// Calculate the H co-polarised beam at the provided coordinates
    /// [degrees]. The result has the shape of `x` and `y` broadcast together.
    pub fn hh<D: Dimension>(
        &self,
        x: ArrayView<f64, D>,
        y: ArrayView<f64, D>,
        freq_mhz: f64,
    ) -> Result<Array<f64, D>, BeamError> {
        self.calc(Pol::HH, x, y, freq_mhz)
    }

    /// Calculate the V co-polarised beam at the provided coordinates
    /// [degrees]. The result has the shape of `x` and `y` broadcast together.
    pub fn vv<D: Dimension>(
        &self,
        x: ArrayView<f64, D>,
        y: ArrayView<f64, D>,
        freq_mhz: f64,
    ) -> Result<Array<f64, D>, BeamError> {
        self.calc(Pol::VV, x, y, freq_mhz)
    }

    /// Calculate the Stokes I beam at the provided coordinates [degrees]. The
    /// result has the shape of `x` and `y` broadcast together and is
    /// non-negative.
    pub fn i<D: Dimension>(
        &self,
        x: ArrayView<f64, D>,
        y: ArrayView<f64, D>,
        freq_mhz: f64,
    ) -> Result<Array<f64, D>, BeamError> {
        self.calc(Pol::I, x, y, freq_mhz)
    }

    /// Calculate a beam response at the provided coordinates [degrees].
    ///
    /// `x` and `y` must have the same shape, or be broadcastable to a common
    /// shape (e.g. a row of x values and a column of y values). Non-finite
    /// coordinates give non-finite responses rather than an error.
    pub fn calc<D: Dimension>(
        &self,
        pol: Pol,
        x: ArrayView<f64, D>,
        y: ArrayView<f64, D>,
        freq_mhz: f64,
    ) -> Result<Array<f64, D>, BeamError> {
        let (x, y) = co_broadcast(&x, &y)?;
        let params = self.interp_params(freq_mhz);
        let clip = self.clip_sidelobes;
        Ok(Zip::from(x)
            .and(y)
            .par_map_collect(|&x, &y| response(pol, x, y, &params, clip)))
    }

    /// Calculate a beam response at a single sky offset [degrees].
    pub fn calc_at(&self, pol: Pol, x: f64, y: f64, freq_mhz: f64) -> f64 {
        let params = self.interp_params(freq_mhz);
        response(pol, x, y, &params, self.clip_sidelobes)
    }
}

impl Default for JimBeam {
    /// The L-band model.
    fn default() -> JimBeam {
        JimBeam::from_band(Band::default())
    }
}

fn response(pol: Pol, x: f64, y: f64, params: &CalibrationSample, clip: bool) -> f64 {
    match pol {
        Pol::HH => pattern(x, y, &params.h, clip),
        Pol::VV => pattern(x, y, &params.v, clip),
        Pol::I => stokes_i(
            pattern(x, y, &params.h, clip),
            pattern(x, y, &params.v, clip),
        ),
    }
}
