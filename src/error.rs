// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all beam-model errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BeamError {
    #[error("Unknown beam model '{got}'; supported models are: {supported}")]
    UnsupportedBand { got: String, supported: String },

    #[error("Coordinate arrays with shapes {x:?} and {y:?} cannot be broadcast together")]
    ShapeMismatch { x: Vec<usize>, y: Vec<usize> },
}
