// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with reading coefficient tables.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoeffTableError {
    #[error("The coefficient table has no calibration samples")]
    Empty,

    #[error("Line {line}: expected {expected} columns, but got {got}")]
    NumColumns {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("Line {line}: couldn't parse '{value}' as a float: {source}")]
    ParseFloat {
        line: usize,
        value: String,
        source: std::num::ParseFloatError,
    },

    #[error("Line {line}: frequency {freq_mhz} MHz doesn't exceed the previous frequency {prev_freq_mhz} MHz; samples must be strictly ascending")]
    NotAscending {
        line: usize,
        freq_mhz: f64,
        prev_freq_mhz: f64,
    },

    #[error("Line {line}: FWHM values must be positive, but got {fwhm}")]
    NonPositiveFwhm { line: usize, fwhm: f64 },
}
