// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Supported beam models.
//!
//! Each model is tied to a receiver band and a calibration epoch; both are
//! encoded in the identifier string (e.g. "MKAT-AA-L-JIM-2020"). A new set of
//! holography measurements gets a new identifier rather than replacing an
//! existing table.

use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{coeffs::CalibrationSample, BeamError};

lazy_static::lazy_static! {
    pub(crate) static ref SUPPORTED_BANDS: String = Band::iter().join(", ");
}

/// A supported MeerKAT beam model.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum Band {
    /// L-band (900 - 1650 MHz), 2020 holography.
    #[default]
    #[strum(serialize = "MKAT-AA-L-JIM-2020")]
    #[serde(rename = "MKAT-AA-L-JIM-2020")]
    L2020,

    /// UHF-band (550 - 1050 MHz), 2020 holography.
    #[strum(serialize = "MKAT-AA-UHF-JIM-2020")]
    #[serde(rename = "MKAT-AA-UHF-JIM-2020")]
    Uhf2020,

    /// S-band (1750 - 3450 MHz), 2020 holography.
    #[strum(serialize = "MKAT-AA-S-JIM-2020")]
    #[serde(rename = "MKAT-AA-S-JIM-2020")]
    S2020,
}

impl Band {
    /// Look up a band by its identifier, e.g. "MKAT-AA-UHF-JIM-2020".
    /// Matching is exact.
    pub fn from_name(name: &str) -> Result<Band, BeamError> {
        Band::from_str(name).map_err(|_| BeamError::UnsupportedBand {
            got: name.to_string(),
            supported: SUPPORTED_BANDS.clone(),
        })
    }

    /// The identifier of this band.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// A human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            Band::L2020 => "MeerKAT L-band, 2020 holography",
            Band::Uhf2020 => "MeerKAT UHF-band, 2020 holography",
            Band::S2020 => "MeerKAT S-band, 2020 holography",
        }
    }

    /// The calibration samples of this band, ascending in frequency.
    pub fn samples(self) -> &'static [CalibrationSample] {
        crate::coeffs::table(self).as_slice()
    }

    /// The lowest and highest measured frequencies [MHz]. Beam parameters
    /// outside of this range are extrapolated.
    pub fn freq_range_mhz(self) -> (f64, f64) {
        let samples = crate::coeffs::table(self);
        (samples.first().freq_mhz, samples.last().freq_mhz)
    }
}
