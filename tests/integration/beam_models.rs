// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests for the public beam-model interface.

use std::str::FromStr;

use approx::assert_abs_diff_eq;
use ndarray::prelude::*;
use strum::IntoEnumIterator;

use crate::*;
use katbeam::{
    samples_for, square_grid, Band, Pol, MKAT_AA_L_JIM_2020, MKAT_AA_S_JIM_2020,
    MKAT_AA_UHF_JIM_2020,
};

#[test]
fn published_identifiers_construct_beams() {
    for name in [MKAT_AA_L_JIM_2020, MKAT_AA_UHF_JIM_2020, MKAT_AA_S_JIM_2020] {
        let beam = JimBeam::new(name).unwrap();
        assert_eq!(beam.name(), name);
        assert_eq!(Band::from_str(name).unwrap(), beam.band());
        assert_eq!(samples_for(name).unwrap(), beam.samples());
    }
}

#[test]
fn unsupported_identifier_is_reported() {
    let err = stokes_i_spectrum("NOT-A-BAND", 0.0, 0.0, &[1000.0]).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("NOT-A-BAND"), "{message}");
    for band in Band::iter() {
        assert!(message.contains(band.name()), "{message}");
    }
    assert!(samples_for("MKAT-AA-X-JIM-2020").is_err());
}

#[test]
fn uhf_spectrum_of_an_offset_source() {
    // 1 degree off-axis, the beam narrows with frequency across the band, so
    // the source gets fainter.
    let freqs: Vec<f64> = (0..=20).map(|i| 550.0 + 25.0 * i as f64).collect();
    let spectrum = stokes_i_spectrum(MKAT_AA_UHF_JIM_2020, 1.0, 0.0, &freqs).unwrap();
    assert_eq!(spectrum.len(), freqs.len());
    assert!(spectrum.iter().all(|&i| (0.0..=1.0).contains(&i)));
    assert!(spectrum.last().unwrap() < spectrum.first().unwrap());
    // Sample value at 800 MHz.
    assert_abs_diff_eq!(spectrum[10], 0.4077328, epsilon = 1e-6);
}

#[test]
fn images_of_each_band() {
    // 5 degrees across, like the L-band example in katbeam's documentation.
    let (x, y) = square_grid(5.0, 128);
    for band in Band::iter() {
        let beam = JimBeam::from_band(band);
        let (low, high) = band.freq_range_mhz();
        let freq_mhz = (low + high) / 2.0;

        let hh = beam.hh(x.view(), y.view(), freq_mhz).unwrap();
        let vv = beam.vv(x.view(), y.view(), freq_mhz).unwrap();
        let i = beam.i(x.view(), y.view(), freq_mhz).unwrap();
        assert_eq!(hh.dim(), (128, 128));
        assert_eq!(vv.dim(), (128, 128));
        assert_eq!(i.dim(), (128, 128));

        // Stokes I is built from the two voltage beams.
        let expected = (&hh * &hh + &vv * &vv) / 2.0;
        assert_abs_diff_eq!(i, expected, epsilon = 1e-12);
        assert!(i.iter().all(|&v| (0.0..=1.0).contains(&v)));

        // The image corners are less sensitive than the middle.
        assert!(i[(0, 0)] < i[(64, 64)]);
        assert!(i[(127, 127)] < i[(64, 64)]);
    }
}

#[test]
fn typed_and_tagged_evaluation_agree() {
    let beam = JimBeam::from_band(Band::L2020);
    let x = array![[0.0, 0.3], [-0.6, 0.9]];
    let y = array![[0.0, -0.1], [0.2, 0.4]];
    let freq_mhz = 1284.0;
    assert_eq!(
        beam.hh(x.view(), y.view(), freq_mhz).unwrap(),
        beam.calc(Pol::HH, x.view(), y.view(), freq_mhz).unwrap()
    );
    assert_eq!(
        beam.vv(x.view(), y.view(), freq_mhz).unwrap(),
        beam.calc(Pol::VV, x.view(), y.view(), freq_mhz).unwrap()
    );
    assert_eq!(
        beam.i(x.view(), y.view(), freq_mhz).unwrap(),
        beam.calc(Pol::I, x.view(), y.view(), freq_mhz).unwrap()
    );
}
