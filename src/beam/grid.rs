// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Helpers for sky-offset coordinate grids.

use ndarray::prelude::*;

use crate::BeamError;

/// Broadcast two coordinate arrays against each other. Shapes are aligned on
/// their last axes, and the array with fewer axes (only possible with dynamic
/// dimensions) is padded with leading axes of length 1. Each aligned axis must
/// then either match or have a length of 1 in one of the arrays.
pub(crate) fn co_broadcast<'a, D: Dimension>(
    x: &'a ArrayView<f64, D>,
    y: &'a ArrayView<f64, D>,
) -> Result<(ArrayView<'a, f64, D>, ArrayView<'a, f64, D>), BeamError> {
    let mismatch = || BeamError::ShapeMismatch {
        x: x.shape().to_vec(),
        y: y.shape().to_vec(),
    };

    let mut dim = if x.ndim() >= y.ndim() {
        x.raw_dim()
    } else {
        y.raw_dim()
    };
    let ndim = dim.ndim();
    // The length of an axis after padding on the left with 1s.
    let padded_len = |shape: &[usize], axis: usize| {
        (axis + shape.len())
            .checked_sub(ndim)
            .map_or(1, |axis| shape[axis])
    };
    for axis in 0..ndim {
        let x_len = padded_len(x.shape(), axis);
        let y_len = padded_len(y.shape(), axis);
        dim[axis] = match (x_len, y_len) {
            _ if x_len == y_len => x_len,
            (1, _) => y_len,
            (_, 1) => x_len,
            _ => return Err(mismatch()),
        };
    }

    match (x.broadcast(dim.clone()), y.broadcast(dim)) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(mismatch()),
    }
}

/// Make a square grid of sky offsets [degrees], `num_pixels` on a side,
/// spanning -`extent_deg`/2 to `extent_deg`/2 along both axes. As with a
/// meshgrid, x varies along columns and y varies along rows.
pub fn square_grid(extent_deg: f64, num_pixels: usize) -> (Array2<f64>, Array2<f64>) {
    let margin = Array1::linspace(-extent_deg / 2.0, extent_deg / 2.0, num_pixels);
    let x = Array2::from_shape_fn((num_pixels, num_pixels), |(_, col)| margin[col]);
    let y = Array2::from_shape_fn((num_pixels, num_pixels), |(row, _)| margin[row]);
    (x, y)
}
