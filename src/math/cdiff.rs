use ndarray::{Array, Axis, Dimension, Slice, Zip};
use num_traits::Float;

use crate::error::MetError;
use crate::grid::AxisTag;

/// Centered finite difference of a gridded field along one logical axis.
///
/// The output keeps the input shape. Interior cells hold
/// `field[i+1] - field[i-1]` along the resolved axis; the first and last
/// cells difference against an inserted NaN pad and are therefore always
/// NaN. NaN samples in the input propagate to every output cell whose
/// stencil touches them.
pub fn centered_difference<T, D>(
    field: &Array<T, D>,
    axis: AxisTag,
) -> Result<Array<T, D>, MetError>
where
    T: Float,
    D: Dimension,
{
    let ax = axis.resolve(field.ndim())?;
    let extent = field.raw_dim()[ax];

    let mut padded_dim = field.raw_dim();
    padded_dim[ax] += 2;
    let mut padded = Array::from_elem(padded_dim, T::nan());
    padded
        .slice_axis_mut(Axis(ax), Slice::from(1..-1))
        .assign(field);

    let next = padded.slice_axis(Axis(ax), Slice::from(2..extent + 2));
    let prev = padded.slice_axis(Axis(ax), Slice::from(0..extent));

    let mut diff = Array::from_elem(field.raw_dim(), T::nan());
    Zip::from(&mut diff)
        .and(next)
        .and(prev)
        .for_each(|out, &n, &p| *out = n - p);

    Ok(diff)
}
