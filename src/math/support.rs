use ndarray::{Array, Array1, Array2, Axis, Dimension};

use crate::error::MetError;
use crate::grid::{AxisTag, CoordinateGrid};

use super::cdiff::centered_difference;

/// Type alias for the spacing terms shared by the horizontal diagnostics:
/// (dx, dy, cos latitude), all expanded to the field's full shape
pub(crate) type SpacingTerms<D> = (Array<f64, D>, Array<f64, D>, Array<f64, D>);

pub(crate) fn ensure_supported_rank(rank: usize) -> Result<(), MetError> {
    if (2..=4).contains(&rank) {
        Ok(())
    } else {
        Err(MetError::UnsupportedRank {
            rank,
            expected: "2, 3 or 4",
        })
    }
}

pub(crate) fn ensure_same_shape<D: Dimension>(
    left_name: &str,
    left: &Array<f64, D>,
    right_name: &str,
    right: &Array<f64, D>,
) -> Result<(), MetError> {
    if left.raw_dim() == right.raw_dim() {
        Ok(())
    } else {
        Err(MetError::ShapeMismatch {
            context: format!(
                "{} has shape {:?} but {} has shape {:?}",
                left_name,
                left.shape(),
                right_name,
                right.shape()
            ),
        })
    }
}

/// Check that the coordinate grid matches the field's trailing `[Y, X]`
/// extents
pub(crate) fn ensure_grid_matches<D: Dimension>(
    field: &Array<f64, D>,
    grid: &CoordinateGrid,
) -> Result<(), MetError> {
    let shape = field.shape();
    let rank = shape.len();
    let (ny, nx) = grid.shape();
    if rank < 2 || shape[rank - 2] != ny || shape[rank - 1] != nx {
        return Err(MetError::ShapeMismatch {
            context: format!(
                "coordinate grid is {}x{} but the field's trailing axes are {:?}",
                ny,
                nx,
                &shape[rank.saturating_sub(2)..]
            ),
        });
    }
    Ok(())
}

/// Expand a `[Y, X]` grid onto the field's full shape, trailing-axis aligned
pub(crate) fn broadcast_onto<D: Dimension>(
    values: &Array2<f64>,
    dim: D,
    name: &str,
) -> Result<Array<f64, D>, MetError> {
    match values.broadcast(dim.clone()) {
        Some(view) => Ok(view.to_owned()),
        None => Err(MetError::ShapeMismatch {
            context: format!(
                "{} grid {:?} cannot be expanded to field shape {:?}",
                name,
                values.shape(),
                dim.slice()
            ),
        }),
    }
}

/// dx and dy (radians of longitude/latitude spanned by two grid steps) and
/// cos latitude, all expanded to the field's shape. Boundary cells of dx/dy
/// are NaN like any other centered difference.
pub(crate) fn horizontal_spacing<D: Dimension>(
    grid: &CoordinateGrid,
    dim: D,
) -> Result<SpacingTerms<D>, MetError> {
    let lon = broadcast_onto(grid.lon(), dim.clone(), "longitude")?;
    let lat = broadcast_onto(grid.lat(), dim, "latitude")?;
    let dx = centered_difference(&lon, AxisTag::X)?.mapv_into(f64::to_radians);
    let dy = centered_difference(&lat, AxisTag::Y)?.mapv_into(f64::to_radians);
    let cos_lat = lat.mapv_into(|deg| deg.to_radians().cos());
    Ok((dx, dy, cos_lat))
}

/// Expand per-level values along the resolved vertical axis of the field
/// shape
pub(crate) fn broadcast_levels<D: Dimension>(
    levels: &Array1<f64>,
    dim: D,
) -> Result<Array<f64, D>, MetError> {
    let z_ax = AxisTag::Z.resolve(dim.ndim())?;
    if levels.len() != dim[z_ax] {
        return Err(MetError::ShapeMismatch {
            context: format!(
                "{} levels supplied for a vertical axis of extent {}",
                levels.len(),
                dim[z_ax]
            ),
        });
    }
    let mut full = Array::from_elem(dim, f64::NAN);
    for mut lane in full.lanes_mut(Axis(z_ax)) {
        lane.assign(levels);
    }
    Ok(full)
}
