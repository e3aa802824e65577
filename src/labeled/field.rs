use std::collections::HashMap;

use ndarray::{Array1, ArrayD};

use crate::error::MetError;
use crate::grid::{is_latitude_name, is_longitude_name, CoordinateGrid};

/// Placeholder units reported when a field carries none
pub const DEFAULT_UNITS: &str = "Field_units";

/// Placeholder long name reported when a field carries none
pub const DEFAULT_LONG_NAME: &str = "Field_Name";

/// Optional unit/name metadata carried by a labeled field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldAttrs {
    pub units: Option<String>,
    pub long_name: Option<String>,
    pub standard_name: Option<String>,
}

impl FieldAttrs {
    /// Units, or the documented placeholder when none were set
    pub fn units_or_default(&self) -> &str {
        self.units.as_deref().unwrap_or(DEFAULT_UNITS)
    }

    /// Long name, or the documented placeholder when none was set
    pub fn long_name_or_default(&self) -> &str {
        self.long_name.as_deref().unwrap_or(DEFAULT_LONG_NAME)
    }
}

/// Gridded samples bundled with ordered dimension names, per-dimension
/// coordinate values and unit/name attributes.
///
/// Dimension order follows the array layout convention, so the trailing two
/// dimensions of a field entering a horizontal diagnostic must be a
/// recognized (latitude, longitude) pair. Coordinate vectors are optional
/// per dimension; diagnostics that need one refuse when it is absent.
#[derive(Clone, Debug)]
pub struct LabeledField {
    name: String,
    data: ArrayD<f64>,
    dims: Vec<String>,
    coords: HashMap<String, Array1<f64>>,
    attrs: FieldAttrs,
}

impl LabeledField {
    /// Build a labeled field. There must be one dimension name per axis, and
    /// any supplied coordinate vector must match its axis extent.
    pub fn new(
        name: impl Into<String>,
        data: ArrayD<f64>,
        dims: Vec<String>,
        coords: HashMap<String, Array1<f64>>,
        attrs: FieldAttrs,
    ) -> Result<Self, MetError> {
        if dims.len() != data.ndim() {
            return Err(MetError::ShapeMismatch {
                context: format!(
                    "{} dimension names for a rank-{} array",
                    dims.len(),
                    data.ndim()
                ),
            });
        }
        for (axis, dim_name) in dims.iter().enumerate() {
            if let Some(values) = coords.get(dim_name) {
                if values.len() != data.shape()[axis] {
                    return Err(MetError::ShapeMismatch {
                        context: format!(
                            "coordinate '{}' has {} values for an axis of extent {}",
                            dim_name,
                            values.len(),
                            data.shape()[axis]
                        ),
                    });
                }
            }
        }
        Ok(Self {
            name: name.into(),
            data,
            dims,
            coords,
            attrs,
        })
    }

    /// Shorthand constructor taking coordinates as (dimension, values) pairs
    pub fn with_coords(
        name: impl Into<String>,
        data: ArrayD<f64>,
        dims: &[&str],
        coords: &[(&str, Array1<f64>)],
    ) -> Result<Self, MetError> {
        let dims = dims.iter().map(|d| d.to_string()).collect();
        let coords = coords
            .iter()
            .map(|(dim_name, values)| (dim_name.to_string(), values.clone()))
            .collect();
        Self::new(name, data, dims, coords, FieldAttrs::default())
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.attrs.units = Some(units.into());
        self
    }

    pub fn with_long_name(mut self, long_name: impl Into<String>) -> Self {
        self.attrs.long_name = Some(long_name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    pub fn coord(&self, dim_name: &str) -> Option<&Array1<f64>> {
        self.coords.get(dim_name)
    }

    pub fn attrs(&self) -> &FieldAttrs {
        &self.attrs
    }

    pub fn rank(&self) -> usize {
        self.data.ndim()
    }

    /// New field with this field's layout but different samples and attrs
    pub(crate) fn derived(&self, name: &str, data: ArrayD<f64>, attrs: FieldAttrs) -> Self {
        Self {
            name: name.to_string(),
            data,
            dims: self.dims.clone(),
            coords: self.coords.clone(),
            attrs,
        }
    }

    /// Check that another field shares this field's dims and shape
    pub(crate) fn same_layout(&self, other: &LabeledField, other_role: &str) -> Result<(), MetError> {
        if self.dims != other.dims || self.data.shape() != other.data.shape() {
            return Err(MetError::ShapeMismatch {
                context: format!(
                    "{} has dims {:?} and shape {:?}, expected dims {:?} and shape {:?}",
                    other_role,
                    other.dims,
                    other.data.shape(),
                    self.dims,
                    self.data.shape()
                ),
            });
        }
        Ok(())
    }

    /// The trailing (latitude, longitude) dimension names, when both are
    /// recognized aliases
    pub(crate) fn horizontal_dims(&self) -> Result<(&str, &str), MetError> {
        let rank = self.rank();
        if rank < 2 {
            return Err(MetError::UnsupportedRank {
                rank,
                expected: "2, 3 or 4",
            });
        }
        let y_name = &self.dims[rank - 2];
        let x_name = &self.dims[rank - 1];
        if !is_latitude_name(y_name) || !is_longitude_name(x_name) {
            return Err(MetError::UnrecognizedAxis {
                y_name: y_name.clone(),
                x_name: x_name.clone(),
            });
        }
        Ok((y_name, x_name))
    }

    /// Coordinate grid expanded from the trailing latitude/longitude
    /// coordinate vectors
    pub(crate) fn horizontal_grid(&self) -> Result<CoordinateGrid, MetError> {
        let (y_name, x_name) = self.horizontal_dims()?;
        let lon = self
            .coords
            .get(x_name)
            .ok_or_else(|| MetError::MissingCoordinate {
                name: x_name.to_string(),
            })?;
        let lat = self
            .coords
            .get(y_name)
            .ok_or_else(|| MetError::MissingCoordinate {
                name: y_name.to_string(),
            })?;
        Ok(CoordinateGrid::from_vectors(lon, lat))
    }

    /// Vertical level values read off the third-from-last dimension
    pub(crate) fn vertical_levels(&self) -> Result<&Array1<f64>, MetError> {
        let rank = self.rank();
        if rank < 3 {
            return Err(MetError::MissingCoordinate {
                name: "level".to_string(),
            });
        }
        let z_name = &self.dims[rank - 3];
        self.coords
            .get(z_name)
            .ok_or_else(|| MetError::MissingCoordinate {
                name: z_name.clone(),
            })
    }
}
