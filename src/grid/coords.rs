use ndarray::{Array1, Array2};

use crate::error::MetError;

/// Outer-product expansion of 1-D coordinate vectors to 2-D grids, longitude
/// varying along x and latitude along y
pub fn meshgrid(lon: &Array1<f64>, lat: &Array1<f64>) -> (Array2<f64>, Array2<f64>) {
    let (ny, nx) = (lat.len(), lon.len());
    let lon2 = Array2::from_shape_fn((ny, nx), |(_, i)| lon[i]);
    let lat2 = Array2::from_shape_fn((ny, nx), |(j, _)| lat[j]);
    (lon2, lat2)
}

/// Paired longitude/latitude grids in degrees, both laid out `[Y, X]`
#[derive(Clone, Debug)]
pub struct CoordinateGrid {
    lon: Array2<f64>,
    lat: Array2<f64>,
}

impl CoordinateGrid {
    /// Build from full 2-D coordinate arrays sharing one shape
    pub fn new(lon: Array2<f64>, lat: Array2<f64>) -> Result<Self, MetError> {
        if lon.dim() != lat.dim() {
            return Err(MetError::ShapeMismatch {
                context: format!(
                    "longitude grid {:?} and latitude grid {:?} differ",
                    lon.shape(),
                    lat.shape()
                ),
            });
        }
        Ok(Self { lon, lat })
    }

    /// Expand 1-D coordinate vectors to full grids
    pub fn from_vectors(lon: &Array1<f64>, lat: &Array1<f64>) -> Self {
        let (lon, lat) = meshgrid(lon, lat);
        Self { lon, lat }
    }

    pub fn lon(&self) -> &Array2<f64> {
        &self.lon
    }

    pub fn lat(&self) -> &Array2<f64> {
        &self.lat
    }

    /// Horizontal extents as (ny, nx)
    pub fn shape(&self) -> (usize, usize) {
        self.lon.dim()
    }

    /// cos of latitude, latitude taken in degrees
    pub fn cos_lat(&self) -> Array2<f64> {
        self.lat.mapv(|deg| deg.to_radians().cos())
    }

    /// sin of latitude, latitude taken in degrees
    pub fn sin_lat(&self) -> Array2<f64> {
        self.lat.mapv(|deg| deg.to_radians().sin())
    }
}
