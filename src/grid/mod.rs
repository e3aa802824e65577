pub mod axis;
pub mod coords;

pub use axis::{is_latitude_name, is_longitude_name, AxisTag};
pub use coords::{meshgrid, CoordinateGrid};
