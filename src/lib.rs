pub mod config;
pub mod error;
pub mod grid;
pub mod labeled;
pub mod math;

pub use config::Constants;
pub use error::MetError;
pub use grid::{AxisTag, CoordinateGrid};
pub use math::*;
