pub mod cdiff;
pub mod dynamics;
pub mod thermo;

pub(crate) mod support;


pub use cdiff::*;
pub use dynamics::*;
pub use thermo::*;
