pub mod field;
pub mod ops;

pub use field::{FieldAttrs, LabeledField, DEFAULT_LONG_NAME, DEFAULT_UNITS};
pub use ops::*;
