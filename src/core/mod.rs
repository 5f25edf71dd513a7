pub mod elements;

pub use crate::domain::model::{Element, Value};
pub use elements::{compare_float64_desc, Elements};
