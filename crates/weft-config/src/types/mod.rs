//! Value types shared across the configuration record.

mod color;
mod size;

pub use color::{Color, ColorValue};
pub use size::{Length, SizeLiteral};
