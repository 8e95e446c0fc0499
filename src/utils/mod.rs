//! Small helpers shared across the generator.

pub mod date;
pub mod html;
