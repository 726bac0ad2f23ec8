//! Recolor alpha-masked icons with a vertical gradient, keeping their transparency.

pub mod batch;
pub mod config;
pub mod discovery;
pub mod error;
pub mod gradient;
pub mod recolor;
pub mod tint;

pub use error::RecolorError;
pub use gradient::{Color, GradientSpec};
