//! Cutting diagram synthesis.

mod synthesize;

pub use synthesize::synthesize_diagram;
