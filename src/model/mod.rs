//! Data model types for pattern calculation.

mod inputs;
mod piece;
mod scene;

pub use inputs::{Orientation, ParseOrientationError, PatternInputs};
pub use piece::Piece;
pub use scene::{colors, DiagramScene, ScenePrimitive, TextAnchor};
