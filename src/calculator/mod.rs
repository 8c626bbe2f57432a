//! Cutting-list calculation.

mod pieces;

pub use pieces::compute_pieces;
