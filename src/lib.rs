//! bag-pattern-rs - Cutting dimensions and diagrams for lined drawstring bags.
//!
//! This library turns a handful of finished-bag measurements (width, height,
//! base gusset, optional color-block split) into the fabric cutting list
//! (seam allowances applied) and a proportionally scaled cutting diagram.
//!
//! # Example
//!
//! ```
//! use bag_pattern_rs::{recalculate, Orientation, PatternInputs};
//!
//! let inputs = PatternInputs {
//!     finished_width: 20.0,
//!     finished_height: 25.0,
//!     gusset: 10.0,
//!     orientation: Orientation::Fold,
//!     ..Default::default()
//! };
//! let (pieces, scene) = recalculate(&inputs);
//! assert_eq!(pieces[0].label, "Lining");
//! assert!(!scene.is_empty());
//! ```

pub mod calculator;
pub mod config;
pub mod diagram;
pub mod generator;
pub mod model;

// Re-exports for convenience
pub use calculator::compute_pieces;
pub use diagram::synthesize_diagram;
pub use generator::render_svg;
pub use model::{
    DiagramScene, Orientation, ParseOrientationError, PatternInputs, Piece, ScenePrimitive,
    TextAnchor,
};

/// Compute both outputs for one set of measurements.
///
/// This is the single entry point the presentation layer calls whenever the
/// inputs change; the core is agnostic to invocation cadence and holds no
/// state between calls. Inputs are sanitized first, then the cutting list
/// and the diagram are derived independently from the same tuple. Advisory
/// entries in the cutting list are also logged as warnings.
pub fn recalculate(inputs: &PatternInputs) -> (Vec<Piece>, DiagramScene) {
    let inputs = inputs.sanitized();

    let pieces = compute_pieces(&inputs);
    for piece in pieces.iter().filter(|p| p.is_warning()) {
        tracing::warn!("{}", piece.label);
    }

    let scene = synthesize_diagram(&inputs);

    (pieces, scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_recalculate_sanitizes_raw_input() {
        let raw = PatternInputs {
            finished_width: -20.0,
            finished_height: f64::NAN,
            gusset: 10.0,
            ..Default::default()
        };
        let (pieces, scene) = recalculate(&raw);
        // Bad fields collapse to zero; only the gusset survives.
        assert_eq!(pieces[0].width_cm, 12.0);
        assert_eq!(pieces[0].height_cm, 12.0);
        assert!(!scene.is_empty());
    }

    #[test]
    fn test_both_outputs_agree_on_footprint() {
        let inputs = PatternInputs::new(20.0, 25.0, 10.0);
        let (pieces, scene) = recalculate(&inputs);

        let lining = &pieces[0];
        let (width, height) = match scene.rects().next() {
            Some(ScenePrimitive::Rect { width, height, .. }) => (*width, *height),
            _ => panic!("diagram has no rectangle"),
        };
        // The diagram depicts the lining footprint, uniformly scaled.
        assert!((width / height - lining.width_cm / lining.height_cm).abs() < 1e-9);
    }
}
