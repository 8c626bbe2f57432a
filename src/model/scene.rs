//! DiagramScene - renderer-agnostic description of the cutting diagram.
//!
//! The synthesizer emits an ordered list of primitives in abstract canvas
//! units; any vector backend (SVG, canvas, PDF) can consume it unchanged.

use serde::{Deserialize, Serialize};

/// Diagram stroke/text colors.
pub mod colors {
    /// Accent color for the cut outline, dimension lines and labels.
    pub const ACCENT: &str = "#fb6f92";
    /// Muted stroke for the fold line.
    pub const MUTED_LINE: &str = "#ccc";
    /// Muted fill for the fold line label.
    pub const MUTED_TEXT: &str = "#999";
}

/// Horizontal anchoring of a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAnchor {
    /// Text starts at the anchor point and runs right.
    #[default]
    Start,
    /// Text is centered on the anchor point.
    Middle,
}

/// One drawing primitive in canvas units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScenePrimitive {
    /// Axis-aligned rectangle with a dashed outline.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        /// Stroke color.
        color: String,
        /// Stroke width in canvas units.
        stroke_width: f64,
        /// Dash pattern, e.g. "5,5". Empty string means solid.
        dash: String,
    },
    /// Straight line segment.
    LineSegment {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        /// Stroke color.
        color: String,
    },
    /// Text label.
    TextLabel {
        x: f64,
        y: f64,
        text: String,
        anchor: TextAnchor,
        /// Rotation about (x, y) in degrees; 0 for horizontal text.
        rotation_degrees: f64,
        /// Fill color.
        color: String,
        /// Font size in canvas units.
        font_size: f64,
    },
}

/// A complete diagram: ordered primitives on a fixed virtual canvas.
///
/// Regenerated from scratch on every calculation, never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramScene {
    /// Canvas width in abstract units.
    pub canvas_width: f64,
    /// Canvas height in abstract units.
    pub canvas_height: f64,
    /// Drawing primitives in paint order.
    pub primitives: Vec<ScenePrimitive>,
}

impl DiagramScene {
    /// Create an empty scene for the given canvas.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            canvas_width,
            canvas_height,
            primitives: Vec::new(),
        }
    }

    /// Check if the scene draws nothing.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Add a dashed rectangle.
    pub fn push_dashed_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.primitives.push(ScenePrimitive::Rect {
            x,
            y,
            width,
            height,
            color: colors::ACCENT.to_string(),
            stroke_width: 2.0,
            dash: "5,5".to_string(),
        });
    }

    /// Add a line segment.
    pub fn push_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str) {
        self.primitives.push(ScenePrimitive::LineSegment {
            x1,
            y1,
            x2,
            y2,
            color: color.to_string(),
        });
    }

    /// Add a horizontal text label.
    pub fn push_label(&mut self, x: f64, y: f64, text: impl Into<String>, anchor: TextAnchor) {
        self.push_label_styled(x, y, text, anchor, 0.0, colors::ACCENT, 14.0);
    }

    /// Add a text label with full styling control.
    #[allow(clippy::too_many_arguments)]
    pub fn push_label_styled(
        &mut self,
        x: f64,
        y: f64,
        text: impl Into<String>,
        anchor: TextAnchor,
        rotation_degrees: f64,
        color: &str,
        font_size: f64,
    ) {
        self.primitives.push(ScenePrimitive::TextLabel {
            x,
            y,
            text: text.into(),
            anchor,
            rotation_degrees,
            color: color.to_string(),
            font_size,
        });
    }

    /// Iterate over the rectangles in the scene.
    pub fn rects(&self) -> impl Iterator<Item = &ScenePrimitive> {
        self.primitives
            .iter()
            .filter(|p| matches!(p, ScenePrimitive::Rect { .. }))
    }

    /// Iterate over the line segments in the scene.
    pub fn lines(&self) -> impl Iterator<Item = &ScenePrimitive> {
        self.primitives
            .iter()
            .filter(|p| matches!(p, ScenePrimitive::LineSegment { .. }))
    }

    /// Iterate over the text labels in the scene.
    pub fn labels(&self) -> impl Iterator<Item = &ScenePrimitive> {
        self.primitives
            .iter()
            .filter(|p| matches!(p, ScenePrimitive::TextLabel { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scene_starts_empty() {
        let scene = DiagramScene::new(800.0, 600.0);
        assert!(scene.is_empty());
        assert_eq!(scene.canvas_width, 800.0);
    }

    #[test]
    fn test_primitive_kind_iterators() {
        let mut scene = DiagramScene::new(800.0, 600.0);
        scene.push_dashed_rect(10.0, 10.0, 100.0, 50.0);
        scene.push_line(0.0, 0.0, 10.0, 0.0, colors::MUTED_LINE);
        scene.push_label(5.0, 5.0, "30.0 cm", TextAnchor::Middle);

        assert_eq!(scene.rects().count(), 1);
        assert_eq!(scene.lines().count(), 1);
        assert_eq!(scene.labels().count(), 1);
        assert_eq!(scene.primitives.len(), 3);
    }
}
