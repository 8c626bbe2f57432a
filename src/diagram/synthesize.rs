//! Scaled cutting diagram construction.
//!
//! Builds a [`DiagramScene`] depicting the largest rectangular cut piece
//! (the lining / fold-body footprint) fitted to the virtual canvas, with
//! dimension labels, color-block partition lines and the bottom fold line.

use crate::config::{CANVAS_HEIGHT, CANVAS_PADDING, CANVAS_WIDTH, SEAM_ALLOWANCE_CM};
use crate::model::{colors, DiagramScene, PatternInputs, TextAnchor};

/// Synthesize the cutting diagram for the given measurements.
///
/// Always succeeds. The depicted rectangle is the lining-equivalent cut
/// (flat sizes doubled in height, plus seam allowance) regardless of which
/// calculator branch is active. On degenerate geometry the scene is
/// returned empty instead of carrying non-finite coordinates.
pub fn synthesize_diagram(inputs: &PatternInputs) -> DiagramScene {
    let mut scene = DiagramScene::new(CANVAS_WIDTH, CANVAS_HEIGHT);

    let sa2 = SEAM_ALLOWANCE_CM * 2.0;
    let total_w = inputs.flat_width() + sa2;
    let total_h = inputs.flat_height() * 2.0 + sa2;

    let available_w = CANVAS_WIDTH - CANVAS_PADDING * 2.0;
    let available_h = CANVAS_HEIGHT - CANVAS_PADDING * 2.0;

    let scale = (available_w / total_w).min(available_h / total_h);
    if !scale.is_finite() || scale <= 0.0 {
        return scene;
    }

    let rect_w = total_w * scale;
    let rect_h = total_h * scale;
    let start_x = (CANVAS_WIDTH - rect_w) / 2.0;
    let start_y = (CANVAS_HEIGHT - rect_h) / 2.0;

    // Cut outline, dashed to read as "cut here".
    scene.push_dashed_rect(start_x, start_y, rect_w, rect_h);

    // Dimension labels: width above, height rotated along the left edge.
    scene.push_label(
        start_x + rect_w / 2.0,
        start_y - 15.0,
        format!("{:.1} cm (width at bag opening)", total_w),
        TextAnchor::Middle,
    );
    scene.push_label_styled(
        start_x - 55.0,
        start_y + rect_h / 2.0,
        format!("{:.1} cm (height)", total_h),
        TextAnchor::Middle,
        -90.0,
        colors::ACCENT,
        14.0,
    );

    if inputs.has_split {
        // The accent band occupies a strip at each end of the unfolded cut,
        // so its partition line appears mirrored about the fold line.
        let sub_with_sa = inputs.split_height + inputs.gusset / 2.0 + SEAM_ALLOWANCE_CM;
        let split_y1 = start_y + sub_with_sa * scale;
        let split_y2 = start_y + rect_h - sub_with_sa * scale;

        scene.push_line(start_x, split_y1, start_x + rect_w, split_y1, colors::ACCENT);
        scene.push_line(start_x, split_y2, start_x + rect_w, split_y2, colors::ACCENT);

        scene.push_label(
            start_x + rect_w + 10.0,
            start_y + sub_with_sa * scale / 2.0,
            "accent band",
            TextAnchor::Start,
        );
        scene.push_label(
            start_x + rect_w + 10.0,
            start_y + rect_h / 2.0,
            "main body",
            TextAnchor::Start,
        );
    }

    // Bottom fold line: the symmetry axis shared by lining and folded body.
    scene.push_line(
        start_x,
        start_y + rect_h / 2.0,
        start_x + rect_w,
        start_y + rect_h / 2.0,
        colors::MUTED_LINE,
    );
    scene.push_label_styled(
        start_x + rect_w / 2.0,
        start_y + rect_h / 2.0 + 15.0,
        "bottom fold line",
        TextAnchor::Middle,
        0.0,
        colors::MUTED_TEXT,
        12.0,
    );

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;
    use crate::model::ScenePrimitive;
    use pretty_assertions::assert_eq;

    fn basic_inputs() -> PatternInputs {
        PatternInputs::new(20.0, 25.0, 10.0)
    }

    fn rect_of(scene: &DiagramScene) -> (f64, f64, f64, f64) {
        match scene.rects().next() {
            Some(ScenePrimitive::Rect {
                x,
                y,
                width,
                height,
                ..
            }) => (*x, *y, *width, *height),
            _ => panic!("scene has no rectangle"),
        }
    }

    fn scale_of(inputs: &PatternInputs) -> f64 {
        let scene = synthesize_diagram(inputs);
        let (_, _, width, _) = rect_of(&scene);
        width / (inputs.flat_width() + 2.0)
    }

    #[test]
    fn test_rect_is_centered_and_scaled() {
        let scene = synthesize_diagram(&basic_inputs());
        let (x, y, width, height) = rect_of(&scene);

        // total 32 x 62, height-bound: scale = 480/62
        let scale: f64 = 480.0 / 62.0;
        assert!((width - 32.0 * scale).abs() < 1e-9);
        assert!((height - 62.0 * scale).abs() < 1e-9);
        assert!((x - (800.0 - width) / 2.0).abs() < 1e-9);
        assert!((y - (600.0 - height) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_aspect_ratio_preserved() {
        let scene = synthesize_diagram(&basic_inputs());
        let (_, _, width, height) = rect_of(&scene);
        assert!((width / height - 32.0 / 62.0).abs() < 1e-9);
    }

    #[test]
    fn test_dimension_labels_show_cut_size() {
        let scene = synthesize_diagram(&basic_inputs());
        let texts: Vec<&str> = scene
            .labels()
            .filter_map(|p| match p {
                ScenePrimitive::TextLabel { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert!(texts.iter().any(|t| t.starts_with("32.0 cm")));
        assert!(texts.iter().any(|t| t.starts_with("62.0 cm")));
    }

    #[test]
    fn test_fold_line_always_present() {
        for has_split in [false, true] {
            let inputs = PatternInputs {
                has_split,
                split_height: 8.0,
                ..basic_inputs()
            };
            let scene = synthesize_diagram(&inputs);
            let muted: Vec<_> = scene
                .lines()
                .filter(|p| {
                    matches!(p, ScenePrimitive::LineSegment { color, .. }
                        if color == colors::MUTED_LINE)
                })
                .collect();
            assert_eq!(muted.len(), 1, "exactly one fold line");
        }
    }

    #[test]
    fn test_fold_line_at_half_height() {
        let scene = synthesize_diagram(&basic_inputs());
        let (_, y, _, height) = rect_of(&scene);
        let fold_y = scene
            .lines()
            .find_map(|p| match p {
                ScenePrimitive::LineSegment { y1, color, .. }
                    if color == colors::MUTED_LINE =>
                {
                    Some(*y1)
                }
                _ => None,
            })
            .expect("fold line present");
        assert!(approx_eq(fold_y, y + height / 2.0));
    }

    #[test]
    fn test_split_partition_lines_are_mirrored() {
        let inputs = PatternInputs {
            has_split: true,
            split_height: 8.0,
            ..basic_inputs()
        };
        let scene = synthesize_diagram(&inputs);
        let (_, y, _, height) = rect_of(&scene);

        let accent_line_ys: Vec<f64> = scene
            .lines()
            .filter_map(|p| match p {
                ScenePrimitive::LineSegment { y1, color, .. }
                    if color == colors::ACCENT =>
                {
                    Some(*y1)
                }
                _ => None,
            })
            .collect();
        assert_eq!(accent_line_ys.len(), 2);

        // Mirrored about the fold line.
        let center = y + height / 2.0;
        assert!(approx_eq(
            center - accent_line_ys[0],
            accent_line_ys[1] - center
        ));

        // Band labels only appear in the split case.
        let band_labels = scene
            .labels()
            .filter(|p| {
                matches!(p, ScenePrimitive::TextLabel { text, .. }
                    if text == "accent band" || text == "main body")
            })
            .count();
        assert_eq!(band_labels, 2);
    }

    #[test]
    fn test_no_partition_lines_without_split() {
        let scene = synthesize_diagram(&basic_inputs());
        let accent_lines = scene
            .lines()
            .filter(|p| {
                matches!(p, ScenePrimitive::LineSegment { color, .. }
                    if color == colors::ACCENT)
            })
            .count();
        assert_eq!(accent_lines, 0);
    }

    #[test]
    fn test_diagram_ignores_orientation() {
        // The diagram always depicts the lining-equivalent footprint,
        // even when the sewn branch's largest piece is smaller.
        let fold = synthesize_diagram(&basic_inputs());
        let sewn = synthesize_diagram(&PatternInputs {
            orientation: crate::model::Orientation::Sewn,
            ..basic_inputs()
        });
        assert_eq!(fold, sewn);
    }

    #[test]
    fn test_scale_monotonicity() {
        let mut prev = f64::INFINITY;
        for fw in [5.0, 20.0, 80.0, 300.0] {
            let s = scale_of(&PatternInputs::new(fw, 25.0, 10.0));
            assert!(s <= prev, "scale must not increase with width");
            prev = s;
        }

        let mut prev = f64::INFINITY;
        for fh in [5.0, 25.0, 90.0, 400.0] {
            let s = scale_of(&PatternInputs::new(20.0, fh, 10.0));
            assert!(s <= prev, "scale must not increase with height");
            prev = s;
        }
    }

    #[test]
    fn test_zero_inputs_still_draw() {
        // All-zero measurements still leave the 2 cm seam allowance, so the
        // scene is a valid (tiny footprint, fully scaled) drawing.
        let scene = synthesize_diagram(&PatternInputs::default());
        assert_eq!(scene.rects().count(), 1);
        let (_, _, width, height) = rect_of(&scene);
        assert!(width.is_finite() && height.is_finite());
        assert!((width - height).abs() < 1e-9); // 2x2 footprint stays square
    }

    #[test]
    fn test_determinism() {
        let inputs = PatternInputs {
            has_split: true,
            split_height: 8.0,
            ..basic_inputs()
        };
        assert_eq!(synthesize_diagram(&inputs), synthesize_diagram(&inputs));
    }
}
