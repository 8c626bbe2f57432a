//! SVG backend for [`DiagramScene`].
//!
//! One concrete consumer of the renderer-agnostic scene description.
//! Pure function with no I/O; returns the SVG document as a `String`.

use crate::model::{DiagramScene, ScenePrimitive, TextAnchor};
use std::fmt::Write;

/// Escape the five XML special characters for safe embedding in element
/// text content and attribute values.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Format a coordinate to 0.01-unit precision.
fn fmt_coord(v: f64) -> String {
    format!("{:.2}", v)
}

/// Render a scene to a standalone SVG document.
pub fn render_svg(scene: &DiagramScene) -> String {
    let mut out = String::new();

    let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene.canvas_width,
        h = scene.canvas_height,
    );

    for primitive in &scene.primitives {
        write_primitive(&mut out, primitive);
    }

    let _ = writeln!(out, "</svg>");
    out
}

fn write_primitive(out: &mut String, primitive: &ScenePrimitive) {
    match primitive {
        ScenePrimitive::Rect {
            x,
            y,
            width,
            height,
            color,
            stroke_width,
            dash,
        } => {
            let dash_attr = if dash.is_empty() {
                String::new()
            } else {
                format!(r#" stroke-dasharray="{}""#, dash)
            };
            let _ = writeln!(
                out,
                r##"  <rect x="{}" y="{}" width="{}" height="{}" fill="#fff" stroke="{}" stroke-width="{}"{}/>"##,
                fmt_coord(*x),
                fmt_coord(*y),
                fmt_coord(*width),
                fmt_coord(*height),
                color,
                stroke_width,
                dash_attr,
            );
        }
        ScenePrimitive::LineSegment { x1, y1, x2, y2, color } => {
            let _ = writeln!(
                out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="1"/>"#,
                fmt_coord(*x1),
                fmt_coord(*y1),
                fmt_coord(*x2),
                fmt_coord(*y2),
                color,
            );
        }
        ScenePrimitive::TextLabel {
            x,
            y,
            text,
            anchor,
            rotation_degrees,
            color,
            font_size,
        } => {
            let anchor_attr = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
            };
            let rotate_attr = if *rotation_degrees == 0.0 {
                String::new()
            } else {
                format!(
                    r#" transform="rotate({} {} {})""#,
                    rotation_degrees,
                    fmt_coord(*x),
                    fmt_coord(*y),
                )
            };
            let _ = writeln!(
                out,
                r#"  <text x="{}" y="{}" text-anchor="{}" fill="{}" font-size="{}" font-weight="bold"{}>{}</text>"#,
                fmt_coord(*x),
                fmt_coord(*y),
                anchor_attr,
                color,
                font_size,
                rotate_attr,
                xml_escape(text),
            );
        }
    }
}
