//! Rendering backends consuming a [`DiagramScene`](crate::model::DiagramScene).

mod svg;

pub use svg::render_svg;
