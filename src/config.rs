//! Fixed constants and small numeric helpers.

/// Seam allowance added around every finished edge, in cm.
pub const SEAM_ALLOWANCE_CM: f64 = 1.0;

/// Minimum main-body height (cm) below which the split advisory fires.
pub const MIN_MAIN_PART_HEIGHT_CM: f64 = 2.0;

/// Virtual diagram canvas width, in abstract units.
pub const CANVAS_WIDTH: f64 = 800.0;

/// Virtual diagram canvas height, in abstract units.
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Padding kept clear on all four canvas edges.
pub const CANVAS_PADDING: f64 = 60.0;

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }
}
