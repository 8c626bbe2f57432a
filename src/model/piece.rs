//! Piece - one entry of the cutting list.

use serde::{Deserialize, Serialize};

/// One labeled entry of the cutting list.
///
/// Normal entries describe a rectangle of fabric to cut (`cut_count` copies).
/// Advisory entries carry only a message; their dimensions are zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    /// Display label, e.g. "Outer main".
    pub label: String,
    /// Cut width including seam allowance, in cm.
    pub width_cm: f64,
    /// Cut height including seam allowance, in cm.
    pub height_cm: f64,
    /// How many copies of this rectangle to cut.
    pub cut_count: u32,
    /// True for advisory warning entries.
    pub warning: bool,
}

impl Piece {
    /// Create a normal cutting-list entry.
    pub fn new(label: impl Into<String>, width_cm: f64, height_cm: f64, cut_count: u32) -> Self {
        Self {
            label: label.into(),
            width_cm,
            height_cm,
            cut_count,
            warning: false,
        }
    }

    /// Create an advisory entry. Carries no dimensions.
    pub fn advisory(message: impl Into<String>) -> Self {
        Self {
            label: message.into(),
            width_cm: 0.0,
            height_cm: 0.0,
            cut_count: 0,
            warning: true,
        }
    }

    /// Check whether this entry is an advisory rather than a cut.
    pub fn is_warning(&self) -> bool {
        self.warning
    }

    /// Get display dimensions (width x height).
    pub fn dimensions_string(&self) -> String {
        format!("{} x {}", self.width_cm, self.height_cm)
    }
}
