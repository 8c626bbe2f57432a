//! Pattern inputs - the finished-bag measurements supplied by the caller.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// How the bag bottom is formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Bottom is a continuous fold; the body is cut as one long piece.
    #[default]
    Fold,
    /// Bottom is a seam; front and back are cut separately.
    Sewn,
}

/// Error returned when an orientation string cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid orientation '{value}': expected 'fold' or 'sewn'")]
pub struct ParseOrientationError {
    /// The rejected input value.
    pub value: String,
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fold" | "folded" => Ok(Orientation::Fold),
            "sewn" | "seam" | "seamed" => Ok(Orientation::Sewn),
            _ => Err(ParseOrientationError {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Fold => write!(f, "fold"),
            Orientation::Sewn => write!(f, "sewn"),
        }
    }
}

/// Finished-bag measurements for one calculation. All lengths are cm.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PatternInputs {
    /// Finished bag width (side seam to side seam).
    pub finished_width: f64,
    /// Finished bag height (opening to bottom).
    pub finished_height: f64,
    /// Base gusset depth.
    pub gusset: f64,
    /// Height of the lower color-block section. Ignored unless `has_split`.
    pub split_height: f64,
    /// Bottom construction.
    pub orientation: Orientation,
    /// Whether the outer fabric has a horizontal color-block seam.
    pub has_split: bool,
}

impl PatternInputs {
    /// Create inputs for a plain (unsplit) bag.
    pub fn new(finished_width: f64, finished_height: f64, gusset: f64) -> Self {
        Self {
            finished_width,
            finished_height,
            gusset,
            ..Default::default()
        }
    }

    /// Flat pattern width: finished width plus the full gusset.
    pub fn flat_width(&self) -> f64 {
        self.finished_width + self.gusset
    }

    /// Flat pattern height for one face: finished height plus half the gusset.
    pub fn flat_height(&self) -> f64 {
        self.finished_height + self.gusset / 2.0
    }

    /// Copy with every numeric field coerced to a finite value >= 0.
    ///
    /// The calculator treats inputs as pre-sanitized; callers holding raw
    /// user input should pass it through here first.
    pub fn sanitized(&self) -> Self {
        fn clamp(v: f64) -> f64 {
            if v.is_finite() && v > 0.0 {
                v
            } else {
                0.0
            }
        }

        Self {
            finished_width: clamp(self.finished_width),
            finished_height: clamp(self.finished_height),
            gusset: clamp(self.gusset),
            split_height: clamp(self.split_height),
            orientation: self.orientation,
            has_split: self.has_split,
        }
    }
}
