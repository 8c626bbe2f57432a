//! Seam arithmetic: finished measurements to cutting-list entries.

use crate::config::{MIN_MAIN_PART_HEIGHT_CM, SEAM_ALLOWANCE_CM};
use crate::model::{Orientation, PatternInputs, Piece};

/// Compute the ordered cutting list for the given measurements.
///
/// Never fails; inputs are expected pre-sanitized to finite values >= 0
/// (see [`PatternInputs::sanitized`]). The first entry is always the lining.
/// The only abnormal condition is an advisory entry emitted when the split
/// leaves less than 2 cm of main body; calculation still proceeds.
pub fn compute_pieces(inputs: &PatternInputs) -> Vec<Piece> {
    let sa2 = SEAM_ALLOWANCE_CM * 2.0;
    let flat_w = inputs.flat_width();
    let flat_h = inputs.flat_height();

    // Every piece in every branch shares the same cut width.
    let cut_w = flat_w + sa2;

    let mut pieces = Vec::new();

    // Lining is always one folded piece, front and back in one rectangle.
    pieces.push(Piece::new("Lining", cut_w, flat_h * 2.0 + sa2, 1));

    if !inputs.has_split {
        match inputs.orientation {
            Orientation::Fold => {
                // Body folds at the bottom, cut exactly like the lining.
                pieces.push(Piece::new("Outer main", cut_w, flat_h * 2.0 + sa2, 1));
            }
            Orientation::Sewn => {
                // Front and back cut separately, seam allowance top and bottom.
                pieces.push(Piece::new("Outer main", cut_w, flat_h + sa2, 2));
            }
        }
    } else {
        // The accent band takes the lower split_height of the body plus its
        // share of the base gusset; the main body is what remains above it.
        let sub_part_h = inputs.split_height + inputs.gusset / 2.0;
        let main_part_h = inputs.finished_height - inputs.split_height;

        if main_part_h < MIN_MAIN_PART_HEIGHT_CM {
            pieces.push(Piece::advisory(
                "split height leaves less than 2 cm of main body",
            ));
        }

        match inputs.orientation {
            Orientation::Fold => {
                // One long accent band wrapping the folded bottom.
                pieces.push(Piece::new(
                    "Outer accent band",
                    cut_w,
                    sub_part_h * 2.0 + sa2,
                    1,
                ));
            }
            Orientation::Sewn => {
                pieces.push(Piece::new("Outer accent band", cut_w, sub_part_h + sa2, 2));
            }
        }

        pieces.push(Piece::new("Outer main", cut_w, main_part_h + sa2, 2));
    }

    pieces
}
