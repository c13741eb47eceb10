//! Guillotine partitioning of free sub-sheets.
//!
//! When a panel occupies the bottom-left corner of a sub-sheet, the engine
//! emits up to two straight cuts that separate the panel from the leftover
//! material and the free regions those cuts create. Every emitted cut spans
//! the full width or full height of the region it divides — the single
//! property that makes the pattern executable on a beam saw, which cannot
//! stop mid-sheet.

use beamnest_core::{CutId, CutLine, CutOrientation, SubSheet, SubSheetId};

/// Geometric tolerance in sheet length units.
pub(crate) const EPSILON: f64 = 1e-6;

/// One emitted cut together with the free region it creates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutPiece {
    /// The cut line.
    pub cut: CutLine,
    /// The sub-sheet freed on the far side of the cut.
    pub child: SubSheet,
}

/// Sequential id source for cuts and sub-sheets within one run.
#[derive(Debug, Default)]
pub(crate) struct IdGen {
    next_cut: CutId,
    next_sub: SubSheetId,
}

impl IdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cut_id(&mut self) -> CutId {
        let id = self.next_cut;
        self.next_cut += 1;
        id
    }

    pub fn sub_id(&mut self) -> SubSheetId {
        let id = self.next_sub;
        self.next_sub += 1;
        id
    }
}

/// Emits the guillotine cuts for one placement.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CutEngine {
    kerf: f64,
    preferred: CutOrientation,
}

impl CutEngine {
    pub fn new(kerf: f64, preferred: CutOrientation) -> Self {
        Self { kerf, preferred }
    }

    /// Splits `sub` around a placed footprint of `used_width` x
    /// `used_height` anchored at the sub-sheet's bottom-left corner.
    ///
    /// The first cut runs along the axis with more leftover material (ties
    /// keep the configured preference) and spans the sub-sheet's full
    /// dimension; the second cut divides only the strip still containing
    /// the panel. Each cut's child region starts exactly `kerf` past the
    /// cut line, so the kerf strip is never claimed by any region. A cut
    /// whose leftover dimension is within tolerance of zero is skipped
    /// entirely — no zero-area children.
    pub fn cut(
        &self,
        sub: &SubSheet,
        used_width: f64,
        used_height: f64,
        ids: &mut IdGen,
    ) -> Vec<CutPiece> {
        let remaining_width = sub.width - used_width - self.kerf;
        let remaining_height = sub.height - used_height - self.kerf;

        let mut horizontal_first = self.preferred == CutOrientation::Horizontal;
        if (remaining_width - remaining_height).abs() > EPSILON {
            horizontal_first = remaining_height > remaining_width;
        }

        let mut pieces = Vec::with_capacity(2);
        if horizontal_first {
            if remaining_height > EPSILON {
                // Full-width cut above the panel row
                pieces.push(self.horizontal_piece(sub, used_height, sub.width, ids));
            }
            if remaining_width > EPSILON {
                // Divides the bottom row, whose height is used_height
                pieces.push(self.vertical_piece(sub, used_width, used_height, ids));
            }
        } else {
            if remaining_width > EPSILON {
                // Full-height cut right of the panel column
                pieces.push(self.vertical_piece(sub, used_width, sub.height, ids));
            }
            if remaining_height > EPSILON {
                // Divides the left column, whose width is used_width
                pieces.push(self.horizontal_piece(sub, used_height, used_width, ids));
            }
        }
        pieces
    }

    /// Horizontal cut at `y = sub.y + used_height`, spanning `span_width`
    /// from the sub-sheet's left edge. Frees the region above the cut.
    fn horizontal_piece(
        &self,
        sub: &SubSheet,
        used_height: f64,
        span_width: f64,
        ids: &mut IdGen,
    ) -> CutPiece {
        let cut_y = sub.y + used_height;
        let cut = CutLine {
            id: ids.cut_id(),
            orientation: CutOrientation::Horizontal,
            position: cut_y,
            start: sub.x,
            end: sub.x + span_width,
            kerf: self.kerf,
            sheet_index: sub.sheet_index,
            source: sub.id,
        };
        let child = SubSheet {
            id: ids.sub_id(),
            x: sub.x,
            y: cut_y + self.kerf,
            width: span_width,
            height: sub.height - used_height - self.kerf,
            level: sub.level + 1,
            parent_cut: Some(cut.id),
            sheet_index: sub.sheet_index,
        };
        CutPiece { cut, child }
    }

    /// Vertical cut at `x = sub.x + used_width`, spanning `span_height`
    /// from the sub-sheet's bottom edge. Frees the region right of the cut.
    fn vertical_piece(
        &self,
        sub: &SubSheet,
        used_width: f64,
        span_height: f64,
        ids: &mut IdGen,
    ) -> CutPiece {
        let cut_x = sub.x + used_width;
        let cut = CutLine {
            id: ids.cut_id(),
            orientation: CutOrientation::Vertical,
            position: cut_x,
            start: sub.y,
            end: sub.y + span_height,
            kerf: self.kerf,
            sheet_index: sub.sheet_index,
            source: sub.id,
        };
        let child = SubSheet {
            id: ids.sub_id(),
            x: cut_x + self.kerf,
            y: sub.y,
            width: sub.width - used_width - self.kerf,
            height: span_height,
            level: sub.level + 1,
            parent_cut: Some(cut.id),
            sheet_index: sub.sheet_index,
        };
        CutPiece { cut, child }
    }
}
