//! Cut lines and the ordered cut record.

use crate::sheet::SubSheetId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier for a cut line, assigned sequentially per run.
pub type CutId = u32;

/// Orientation of a straight, full-depth saw cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CutOrientation {
    /// The blade travels along the X axis; the cut sits at a fixed Y.
    #[default]
    Horizontal,
    /// The blade travels along the Y axis; the cut sits at a fixed X.
    Vertical,
}

/// A single guillotine cut.
///
/// `start..end` is the span along the cut's own axis and always equals the
/// full width (horizontal) or full height (vertical) of the sub-sheet the
/// cut divides — the property that makes the pattern executable on a beam
/// saw.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutLine {
    /// Sequential id.
    pub id: CutId,
    /// Cut orientation.
    pub orientation: CutOrientation,
    /// Offset along the axis perpendicular to the cut (Y for horizontal
    /// cuts, X for vertical cuts).
    pub position: f64,
    /// Span start along the cut's own axis.
    pub start: f64,
    /// Span end along the cut's own axis.
    pub end: f64,
    /// Blade width removed by this cut.
    pub kerf: f64,
    /// Sheet the cut is executed on.
    pub sheet_index: usize,
    /// The sub-sheet this cut divided.
    pub source: SubSheetId,
}

impl CutLine {
    /// Returns the length of the cut.
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Returns the area of material removed by this cut's kerf strip.
    pub fn kerf_area(&self) -> f64 {
        self.span() * self.kerf
    }
}

/// One entry in the ordered cut record.
///
/// Sequence numbers increase monotonically in cut-execution order, which is
/// also a valid manufacturing order: each cut only depends on material state
/// that exists before it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutOperation {
    /// Zero-based position in the execution order.
    pub sequence: u32,
    /// The cut line this operation executes.
    pub cut: CutId,
    /// Human-readable description of the cut.
    pub description: String,
    /// The free sub-sheet created by this cut.
    pub resulting: SubSheetId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_and_kerf_area() {
        let cut = CutLine {
            id: 0,
            orientation: CutOrientation::Vertical,
            position: 600.0,
            start: 0.0,
            end: 1220.0,
            kerf: 5.0,
            sheet_index: 0,
            source: 0,
        };
        assert_eq!(cut.span(), 1220.0);
        assert_eq!(cut.kerf_area(), 6100.0);
    }
}
