//! Free rectangular regions of stock sheets.

use crate::cut::CutId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arena identifier for a sub-sheet.
pub type SubSheetId = u32;

/// A free axis-aligned rectangle of a stock sheet, available for placement.
///
/// Created either by the sheet allocator (one full-sheet region per new
/// sheet) or by the guillotine cut engine (up to two children per
/// placement). At any point in time the free sub-sheets of a sheet are
/// pairwise non-overlapping and, together with placed panel footprints and
/// kerf strips, exactly tile the sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubSheet {
    /// Arena id; ids are assigned sequentially per run.
    pub id: SubSheetId,
    /// X of the bottom-left corner on the sheet.
    pub x: f64,
    /// Y of the bottom-left corner on the sheet.
    pub y: f64,
    /// Width of the free region.
    pub width: f64,
    /// Height of the free region.
    pub height: f64,
    /// Partition depth: 0 for a full sheet, parent level + 1 for children.
    pub level: u32,
    /// The cut that created this region, if any.
    pub parent_cut: Option<CutId>,
    /// Index of the sheet this region belongs to.
    pub sheet_index: usize,
}

impl SubSheet {
    /// Returns the area of the free region.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if a footprint of `width` x `height` fits inside this
    /// region.
    ///
    /// The comparison is exact: a footprint equal to the region fits, any
    /// positive excess does not. No additive tolerance is applied, so a
    /// panel can never exceed the region it is placed in.
    pub fn fits(&self, width: f64, height: f64) -> bool {
        width <= self.width && height <= self.height
    }

    /// Returns true if this region intersects `other` on the same sheet.
    pub fn overlaps(&self, other: &SubSheet) -> bool {
        if self.sheet_index != other.sheet_index {
            return false;
        }
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}
