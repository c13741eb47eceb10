//! Nesting run result representation.

use crate::cut::{CutLine, CutOperation};
use crate::panel::{Panel, PlacedPanel};
use crate::sheet::{SubSheet, SubSheetId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Aggregate result of a nesting run.
///
/// Populated incrementally while the run executes and read-only after it
/// returns. Every input panel appears in exactly one of `placed` or
/// `failed`.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NestResult {
    /// Panels that received a position, in placement order.
    pub placed: Vec<PlacedPanel>,

    /// Panels that could not be placed on any sheet.
    pub failed: Vec<Panel>,

    /// Free sub-sheets remaining at the end of the run (usable offcuts).
    pub free: Vec<SubSheet>,

    /// Arena of every sub-sheet created during the run, indexed by id.
    /// Includes regions later consumed by placements.
    pub sub_sheets: Vec<SubSheet>,

    /// All cut lines, in execution order.
    pub cuts: Vec<CutLine>,

    /// Ordered cut record, one operation per cut line.
    pub operations: Vec<CutOperation>,

    /// Number of stock sheets opened. At least 1, even for an empty run.
    pub sheet_count: usize,

    /// Wall-clock duration of the run in milliseconds.
    pub computation_time_ms: u64,
}

impl NestResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if every input panel was placed.
    pub fn all_placed(&self) -> bool {
        self.failed.is_empty()
    }

    /// Returns the number of placed panels.
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Returns the number of failed panels.
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// Returns the number of cuts.
    pub fn cut_count(&self) -> usize {
        self.cuts.len()
    }

    /// Looks up a sub-sheet in the arena by id.
    pub fn sub_sheet(&self, id: SubSheetId) -> Option<&SubSheet> {
        self.sub_sheets.get(id as usize)
    }

    /// Returns the panels placed on the given sheet.
    pub fn panels_on_sheet(&self, sheet_index: usize) -> impl Iterator<Item = &PlacedPanel> {
        self.placed
            .iter()
            .filter(move |p| p.sheet_index == sheet_index)
    }

    /// Returns the free sub-sheets remaining on the given sheet.
    pub fn free_on_sheet(&self, sheet_index: usize) -> impl Iterator<Item = &SubSheet> {
        self.free
            .iter()
            .filter(move |s| s.sheet_index == sheet_index)
    }

    /// Returns the cuts executed on the given sheet, in order.
    pub fn cuts_on_sheet(&self, sheet_index: usize) -> impl Iterator<Item = &CutLine> {
        self.cuts
            .iter()
            .filter(move |c| c.sheet_index == sheet_index)
    }

    /// Returns the total area of all placed panels.
    pub fn total_placed_area(&self) -> f64 {
        self.placed.iter().map(|p| p.area()).sum()
    }
}
