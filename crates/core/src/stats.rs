//! Utilization and efficiency statistics derived from a nesting result.
//!
//! All figures are recomputed on demand from the result's collections;
//! nothing here is stored redundantly on the result itself.

use crate::config::NestConfig;
use crate::result::NestResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Read-only statistics view over a completed run.
pub struct Statistics<'a> {
    result: &'a NestResult,
    sheet_width: f64,
    sheet_height: f64,
}

impl<'a> Statistics<'a> {
    /// Creates a statistics view for a result produced under `config`.
    pub fn new(result: &'a NestResult, config: &NestConfig) -> Self {
        Self {
            result,
            sheet_width: config.sheet_width,
            sheet_height: config.sheet_height,
        }
    }

    /// Returns the area of one stock sheet.
    pub fn sheet_area(&self) -> f64 {
        self.sheet_width * self.sheet_height
    }

    /// Returns the total placed panel area on the given sheet.
    pub fn placed_area_on_sheet(&self, sheet_index: usize) -> f64 {
        self.result
            .panels_on_sheet(sheet_index)
            .map(|p| p.area())
            .sum()
    }

    /// Returns the total free (offcut) area remaining on the given sheet.
    pub fn free_area_on_sheet(&self, sheet_index: usize) -> f64 {
        self.result
            .free_on_sheet(sheet_index)
            .map(|s| s.area())
            .sum()
    }

    /// Returns the total area removed by kerf strips on the given sheet.
    pub fn kerf_area_on_sheet(&self, sheet_index: usize) -> f64 {
        self.result
            .cuts_on_sheet(sheet_index)
            .map(|c| c.kerf_area())
            .sum()
    }

    /// Returns per-sheet utilization percentages, one entry per sheet.
    ///
    /// Utilization of a sheet is the placed panel area on that sheet
    /// divided by the sheet area, times 100.
    pub fn sheet_utilization(&self) -> Vec<f64> {
        let sheet_area = self.sheet_area();
        (0..self.result.sheet_count)
            .map(|i| {
                if sheet_area > 0.0 {
                    self.placed_area_on_sheet(i) / sheet_area * 100.0
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// Returns the overall efficiency percentage: total placed area divided
    /// by the total area of all opened sheets, times 100.
    pub fn overall_efficiency(&self) -> f64 {
        let total_sheet_area = self.result.sheet_count as f64 * self.sheet_area();
        if total_sheet_area > 0.0 {
            self.result.total_placed_area() / total_sheet_area * 100.0
        } else {
            0.0
        }
    }

    /// Builds a compact summary of the run.
    pub fn summary(&self) -> NestSummary {
        NestSummary {
            total_requested: self.result.placed_count() + self.result.failed_count(),
            total_placed: self.result.placed_count(),
            total_failed: self.result.failed_count(),
            sheets_used: self.result.sheet_count,
            cut_count: self.result.cut_count(),
            efficiency_percent: self.overall_efficiency(),
            time_ms: self.result.computation_time_ms,
        }
    }
}

/// Summary figures for a nesting run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NestSummary {
    /// Panels requested.
    pub total_requested: usize,
    /// Panels placed.
    pub total_placed: usize,
    /// Panels that could not be placed.
    pub total_failed: usize,
    /// Stock sheets opened.
    pub sheets_used: usize,
    /// Cuts emitted.
    pub cut_count: usize,
    /// Overall efficiency percentage.
    pub efficiency_percent: f64,
    /// Run duration in milliseconds.
    pub time_ms: u64,
}
