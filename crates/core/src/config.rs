//! Run configuration.

use crate::cut::CutOrientation;
use crate::error::{Error, Result};
use crate::panel::GrainDirection;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Order in which panels are attempted.
///
/// All comparators are stable: panels that compare equal keep their input
/// order, so a run is deterministic for identical inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SortStrategy {
    /// Longest dimension first.
    LargestFirst,
    /// Shortest dimension first.
    SmallestFirst,
    /// Largest area first.
    #[default]
    AreaDescending,
    /// Smallest area first.
    AreaAscending,
}

/// Configuration for a nesting run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NestConfig {
    /// Stock sheet width. Must be positive.
    pub sheet_width: f64,
    /// Stock sheet height. Must be positive.
    pub sheet_height: f64,
    /// Grain axis of the stock material, one value per run.
    pub sheet_grain: GrainDirection,
    /// Blade width removed at every cut. Must be non-negative.
    pub kerf: f64,
    /// Cut orientation used when leftover material is equal on both axes.
    pub preferred_cut: CutOrientation,
    /// Panel ordering strategy.
    pub sort_strategy: SortStrategy,
}

impl Default for NestConfig {
    fn default() -> Self {
        Self {
            sheet_width: 2440.0,
            sheet_height: 1220.0,
            sheet_grain: GrainDirection::Horizontal,
            kerf: 5.0,
            preferred_cut: CutOrientation::Horizontal,
            sort_strategy: SortStrategy::default(),
        }
    }
}

impl NestConfig {
    /// Creates a configuration for the given sheet size with default kerf,
    /// grain and strategy.
    pub fn new(sheet_width: f64, sheet_height: f64) -> Self {
        Self {
            sheet_width,
            sheet_height,
            ..Self::default()
        }
    }

    /// Sets the sheet grain axis.
    pub fn with_sheet_grain(mut self, grain: GrainDirection) -> Self {
        self.sheet_grain = grain;
        self
    }

    /// Sets the kerf width.
    pub fn with_kerf(mut self, kerf: f64) -> Self {
        self.kerf = kerf;
        self
    }

    /// Sets the preferred cut orientation.
    pub fn with_preferred_cut(mut self, orientation: CutOrientation) -> Self {
        self.preferred_cut = orientation;
        self
    }

    /// Sets the panel sort strategy.
    pub fn with_sort_strategy(mut self, strategy: SortStrategy) -> Self {
        self.sort_strategy = strategy;
        self
    }

    /// Returns the area of one stock sheet.
    pub fn sheet_area(&self) -> f64 {
        self.sheet_width * self.sheet_height
    }

    /// Validates the configuration and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !(self.sheet_width > 0.0 && self.sheet_width.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "sheet width must be positive and finite, got {}",
                self.sheet_width
            )));
        }
        if !(self.sheet_height > 0.0 && self.sheet_height.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "sheet height must be positive and finite, got {}",
                self.sheet_height
            )));
        }
        if !(self.kerf >= 0.0 && self.kerf.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "kerf must be non-negative and finite, got {}",
                self.kerf
            )));
        }
        Ok(())
    }
}
