//! Panel request records and orientation constraints.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Allowed rotation for a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RotationConstraint {
    /// Fixed orientation — the panel is placed exactly as specified.
    NoRotation,
    /// The panel may be rotated by 90 degrees (dimensions swapped).
    #[default]
    Rotation90Allowed,
}

/// Grain requirement for an individual panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GrainConstraint {
    /// The panel's grain must align with the sheet's grain axis.
    #[default]
    MatchSheet,
    /// The panel's long side must run horizontally.
    FixedHorizontal,
    /// The panel's long side must run vertically.
    FixedVertical,
}

/// A grain axis: the stock material's fiber orientation, or the resolved
/// grain of a placed panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GrainDirection {
    /// Grain runs along the X axis.
    #[default]
    Horizontal,
    /// Grain runs along the Y axis.
    Vertical,
}

/// A rectangular panel to be cut from stock material.
///
/// Immutable once constructed; the nesting run only reads it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Panel {
    /// Caller-assigned identifier.
    pub id: u32,
    /// Width in sheet length units. Must be positive.
    pub width: f64,
    /// Height in sheet length units. Must be positive.
    pub height: f64,
    /// Rotation permission.
    pub rotation: RotationConstraint,
    /// Grain requirement.
    pub grain: GrainConstraint,
    /// Free-form label carried through to the result.
    pub tag: String,
}

impl Panel {
    /// Creates a panel with default rotation and grain constraints.
    pub fn new(id: u32, width: f64, height: f64) -> Self {
        Self {
            id,
            width,
            height,
            rotation: RotationConstraint::default(),
            grain: GrainConstraint::default(),
            tag: String::new(),
        }
    }

    /// Sets the rotation constraint.
    pub fn with_rotation(mut self, rotation: RotationConstraint) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the grain constraint.
    pub fn with_grain(mut self, grain: GrainConstraint) -> Self {
        self.grain = grain;
        self
    }

    /// Sets the free-form tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Returns the panel area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns the longer of the two dimensions.
    pub fn max_dimension(&self) -> f64 {
        self.width.max(self.height)
    }

    /// Returns the shorter of the two dimensions.
    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Validates the panel and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.width.is_finite()) {
            return Err(Error::InvalidPanel(format!(
                "panel {} width must be positive and finite, got {}",
                self.id, self.width
            )));
        }
        if !(self.height > 0.0 && self.height.is_finite()) {
            return Err(Error::InvalidPanel(format!(
                "panel {} height must be positive and finite, got {}",
                self.id, self.height
            )));
        }
        Ok(())
    }
}

/// A panel that has been assigned a position on a sheet.
///
/// Created once by the placement search; never mutated afterwards.
/// `width * height` always equals `panel.width * panel.height` — rotation
/// swaps dimensions, it never scales them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedPanel {
    /// The original request.
    pub panel: Panel,
    /// X of the bottom-left corner on the sheet.
    pub x: f64,
    /// Y of the bottom-left corner on the sheet.
    pub y: f64,
    /// Placed width (swapped with height when rotated).
    pub width: f64,
    /// Placed height (swapped with width when rotated).
    pub height: f64,
    /// Applied rotation: 0 or 90.
    pub rotation_degrees: u32,
    /// Resolved grain axis of the placed panel.
    pub grain: GrainDirection,
    /// Index of the sheet the panel was placed on.
    pub sheet_index: usize,
}

impl PlacedPanel {
    /// Returns the placed area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if the panel was rotated by 90 degrees.
    pub fn rotated(&self) -> bool {
        self.rotation_degrees == 90
    }

    /// Returns true if this panel's footprint intersects `other`'s.
    ///
    /// Axis-aligned separating-axis test; panels on different sheets never
    /// overlap.
    pub fn overlaps(&self, other: &PlacedPanel) -> bool {
        if self.sheet_index != other.sheet_index {
            return false;
        }
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}
