//! Ordered cut sequence derived from a nesting result.
//!
//! The sequence is a read-only manufacturing view: steps appear in cut
//! execution order, which is valid to run on a saw as-is because each cut
//! only depends on material state created by earlier steps.

use beamnest_core::{CutLine, Error, NestResult, Result, SubSheetId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One step of the manufacturing sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutStep {
    /// Zero-based position in the execution order.
    pub sequence: u32,
    /// The cut to execute.
    pub cut: CutLine,
    /// Human-readable description recorded by the run.
    pub description: String,
    /// The free sub-sheet this cut creates.
    pub resulting: SubSheetId,
}

/// The full ordered cut sequence of a run.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutSequence {
    steps: Vec<CutStep>,
}

impl CutSequence {
    /// Builds the sequence from a run result, joining each recorded
    /// operation with its cut line.
    ///
    /// Fails with [`Error::InvariantViolation`] if the operation record is
    /// out of order or references an unknown cut — either would indicate a
    /// corrupted result.
    pub fn from_result(result: &NestResult) -> Result<Self> {
        let mut steps = Vec::with_capacity(result.operations.len());

        for (index, op) in result.operations.iter().enumerate() {
            if op.sequence as usize != index {
                return Err(Error::InvariantViolation(format!(
                    "cut operation at position {} carries sequence number {}",
                    index, op.sequence
                )));
            }
            let cut = result
                .cuts
                .iter()
                .find(|c| c.id == op.cut)
                .copied()
                .ok_or_else(|| {
                    Error::InvariantViolation(format!(
                        "cut operation {} references unknown cut {}",
                        op.sequence, op.cut
                    ))
                })?;
            steps.push(CutStep {
                sequence: op.sequence,
                cut,
                description: op.description.clone(),
                resulting: op.resulting,
            });
        }

        Ok(Self { steps })
    }

    /// Returns the steps in execution order.
    pub fn steps(&self) -> &[CutStep] {
        &self.steps
    }

    /// Returns the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the sequence has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the steps executed on the given sheet, preserving order.
    pub fn steps_on_sheet(&self, sheet_index: usize) -> impl Iterator<Item = &CutStep> {
        self.steps
            .iter()
            .filter(move |s| s.cut.sheet_index == sheet_index)
    }

    /// Returns the total blade travel over all cuts.
    pub fn total_cut_length(&self) -> f64 {
        self.steps.iter().map(|s| s.cut.span()).sum()
    }

    /// Returns the total material area removed by kerf strips.
    pub fn total_kerf_area(&self) -> f64 {
        self.steps.iter().map(|s| s.cut.kerf_area()).sum()
    }
}
