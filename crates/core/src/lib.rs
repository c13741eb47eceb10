//! # Beamnest Core
//!
//! Data model for beam-saw guillotine panel nesting.
//!
//! This crate defines the types shared by the nesting engine and the
//! cut-sequence views:
//!
//! - **Panel records**: [`Panel`], [`PlacedPanel`] with [`RotationConstraint`]
//!   and [`GrainConstraint`]
//! - **Free regions**: [`SubSheet`] — the rectangular remainders of stock
//!   material available for placement
//! - **Cuts**: [`CutLine`], [`CutOperation`] — straight, full-span saw cuts
//!   and their execution order
//! - **Configuration**: [`NestConfig`] with [`SortStrategy`]
//! - **Results**: [`NestResult`], [`Statistics`], [`NestSummary`]
//!
//! ## Configuration
//!
//! ```rust
//! use beamnest_core::{GrainDirection, NestConfig, SortStrategy};
//!
//! let config = NestConfig::new(2440.0, 1220.0)
//!     .with_kerf(5.0)
//!     .with_sheet_grain(GrainDirection::Horizontal)
//!     .with_sort_strategy(SortStrategy::AreaDescending);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod cut;
pub mod error;
pub mod panel;
pub mod result;
pub mod sheet;
pub mod stats;

// Re-exports
pub use config::{NestConfig, SortStrategy};
pub use cut::{CutId, CutLine, CutOperation, CutOrientation};
pub use error::{Error, Result};
pub use panel::{GrainConstraint, GrainDirection, Panel, PlacedPanel, RotationConstraint};
pub use result::NestResult;
pub use sheet::{SubSheet, SubSheetId};
pub use stats::{NestSummary, Statistics};
