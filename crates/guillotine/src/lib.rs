//! # Beamnest Guillotine
//!
//! Greedy guillotine nesting engine for beam-saw panel cutting.
//!
//! Given rectangular panels and a stock sheet size, the engine computes
//! panel placements and the straight, full-span cuts that realize them,
//! accounting for saw-kerf loss, grain-direction constraints and per-panel
//! rotation permissions.
//!
//! ## Components
//!
//! - [`resolve_grain`] — grain validation for a candidate orientation
//! - [`find_placement`] — best-fit (smallest-area-first) search over a
//!   sheet's free regions
//! - [`GuillotineNester`] — the run orchestrator: sorts panels, drives the
//!   allocate → place → cut loop and records failures
//!
//! ## Example
//!
//! ```rust
//! use beamnest_core::{NestConfig, Panel, Statistics};
//! use beamnest_guillotine::GuillotineNester;
//!
//! let config = NestConfig::new(2440.0, 1220.0).with_kerf(5.0);
//! let nester = GuillotineNester::new(config.clone()).unwrap();
//!
//! let panels = vec![Panel::new(0, 1000.0, 600.0), Panel::new(1, 800.0, 400.0)];
//! let result = nester.nest(&panels).unwrap();
//!
//! assert_eq!(result.placed_count(), 2);
//! let stats = Statistics::new(&result, &config);
//! assert!(stats.overall_efficiency() > 0.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization of the core data types

pub mod engine;
pub mod grain;
pub mod nester;
pub mod placement;

// Re-exports
pub use beamnest_core::{
    CutLine, CutOperation, CutOrientation, Error, GrainConstraint, GrainDirection, NestConfig,
    NestResult, Panel, PlacedPanel, Result, RotationConstraint, SortStrategy, Statistics, SubSheet,
};
pub use engine::CutPiece;
pub use grain::resolve_grain;
pub use nester::GuillotineNester;
pub use placement::{find_placement, fits_empty_sheet, PlacementFit};
