//! # Beamnest Cutting
//!
//! Read-only views over beam-saw nesting results:
//!
//! - [`CutSequence`] — the ordered manufacturing sequence, one step per
//!   cut, with per-sheet grouping and blade-travel / kerf-loss totals
//! - [`verify_partition`] / [`verify_panel_accounting`] — defense-in-depth
//!   checks of the partition invariants before a result is sent to a saw
//!
//! Both views recompute everything from the result's collections; nothing
//! is stored redundantly.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod sequence;
pub mod verify;

// Re-exports
pub use sequence::{CutSequence, CutStep};
pub use verify::{verify_panel_accounting, verify_partition};
