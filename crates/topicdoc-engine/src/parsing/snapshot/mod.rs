//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`outline`**: Renders a [`Document`](crate::models::Document) as a
//!   stable indented text outline for `insta` snapshots
//! - **`invariants`**: Structural checks every parsed document must pass
//!   (ordinals in range and unique, bodies slice back out of the content,
//!   fixed entry order, TOC mirrors entries)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
