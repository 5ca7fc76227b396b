//! # Snapshot Testing Support
//!
//! Utilities for testing the segmenter via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts segmented blocks to a stable, serializable `Snap`
//!   format for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for segmenter correctness (lists non-empty,
//!   inline nodes tile their text, no blank paragraphs)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
