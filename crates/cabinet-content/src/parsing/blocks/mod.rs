//! # Block Parsing
//!
//! Two-phase, single-pass block segmentation.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each trimmed line becomes a
//!    [`LineClass`] by checking the block markers in precedence order
//!    (blank, `## `, `### `, `---`, `- `, `N. `, otherwise text)
//!
//! 2. **Block Construction** (`builder`): a [`BlockBuilder`] owns the open
//!    list accumulator and emits [`Block`]s as lines close or extend it
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `ListBlock`, `HeadingLevel`, `ListKind`)
//! - **`kinds`**: Block-specific marker types (Heading, Divider, ListMarker)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - A list block always holds at least one item
//! - A list never changes kind: a bullet item after numbered items (or the
//!   reverse) closes the open list and starts a new one
//! - Blank lines never produce blocks

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{Block, HeadingLevel, ListBlock, ListKind};
