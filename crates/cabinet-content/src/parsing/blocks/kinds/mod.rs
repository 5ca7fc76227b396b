//! # Block Kinds
//!
//! Marker types that own the syntax of each block kind. The classifier asks
//! these types; it never hardcodes `## ` or `- ` itself.

pub mod divider;
pub mod heading;
pub mod list;

pub use divider::Divider;
pub use heading::Heading;
pub use list::ListMarker;
