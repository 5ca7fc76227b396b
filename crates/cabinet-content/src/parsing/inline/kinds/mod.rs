//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters. The parser calls
//! these constants; it never hardcodes `**`.

pub mod strong;

pub use strong::Strong;
