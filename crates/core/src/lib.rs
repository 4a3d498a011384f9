//! Shared domain types and pure logic for the Lindholm Køreskole backend.
//!
//! Everything in this crate is side-effect free: type aliases, the domain
//! error taxonomy, language handling, content validation limits, pagination
//! clamping, and the image normalizer. I/O lives in the sibling crates.

pub mod content;
pub mod error;
pub mod lang;
pub mod media;
pub mod pagination;
pub mod roles;
pub mod types;
