//! Data models
//!
//! Shared between the engine and host surfaces (canvas, preview, export).
//! All IDs are `String` (UUID v4 for tables, directory-supplied for guests).

pub mod conflict;
pub mod guest;
pub mod point;
pub mod table;

// Re-exports
pub use conflict::*;
pub use guest::*;
pub use point::*;
pub use table::*;
