//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod currencies;
pub mod health;
pub mod insights;

// Re-export all handlers for use in router
pub use currencies::*;
pub use health::*;
pub use insights::*;
