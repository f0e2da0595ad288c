//! Utility modules
//!
//! - Format: currency and percent-change display helpers

pub mod format;

// Re-export commonly used helpers
pub use format::{format_inr, format_percent_change, unit_basis};
