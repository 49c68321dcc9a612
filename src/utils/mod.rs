//! Utility modules
//!
//! Frame timing helpers shared by the simulation loop.

pub mod performance;

// Re-export commonly used types
pub use performance::*;
