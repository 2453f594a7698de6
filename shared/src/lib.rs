//! Shared types for the POS backend
//!
//! Entity models, the unified error system, and small utilities used by the
//! server and its tests.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
