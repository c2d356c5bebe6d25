//! Parameter definitions with physical units and documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Physical units (seconds, Hz, degrees)
//! - Documented ranges and meanings
//! - The per-speed target tables

mod audio;
mod fan;

// Re-export all types
pub use audio::{WindParams, WindTarget};
pub use fan::FanMotion;
