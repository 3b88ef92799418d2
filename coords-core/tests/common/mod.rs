//! Test helpers
//!
//! Shared space fixtures for the integration suites.

use coords_core::Space;

/// One-dimensional space confined to [-180, 180]
pub fn degrees() -> Space {
    Space::real_bounded(1, -180.0, 180.0)
}

/// Two-dimensional space with no legality restrictions
pub fn plane() -> Space {
    Space::permissive(2)
}
