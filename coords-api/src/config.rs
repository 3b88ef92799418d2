//! API layer configuration
//!
//! Holds the global default space singleton (for embedder convenience).
//! Library users should prefer the explicit `build_with_space` API.

use coords_core::Space;
use once_cell::sync::OnceCell;

// Global default space for embedder convenience
static GLOBAL_SPACE: OnceCell<Space> = OnceCell::new();

/// Initialize the global default space (must be called once before `space`)
///
/// # Panics
/// If the space is already initialized
pub fn init(space: Space) {
    GLOBAL_SPACE.set(space).expect("Space already initialized");
}

/// Get the global default space
///
/// # Panics
/// If the space is not initialized
pub fn space() -> &'static Space {
    GLOBAL_SPACE.get().expect("Space not initialized")
}

/// Check if the global space is initialized
pub fn is_initialized() -> bool {
    GLOBAL_SPACE.get().is_some()
}
