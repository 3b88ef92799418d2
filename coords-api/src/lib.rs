//! LibCoords API - Construction orchestration layer
//!
//! Provides the unified coordinate-construction interface, including:
//! - Explicit-space construction (`build_with_space`)
//! - A global default space for embedder convenience
//! - Structured interop error reports (`ErrorReport`)
//!
//! Construction outcomes are logged at the API boundary under the
//! `coords::api` target; the core itself never logs.
//!
//! For library use, prefer the explicit `build_with_space(&space, ...)` API.

use tracing::debug;

// Re-export config
pub mod config;
pub use config::{init as init_space, is_initialized, space as default_space};

// Re-export error reports
pub mod error;
pub use error::ErrorReport;

// Re-export core types
pub use coords_core::{
    CoordResult, Coordinate, CoordinateError, Location, Position, PositionTag, Space,
    ERROR_DOMAIN,
};

/// Build a coordinate in an explicit space
///
/// This is the recommended API for library users.
pub fn build_with_space(
    space: &Space,
    position: Position,
    supplied_arity: i32,
    value: f64,
) -> CoordResult<Coordinate> {
    match Coordinate::new(position, space, supplied_arity, value) {
        Ok(coordinate) => {
            debug!(target: "coords::api", space = space.name(), %position, "coordinate accepted");
            Ok(coordinate)
        }
        Err(e) => {
            debug!(target: "coords::api", space = space.name(), %position, error = %e, "coordinate rejected");
            Err(e)
        }
    }
}

/// Build a coordinate in the global default space
///
/// # Panics
/// If the global space is not initialized
pub fn build(position: Position, supplied_arity: i32, value: f64) -> CoordResult<Coordinate> {
    build_with_space(config::space(), position, supplied_arity, value)
}

/// Combine two coordinates, reporting rejections at the API boundary
pub fn midpoint(x: &Coordinate, y: &Coordinate) -> CoordResult<Coordinate> {
    let result = coords_core::midpoint(x, y);
    if let Err(e) = &result {
        debug!(target: "coords::api", error = %e, "midpoint rejected");
    }
    result
}
