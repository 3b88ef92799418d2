//! LibCoords Core - Coordinate value model (pure logic, no IO)
//!
//! Tagged position values, validated coordinate construction, coordinate
//! space descriptors, and the closed construction error surface.
//! Only operates on in-memory values; the target space is passed explicitly
//! via parameters, not via global state.

pub mod coordinate;
pub mod error;
pub mod location;
pub mod position;
pub mod space;

// Re-export common types
pub use coordinate::Coordinate;
pub use error::{CoordResult, CoordinateError, ERROR_DOMAIN};
pub use location::{midpoint, Location};
pub use position::{Position, PositionTag};
pub use space::Space;
