//! Named locations and coordinate combination
//!
//! Derived arithmetic over validated coordinates: a `Location` names a
//! coordinate and reports its length; `midpoint` combines two coordinates
//! of matching variant.

use crate::coordinate::Coordinate;
use crate::error::{CoordResult, CoordinateError};
use crate::position::Position;

/// A named, validated coordinate
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    coordinate: Coordinate,
    name: String,
}

impl Location {
    /// Name an already-validated coordinate
    pub fn new(coordinate: Coordinate, name: impl Into<String>) -> Self {
        Self {
            coordinate,
            name: name.into(),
        }
    }

    /// The underlying coordinate
    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// The location name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length of the location vector
    ///
    /// Numeric positions contribute their payload as the second component.
    /// A true boolean position has the magnitude itself as length, a false
    /// one has length zero.
    pub fn length(&self) -> f64 {
        let y = self.coordinate.value();
        match self.coordinate.position() {
            Position::Integer(x) => {
                let x = x as f64;
                (x * x + y * y).sqrt()
            }
            Position::Real(x) => (x * x + y * y).sqrt(),
            Position::Boolean(true) => y,
            Position::Boolean(false) => 0.0,
        }
    }
}

/// Combine two coordinates of matching variant
///
/// The combined magnitude is `sqrt(x.value² + y.value²)`. Integer positions
/// combine by subtraction, real positions by the root of summed squares,
/// boolean positions must agree. Mixed variants fail with `WrongDimensions`;
/// disagreeing booleans fail with `CantExist`.
pub fn midpoint(x: &Coordinate, y: &Coordinate) -> CoordResult<Coordinate> {
    let value = (x.value() * x.value() + y.value() * y.value()).sqrt();
    match (x.position(), y.position()) {
        (Position::Integer(a), Position::Integer(b)) => {
            Ok(Coordinate::from_parts(Position::Integer(a - b), value))
        }
        (Position::Real(a), Position::Real(b)) => Ok(Coordinate::from_parts(
            Position::Real((a * a + b * b).sqrt()),
            value,
        )),
        (Position::Boolean(a), Position::Boolean(b)) => {
            if a != b {
                return Err(CoordinateError::CantExist);
            }
            Ok(Coordinate::from_parts(Position::Boolean(a), value))
        }
        _ => Err(CoordinateError::WrongDimensions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::Space;

    fn coordinate(position: Position, value: f64) -> Coordinate {
        Coordinate::new(position, &Space::permissive(1), 1, value).unwrap()
    }

    #[test]
    fn test_length_integer() {
        let location = Location::new(coordinate(Position::Integer(3), 4.0), "origin");
        assert_eq!(location.length(), 5.0);
    }

    #[test]
    fn test_length_real() {
        let location = Location::new(coordinate(Position::Real(3.0), 4.0), "pier");
        assert_eq!(location.length(), 5.0);
    }

    #[test]
    fn test_length_boolean() {
        let on = Location::new(coordinate(Position::Boolean(true), 7.5), "on");
        assert_eq!(on.length(), 7.5);

        let off = Location::new(coordinate(Position::Boolean(false), 7.5), "off");
        assert_eq!(off.length(), 0.0);
    }

    #[test]
    fn test_name_and_coordinate_accessors() {
        let c = coordinate(Position::Integer(1), 2.0);
        let location = Location::new(c, "dock");
        assert_eq!(location.name(), "dock");
        assert_eq!(location.coordinate(), c);
    }

    #[test]
    fn test_midpoint_integers_subtract() {
        let x = coordinate(Position::Integer(7), 3.0);
        let y = coordinate(Position::Integer(2), 4.0);
        let mid = midpoint(&x, &y).unwrap();
        assert_eq!(mid.position(), Position::Integer(5));
        assert_eq!(mid.value(), 5.0);
    }

    #[test]
    fn test_midpoint_reals_root_sum_of_squares() {
        let x = coordinate(Position::Real(3.0), 0.0);
        let y = coordinate(Position::Real(4.0), 0.0);
        let mid = midpoint(&x, &y).unwrap();
        assert_eq!(mid.position(), Position::Real(5.0));
        assert_eq!(mid.value(), 0.0);
    }

    #[test]
    fn test_midpoint_booleans_must_agree() {
        let x = coordinate(Position::Boolean(true), 1.0);
        let y = coordinate(Position::Boolean(true), 1.0);
        let mid = midpoint(&x, &y).unwrap();
        assert_eq!(mid.position(), Position::Boolean(true));

        let z = coordinate(Position::Boolean(false), 1.0);
        assert_eq!(midpoint(&x, &z).unwrap_err(), CoordinateError::CantExist);
    }

    #[test]
    fn test_midpoint_mixed_variants_wrong_dimensions() {
        let x = coordinate(Position::Integer(1), 1.0);
        let y = coordinate(Position::Real(1.0), 1.0);
        assert_eq!(midpoint(&x, &y).unwrap_err(), CoordinateError::WrongDimensions);

        let z = coordinate(Position::Boolean(true), 1.0);
        assert_eq!(midpoint(&x, &z).unwrap_err(), CoordinateError::WrongDimensions);
    }
}
