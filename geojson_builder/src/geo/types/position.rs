use std::fmt::Debug;

/// A GeoJSON position: longitude and latitude, in that order.
///
/// Values are not range checked. RFC 7946 leaves out-of-range coordinates to the consumer.
#[derive(Clone, Copy, PartialEq)]
pub struct Position([f64; 2]);

impl Position {
	#[must_use]
	pub fn new(longitude: f64, latitude: f64) -> Self {
		Self([longitude, latitude])
	}

	#[must_use]
	pub fn longitude(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn latitude(&self) -> f64 {
		self.0[1]
	}

	/// Whether both components can be written as JSON numbers.
	#[must_use]
	pub fn is_finite(&self) -> bool {
		self.0[0].is_finite() && self.0[1].is_finite()
	}
}

impl<'a, T> From<&'a [T; 2]> for Position
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Position([value[0].into(), value[1].into()])
	}
}

impl From<[f64; 2]> for Position {
	fn from(value: [f64; 2]) -> Self {
		Position(value)
	}
}

impl From<(f64, f64)> for Position {
	fn from(value: (f64, f64)) -> Self {
		Position([value.0, value.1])
	}
}

impl From<&(f64, f64)> for Position {
	fn from(value: &(f64, f64)) -> Self {
		Position([value.0, value.1])
	}
}

impl From<&Position> for Position {
	fn from(value: &Position) -> Self {
		*value
	}
}

impl From<Position> for [f64; 2] {
	fn from(value: Position) -> Self {
		value.0
	}
}

impl From<geo::Coord> for Position {
	fn from(value: geo::Coord) -> Self {
		Position([value.x, value.y])
	}
}

impl From<&geo::Coord> for Position {
	fn from(value: &geo::Coord) -> Self {
		Position([value.x, value.y])
	}
}

impl From<geo::Point> for Position {
	fn from(value: geo::Point) -> Self {
		Position::from(value.0)
	}
}

impl Debug for Position {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
