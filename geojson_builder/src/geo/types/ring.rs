use super::Position;
use crate::{GeoJsonError, Result};
use std::fmt::Debug;

/// A closed ring of positions, the boundary (or a hole) of a polygon.
///
/// Holds at least four positions, and the last position equals the first one.
#[derive(Clone, PartialEq)]
pub struct LinearRing(Vec<Position>);

impl LinearRing {
	pub const MIN_POSITIONS: usize = 4;

	/// Concatenates the positions in input order and checks that the ring is closed.
	///
	/// Fails with [`GeoJsonError::InvalidRing`] when the last position doesn't equal `p0`.
	pub fn new(
		p0: Position,
		p1: Position,
		p2: Position,
		p3: Position,
		rest: impl IntoIterator<Item = Position>,
	) -> Result<Self> {
		let mut positions = vec![p0, p1, p2, p3];
		positions.extend(rest);
		Self::check_closed(&positions)?;
		Ok(Self(positions))
	}

	pub(crate) fn from_positions(positions: Vec<Position>) -> Result<Self> {
		if positions.len() < Self::MIN_POSITIONS {
			return Err(GeoJsonError::TooFewPositions {
				kind: "LinearRing",
				minimum: Self::MIN_POSITIONS,
				actual: positions.len(),
			});
		}
		Self::check_closed(&positions)?;
		Ok(Self(positions))
	}

	fn check_closed(positions: &[Position]) -> Result<()> {
		let first = positions[0];
		let last = positions[positions.len() - 1];
		if first != last {
			log::debug!("rejecting linear ring of {} positions: {first:?} != {last:?}", positions.len());
			return Err(GeoJsonError::InvalidRing { first, last });
		}
		Ok(())
	}

	#[must_use]
	pub fn as_slice(&self) -> &[Position] {
		&self.0
	}

	// Never empty, so no `is_empty`.
	#[allow(clippy::len_without_is_empty)]
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn first(&self) -> &Position {
		&self.0[0]
	}

	#[must_use]
	pub fn last(&self) -> &Position {
		&self.0[self.0.len() - 1]
	}

	#[must_use]
	pub fn iter(&self) -> std::slice::Iter<'_, Position> {
		self.0.iter()
	}

	#[must_use]
	pub fn into_inner(self) -> Vec<Position> {
		self.0
	}
}

impl<'a> IntoIterator for &'a LinearRing {
	type Item = &'a Position;
	type IntoIter = std::slice::Iter<'a, Position>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl Debug for LinearRing {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

super::macros::impl_try_from_positions!(LinearRing);
