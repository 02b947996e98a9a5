use super::Position;
use crate::{GeoJsonError, Result};
use std::fmt::Debug;

/// The coordinates of a LineString, or one member of a MultiLineString.
///
/// Always holds at least two positions.
#[derive(Clone, PartialEq)]
pub struct LineStringCoordinates(Vec<Position>);

impl LineStringCoordinates {
	pub const MIN_POSITIONS: usize = 2;

	/// Concatenates `first`, `second` and `rest` in input order.
	#[must_use]
	pub fn new(first: Position, second: Position, rest: impl IntoIterator<Item = Position>) -> Self {
		let mut positions = vec![first, second];
		positions.extend(rest);
		Self(positions)
	}

	pub(crate) fn from_positions(positions: Vec<Position>) -> Result<Self> {
		if positions.len() < Self::MIN_POSITIONS {
			return Err(GeoJsonError::TooFewPositions {
				kind: "LineString",
				minimum: Self::MIN_POSITIONS,
				actual: positions.len(),
			});
		}
		Ok(Self(positions))
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

impl<'a> IntoIterator for &'a LineStringCoordinates {
	type Item = &'a Position;
	type IntoIter = std::slice::Iter<'a, Position>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl Debug for LineStringCoordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

super::macros::impl_try_from_positions!(LineStringCoordinates);
