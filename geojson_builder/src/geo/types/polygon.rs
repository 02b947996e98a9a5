use super::LinearRing;
use crate::{GeoJsonError, Result};
use std::fmt::Debug;

/// The rings of a Polygon, or one member of a MultiPolygon.
///
/// The first ring is the outer boundary, any further rings are holes.
#[derive(Clone, PartialEq)]
pub struct PolygonCoordinates(Vec<LinearRing>);

impl PolygonCoordinates {
	#[must_use]
	pub fn new(outer_boundary: LinearRing, holes: impl IntoIterator<Item = LinearRing>) -> Self {
		let mut rings = vec![outer_boundary];
		rings.extend(holes);
		Self(rings)
	}

	#[must_use]
	pub fn outer_boundary(&self) -> &LinearRing {
		&self.0[0]
	}

	#[must_use]
	pub fn holes(&self) -> &[LinearRing] {
		&self.0[1..]
	}

	#[must_use]
	pub fn as_slice(&self) -> &[LinearRing] {
		&self.0
	}

	// Never empty, so no `is_empty`.
	#[allow(clippy::len_without_is_empty)]
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn iter(&self) -> std::slice::Iter<'_, LinearRing> {
		self.0.iter()
	}

	#[must_use]
	pub fn into_inner(self) -> Vec<LinearRing> {
		self.0
	}
}

impl<'a> IntoIterator for &'a PolygonCoordinates {
	type Item = &'a LinearRing;
	type IntoIter = std::slice::Iter<'a, LinearRing>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl TryFrom<Vec<LinearRing>> for PolygonCoordinates {
	type Error = GeoJsonError;

	fn try_from(rings: Vec<LinearRing>) -> Result<Self> {
		if rings.is_empty() {
			return Err(GeoJsonError::TooFewPositions {
				kind: "Polygon",
				minimum: 1,
				actual: 0,
			});
		}
		Ok(Self(rings))
	}
}

impl TryFrom<geo::Polygon<f64>> for PolygonCoordinates {
	type Error = GeoJsonError;

	fn try_from(geometry: geo::Polygon<f64>) -> Result<Self> {
		let (exterior, interiors) = geometry.into_inner();
		let outer_boundary = LinearRing::try_from(exterior)?;
		let holes = interiors
			.into_iter()
			.map(LinearRing::try_from)
			.collect::<Result<Vec<_>>>()?;
		Ok(Self::new(outer_boundary, holes))
	}
}

impl Debug for PolygonCoordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}
