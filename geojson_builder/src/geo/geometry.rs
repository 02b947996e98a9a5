use super::*;
use crate::geojson::{Coords, EncodedSeq};
use crate::{EncodeOptions, Result};
use serde::{Serialize, Serializer, ser::SerializeMap};
use std::fmt::Debug;

/// One of the seven geometry kinds of RFC 7946 §3.1.
///
/// Every variant except `GeometryCollection` wraps coordinates of a fixed nesting depth:
/// `Point` 0, `MultiPoint` and `LineString` 1, `MultiLineString` and `Polygon` 2,
/// `MultiPolygon` 3.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(Position),
	MultiPoint(Vec<Position>),
	LineString(LineStringCoordinates),
	MultiLineString(Vec<LineStringCoordinates>),
	Polygon(PolygonCoordinates),
	MultiPolygon(Vec<PolygonCoordinates>),
	GeometryCollection(Vec<Geometry>),
}

impl Geometry {
	#[must_use]
	pub fn new_point(position: Position) -> Self {
		Self::Point(position)
	}
	#[must_use]
	pub fn new_multi_point(positions: impl IntoIterator<Item = Position>) -> Self {
		Self::MultiPoint(positions.into_iter().collect())
	}
	#[must_use]
	pub fn new_line_string(first: Position, second: Position, rest: impl IntoIterator<Item = Position>) -> Self {
		Self::LineString(LineStringCoordinates::new(first, second, rest))
	}
	#[must_use]
	pub fn new_multi_line_string(lines: impl IntoIterator<Item = LineStringCoordinates>) -> Self {
		Self::MultiLineString(lines.into_iter().collect())
	}
	#[must_use]
	pub fn new_polygon(outer_boundary: LinearRing, holes: impl IntoIterator<Item = LinearRing>) -> Self {
		Self::Polygon(PolygonCoordinates::new(outer_boundary, holes))
	}
	#[must_use]
	pub fn new_multi_polygon(polygons: impl IntoIterator<Item = PolygonCoordinates>) -> Self {
		Self::MultiPolygon(polygons.into_iter().collect())
	}
	#[must_use]
	pub fn new_geometry_collection(geometries: impl IntoIterator<Item = Geometry>) -> Self {
		Self::GeometryCollection(geometries.into_iter().collect())
	}

	/// Wraps this geometry into a feature. Any properties are accepted, including none.
	#[must_use]
	#[allow(clippy::wrong_self_convention)]
	pub fn to_feature(self, properties: GeoProperties) -> GeoFeature {
		GeoFeature::new(self, properties)
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		fn ring(coords: &[[f64; 2]]) -> LinearRing {
			LinearRing::try_from(coords).unwrap()
		}
		Self::new_multi_polygon([
			PolygonCoordinates::new(
				ring(&[[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]]),
				[ring(&[[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]])],
			),
			PolygonCoordinates::new(
				ring(&[[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]]),
				[ring(&[[7.0, 1.0], [7.0, 3.0], [8.0, 3.0], [8.0, 1.0], [7.0, 1.0]])],
			),
		])
	}
}

impl GeoObject for Geometry {
	fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::LineString(_) => "LineString",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPolygon(_) => "MultiPolygon",
			Geometry::GeometryCollection(_) => "GeometryCollection",
		}
	}

	fn serialize_geojson<S: Serializer>(&self, precision: Option<u8>, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(2))?;
		map.serialize_entry("type", self.type_name())?;
		match self {
			Geometry::Point(c) => map.serialize_entry("coordinates", &Coords::new(c, precision))?,
			Geometry::MultiPoint(c) => map.serialize_entry("coordinates", &Coords::new(c, precision))?,
			Geometry::LineString(c) => map.serialize_entry("coordinates", &Coords::new(c, precision))?,
			Geometry::MultiLineString(c) => map.serialize_entry("coordinates", &Coords::new(c, precision))?,
			Geometry::Polygon(c) => map.serialize_entry("coordinates", &Coords::new(c, precision))?,
			Geometry::MultiPolygon(c) => map.serialize_entry("coordinates", &Coords::new(c, precision))?,
			// RFC 7946 §3.1.8 names the member `geometries`, not `coordinates`.
			Geometry::GeometryCollection(g) => map.serialize_entry("geometries", &EncodedSeq::new(g, precision))?,
		}
		map.end()
	}
}

impl Serialize for Geometry {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.serialize_geojson(EncodeOptions::DEFAULT_PRECISION, serializer)
	}
}

impl From<Position> for Geometry {
	fn from(value: Position) -> Self {
		Self::Point(value)
	}
}

impl From<LineStringCoordinates> for Geometry {
	fn from(value: LineStringCoordinates) -> Self {
		Self::LineString(value)
	}
}

impl From<PolygonCoordinates> for Geometry {
	fn from(value: PolygonCoordinates) -> Self {
		Self::Polygon(value)
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::LineString(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}
