use super::*;
use crate::geojson::Encoded;
use crate::{EncodeOptions, Result};
use serde::{Serialize, Serializer, ser::SerializeMap};

/// A GeoJSON feature (RFC 7946 §3.2): one geometry plus its properties.
///
/// An empty property mapping is written as `{}`, never as `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	geometry: Geometry,
	properties: GeoProperties,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: Geometry, properties: GeoProperties) -> Self {
		Self { geometry, properties }
	}

	#[must_use]
	pub fn geometry(&self) -> &Geometry {
		&self.geometry
	}

	#[must_use]
	pub fn properties(&self) -> &GeoProperties {
		&self.properties
	}

	pub fn set_properties(&mut self, properties: GeoProperties) {
		self.properties = properties;
	}

	pub fn set_property<K, V>(&mut self, key: K, value: V)
	where
		K: Into<String>,
		GeoValue: From<V>,
	{
		self.properties.insert(key, value);
	}

	/// Builder-style [`set_property`](Self::set_property).
	#[must_use]
	pub fn with_property<K, V>(mut self, key: K, value: V) -> Self
	where
		K: Into<String>,
		GeoValue: From<V>,
	{
		self.set_property(key, value);
		self
	}

	#[must_use]
	pub fn into_inner(self) -> (Geometry, GeoProperties) {
		(self.geometry, self.properties)
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self::new(
			Geometry::new_example(),
			GeoProperties::from(vec![
				("name", GeoValue::from("Nice")),
				("population", GeoValue::from(348085)),
				("is_nice", GeoValue::from(true)),
			]),
		)
	}
}

impl GeoObject for GeoFeature {
	fn type_name(&self) -> &'static str {
		"Feature"
	}

	fn serialize_geojson<S: Serializer>(&self, precision: Option<u8>, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(3))?;
		map.serialize_entry("type", self.type_name())?;
		map.serialize_entry("geometry", &Encoded::new(&self.geometry, precision))?;
		map.serialize_entry("properties", &self.properties)?;
		map.end()
	}
}

impl Serialize for GeoFeature {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.serialize_geojson(EncodeOptions::DEFAULT_PRECISION, serializer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn point() -> Geometry {
		Geometry::new_point(Position::new(1.0, 2.0))
	}

	#[test]
	fn type_name() {
		assert_eq!(GeoFeature::new_example().type_name(), "Feature");
	}

	#[test]
	fn encodes_point_with_name() {
		let feature = point().to_feature(GeoProperties::from(vec![("name", "x")]));
		assert_eq!(
			serde_json::to_string(&feature).unwrap(),
			r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1.000000,2.000000]},"properties":{"name":"x"}}"#
		);
	}

	#[test]
	fn empty_properties_encode_as_object() {
		let feature = GeoFeature::new(point(), GeoProperties::default());
		assert_eq!(
			serde_json::to_string(&feature).unwrap(),
			r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1.000000,2.000000]},"properties":{}}"#
		);
	}

	#[test]
	fn has_exactly_three_members() {
		let value = serde_json::to_value(GeoFeature::new_example()).unwrap();
		let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
		assert_eq!(keys.len(), 3);
		for key in ["type", "geometry", "properties"] {
			assert!(value.get(key).is_some(), "missing {key}");
		}
		assert_eq!(value["geometry"]["type"], "MultiPolygon");
		assert_eq!(value["properties"]["population"], 348085);
	}

	#[test]
	fn set_property_and_with_property() {
		let mut feature = GeoFeature::new(point(), GeoProperties::new()).with_property("a", 1);
		feature.set_property("b", "two");
		feature.set_property("a", 3);
		assert_eq!(
			serde_json::to_string(feature.properties()).unwrap(),
			r#"{"a":3,"b":"two"}"#
		);
	}

	#[test]
	fn set_properties_replaces_all() {
		let mut feature = GeoFeature::new_example();
		feature.set_properties(GeoProperties::from(vec![("only", "one")]));
		assert_eq!(feature.properties().len(), 1);
	}

	#[test]
	fn into_inner() {
		let (geometry, properties) = GeoFeature::new_example().into_inner();
		assert_eq!(geometry, Geometry::new_example());
		assert_eq!(properties.get("name"), Some(&GeoValue::from("Nice")));
	}

	#[test]
	fn non_finite_property_fails() {
		let feature = GeoFeature::new(point(), GeoProperties::new().with("bad", f64::NAN));
		assert!(serde_json::to_string(&feature).is_err());
	}
}
