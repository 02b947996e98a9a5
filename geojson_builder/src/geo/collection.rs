use super::{GeoFeature, GeoObject};
use crate::geojson::EncodedSeq;
use crate::{EncodeOptions, Result};
use serde::{Serialize, Serializer, ser::SerializeMap};

/// A GeoJSON feature collection (RFC 7946 §3.3).
///
/// Growing the collection with [`with`](Self::with) consumes it, so a collection that
/// was handed out earlier can never observe later appends. Clone first to keep both.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	features: Vec<GeoFeature>,
}

impl GeoCollection {
	#[must_use]
	pub fn new(features: impl IntoIterator<Item = GeoFeature>) -> Self {
		Self {
			features: features.into_iter().collect(),
		}
	}

	/// Returns the collection extended by `features`, appended in order.
	#[must_use]
	pub fn with(mut self, features: impl IntoIterator<Item = GeoFeature>) -> Self {
		self.features.extend(features);
		self
	}

	#[must_use]
	pub fn features(&self) -> &[GeoFeature] {
		&self.features
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.features.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	#[must_use]
	pub fn iter(&self) -> std::slice::Iter<'_, GeoFeature> {
		self.features.iter()
	}
}

impl FromIterator<GeoFeature> for GeoCollection {
	fn from_iter<T: IntoIterator<Item = GeoFeature>>(iter: T) -> Self {
		Self::new(iter)
	}
}

impl IntoIterator for GeoCollection {
	type Item = GeoFeature;
	type IntoIter = std::vec::IntoIter<GeoFeature>;

	fn into_iter(self) -> Self::IntoIter {
		self.features.into_iter()
	}
}

impl<'a> IntoIterator for &'a GeoCollection {
	type Item = &'a GeoFeature;
	type IntoIter = std::slice::Iter<'a, GeoFeature>;

	fn into_iter(self) -> Self::IntoIter {
		self.features.iter()
	}
}

impl GeoObject for GeoCollection {
	fn type_name(&self) -> &'static str {
		"FeatureCollection"
	}

	fn serialize_geojson<S: Serializer>(&self, precision: Option<u8>, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(2))?;
		map.serialize_entry("type", self.type_name())?;
		map.serialize_entry("features", &EncodedSeq::new(&self.features, precision))?;
		map.end()
	}
}

impl Serialize for GeoCollection {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.serialize_geojson(EncodeOptions::DEFAULT_PRECISION, serializer)
	}
}
