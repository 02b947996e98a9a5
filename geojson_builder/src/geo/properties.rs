use super::GeoValue;
use serde::{Serialize, Serializer, ser::SerializeMap};
use std::fmt::Debug;

/// The `properties` member of a feature: string keys mapped to JSON values.
///
/// Keys keep their insertion order, so encoding is deterministic. Inserting an
/// existing key replaces the value at its original position.
#[derive(Clone, Default, PartialEq)]
pub struct GeoProperties {
	entries: Vec<(String, GeoValue)>,
}

impl GeoProperties {
	#[must_use]
	pub fn new() -> GeoProperties {
		GeoProperties { entries: Vec::new() }
	}

	pub fn insert<K, V>(&mut self, key: K, value: V)
	where
		K: Into<String>,
		GeoValue: From<V>,
	{
		let key = key.into();
		let value = GeoValue::from(value);
		match self.entries.iter_mut().find(|(k, _)| *k == key) {
			Some(entry) => entry.1 = value,
			None => self.entries.push((key, value)),
		}
	}

	/// Builder-style [`insert`](Self::insert).
	#[must_use]
	pub fn with<K, V>(mut self, key: K, value: V) -> Self
	where
		K: Into<String>,
		GeoValue: From<V>,
	{
		self.insert(key, value);
		self
	}

	pub fn update(&mut self, new_properties: &GeoProperties) {
		for (k, v) in new_properties.iter() {
			self.insert(k.as_str(), v.clone());
		}
	}

	pub fn remove(&mut self, key: &str) -> Option<GeoValue> {
		let index = self.entries.iter().position(|(k, _)| k == key)?;
		Some(self.entries.remove(index).1)
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&GeoValue> {
		self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &GeoValue)> {
		self.entries.iter().map(|(k, v)| (k, v))
	}
}

impl IntoIterator for GeoProperties {
	type Item = (String, GeoValue);
	type IntoIter = std::vec::IntoIter<(String, GeoValue)>;
	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl From<Vec<(&str, GeoValue)>> for GeoProperties {
	fn from(value: Vec<(&str, GeoValue)>) -> Self {
		value.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
	}
}

impl From<Vec<(&str, &str)>> for GeoProperties {
	fn from(value: Vec<(&str, &str)>) -> Self {
		value
			.into_iter()
			.map(|(k, v)| (k.to_string(), GeoValue::from(v)))
			.collect()
	}
}

impl FromIterator<(String, GeoValue)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, GeoValue)>>(iter: T) -> Self {
		let mut properties = GeoProperties::new();
		for (k, v) in iter {
			properties.insert(k, v);
		}
		properties
	}
}

impl Serialize for GeoProperties {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for (k, v) in &self.entries {
			map.serialize_entry(k, v)?;
		}
		map.end()
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}
