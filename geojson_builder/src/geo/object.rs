use crate::{EncodeOptions, Result};
use serde::{Serialize, Serializer};

/// A top-level GeoJSON object: any [`Geometry`](crate::Geometry), a
/// [`GeoFeature`](crate::GeoFeature) or a [`GeoCollection`](crate::GeoCollection).
///
/// The `Serialize` implementation of every object writes coordinates with
/// [`EncodeOptions::DEFAULT_PRECISION`].
pub trait GeoObject: Serialize {
	/// The value of the `type` member, as listed in RFC 7946 §1.4.
	fn type_name(&self) -> &'static str;

	/// Writes the object, including its `type` member, with coordinates rounded to `precision`.
	fn serialize_geojson<S: Serializer>(&self, precision: Option<u8>, serializer: S) -> Result<S::Ok, S::Error>;

	/// Shorthand for [`to_text`](crate::to_text).
	fn to_text(&self) -> Result<String>
	where
		Self: Sized,
	{
		crate::to_text(self)
	}

	/// Shorthand for [`to_text_with`](crate::to_text_with).
	fn to_text_with(&self, options: &EncodeOptions) -> Result<String>
	where
		Self: Sized,
	{
		crate::to_text_with(self, options)
	}
}
