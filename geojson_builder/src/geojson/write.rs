use super::{EncodeOptions, Encoded};
use crate::{GeoObject, Result};
use std::io::Write;

/// Converts a GeoJSON object into GeoJSON text, with the default [`EncodeOptions`].
///
/// ```
/// use geojson_builder::{GeoProperties, Geometry, Position, to_text};
///
/// let feature = Geometry::new_point(Position::new(1.0, 2.0)).to_feature(GeoProperties::from(vec![("name", "x")]));
/// assert_eq!(
/// 	to_text(&feature).unwrap(),
/// 	r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1.000000,2.000000]},"properties":{"name":"x"}}"#
/// );
/// ```
pub fn to_text<T: GeoObject>(object: &T) -> Result<String> {
	to_text_with(object, &EncodeOptions::default())
}

/// Converts a GeoJSON object into GeoJSON text.
///
/// Either the whole text is returned or an error, never a partial document.
pub fn to_text_with<T: GeoObject>(object: &T, options: &EncodeOptions) -> Result<String> {
	log::trace!("encoding {} with {options:?}", object.type_name());
	let encoded = Encoded::new(object, options.precision);
	let text = if options.pretty {
		serde_json::to_string_pretty(&encoded)?
	} else {
		serde_json::to_string(&encoded)?
	};
	Ok(text)
}

/// Writes a GeoJSON object as text into `writer`.
///
/// The document is encoded completely before the first byte reaches `writer`, so a
/// failed encoding leaves the writer untouched.
pub fn to_writer<W: Write, T: GeoObject>(mut writer: W, object: &T, options: &EncodeOptions) -> Result<()> {
	log::trace!("writing {} with {options:?}", object.type_name());
	let encoded = Encoded::new(object, options.precision);
	let buffer = if options.pretty {
		serde_json::to_vec_pretty(&encoded)?
	} else {
		serde_json::to_vec(&encoded)?
	};
	writer.write_all(&buffer).map_err(serde_json::Error::io)?;
	Ok(())
}
