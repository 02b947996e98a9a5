//! Builds GeoJSON objects (RFC 7946) in code and writes them as GeoJSON text.
//!
//! Coordinate arrays are validated when they are assembled: line strings need two
//! positions, linear rings need four and must be closed, polygons need an outer
//! boundary. Geometries are wrapped into features and feature collections and
//! rendered with [`to_text`].
//!
//! ```
//! use geojson_builder::{GeoCollection, GeoObject, GeoProperties, Geometry, LinearRing, Position};
//!
//! let p = Position::new;
//! let ring = LinearRing::new(p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0), [p(0.0, 0.0)])?;
//! let collection = GeoCollection::default().with([
//! 	Geometry::new_polygon(ring, []).to_feature(GeoProperties::new().with("name", "square")),
//! ]);
//! assert!(collection.to_text()?.starts_with(r#"{"type":"FeatureCollection","features":[{"type":"Feature""#));
//! # Ok::<(), geojson_builder::GeoJsonError>(())
//! ```

mod error;
mod geo;
pub mod geojson;

pub use error::*;
pub use self::geo::*;
pub use geojson::*;
