// The coordinate building blocks of every geometry: `Position`, and the validated
// arrays built from it (`LineStringCoordinates`, `LinearRing`, `PolygonCoordinates`).
// Minimum lengths are enforced by constructor arity, ring closure by a runtime check.

mod linestring;
mod macros;
mod polygon;
mod position;
mod ring;

pub use linestring::*;
pub use polygon::*;
pub use position::*;
pub use ring::*;
