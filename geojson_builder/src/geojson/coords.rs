//! Serialization of coordinate arrays and of nested GeoJSON objects.
//!
//! serde's `Serialize` carries no context, so the coordinate precision travels
//! through the thin wrappers [`Coords`] and [`Encoded`].

use crate::{GeoObject, LineStringCoordinates, LinearRing, PolygonCoordinates, Position};
use serde::{
	Serialize, Serializer,
	ser::{Error, SerializeSeq, SerializeTuple},
};
use serde_json::value::RawValue;

/// A value whose JSON form is a (possibly nested) array of positions.
pub(crate) trait CoordinateTree {
	fn serialize_coords<S: Serializer>(&self, precision: Option<u8>, serializer: S) -> Result<S::Ok, S::Error>;
}

/// Renders `value` in fixed-point notation as a raw JSON number token.
fn fixed_point(value: f64, precision: u8) -> Result<Box<RawValue>, serde_json::Error> {
	RawValue::from_string(format!("{value:.prec$}", prec = usize::from(precision)))
}

impl CoordinateTree for Position {
	fn serialize_coords<S: Serializer>(&self, precision: Option<u8>, serializer: S) -> Result<S::Ok, S::Error> {
		if !self.is_finite() {
			return Err(S::Error::custom(format!("position {self:?} is not finite")));
		}
		let mut tuple = serializer.serialize_tuple(2)?;
		match precision {
			Some(precision) => {
				tuple.serialize_element(&fixed_point(self.longitude(), precision).map_err(S::Error::custom)?)?;
				tuple.serialize_element(&fixed_point(self.latitude(), precision).map_err(S::Error::custom)?)?;
			}
			None => {
				tuple.serialize_element(&self.longitude())?;
				tuple.serialize_element(&self.latitude())?;
			}
		}
		tuple.end()
	}
}

impl<T: CoordinateTree> CoordinateTree for [T] {
	fn serialize_coords<S: Serializer>(&self, precision: Option<u8>, serializer: S) -> Result<S::Ok, S::Error> {
		let mut seq = serializer.serialize_seq(Some(self.len()))?;
		for item in self {
			seq.serialize_element(&Coords::new(item, precision))?;
		}
		seq.end()
	}
}

impl<T: CoordinateTree> CoordinateTree for Vec<T> {
	fn serialize_coords<S: Serializer>(&self, precision: Option<u8>, serializer: S) -> Result<S::Ok, S::Error> {
		self.as_slice().serialize_coords(precision, serializer)
	}
}

impl CoordinateTree for LineStringCoordinates {
	fn serialize_coords<S: Serializer>(&self, precision: Option<u8>, serializer: S) -> Result<S::Ok, S::Error> {
		self.as_slice().serialize_coords(precision, serializer)
	}
}

impl CoordinateTree for LinearRing {
	fn serialize_coords<S: Serializer>(&self, precision: Option<u8>, serializer: S) -> Result<S::Ok, S::Error> {
		self.as_slice().serialize_coords(precision, serializer)
	}
}

impl CoordinateTree for PolygonCoordinates {
	fn serialize_coords<S: Serializer>(&self, precision: Option<u8>, serializer: S) -> Result<S::Ok, S::Error> {
		self.as_slice().serialize_coords(precision, serializer)
	}
}

/// Borrows a coordinate tree together with the precision to write it with.
pub(crate) struct Coords<'a, T: ?Sized> {
	value: &'a T,
	precision: Option<u8>,
}

impl<'a, T: ?Sized> Coords<'a, T> {
	pub(crate) fn new(value: &'a T, precision: Option<u8>) -> Self {
		Self { value, precision }
	}
}

impl<T: CoordinateTree + ?Sized> Serialize for Coords<'_, T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.value.serialize_coords(self.precision, serializer)
	}
}

/// Borrows a GeoJSON object together with the precision to write its coordinates with.
pub(crate) struct Encoded<'a, T> {
	value: &'a T,
	precision: Option<u8>,
}

impl<'a, T: GeoObject> Encoded<'a, T> {
	pub(crate) fn new(value: &'a T, precision: Option<u8>) -> Self {
		Self { value, precision }
	}
}

impl<T: GeoObject> Serialize for Encoded<'_, T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.value.serialize_geojson(self.precision, serializer)
	}
}

/// A JSON array of GeoJSON objects, such as `geometries` or `features`.
pub(crate) struct EncodedSeq<'a, T> {
	values: &'a [T],
	precision: Option<u8>,
}

impl<'a, T: GeoObject> EncodedSeq<'a, T> {
	pub(crate) fn new(values: &'a [T], precision: Option<u8>) -> Self {
		Self { values, precision }
	}
}

impl<T: GeoObject> Serialize for EncodedSeq<'_, T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut seq = serializer.serialize_seq(Some(self.values.len()))?;
		for value in self.values {
			seq.serialize_element(&Encoded::new(value, self.precision))?;
		}
		seq.end()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use rstest::rstest;

	fn to_string<T: CoordinateTree + ?Sized>(value: &T, precision: Option<u8>) -> String {
		serde_json::to_string(&Coords::new(value, precision)).unwrap()
	}

	#[rstest]
	#[case(Some(6), "[1.000000,2.000000]")]
	#[case(Some(2), "[1.00,2.00]")]
	#[case(Some(0), "[1,2]")]
	#[case(None, "[1.0,2.0]")]
	fn position_precision(#[case] precision: Option<u8>, #[case] expected: &str) {
		assert_eq!(to_string(&Position::new(1.0, 2.0), precision), expected);
	}

	#[rstest]
	#[case(Some(6), "[-0.123457,52.520008]")]
	#[case(Some(3), "[-0.123,52.520]")]
	#[case(None, "[-0.1234567,52.520008]")]
	fn position_rounding(#[case] precision: Option<u8>, #[case] expected: &str) {
		assert_eq!(to_string(&Position::new(-0.1234567, 52.520008), precision), expected);
	}

	#[test]
	fn position_never_uses_exponent() {
		assert_eq!(to_string(&Position::new(1e-7, 1e7), Some(6)), "[0.000000,10000000.000000]");
	}

	#[rstest]
	#[case(Some(6))]
	#[case(None)]
	fn position_round_trips(#[case] precision: Option<u8>) {
		for (x, y) in [(13.404954, 52.520008), (-179.999999, -89.5), (0.0, 0.0), (123.456789, -0.000001)] {
			let text = to_string(&Position::new(x, y), precision);
			let parsed: Vec<f64> = serde_json::from_str(&text).unwrap();
			assert_eq!(parsed.len(), 2);
			assert_relative_eq!(parsed[0], x, epsilon = 1e-6);
			assert_relative_eq!(parsed[1], y, epsilon = 1e-6);
		}
	}

	#[rstest]
	#[case(Position::new(f64::NAN, 0.0))]
	#[case(Position::new(0.0, f64::INFINITY))]
	fn non_finite_position_fails(#[case] position: Position) {
		assert!(serde_json::to_string(&Coords::new(&position, Some(6))).is_err());
		assert!(serde_json::to_string(&Coords::new(&position, None)).is_err());
	}

	#[test]
	fn nesting_depths() {
		let p = |x: f64, y: f64| Position::new(x, y);
		let line = LineStringCoordinates::new(p(0.0, 0.0), p(1.0, 1.0), []);
		assert_eq!(to_string(&line, Some(0)), "[[0,0],[1,1]]");

		let ring = LinearRing::new(p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 0.0), []).unwrap();
		let polygon = PolygonCoordinates::new(ring, []);
		assert_eq!(to_string(&polygon, Some(0)), "[[[0,0],[1,0],[1,1],[0,0]]]");
		assert_eq!(
			to_string(&vec![polygon.clone(), polygon], Some(0)),
			"[[[[0,0],[1,0],[1,1],[0,0]]],[[[0,0],[1,0],[1,1],[0,0]]]]"
		);
	}

	#[test]
	fn empty_sequence() {
		assert_eq!(to_string(&Vec::<Position>::new(), Some(6)), "[]");
	}
}
