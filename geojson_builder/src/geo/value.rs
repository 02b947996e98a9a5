use super::GeoProperties;
use serde::{Serialize, Serializer, ser::Error};
use std::fmt::Debug;

/// A JSON value stored in feature properties.
#[derive(Clone, PartialEq)]
pub enum GeoValue {
	Array(Vec<GeoValue>),
	Bool(bool),
	Double(f64),
	Int(i64),
	Null,
	Object(GeoProperties),
	String(String),
	UInt(u64),
}

impl Debug for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Array(v) => f.debug_tuple("Array").field(v).finish(),
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::Null => f.debug_tuple("Null").finish(),
			Self::Object(v) => f.debug_tuple("Object").field(v).finish(),
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
		}
	}
}

impl Serialize for GeoValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			GeoValue::Array(v) => v.serialize(serializer),
			GeoValue::Bool(v) => serializer.serialize_bool(*v),
			GeoValue::Double(v) if v.is_finite() => serializer.serialize_f64(*v),
			GeoValue::Double(v) => Err(S::Error::custom(format!("unsupported property value: {v}"))),
			GeoValue::Int(v) => serializer.serialize_i64(*v),
			GeoValue::Null => serializer.serialize_unit(),
			GeoValue::Object(v) => v.serialize(serializer),
			GeoValue::String(v) => serializer.serialize_str(v),
			GeoValue::UInt(v) => serializer.serialize_u64(*v),
		}
	}
}

impl From<&str> for GeoValue {
	fn from(value: &str) -> Self {
		GeoValue::String(value.to_string())
	}
}

impl From<&String> for GeoValue {
	fn from(value: &String) -> Self {
		GeoValue::String(value.clone())
	}
}

impl From<String> for GeoValue {
	fn from(value: String) -> Self {
		GeoValue::String(value)
	}
}

impl From<u8> for GeoValue {
	fn from(value: u8) -> Self {
		GeoValue::UInt(u64::from(value))
	}
}

impl From<i32> for GeoValue {
	fn from(value: i32) -> Self {
		if value < 0 {
			GeoValue::Int(i64::from(value))
		} else {
			GeoValue::UInt(value as u64)
		}
	}
}

impl From<u32> for GeoValue {
	fn from(value: u32) -> Self {
		GeoValue::UInt(u64::from(value))
	}
}

impl From<i64> for GeoValue {
	fn from(value: i64) -> Self {
		GeoValue::Int(value)
	}
}

impl From<u64> for GeoValue {
	fn from(value: u64) -> Self {
		GeoValue::UInt(value)
	}
}

impl From<f32> for GeoValue {
	fn from(value: f32) -> Self {
		GeoValue::Double(f64::from(value))
	}
}

impl From<f64> for GeoValue {
	fn from(value: f64) -> Self {
		GeoValue::Double(value)
	}
}

impl From<bool> for GeoValue {
	fn from(value: bool) -> Self {
		GeoValue::Bool(value)
	}
}

impl From<GeoProperties> for GeoValue {
	fn from(value: GeoProperties) -> Self {
		GeoValue::Object(value)
	}
}

impl<T> From<Vec<T>> for GeoValue
where
	GeoValue: From<T>,
{
	fn from(value: Vec<T>) -> Self {
		GeoValue::Array(value.into_iter().map(GeoValue::from).collect())
	}
}

impl<T> From<Option<T>> for GeoValue
where
	GeoValue: From<T>,
{
	fn from(value: Option<T>) -> Self {
		value.map_or(GeoValue::Null, GeoValue::from)
	}
}

impl From<serde_json::Value> for GeoValue {
	fn from(value: serde_json::Value) -> Self {
		use serde_json::Value;
		match value {
			Value::Null => GeoValue::Null,
			Value::Bool(b) => GeoValue::Bool(b),
			Value::Number(n) => {
				if let Some(v) = n.as_u64() {
					GeoValue::UInt(v)
				} else if let Some(v) = n.as_i64() {
					GeoValue::Int(v)
				} else {
					GeoValue::Double(n.as_f64().unwrap_or(f64::NAN))
				}
			}
			Value::String(s) => GeoValue::String(s),
			Value::Array(a) => GeoValue::Array(a.into_iter().map(GeoValue::from).collect()),
			Value::Object(o) => GeoValue::Object(o.into_iter().map(|(k, v)| (k, GeoValue::from(v))).collect()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(GeoValue::from("a"), "\"a\"")]
	#[case(GeoValue::from(true), "true")]
	#[case(GeoValue::from(1.5), "1.5")]
	#[case(GeoValue::from(-3), "-3")]
	#[case(GeoValue::from(42u64), "42")]
	#[case(GeoValue::Null, "null")]
	#[case(GeoValue::from(vec![1, 2]), "[1,2]")]
	#[case(GeoValue::from(None::<bool>), "null")]
	#[case(GeoValue::from(GeoProperties::from(vec![("k", "v")])), "{\"k\":\"v\"}")]
	fn serialize(#[case] value: GeoValue, #[case] expected: &str) {
		assert_eq!(serde_json::to_string(&value).unwrap(), expected);
	}

	#[rstest]
	#[case(f64::NAN)]
	#[case(f64::INFINITY)]
	#[case(f64::NEG_INFINITY)]
	fn serialize_non_finite_fails(#[case] v: f64) {
		assert!(serde_json::to_string(&GeoValue::from(v)).is_err());
	}

	#[test]
	fn from_signed_integers() {
		assert_eq!(GeoValue::from(5), GeoValue::UInt(5));
		assert_eq!(GeoValue::from(-5), GeoValue::Int(-5));
		assert_eq!(GeoValue::from(7u8), GeoValue::UInt(7));
	}

	#[test]
	fn from_serde_json_value() {
		let value = GeoValue::from(json!({"a": [1, -2, 0.5, null], "b": {"c": "d"}, "e": false}));
		let GeoValue::Object(obj) = value else {
			panic!("expected object");
		};
		assert_eq!(
			obj.get("a"),
			Some(&GeoValue::Array(vec![
				GeoValue::UInt(1),
				GeoValue::Int(-2),
				GeoValue::Double(0.5),
				GeoValue::Null
			]))
		);
		assert_eq!(obj.get("b"), Some(&GeoValue::Object(GeoProperties::from(vec![("c", "d")]))));
		assert_eq!(obj.get("e"), Some(&GeoValue::Bool(false)));
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", GeoValue::from("x")), "String(\"x\")");
		assert_eq!(format!("{:?}", GeoValue::Null), "Null");
	}
}
