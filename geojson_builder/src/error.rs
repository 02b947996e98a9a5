use crate::Position;
use thiserror::Error;

/// Errors raised while assembling coordinates or encoding GeoJSON text.
#[derive(Debug, Error)]
pub enum GeoJsonError {
	/// A linear ring whose last position differs from its first one.
	#[error("linear ring is not closed: start position {first:?} doesn't match end position {last:?}")]
	InvalidRing { first: Position, last: Position },

	/// An unchecked sequence was too short for the coordinate type it should become.
	#[error("{kind} needs at least {minimum} elements, got {actual}")]
	TooFewPositions {
		kind: &'static str,
		minimum: usize,
		actual: usize,
	},

	/// The JSON serializer rejected a value, or the output writer failed.
	#[error("failed to encode GeoJSON: {0}")]
	EncodingFailed(#[from] serde_json::Error),
}

pub type Result<T, E = GeoJsonError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_ring_message_names_both_ends() {
		let error = GeoJsonError::InvalidRing {
			first: Position::new(0.0, 0.0),
			last: Position::new(1.0, 0.0),
		};
		assert_eq!(
			error.to_string(),
			"linear ring is not closed: start position [0.0, 0.0] doesn't match end position [1.0, 0.0]"
		);
	}

	#[test]
	fn too_few_positions_message() {
		let error = GeoJsonError::TooFewPositions {
			kind: "LineString",
			minimum: 2,
			actual: 1,
		};
		assert_eq!(error.to_string(), "LineString needs at least 2 elements, got 1");
	}

	#[test]
	fn encoding_failed_wraps_serde_json() {
		let inner = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
		let error = GeoJsonError::from(inner);
		assert!(matches!(error, GeoJsonError::EncodingFailed(_)));
		assert!(error.to_string().starts_with("failed to encode GeoJSON: "));
	}
}
