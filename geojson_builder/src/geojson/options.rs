/// Settings for turning GeoJSON objects into text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
	/// Number of decimals written for every coordinate, in fixed-point notation.
	/// `None` writes the shortest representation that reads back to the same `f64`.
	pub precision: Option<u8>,
	/// Indent the output over multiple lines.
	pub pretty: bool,
}

impl EncodeOptions {
	pub const DEFAULT_PRECISION: Option<u8> = Some(6);

	#[must_use]
	pub fn new() -> Self {
		Self {
			precision: Self::DEFAULT_PRECISION,
			pretty: false,
		}
	}

	#[must_use]
	pub fn with_precision(mut self, precision: Option<u8>) -> Self {
		self.precision = precision;
		self
	}

	#[must_use]
	pub fn with_pretty(mut self, pretty: bool) -> Self {
		self.pretty = pretty;
		self
	}
}

impl Default for EncodeOptions {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let options = EncodeOptions::default();
		assert_eq!(options.precision, Some(6));
		assert!(!options.pretty);
	}

	#[test]
	fn builder() {
		let options = EncodeOptions::new().with_precision(None).with_pretty(true);
		assert_eq!(
			options,
			EncodeOptions {
				precision: None,
				pretty: true
			}
		);
	}
}
