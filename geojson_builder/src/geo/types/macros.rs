/// Implements the unchecked `TryFrom` conversions for a coordinate array type.
///
/// The type has to provide `fn from_positions(Vec<Position>) -> Result<Self>`, which
/// enforces its invariants.
macro_rules! impl_try_from_positions {
	($($t:ty),*) => {$(
		impl<T> TryFrom<Vec<T>> for $t
		where
			$crate::Position: From<T>,
		{
			type Error = $crate::GeoJsonError;

			fn try_from(value: Vec<T>) -> $crate::Result<Self> {
				Self::from_positions(value.into_iter().map($crate::Position::from).collect())
			}
		}

		impl<'a, T> TryFrom<&'a Vec<T>> for $t
		where
			$crate::Position: From<&'a T>,
		{
			type Error = $crate::GeoJsonError;

			fn try_from(value: &'a Vec<T>) -> $crate::Result<Self> {
				Self::from_positions(value.iter().map($crate::Position::from).collect())
			}
		}

		impl<'a, T> TryFrom<&'a [T]> for $t
		where
			$crate::Position: From<&'a T>,
		{
			type Error = $crate::GeoJsonError;

			fn try_from(value: &'a [T]) -> $crate::Result<Self> {
				Self::from_positions(value.iter().map($crate::Position::from).collect())
			}
		}

		impl<'a, T, const N: usize> TryFrom<&'a [T; N]> for $t
		where
			$crate::Position: From<&'a T>,
		{
			type Error = $crate::GeoJsonError;

			fn try_from(value: &'a [T; N]) -> $crate::Result<Self> {
				Self::from_positions(value.iter().map(|v| $crate::Position::from(v)).collect())
			}
		}

		impl TryFrom<::geo::LineString<f64>> for $t {
			type Error = $crate::GeoJsonError;

			fn try_from(value: ::geo::LineString<f64>) -> $crate::Result<Self> {
				Self::from_positions(value.into_iter().map($crate::Position::from).collect())
			}
		}
	)*}
}

pub(crate) use impl_try_from_positions;
