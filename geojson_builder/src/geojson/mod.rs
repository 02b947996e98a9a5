//! This module turns the object model into GeoJSON text.
//!
//! [`to_text`] covers the common case. [`to_text_with`] and [`to_writer`] take
//! [`EncodeOptions`] to change coordinate precision or to pretty-print.

mod coords;
mod options;
mod write;

pub(crate) use coords::*;
pub use options::*;
pub use write::*;
