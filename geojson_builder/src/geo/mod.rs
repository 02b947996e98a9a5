mod collection;
mod feature;
mod geometry;
mod object;
mod properties;
mod types;
mod value;

pub use collection::*;
pub use feature::*;
pub use geometry::*;
pub use object::*;
pub use properties::*;
pub use types::*;
pub use value::*;
