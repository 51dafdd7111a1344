pub mod error;
pub mod map;
pub mod ordered_map;
pub mod util;
pub mod value;

pub use error::{Error, Result};
pub use ordered_map::{Entry, OrderedMap};
pub use value::Value;
