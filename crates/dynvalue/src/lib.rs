//! # dynvalue
//!
//! A dynamically-typed, JSON-like value together with strict and coercing accessors
//! for bridging it to statically-typed Rust data.
//!
//! ```rust
//! use dynvalue::{value, Value};
//!
//! let mut config = value!({"retries": 3, "ratio": 0.5, "tags": ["a", "b"]});
//!
//! assert_eq!(config.get_key::<i64>("retries").unwrap(), 3);
//! // `int` never satisfies a strict `f64` request
//! assert!(config.get_key::<f64>("retries").is_err());
//! // but it can be coerced on request
//! assert_eq!(config["retries"].as_double(true).unwrap(), 3.0);
//!
//! config.set_member("ratio", None);
//! assert!(config.member("ratio").is_none());
//! ```
mod access;
mod convert;
mod display;
mod error;
mod from;
mod impls;
mod kind;
mod macros;
mod path;
mod value;

pub use access::FromValue;
pub use display::RenderOptions;
pub use error::{Error, Result};
pub use impls::serde::{from_value, to_value, MappingError};
pub use kind::ValueKind;
pub use path::PathSegment;
pub use value::{Map, Value};
