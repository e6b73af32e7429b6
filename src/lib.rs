//! Builds HAL and HAL-FORMS hypermedia documents and flattens them into
//! their canonical, ordered JSON shape.
//!
//! ```
//! use hal_core::{Encoder, JsonEncoder, Resource};
//!
//! let resource = Resource::new()
//!     .with_property("id", 42)
//!     .with_self_link("/items/42");
//!
//! let bytes = JsonEncoder::new().encode(&resource).unwrap();
//! assert_eq!(bytes, br#"{"id":42,"_links":{"self":{"href":"/items/42"}}}"#);
//! ```

pub mod constants;
pub mod encoder;
pub mod error;
pub mod forms;
pub mod link;
pub mod relation;
pub mod resource;
mod serialization;
mod utils;

pub use encoder::{Encoder, Hypermedia, JsonEncoder, YamlEncoder};
pub use error::{ArgumentError, EncodingError, HalError};
pub use forms::{Document, OptionValue, Options, Property, Template};
pub use link::LinkObject;
pub use relation::LinkRelation;
pub use resource::Resource;
