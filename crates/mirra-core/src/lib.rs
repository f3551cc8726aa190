//! Reflection core for mirra: the value model, the introspection traits the
//! derive implements, the depth-first traversal driver, and dotted-path
//! resolution.
//!
//! Entry points are stateless free functions over borrowed data; the crate
//! performs no I/O, no locking, and no logging.

extern crate self as mirra;

pub mod error;
pub mod field;
pub mod names;
pub mod path;
pub mod traits;
pub mod types;
pub mod value;
pub mod view;
pub mod visitor;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Domain vocabulary only; helpers stay behind their modules.
///

pub mod prelude {
    pub use crate::{
        error::ReflectError,
        field::{FieldCardinality, FieldMeta},
        names::property_names,
        path::{get_value, get_value_as},
        traits::{Entity, FieldValue, Node, TypeLabel, TypeName},
        types::{Date, Timestamp},
        value::Value,
        view::FieldView,
        visitor::{VisitRecord, Visitor, walk},
    };
}
