//! mirra — derive-based object-graph reflection.
//!
//! ## Crate layout
//! - `mirra-core`: value model, introspection traits, traversal driver,
//!   dotted-path resolution, grouped-name reporting.
//! - `mirra-derive`: the `#[derive(Entity)]` macro implementing the
//!   introspection traits for structs with named fields.
//!
//! The `prelude` module mirrors the surface most callers want: the derive,
//! the traits, and the three entry points (`walk`, `property_names`,
//! `get_value`/`get_value_as`).

pub use mirra_core::{error, field, names, path, traits, types, value, view, visitor};
pub use mirra_derive::Entity;

pub use mirra_core::error::ReflectError;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use mirra_core::{
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
    pub use mirra_derive::Entity;
}
