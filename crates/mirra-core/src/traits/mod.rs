#[macro_use]
mod macros;

use crate::{
    field::FieldMeta,
    types::{Date, Timestamp},
    value::Value,
    view::FieldView,
};
use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};

///
/// TypeLabel
///
/// Human-readable runtime type key used to group visits: `Manifest`,
/// `Container<Manifest>`. Generic labels join the simple names of the base
/// type and each type argument with commas, no spaces.
///

#[derive(
    Clone, Debug, Deref, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[display("{_0}")]
pub struct TypeLabel(String);

impl TypeLabel {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn generic(base: &str, args: &[&str]) -> Self {
        Self(format!("{base}<{}>", args.join(",")))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

///
/// TypeName
///
/// Compile-time naming surface; the derive builds generic labels out of the
/// type arguments' simple names.
///

pub trait TypeName {
    /// Unqualified type name, without generic arguments.
    fn simple_name() -> &'static str;

    /// Full label, including generic arguments.
    fn type_label() -> TypeLabel {
        TypeLabel::new(Self::simple_name())
    }
}

///
/// Node
///
/// How a value appears when read through a field: absent, an atomic leaf,
/// a sequence of further nodes, or a nested entity. Implemented by the leaf
/// closed set here and by every `#[derive(Entity)]` type.
///

pub trait Node {
    fn view(&self) -> FieldView<'_>;
}

///
/// Entity
///
/// Object-safe introspection surface generated by `#[derive(Entity)]`:
/// declared-order field descriptors plus by-name and by-index readers.
///

pub trait Entity {
    /// Runtime label for grouping and diagnostics.
    fn type_label(&self) -> TypeLabel;

    /// Declared-order field descriptors.
    fn fields(&self) -> &'static [FieldMeta];

    /// Read the field at `index` in declared order.
    fn field_at(&self, index: usize) -> Option<FieldView<'_>>;

    /// Read the named field.
    fn field(&self, name: &str) -> Option<FieldView<'_>>;

    /// Descriptor lookup by name.
    fn field_meta(&self, name: &str) -> Option<&'static FieldMeta> {
        self.fields().iter().find(|f| f.name == name)
    }
}

///
/// FieldValue
///
/// Explicit conversion contract between field types and [`Value`]; the
/// typed path getter resolves through this rather than any dynamic cast.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;

    #[must_use]
    fn from_value(value: &Value) -> Option<Self>
    where
        Self: Sized;
}

impl_leaf! {
    bool      => Bool,
    Date      => Date,
    f32       => Float32,
    f64       => Float64,
    i8        => Int,
    i16       => Int,
    i32       => Int,
    i64       => Int,
    i128      => Int128,
    Timestamp => Timestamp,
    u8        => Uint,
    u16       => Uint,
    u32       => Uint,
    u64       => Uint,
    u128      => Uint128,
}

// Text leaves are implemented by hand: `String` is not `Copy`, and `&str`
// cannot be produced from an owned value.

impl Node for String {
    fn view(&self) -> FieldView<'_> {
        FieldView::Leaf(Value::Text(self.clone()))
    }
}

impl TypeName for String {
    fn simple_name() -> &'static str {
        "String"
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl Node for &str {
    fn view(&self) -> FieldView<'_> {
        FieldView::Leaf(Value::Text((*self).to_string()))
    }
}

impl TypeName for &str {
    fn simple_name() -> &'static str {
        "str"
    }
}

impl FieldValue for &str {
    fn to_value(&self) -> Value {
        Value::Text((*self).to_string())
    }

    fn from_value(_value: &Value) -> Option<Self> {
        None
    }
}

impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

// Containers: `Option` unwraps before leaf classification, sequences
// project element-by-element, boxes are transparent.

impl<T: Node> Node for Option<T> {
    fn view(&self) -> FieldView<'_> {
        match self {
            Some(inner) => inner.view(),
            None => FieldView::Null,
        }
    }
}

impl<T: Node> Node for Vec<T> {
    fn view(&self) -> FieldView<'_> {
        FieldView::List(self.iter().map(Node::view).collect())
    }
}

impl<T: Node> Node for Box<T> {
    fn view(&self) -> FieldView<'_> {
        (**self).view()
    }
}

impl<T> TypeName for Option<T> {
    fn simple_name() -> &'static str {
        "Option"
    }
}

impl<T> TypeName for Vec<T> {
    fn simple_name() -> &'static str {
        "Vec"
    }
}

impl<T> TypeName for Box<T> {
    fn simple_name() -> &'static str {
        "Box"
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        if matches!(value, Value::Null) {
            return Some(None);
        }

        T::from_value(value).map(Some)
    }
}

impl<T: FieldValue> FieldValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn from_value(value: &Value) -> Option<Self> {
        T::from_value(value).map(Self::new)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        let Value::List(items) = value else {
            return None;
        };

        let mut out = Self::with_capacity(items.len());
        for item in items {
            out.push(T::from_value(item)?);
        }

        Some(out)
    }
}
