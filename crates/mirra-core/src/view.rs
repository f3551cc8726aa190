use crate::{traits::Entity, value::Value};
use std::fmt;

///
/// FieldView
///
/// The tagged projection of one field's current value, as seen by the
/// traversal driver. Borrowed views never outlive the entity they were
/// read from; `Leaf` carries an owned copy of the scalar.
///

pub enum FieldView<'a> {
    /// The field's value is absent (`Option::None`).
    Null,

    /// An atomic value; traversal never descends into it.
    Leaf(Value),

    /// A sequence; traversal descends element-by-element.
    List(Vec<FieldView<'a>>),

    /// A nested composite; traversal recurses into its fields.
    Entity(&'a dyn Entity),
}

impl<'a> FieldView<'a> {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_leaf(&self) -> Option<&Value> {
        if let Self::Leaf(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_entity(&self) -> Option<&'a dyn Entity> {
        if let Self::Entity(entity) = self {
            Some(*entity)
        } else {
            None
        }
    }

    /// Convert to an owned [`Value`].
    ///
    /// `None` when the view (or any list element) is a composite, which has
    /// no scalar representation.
    #[must_use]
    pub fn to_value(&self) -> Option<Value> {
        match self {
            Self::Null => Some(Value::Null),
            Self::Leaf(value) => Some(value.clone()),
            Self::List(items) => items
                .iter()
                .map(Self::to_value)
                .collect::<Option<Vec<_>>>()
                .map(Value::List),
            Self::Entity(_) => None,
        }
    }
}

impl fmt::Debug for FieldView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Leaf(value) => f.debug_tuple("Leaf").field(value).finish(),
            Self::List(items) => f.debug_list().entries(items).finish(),
            Self::Entity(entity) => write!(f, "Entity({})", entity.type_label()),
        }
    }
}
