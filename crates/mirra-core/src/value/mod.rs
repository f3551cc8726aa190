
use crate::types::{Date, Timestamp};
use serde::{Deserialize, Serialize};

///
/// Value
///
/// Owned leaf/list union produced when a field is read through the
/// reflection surface.
///
/// Null → the field's value is `Option::None`.
/// List → many-cardinality transport; element order is preserved.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Date(Date),
    Float32(f32),
    Float64(f64),
    Int(i64),
    Int128(i128),
    List(Vec<Self>),
    Null,
    Text(String),
    Timestamp(Timestamp),
    Uint(u64),
    Uint128(u128),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::List` from a list literal.
    ///
    /// Intended for tests and inline construction.
    /// Requires `Clone` because items are borrowed.
    pub fn from_slice<T>(items: &[T]) -> Self
    where
        T: Into<Self> + Clone,
    {
        Self::List(items.iter().cloned().map(Into::into).collect())
    }

    /// Build a `Value::List` from owned items.
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    ///
    /// TYPES
    ///

    /// Stable variant tag, used for grouping and diagnostics.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::Date(_) => "Date",
            Self::Float32(_) => "Float32",
            Self::Float64(_) => "Float64",
            Self::Int(_) => "Int",
            Self::Int128(_) => "Int128",
            Self::List(_) => "List",
            Self::Null => "Null",
            Self::Text(_) => "Text",
            Self::Timestamp(_) => "Timestamp",
            Self::Uint(_) => "Uint",
            Self::Uint128(_) => "Uint128",
        }
    }

    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::List(_))
    }

    ///
    /// CONVERSION
    ///

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&[Self]> {
        if let Self::List(xs) = self {
            Some(xs.as_slice())
        } else {
            None
        }
    }

    ///
    /// EMPTY
    ///

    /// Emptiness for the variants where it is meaningful; `None` otherwise.
    #[must_use]
    pub const fn is_empty(&self) -> Option<bool> {
        match self {
            Self::List(xs) => Some(xs.is_empty()),
            Self::Text(s) => Some(s.is_empty()),
            Self::Null => Some(true),

            _ => None,
        }
    }

    /// Logical negation of [`is_empty`](Self::is_empty).
    #[must_use]
    pub fn is_not_empty(&self) -> Option<bool> {
        self.is_empty().map(|b| !b)
    }

    ///
    /// COLLECTIONS
    ///

    fn normalize_list_ref(v: &Self) -> Vec<&Self> {
        match v {
            Self::List(vs) => vs.iter().collect(),
            v => vec![v],
        }
    }

    /// Returns true if `self` is a list containing `needle`; `None` for scalars.
    #[must_use]
    pub fn contains(&self, needle: &Self) -> Option<bool> {
        self.as_list().map(|items| items.contains(needle))
    }

    /// Returns true if any item in `needles` matches a member of `self`.
    #[must_use]
    pub fn contains_any(&self, needles: &Self) -> Option<bool> {
        let needles = Self::normalize_list_ref(needles);

        match self {
            Self::List(items) => Some(needles.iter().any(|&n| items.contains(n))),
            scalar => Some(needles.iter().any(|&n| n == scalar)),
        }
    }

    /// Returns true if every item in `needles` matches a member of `self`.
    #[must_use]
    pub fn contains_all(&self, needles: &Self) -> Option<bool> {
        let needles = Self::normalize_list_ref(needles);

        match self {
            Self::List(items) => Some(needles.iter().all(|&n| items.contains(n))),
            scalar => Some(needles.len() == 1 && *needles[0] == *scalar),
        }
    }

    /// Returns true if `self` exists inside the provided list; `None` when
    /// `haystack` is not a list.
    #[must_use]
    pub fn in_list(&self, haystack: &Self) -> Option<bool> {
        haystack.as_list().map(|items| items.contains(self))
    }
}

// impl_from_for
macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool      => Bool,
    Date      => Date,
    f32       => Float32,
    f64       => Float64,
    i8        => Int,
    i16       => Int,
    i32       => Int,
    i64       => Int,
    i128      => Int128,
    &str      => Text,
    String    => Text,
    Timestamp => Timestamp,
    u8        => Uint,
    u16       => Uint,
    u32       => Uint,
    u64       => Uint,
    u128      => Uint128,
}

impl From<Vec<Self>> for Value {
    fn from(vec: Vec<Self>) -> Self {
        Self::List(vec)
    }
}
