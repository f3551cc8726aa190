///
/// FieldCardinality
///
/// Declared shape of a field: required, optional, or many.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldCardinality {
    One,
    Opt,
    Many,
}

impl FieldCardinality {
    #[must_use]
    pub const fn is_many(self) -> bool {
        matches!(self, Self::Many)
    }
}

///
/// FieldMeta
///
/// One named, readable field of an entity type. Instances are emitted by
/// the derive as `'static` tables in declared order; names are unique
/// within their declaring type.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldMeta {
    pub name: &'static str,

    pub cardinality: FieldCardinality,

    /// Whether the declared type iterates (lists and text, with `Option`
    /// peeled first). Such fields cannot be stepped *through* by a
    /// property path, only read as a whole.
    pub sequence: bool,
}

impl FieldMeta {
    #[must_use]
    pub const fn new(name: &'static str, cardinality: FieldCardinality, sequence: bool) -> Self {
        Self {
            name,
            cardinality,
            sequence,
        }
    }
}
