use crate::{field::FieldMeta, traits::Entity, view::FieldView};
use std::fmt::Write;

// ============================================================================
// Path
// ============================================================================

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PathSegment {
    Field(&'static str),
    Index(usize),
}

impl From<&'static str> for PathSegment {
    fn from(s: &'static str) -> Self {
        Self::Field(s)
    }
}

impl From<usize> for PathSegment {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

pub(crate) fn render_path(path: &[PathSegment], leaf: Option<PathSegment>) -> String {
    let mut out = String::new();
    let mut first = true;

    let iter = path.iter().copied().chain(leaf);

    for seg in iter {
        match seg {
            PathSegment::Field(s) => {
                if !first {
                    out.push('.');
                }
                out.push_str(s);
            }
            PathSegment::Index(i) => {
                let _ = write!(out, "[{i}]");
            }
        }
        first = false;
    }

    out
}

// ============================================================================
// VisitRecord
// ============================================================================

///
/// VisitRecord
///
/// The (entity, field, value) triple delivered once per visited field.
/// Created per visit and not retained by the driver; callers may copy what
/// they need out of it.
///

pub struct VisitRecord<'a> {
    /// The entity whose field is being visited.
    pub entity: &'a dyn Entity,

    /// Descriptor of the visited field.
    pub field: &'static FieldMeta,

    /// The field's current value.
    pub value: FieldView<'a>,

    path: String,
}

impl VisitRecord<'_> {
    /// Dotted location of the visited field from the walk root,
    /// e.g. `crates[0].payload`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

// ============================================================================
// Visitor
// ============================================================================

pub trait Visitor {
    fn visit(&mut self, record: &VisitRecord<'_>);
}

impl<F> Visitor for F
where
    F: FnMut(&VisitRecord<'_>),
{
    fn visit(&mut self, record: &VisitRecord<'_>) {
        self(record);
    }
}

// ============================================================================
// Traversal
// ============================================================================

/// Walk `entity`'s property graph depth-first, invoking the visitor once per
/// field. A field's record is emitted before any record of its children.
/// Null and leaf values stop the descent; sequence values descend
/// element-by-element, skipping null and leaf elements.
///
/// No cycle detection is performed: a self-referential graph recurses until
/// the stack overflows.
pub fn walk(entity: &dyn Entity, visitor: &mut dyn Visitor) {
    let mut path = Vec::new();

    walk_entity(entity, visitor, &mut path);
}

fn walk_entity(entity: &dyn Entity, visitor: &mut dyn Visitor, path: &mut Vec<PathSegment>) {
    for (index, field) in entity.fields().iter().enumerate() {
        let Some(value) = entity.field_at(index) else {
            continue;
        };

        let record = VisitRecord {
            entity,
            field,
            value,
            path: render_path(path, Some(PathSegment::Field(field.name))),
        };

        visitor.visit(&record);

        match record.value {
            FieldView::Null | FieldView::Leaf(_) => {}
            FieldView::Entity(child) => {
                path.push(PathSegment::Field(field.name));
                walk_entity(child, visitor, path);
                path.pop();
            }
            FieldView::List(items) => {
                path.push(PathSegment::Field(field.name));
                walk_items(&items, visitor, path);
                path.pop();
            }
        }
    }
}

fn walk_items(items: &[FieldView<'_>], visitor: &mut dyn Visitor, path: &mut Vec<PathSegment>) {
    for (index, item) in items.iter().enumerate() {
        match item {
            FieldView::Null | FieldView::Leaf(_) => {}
            FieldView::Entity(child) => {
                path.push(PathSegment::Index(index));
                walk_entity(*child, visitor, path);
                path.pop();
            }
            FieldView::List(inner) => {
                path.push(PathSegment::Index(index));
                walk_items(inner, visitor, path);
                path.pop();
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{Manifest, sample_shipment};

    #[test]
    fn renders_fields_and_indices() {
        let path = [
            PathSegment::Field("crates"),
            PathSegment::Index(0),
            PathSegment::Field("payload"),
        ];

        assert_eq!(render_path(&path, None), "crates[0].payload");
        assert_eq!(
            render_path(&path, Some(PathSegment::Field("weight"))),
            "crates[0].payload.weight"
        );
        assert_eq!(render_path(&[], Some(PathSegment::Field("id"))), "id");
        assert_eq!(render_path(&[], None), "");
    }

    #[test]
    fn walk_emits_each_reachable_field_once() {
        let shipment = sample_shipment();
        let mut names = Vec::new();

        walk(&shipment, &mut |r: &VisitRecord<'_>| {
            names.push(r.field.name);
        });

        assert_eq!(
            names,
            [
                "id", "carrier", "tags", "crates", // shipment
                "children", "payload", // the one non-null crate
                "weight", "units", "readings", "sealed_on", // its manifest
            ]
        );
    }

    #[test]
    fn walk_is_depth_first() {
        let shipment = sample_shipment();
        let mut paths = Vec::new();

        walk(&shipment, &mut |r: &VisitRecord<'_>| {
            paths.push(r.path().to_string());
        });

        let payload = paths.iter().position(|p| p == "crates[0].payload");
        let weight = paths.iter().position(|p| p == "crates[0].payload.weight");

        assert!(payload.is_some());
        assert!(weight.is_some());
        assert!(payload < weight, "parent record must precede child records");
    }

    #[test]
    fn leaf_values_are_reported_but_never_descended() {
        let shipment = sample_shipment();
        let mut sealed_on_visits = 0;
        let mut below_sealed_on = 0;

        walk(&shipment, &mut |r: &VisitRecord<'_>| {
            if r.field.name == "sealed_on" {
                sealed_on_visits += 1;
                assert!(r.value.as_leaf().is_some());
            }
            if r.path().contains("sealed_on.") {
                below_sealed_on += 1;
            }
        });

        assert_eq!(sealed_on_visits, 1);
        assert_eq!(below_sealed_on, 0);
    }

    #[test]
    fn null_list_slots_are_skipped() {
        // crates = [Some(container), None]: one record for the list field
        // itself, a full sub-tree for slot 0, nothing for slot 1.
        let shipment = sample_shipment();
        let mut crates_visits = 0;
        let mut slot_one_visits = 0;

        walk(&shipment, &mut |r: &VisitRecord<'_>| {
            if r.field.name == "crates" {
                crates_visits += 1;
            }
            if r.path().starts_with("crates[1]") {
                slot_one_visits += 1;
            }
        });

        assert_eq!(crates_visits, 1);
        assert_eq!(slot_one_visits, 0);
    }

    #[test]
    fn default_entity_emits_only_its_own_fields() {
        let manifest = Manifest::default();
        let mut count = 0;

        walk(&manifest, &mut |_: &VisitRecord<'_>| count += 1);

        // all four fields visited, none descended into
        assert_eq!(count, 4);
    }
}
