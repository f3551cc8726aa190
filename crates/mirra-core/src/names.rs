use crate::{
    traits::{Entity, TypeLabel},
    visitor::{VisitRecord, Visitor, walk},
};
use std::collections::BTreeMap;

///
/// property_names
/// Walk `entity` and collect the distinct field names observed, grouped by
/// the runtime label of the entity that declared them.
///
/// A label's name list is the union across every visited instance of that
/// label, deduplicated, in first-seen order.
///
pub fn property_names(entity: &dyn Entity) -> BTreeMap<TypeLabel, Vec<String>> {
    let mut visitor = NamesVisitor::default();

    walk(entity, &mut visitor);

    visitor.names
}

///
/// NamesVisitor
///

#[derive(Debug, Default)]
struct NamesVisitor {
    names: BTreeMap<TypeLabel, Vec<String>>,
}

impl Visitor for NamesVisitor {
    fn visit(&mut self, record: &VisitRecord<'_>) {
        let names = self.names.entry(record.entity.type_label()).or_default();
        let name = record.field.name;

        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
}
