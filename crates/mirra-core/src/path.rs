use crate::{
    error::ReflectError,
    traits::{Entity, FieldValue, TypeLabel},
    view::FieldView,
};

///
/// get_value
/// Resolve a dot-delimited property path against `entity` and return the
/// value found at its end.
///
/// A single-segment path reads the named field as-is, sequences included.
/// A multi-segment path refuses to step *through* a sequence-typed field
/// (fetch the list, then resolve against each item) and through a null
/// value; a lookup miss reports the label of the type that was queried.
///
pub fn get_value<'a>(entity: &'a dyn Entity, path: &str) -> Result<FieldView<'a>, ReflectError> {
    if path.is_empty() {
        return Err(ReflectError::EmptyPath);
    }

    let Some((head, rest)) = path.split_once('.') else {
        return lookup(entity, path);
    };

    let meta = entity
        .field_meta(head)
        .ok_or_else(|| ReflectError::field_not_found(entity.type_label(), head))?;

    if meta.sequence {
        return Err(ReflectError::sequence_path(head));
    }

    match lookup(entity, head)? {
        FieldView::Null => Err(ReflectError::NullEntity),
        FieldView::Entity(child) => get_value(child, rest),

        // declared One, but the value projects as a sequence anyway
        // (a custom Node impl); same policy as a declared list
        FieldView::List(_) => Err(ReflectError::sequence_path(head)),

        FieldView::Leaf(value) => {
            let next = rest.split('.').next().unwrap_or(rest);

            Err(ReflectError::field_not_found(
                TypeLabel::new(value.tag()),
                next,
            ))
        }
    }
}

///
/// get_value_as
/// Typed variant of [`get_value`]: converts the terminal value through the
/// [`FieldValue`] contract and reports failure explicitly.
///
pub fn get_value_as<R: FieldValue>(entity: &dyn Entity, path: &str) -> Result<R, ReflectError> {
    let mismatch = || ReflectError::TypeMismatch {
        path: path.to_string(),
    };

    let value = get_value(entity, path)?.to_value().ok_or_else(mismatch)?;

    R::from_value(&value).ok_or_else(mismatch)
}

fn lookup<'a>(entity: &'a dyn Entity, name: &str) -> Result<FieldView<'a>, ReflectError> {
    entity
        .field(name)
        .ok_or_else(|| ReflectError::field_not_found(entity.type_label(), name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ReflectError,
        test_fixtures::{Container, Manifest, sample_shipment},
        value::Value,
    };

    #[test]
    fn single_segment_reads_any_field() {
        let shipment = sample_shipment();

        assert_eq!(
            get_value(&shipment, "carrier").unwrap().as_leaf(),
            Some(&Value::Text("acme".to_string()))
        );

        // sequences are fine as terminals
        let FieldView::List(crates) = get_value(&shipment, "crates").unwrap() else {
            panic!("crates should project as a list");
        };
        assert_eq!(crates.len(), 2);
    }

    #[test]
    fn nested_paths_resolve_through_composites() {
        let shipment = sample_shipment();
        let container = shipment.crates[0].as_ref().unwrap();

        assert_eq!(get_value_as::<i64>(container, "payload.weight").unwrap(), 100);
        assert_eq!(
            get_value_as::<Vec<Option<i64>>>(container, "payload.readings").unwrap(),
            vec![Some(1), Some(2), Some(3)]
        );
        assert_eq!(get_value_as::<String>(&shipment, "carrier").unwrap(), "acme");
    }

    #[test]
    fn sequence_fields_cannot_be_stepped_through() {
        let shipment = sample_shipment();

        // declared list
        assert_eq!(
            get_value(&shipment, "crates.payload").unwrap_err(),
            ReflectError::sequence_path("crates")
        );

        // text iterates too, even behind Option
        assert_eq!(
            get_value(&shipment, "carrier.crates.payload").unwrap_err(),
            ReflectError::sequence_path("carrier")
        );
    }

    #[test]
    fn null_values_cannot_be_stepped_through() {
        let container = Container::<Manifest>::default();

        assert_eq!(
            get_value(&container, "payload.weight").unwrap_err(),
            ReflectError::NullEntity
        );

        // a null terminal is a value, not an error
        assert!(get_value(&container, "payload").unwrap().is_null());
    }

    #[test]
    fn lookup_misses_carry_the_queried_label() {
        let shipment = sample_shipment();

        assert_eq!(
            get_value(&shipment, "nope").unwrap_err(),
            ReflectError::field_not_found(TypeLabel::new("Shipment"), "nope")
        );

        let manifest = Manifest::default();
        assert_eq!(
            get_value(&manifest, "units.inner").unwrap_err(),
            ReflectError::field_not_found(TypeLabel::new("Int"), "inner")
        );
    }

    #[test]
    fn empty_paths_are_rejected() {
        let shipment = sample_shipment();

        assert_eq!(
            get_value(&shipment, "").unwrap_err(),
            ReflectError::EmptyPath
        );
        // a trailing separator leaves an empty remainder
        assert_eq!(
            get_value(&shipment, "crates.").unwrap_err(),
            ReflectError::sequence_path("crates")
        );
    }

    #[test]
    fn typed_reads_fail_explicitly_on_mismatch() {
        let shipment = sample_shipment();

        assert_eq!(
            get_value_as::<i64>(&shipment, "carrier").unwrap_err(),
            ReflectError::TypeMismatch {
                path: "carrier".to_string()
            }
        );

        // composites have no scalar representation
        let container = shipment.crates[0].as_ref().unwrap();
        assert_eq!(
            get_value_as::<i64>(container, "payload").unwrap_err(),
            ReflectError::TypeMismatch {
                path: "payload".to_string()
            }
        );
    }

    #[test]
    fn typed_reads_pass_null_through_option() {
        let container = Container::<Manifest>::default();

        assert_eq!(
            get_value_as::<Option<i64>>(&container, "payload").unwrap(),
            None
        );
    }
}
