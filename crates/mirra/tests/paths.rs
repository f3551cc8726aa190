use mirra::prelude::*;

#[derive(Debug, Default, Entity)]
struct Region {
    name: String,
    hq: Option<Office>,
    offices: Vec<Office>,
}

#[derive(Debug, Default, Entity)]
struct Office {
    city: String,
    headcount: u32,
    opened: Date,
}

fn sample_region() -> Region {
    Region {
        name: "emea".to_string(),
        hq: Some(Office {
            city: "Lisbon".to_string(),
            headcount: 120,
            opened: Date::new(2019, 3, 1),
        }),
        offices: vec![Office::default()],
    }
}

#[test]
fn paths_resolve_nested_leaves() {
    let region = sample_region();

    assert_eq!(get_value_as::<String>(&region, "name").unwrap(), "emea");
    assert_eq!(get_value_as::<String>(&region, "hq.city").unwrap(), "Lisbon");
    assert_eq!(get_value_as::<u32>(&region, "hq.headcount").unwrap(), 120);
    assert_eq!(
        get_value_as::<Date>(&region, "hq.opened").unwrap(),
        Date::new(2019, 3, 1)
    );
}

#[test]
fn terminal_composites_come_back_as_entities() {
    let region = sample_region();

    let hq = get_value(&region, "hq").unwrap();
    let office = hq.as_entity().expect("hq should project as an entity");

    assert_eq!(office.type_label(), TypeLabel::new("Office"));
    assert_eq!(get_value_as::<String>(office, "city").unwrap(), "Lisbon");
}

#[test]
fn sequences_terminate_paths() {
    let region = sample_region();

    // reading the list itself is fine
    assert!(matches!(
        get_value(&region, "offices").unwrap(),
        FieldView::List(_)
    ));

    // stepping through it is not
    assert!(matches!(
        get_value(&region, "offices.city").unwrap_err(),
        ReflectError::SequencePath { .. }
    ));

    // text is a sequence for path purposes as well
    assert!(matches!(
        get_value(&region, "name.anything").unwrap_err(),
        ReflectError::SequencePath { .. }
    ));
}

#[test]
fn null_and_missing_steps_fail_loudly() {
    let region = Region::default();

    assert_eq!(
        get_value(&region, "hq.city").unwrap_err(),
        ReflectError::NullEntity
    );

    assert!(matches!(
        get_value(&region, "branch.city").unwrap_err(),
        ReflectError::FieldNotFound { .. }
    ));

    assert_eq!(
        get_value(&region, "").unwrap_err(),
        ReflectError::EmptyPath
    );
}

#[test]
fn typed_mismatches_are_reported_not_cast() {
    let region = sample_region();

    assert_eq!(
        get_value_as::<bool>(&region, "hq.headcount").unwrap_err(),
        ReflectError::TypeMismatch {
            path: "hq.headcount".to_string()
        }
    );
}
