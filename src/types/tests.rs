use crate::error::Error;
use crate::types::{available_names, width_of, TypeName, TypeSpec};
use std::str::FromStr;

#[test]
fn widths_of_registered_types() {
    assert_eq!(width_of("int8"), 1);
    assert_eq!(width_of("int16"), 2);
    assert_eq!(width_of("int32"), 4);
    assert_eq!(width_of("int64"), 8);
    assert_eq!(width_of("uint8"), 1);
    assert_eq!(width_of("uint16"), 2);
    assert_eq!(width_of("uint32"), 4);
    assert_eq!(width_of("uint64"), 8);
}

#[test]
fn unknown_names_are_zero_width() {
    assert_eq!(width_of("int"), 0);
    assert_eq!(width_of(""), 0);
    assert_eq!(width_of("float"), 0);
    assert_eq!(width_of("int128"), 0);
}

#[test]
fn lookup_is_case_sensitive() {
    assert_eq!(width_of("INT32"), 0);
    assert_eq!(width_of("Int32"), 0);
    assert_eq!(width_of(" int32"), 0);
    assert!(TypeName::from_str("Uint8").is_err());
}

#[test]
fn every_name_round_trips_through_from_str() {
    for ty in TypeName::iter() {
        assert_eq!(TypeName::from_str(ty.name()), Ok(ty));
    }
}

#[test]
fn signedness() {
    assert!(TypeName::Int16.signed());
    assert!(!TypeName::Uint16.signed());
}

#[test]
fn available_names_in_registry_order() {
    assert_eq!(
        available_names(),
        "int8, int16, int32, int64, uint8, uint16, uint32, uint64"
    );
}

#[test]
fn permissive_lookup_keeps_unknown_name() {
    let spec = TypeSpec::lookup("short");

    assert_eq!(spec.name(), "short");
    assert_eq!(spec.width(), 0);
    assert!(!spec.is_known());
}

#[test]
fn strict_resolve() {
    let spec = TypeSpec::resolve("uint32").unwrap();
    assert_eq!(spec.name(), "uint32");
    assert_eq!(spec.width(), 4);
    assert!(!spec.signed());

    match TypeSpec::resolve("long") {
        Err(Error::UnknownType(name)) => assert_eq!(name, "long"),
        other => panic!("expected UnknownType, got {:?}", other),
    }
}

#[test]
fn type_names_deserialize_from_plain_strings() {
    let ty: TypeName = serde_plain::from_str("int64").unwrap();
    assert_eq!(ty, TypeName::Int64);

    assert!(serde_plain::from_str::<TypeName>("i64").is_err());
}

#[test]
fn type_names_serialize_lowercase() {
    assert_eq!(serde_json::to_string(&TypeName::Uint16).unwrap(), "\"uint16\"");
}
