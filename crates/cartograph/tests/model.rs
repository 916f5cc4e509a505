mod support;
use support::fixture;

use cartograph::{record, Model, ModelOptions, Registry, Value};
use pretty_assertions::assert_eq;
use std_util::prelude::*;

fn author() -> Model {
    assert_ok!(Model::new(ModelOptions::new().data(record! {
        "id" => Value::Null,
        "name" => "Ayn Rand",
        "born" => 1905,
    })))
}

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

#[test]
fn data_becomes_the_field_set() {
    let author = author();

    assert_eq!(author.fields(), vec!["id", "name", "born"]);
    assert_eq!(assert_ok!(author.get("name")), Value::from("Ayn Rand"));
    assert!(author.has_field("born"));
    assert!(!author.has_field("died"));
}

#[test]
fn undeclared_field_fails() {
    let author = author();

    let err = assert_err!(author.get("died"));
    assert!(err.is_undeclared_field());
    assert_eq!(err.to_string(), "undeclared field `died`");

    let err = assert_err!(author.set("died", 1982));
    assert!(err.is_undeclared_field());
    assert!(!author.has_field("died"));
}

#[test]
fn set_and_unset() {
    let author = author();

    assert_ok!(assert_ok!(author.set("name", "Alisa Rosenbaum")).set("born", 1906));
    assert_eq!(assert_ok!(author.get("born")), Value::from(1906));
    assert!(author.is_set("name"));

    assert_ok!(author.unset("name"));
    assert!(!author.is_set("name"));
    assert!(author.has_field("name"));
    assert!(!author.is_set("died"));
}

#[test]
fn declared_fields_fix_the_schema() {
    let author = assert_ok!(Model::new(
        ModelOptions::new()
            .fields(["id", "name"])
            .data(record! { "name" => "Ayn Rand", "born" => 1905 })
    ));

    assert_eq!(author.to_record(), record! { "id" => Value::Null, "name" => "Ayn Rand" });
}

#[test]
fn fill_ignores_unknown_keys_unless_schema_update() {
    let author = author();
    let data = record! { "name" => "Alisa Rosenbaum", "died" => 1982 };

    author.fill(&data, false);
    assert_eq!(assert_ok!(author.get("name")), Value::from("Alisa Rosenbaum"));
    assert!(!author.has_field("died"));

    author.fill(&data, true);
    assert_eq!(assert_ok!(author.get("died")), Value::from(1982));
}

#[test]
fn clones_share_state() {
    let author = author();
    let other = author.clone();

    assert_ok!(other.set("name", "Alisa Rosenbaum"));

    assert!(author.ptr_eq(&other));
    assert_eq!(assert_ok!(author.get("name")), Value::from("Alisa Rosenbaum"));
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

#[test]
fn identity_uses_the_identifier_property() {
    let book = assert_ok!(Model::new(
        ModelOptions::new()
            .id_property("isbn")
            .data(record! { "isbn" => Value::Null, "title" => "Anthem" })
    ));

    assert_eq!(book.id_property(), "isbn");
    assert!(book.identity().is_unset());

    assert_ok!(book.set_identity("9780451191137"));
    assert_eq!(assert_ok!(book.get("isbn")), Value::from("9780451191137"));
}

#[test]
fn missing_identifier_field_is_null_identity() {
    let note = assert_ok!(Model::new(ModelOptions::new().data(record! { "text" => "hi" })));
    assert_eq!(note.identity(), Value::Null);
    assert!(note.set_identity(1).is_err());
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

#[test]
fn paths_reach_into_mapping_fields() {
    let author = assert_ok!(Model::new(ModelOptions::new().data(record! {
        "name" => "Ayn Rand",
        "address" => record! { "city" => "New York" },
    })));

    assert_eq!(
        assert_ok!(author.get_path("address.city")),
        Some(Value::from("New York"))
    );
    assert_eq!(assert_ok!(author.get_path("address.zip")), None);

    assert_ok!(author.set_path("address.zip", "10016"));
    assert_eq!(
        assert_ok!(author.get("address")),
        Value::from(record! { "city" => "New York", "zip" => "10016" })
    );

    assert!(author.set_path("name.first", "Ayn").is_err());
    assert!(author.set_path("country.code", "US").is_err());
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[test]
fn options_from_record_with_data_key() {
    let registry = Registry::new();

    let options = assert_ok!(ModelOptions::from_record(
        record! {
            "data" => record! { "name" => "Ayn Rand" },
            "ignored" => 1,
        },
        &registry,
    ));

    let author = assert_ok!(Model::new(options));
    assert_eq!(author.to_record(), record! { "name" => "Ayn Rand" });
}

#[test]
fn options_from_record_without_data_key() {
    let registry = Registry::new();

    let options = assert_ok!(ModelOptions::from_record(
        record! { "id_property" => "isbn", "isbn" => Value::Null, "title" => "Anthem" },
        &registry,
    ));

    let book = assert_ok!(Model::new(options));
    assert_eq!(book.id_property(), "isbn");
    assert_eq!(book.fields(), vec!["isbn", "title"]);
}

#[test]
fn options_data_must_be_a_mapping() {
    let registry = Registry::new();

    let err = assert_err!(ModelOptions::from_record(
        record! { "data" => "Ayn Rand" },
        &registry
    ));
    assert!(err.is_configuration());
    assert_eq!(
        err.to_string(),
        "invalid configuration: data must be a mapping; got String"
    );
}

#[test]
fn options_resolve_mapper_class() {
    let f = fixture();

    let options = assert_ok!(ModelOptions::from_record(
        record! { "mapper_class" => "Author", "data" => record! { "id" => 3 } },
        &f.registry,
    ));

    let author = assert_ok!(Model::new(options));
    assert_eq!(assert_ok!(author.mapper()).model_class(), "Author");
}

#[test]
fn options_unknown_mapper_class_fails() {
    let registry = Registry::new();

    let err = assert_err!(ModelOptions::from_record(
        record! { "mapper_class" => "Publisher" },
        &registry
    ));
    assert!(err.is_configuration());
}

#[test]
fn options_reject_mapper_key() {
    let registry = Registry::new();

    let err = assert_err!(ModelOptions::from_record(
        record! { "mapper" => "AuthorMapper" },
        &registry
    ));
    assert!(err.is_configuration());
}

#[test]
fn unresolved_mapper_class_fails_construction() {
    let err = assert_err!(Model::new(ModelOptions::new().mapper_class("Author")));
    assert!(err.is_configuration());
}

#[test]
fn injected_mapper_wins_over_class() {
    let f = fixture();

    let options = assert_ok!(ModelOptions::new()
        .mapper(f.authors.clone())
        .mapper_class("Publisher")
        .resolve(&f.registry));

    let author = assert_ok!(Model::new(options));
    assert_eq!(assert_ok!(author.mapper()).model_class(), "Author");
}
