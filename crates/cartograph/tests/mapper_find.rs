mod support;
use support::*;

use cartograph::{record, Criteria, Value};
use pretty_assertions::assert_eq;
use std_util::prelude::*;

fn seed_authors(f: &Fixture) {
    f.db.seed(record! { "author_id" => 1, "entity_name" => "Ayn Rand", "born" => 1905 })
        .seed(record! { "author_id" => 2, "entity_name" => "Victor Hugo", "born" => 1802 })
        .seed(record! { "author_id" => 3, "entity_name" => "Isaac Asimov", "born" => 1920 });
}

// ---------------------------------------------------------------------------
// Identity map
// ---------------------------------------------------------------------------

#[test]
fn find_by_identity_returns_live_instance_without_reading() {
    let f = fixture();
    f.db.next_id(7);

    let author = assert_ok!(f.authors.model(record! { "name" => "Ayn Rand" }));
    assert_ok!(author.save(false));

    let found = assert_ok!(f.authors.find(7));
    assert_eq!(found.len(), 1);
    assert!(found[0].ptr_eq(&author));

    let found = assert_ok!(f.authors.find(record! { "id" => 7 }));
    assert!(assert_some!(found.first()).ptr_eq(&author));

    assert_eq!(f.db.reads(), 0);
}

#[test]
fn identity_lookup_matches_string_form() {
    let f = fixture();
    f.db.next_id(7);

    let author = assert_ok!(f.authors.model(record! { "name" => "Ayn Rand" }));
    assert_ok!(author.save(false));

    let found = assert_ok!(f.authors.find("7"));
    assert!(found[0].ptr_eq(&author));
    assert_eq!(f.db.reads(), 0);
}

#[test]
fn multi_field_criteria_bypasses_identity_map() {
    let f = fixture();
    seed_authors(&f);

    let first = assert_some!(assert_ok!(f.authors.find_one(1)));
    assert_eq!(f.db.reads(), 1);

    let found = assert_ok!(f.authors.find(record! { "id" => 1, "name" => "Ayn Rand" }));
    assert_eq!(f.db.reads(), 2);
    assert_eq!(
        f.db.calls()[1],
        Call::Read {
            store: "authors".to_string(),
            criteria: record! { "author_id" => 1, "entity_name" => "Ayn Rand" },
        }
    );

    // The row resolves to the instance already loaded
    assert!(found[0].ptr_eq(&first));
}

#[test]
fn loaded_instance_keeps_local_changes() {
    let f = fixture();
    seed_authors(&f);

    let author = assert_some!(assert_ok!(f.authors.find_one(record! { "born" => 1905 })));
    assert_ok!(author.set("name", "Alisa Rosenbaum"));

    let again = assert_some!(assert_ok!(f.authors.find_one(record! { "born" => 1905 })));
    assert!(again.ptr_eq(&author));
    assert_eq!(assert_ok!(again.get("name")), Value::from("Alisa Rosenbaum"));
}

// ---------------------------------------------------------------------------
// Gateway reads
// ---------------------------------------------------------------------------

#[test]
fn rows_are_translated_to_domain_fields() {
    let f = fixture();
    seed_authors(&f);

    let found = assert_ok!(f.authors.find(record! { "born" => 1802 }));
    assert_eq!(found.len(), 1);
    assert_eq!(
        found[0].to_record(),
        record! { "id" => 2, "name" => "Victor Hugo", "born" => 1802 }
    );
    assert_eq!(found[0].id_property(), "id");
}

#[test]
fn loaded_models_are_registered_and_bound() {
    let f = fixture();
    seed_authors(&f);

    let found = assert_ok!(f.authors.find(Criteria::all()));
    assert_eq!(found.len(), 3);
    assert_eq!(f.registry.instance_count("Author"), 3);

    let mapper = assert_ok!(found[2].mapper());
    assert_eq!(mapper.model_class(), "Author");

    let again = assert_ok!(f.authors.find(3));
    assert!(again[0].ptr_eq(&found[2]));
    assert_eq!(f.db.reads(), 1);
}

#[test]
fn nothing_matching_is_empty() {
    let f = fixture();
    seed_authors(&f);

    let found = assert_ok!(f.authors.find(record! { "name" => "Nobody" }));
    assert!(found.is_empty());

    assert_none!(assert_ok!(f.authors.find_one(99)));
}

#[test]
fn find_one_returns_first_match() {
    let f = fixture();
    seed_authors(&f);

    let author = assert_some!(assert_ok!(f.authors.find_one(Criteria::all())));
    assert_eq!(author.identity(), Value::I64(1));
}

#[test]
fn unknown_search_field_is_rejected() {
    let f = fixture();

    let err = assert_err!(f.authors.find(record! { "title" => "Anthem" }));
    assert!(err.is_invalid_search_field());
    assert_eq!(err.to_string(), "'title' is not a valid search field");
    assert_eq!(f.db.reads(), 0);
}

#[test]
fn gateway_failure_propagates() {
    let f = fixture();
    f.db.fail();

    let err = assert_err!(f.authors.find(record! { "born" => 1905 }));
    assert_eq!(err.to_string(), "connection reset");
}
