use cartograph::{err, record, Collection, Model, ModelOptions, Value};
use pretty_assertions::assert_eq;
use std_util::prelude::*;

fn author(id: i64, name: &str) -> Model {
    assert_ok!(Model::new(
        ModelOptions::new().data(record! { "id" => id, "name" => name })
    ))
}

fn authors() -> Collection {
    vec![author(1, "Ayn Rand"), author(2, "Victor Hugo")].into()
}

// ---------------------------------------------------------------------------
// List operations
// ---------------------------------------------------------------------------

#[test]
fn push_pop_shift_unshift() {
    let mut authors = authors();

    authors.push(author(3, "Isaac Asimov"));
    authors.unshift(author(0, "Homer"));
    assert_eq!(authors.len(), 4);

    assert_eq!(assert_some!(authors.shift()).identity(), Value::I64(0));
    assert_eq!(assert_some!(authors.pop()).identity(), Value::I64(3));
    assert_eq!(assert_some!(authors.first()).identity(), Value::I64(1));
    assert_eq!(authors.len(), 2);

    authors.pop();
    authors.pop();
    assert!(authors.is_empty());
    assert_none!(authors.pop());
    assert_none!(authors.shift());
}

#[test]
fn iterates_in_order() {
    let authors = authors();

    let names: Vec<Value> = authors
        .iter()
        .map(|author| assert_ok!(author.get("name")))
        .collect();
    assert_eq!(names, vec![Value::from("Ayn Rand"), Value::from("Victor Hugo")]);

    let ids: Vec<Value> = authors.into_iter().map(|author| author.identity()).collect();
    assert_eq!(ids, vec![Value::I64(1), Value::I64(2)]);
}

#[test]
fn get_by_identity() {
    let authors = authors();

    let hugo = assert_some!(authors.get_by_identity(2));
    assert!(hugo.ptr_eq(&authors[1]));
    assert!(assert_some!(authors.get_by_identity("2")).ptr_eq(&authors[1]));
    assert_none!(authors.get_by_identity(3));
}

// ---------------------------------------------------------------------------
// Forwarding
// ---------------------------------------------------------------------------

#[test]
fn set_all_and_get_all() {
    let authors = authors();

    assert_ok!(authors.set_all("name", "Anonymous"));

    let names = assert_ok!(authors.get_all("name"));
    assert_eq!(names.len(), 2);
    assert_eq!(names["1"], Value::from("Anonymous"));
    assert_eq!(names["2"], Value::from("Anonymous"));
}

#[test]
fn set_all_fails_on_undeclared_field() {
    let authors = authors();
    let err = assert_err!(authors.set_all("died", 1982));
    assert!(err.is_undeclared_field());
}

#[test]
fn each_collects_results_by_identity() {
    let authors = authors();

    let lengths = assert_ok!(authors.each(|author| {
        let name = author.get("name")?.into_string()?;
        Ok(name.len())
    }));

    assert_eq!(lengths.get("1"), Some(&8));
    assert_eq!(lengths.get("2"), Some(&11));
}

#[test]
fn each_stops_at_first_error() {
    let authors = authors();
    let mut seen = 0;

    let err = assert_err!(authors.each(|_| -> cartograph::Result<()> {
        seen += 1;
        Err(err!("stop"))
    }));

    assert_eq!(err.to_string(), "stop");
    assert_eq!(seen, 1);
}
