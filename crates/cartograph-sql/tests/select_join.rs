use cartograph_sql::{Join, JoinKind, Select};
use pretty_assertions::assert_eq;
use std_util::prelude::*;

#[test]
fn default_join_is_plain_join() {
    let select = Select::new(["u.id", "u.email", "a.zip"])
        .from_as("users", "u")
        .join(Join::new("addresses").alias("a").on("a.user_id", "u.id"))
        .where_(("u.id", "=", 1234));

    assert_eq!(
        assert_ok!(select.sql()),
        "SELECT u.id, u.email, a.zip FROM users AS u JOIN addresses a ON a.user_id = u.id WHERE u.id = 1234"
    );
}

#[test]
fn multiple_joins_keep_declaration_order() {
    let select = Select::new(["u.id", "u.email", "a.zip", "m.opt_in"])
        .from_as("users", "u")
        .join(Join::inner("addresses").alias("a").on("a.user_id", "u.id"))
        .join(Join::left("marketing").alias("m").on("m.user_id", "u.id"))
        .where_(("u.id", "=", 1234));

    assert_eq!(
        assert_ok!(select.sql()),
        "SELECT u.id, u.email, a.zip, m.opt_in FROM users AS u \
         INNER JOIN addresses a ON a.user_id = u.id \
         LEFT JOIN marketing m ON m.user_id = u.id \
         WHERE u.id = 1234"
    );
}

#[test]
fn join_alias_has_no_as_while_from_alias_does() {
    let select = Select::new(["*"])
        .from_as("authors", "a")
        .join(Join::new("books").alias("b").on("b.author_id", "a.id"));

    let sql = assert_ok!(select.sql());
    assert!(sql.contains("FROM authors AS a"));
    assert!(sql.contains("JOIN books b ON"));
    assert!(!sql.contains("books AS b"));
}

#[test]
fn unaliased_join() {
    let select = Select::default()
        .from("books")
        .join(Join::new("authors").kind(JoinKind::Right).on("authors.id", "books.author_id"));

    assert_eq!(
        assert_ok!(select.sql()),
        "SELECT * FROM books RIGHT JOIN authors ON authors.id = books.author_id"
    );
}

#[test]
fn join_without_on_is_invalid() {
    let select = Select::default().from("books").join(Join::new("authors"));

    let err = assert_err!(select.sql());
    assert!(err.is_invalid_clause());
    assert_eq!(
        err.to_string(),
        "invalid clause: join on `authors` has no ON condition"
    );
}
