use crate::ID_FIELD;

use cartograph_core::Record;

/// Returns `true` if every criteria field is present in `document` with an
/// equal value. Only identifiers compare by key, so an `_id` of `5`
/// matches `"5"`; every other field must be strictly equal.
pub(crate) fn matches(document: &Record, criteria: &Record) -> bool {
    criteria.iter().all(|(field, expected)| match document.get(field) {
        Some(actual) if field == ID_FIELD => {
            actual == expected || actual.to_key() == expected.to_key()
        }
        Some(actual) => actual == expected,
        None => expected.is_null(),
    })
}
