use crate::{Memory, ID_FIELD};
use cartograph_core::{Record, Result, Value};

pub(crate) fn execute(
    driver: &Memory,
    store: &str,
    data: &Record,
    sequence: Option<&str>,
) -> Result<Value> {
    let mut document = data.clone();

    let id = match document.get(ID_FIELD) {
        Some(id) if !id.is_unset() => id.clone(),
        _ => {
            let id = Value::String(uuid::Uuid::new_v4().to_string());
            document.insert(ID_FIELD.to_string(), id.clone());
            id
        }
    };

    // Keep the key first, the way documents are shown back
    if let Some(index) = document.get_index_of(ID_FIELD) {
        document.move_index(index, 0);
    }

    driver
        .collections
        .lock()
        .entry(store.to_string())
        .or_default()
        .push(document);

    tracing::debug!(store, id = %id, sequence, "inserted document");
    Ok(id)
}
