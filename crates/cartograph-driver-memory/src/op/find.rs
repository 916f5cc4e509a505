use crate::{filter, Memory};
use cartograph_core::{Record, Result};

pub(crate) fn execute(driver: &Memory, store: &str, criteria: &Record) -> Result<Vec<Record>> {
    let collections = driver.collections.lock();

    let documents: Vec<Record> = collections
        .get(store)
        .into_iter()
        .flatten()
        .filter(|document| filter::matches(document, criteria))
        .cloned()
        .collect();

    tracing::debug!(store, rows = documents.len(), "read documents");
    Ok(documents)
}
