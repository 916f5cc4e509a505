use crate::{filter, Memory};
use cartograph_core::{Record, Result};

pub(crate) fn execute(driver: &Memory, store: &str, criteria: &Record) -> Result<u64> {
    let mut collections = driver.collections.lock();
    let mut count = 0;

    if let Some(documents) = collections.get_mut(store) {
        let before = documents.len();
        documents.retain(|document| !filter::matches(document, criteria));
        count = (before - documents.len()) as u64;
    }

    tracing::debug!(store, count, "deleted documents");
    Ok(count)
}
