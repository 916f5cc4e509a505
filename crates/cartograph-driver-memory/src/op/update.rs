use crate::{filter, Memory};
use cartograph_core::{Record, Result};

pub(crate) fn execute(
    driver: &Memory,
    store: &str,
    data: &Record,
    criteria: &Record,
) -> Result<u64> {
    let mut collections = driver.collections.lock();
    let mut count = 0;

    if let Some(documents) = collections.get_mut(store) {
        for document in documents
            .iter_mut()
            .filter(|document| filter::matches(document, criteria))
        {
            for (field, value) in data {
                document.insert(field.clone(), value.clone());
            }
            count += 1;
        }
    }

    tracing::debug!(store, count, "updated documents");
    Ok(count)
}
