mod filter;
mod op;

use cartograph_core::{Error, Gateway, Record, Result, Value};
use indexmap::IndexMap;
use parking_lot::Mutex;
use url::Url;

/// Field every stored document is keyed by.
pub const ID_FIELD: &str = "_id";

/// In-process document store gateway.
///
/// Each store is a collection of documents kept in insertion order. Every
/// document carries an [`ID_FIELD`], assigned as a v4 UUID string when the
/// inserted data has none.
#[derive(Debug, Default)]
pub struct Memory {
    collections: Mutex<IndexMap<String, Vec<Record>>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an empty store from a `memory:` URL.
    pub fn connect(url: &str) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

        if url.scheme() != "memory" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `memory` scheme; url={url}"
            )));
        }

        Ok(Self::new())
    }

    /// Number of documents in `store`.
    pub fn count(&self, store: &str) -> usize {
        self.collections.lock().get(store).map_or(0, Vec::len)
    }

    /// Drops every collection.
    pub fn reset(&self) {
        self.collections.lock().clear();
    }
}

impl Gateway for Memory {
    fn create(&self, store: &str, data: &Record, sequence: Option<&str>) -> Result<Value> {
        op::insert::execute(self, store, data, sequence)
    }

    fn read(&self, store: &str, criteria: &Record) -> Result<Vec<Record>> {
        op::find::execute(self, store, criteria)
    }

    fn update(&self, store: &str, data: &Record, criteria: &Record) -> Result<u64> {
        op::update::execute(self, store, data, criteria)
    }

    fn delete(&self, store: &str, criteria: &Record) -> Result<u64> {
        op::delete::execute(self, store, criteria)
    }
}
