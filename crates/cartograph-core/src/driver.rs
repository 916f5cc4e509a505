mod data_map;
pub use data_map::DataMap;

use crate::{stmt::Record, Result, Value};

use std::fmt::Debug;

/// A named adapter performing create/read/update/delete against one physical
/// store.
///
/// Stores are addressed by name (a table, a collection). Criteria are
/// equality-only and conjunctive: a record matches when every criteria field
/// equals the record's field. An empty criteria matches everything.
///
/// All operations block until the store answers. Failures from the
/// underlying client surface as [`Error::storage`](crate::Error::storage)
/// and are not retried.
pub trait Gateway: Debug + Send + Sync + 'static {
    /// Inserts one record and returns the generated or provided identifier.
    ///
    /// `sequence` names the identifier generator for stores that have one.
    fn create(&self, store: &str, data: &Record, sequence: Option<&str>) -> Result<Value>;

    /// Returns every record matching `criteria`, in store order.
    fn read(&self, store: &str, criteria: &Record) -> Result<Vec<Record>>;

    /// Writes `data` onto every record matching `criteria` and returns the
    /// number of records affected.
    fn update(&self, store: &str, data: &Record, criteria: &Record) -> Result<u64>;

    /// Removes every record matching `criteria` and returns the number of
    /// records affected.
    fn delete(&self, store: &str, criteria: &Record) -> Result<u64>;
}
