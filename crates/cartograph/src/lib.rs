mod collection;
pub use collection::Collection;

mod connect;
pub use connect::connect;

mod date;
pub use date::convert_date_time;

pub mod mapper;
pub use mapper::{Criteria, Mapper, Mapping, TableMapping};

pub mod model;
pub use model::{Model, ModelOptions};

mod nested;
pub use nested::Nested;

mod registry;
pub use registry::Registry;

pub use cartograph_core::{bail, err, record, DataMap, Error, Gateway, Record, Result, Value};

/// The SELECT builder and statement serializer.
pub use cartograph_sql as sql;

#[cfg(feature = "memory")]
pub use cartograph_driver_memory::Memory;

#[cfg(feature = "sqlite")]
pub use cartograph_driver_sqlite::Sqlite;
