mod value;
use value::Value;

use cartograph_core::{stmt, Error, Gateway, Record, Result};
use cartograph_sql::{Delete, Insert, Select, Serializer, Statement, Update};
use parking_lot::Mutex;
use rusqlite::Connection;
use std::{
    fmt,
    path::{Path, PathBuf},
};
use url::Url;

/// Relational gateway over a single SQLite connection.
///
/// Stores are tables. Values are bound as statement parameters, never
/// spliced into the SQL text.
pub struct Sqlite {
    connection: Mutex<Connection>,
    location: Location,
}

#[derive(Debug, Clone)]
enum Location {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Opens a database from a `sqlite:` URL. `sqlite::memory:` opens a
    /// fresh in-memory database.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Self::in_memory()
        } else {
            Self::open(url.path())
        }
    }

    pub fn in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory().map_err(Error::storage)?;
        Ok(Self::from_connection(connection, Location::InMemory))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let connection = Connection::open(&path).map_err(Error::storage)?;
        Ok(Self::from_connection(connection, Location::File(path)))
    }

    fn from_connection(connection: Connection, location: Location) -> Self {
        Self {
            connection: Mutex::new(connection),
            location,
        }
    }

    /// The URL this gateway was opened from.
    pub fn url(&self) -> String {
        match &self.location {
            Location::InMemory => "sqlite::memory:".to_string(),
            Location::File(path) => format!("sqlite:{}", path.display()),
        }
    }

    /// Runs one or more `;`-separated statements without parameters, e.g.
    /// schema setup.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        tracing::debug!(sql, "executing batch");
        self.connection
            .lock()
            .execute_batch(sql)
            .map_err(Error::storage)
    }

    fn serialize(&self, statement: impl Into<Statement>) -> Result<(String, Vec<Value>)> {
        let mut params = Vec::<stmt::Value>::new();
        let sql = Serializer::sqlite().serialize(&statement.into(), &mut params)?;
        Ok((sql, params.into_iter().map(Value::from).collect()))
    }

    fn execute(&self, statement: impl Into<Statement>) -> Result<u64> {
        let (sql, params) = self.serialize(statement)?;
        let connection = self.connection.lock();
        let mut stmt = connection.prepare_cached(&sql).map_err(Error::storage)?;

        let count = stmt
            .execute(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::storage)?;

        tracing::debug!(sql = %sql, count, "executed statement");
        Ok(count as u64)
    }
}

impl Gateway for Sqlite {
    fn create(&self, store: &str, data: &Record, sequence: Option<&str>) -> Result<stmt::Value> {
        let (sql, params) = self.serialize(Insert::new(store, data.clone()))?;
        let connection = self.connection.lock();

        connection
            .prepare_cached(&sql)
            .and_then(|mut stmt| stmt.execute(rusqlite::params_from_iter(params.iter())))
            .map_err(Error::storage)?;

        let id = connection.last_insert_rowid();

        // SQLite assigns rowids itself; a sequence name has nothing to drive.
        tracing::debug!(sql = %sql, id, sequence, "inserted row");
        Ok(stmt::Value::I64(id))
    }

    fn read(&self, store: &str, criteria: &Record) -> Result<Vec<Record>> {
        let (sql, params) = self.serialize(Select::matching(store, criteria))?;
        let connection = self.connection.lock();
        let mut stmt = connection.prepare_cached(&sql).map_err(Error::storage)?;

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::storage)?;

        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::storage)? {
            let mut record = Record::with_capacity(columns.len());

            for (index, column) in columns.iter().enumerate() {
                let value: Value = row.get(index).map_err(Error::storage)?;
                record.insert(column.clone(), value.into_inner());
            }

            ret.push(record);
        }

        tracing::debug!(sql = %sql, rows = ret.len(), "read rows");
        Ok(ret)
    }

    fn update(&self, store: &str, data: &Record, criteria: &Record) -> Result<u64> {
        self.execute(Update::new(store, data.clone(), criteria.clone()))
    }

    fn delete(&self, store: &str, criteria: &Record) -> Result<u64> {
        self.execute(Delete::new(store, criteria.clone()))
    }
}

impl fmt::Debug for Sqlite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sqlite").field("url", &self.url()).finish()
    }
}
