#![allow(dead_code)]

use cartograph::{
    err, record, DataMap, Gateway, Mapper, Mapping, Record, Registry, Result, TableMapping, Value,
};
use parking_lot::Mutex;
use std::{collections::VecDeque, sync::Arc};

/// One call received by a [`RecordingGateway`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create {
        store: String,
        data: Record,
        sequence: Option<String>,
    },
    Read {
        store: String,
        criteria: Record,
    },
    Update {
        store: String,
        data: Record,
        criteria: Record,
    },
    Delete {
        store: String,
        criteria: Record,
    },
}

/// A gateway double that logs every call. `read` answers from rows seeded
/// with [`RecordingGateway::seed`], filtered by equality on the criteria.
#[derive(Debug, Default)]
pub struct RecordingGateway {
    calls: Mutex<Vec<Call>>,
    rows: Mutex<Vec<Record>>,
    ids: Mutex<VecDeque<Value>>,
    fail: Mutex<bool>,
}

impl RecordingGateway {
    pub fn new() -> Arc<RecordingGateway> {
        Arc::new(RecordingGateway::default())
    }

    pub fn seed(&self, row: Record) -> &Self {
        self.rows.lock().push(row);
        self
    }

    /// Queues the identifier returned by the next `create`. Without one,
    /// `create` returns the number of creates so far.
    pub fn next_id(&self, id: impl Into<Value>) -> &Self {
        self.ids.lock().push_back(id.into());
        self
    }

    /// Makes every following call fail.
    pub fn fail(&self) -> &Self {
        *self.fail.lock() = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn reads(&self) -> usize {
        self.count(|call| matches!(call, Call::Read { .. }))
    }

    pub fn creates(&self) -> usize {
        self.count(|call| matches!(call, Call::Create { .. }))
    }

    pub fn updates(&self) -> usize {
        self.count(|call| matches!(call, Call::Update { .. }))
    }

    fn count(&self, f: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().iter().filter(|call| f(call)).count()
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().push(call);

        if *self.fail.lock() {
            return Err(err!("connection reset"));
        }

        Ok(())
    }
}

impl Gateway for RecordingGateway {
    fn create(&self, store: &str, data: &Record, sequence: Option<&str>) -> Result<Value> {
        self.record(Call::Create {
            store: store.to_string(),
            data: data.clone(),
            sequence: sequence.map(str::to_string),
        })?;

        let id = self.ids.lock().pop_front();
        Ok(id.unwrap_or_else(|| Value::I64(self.creates() as i64)))
    }

    fn read(&self, store: &str, criteria: &Record) -> Result<Vec<Record>> {
        self.record(Call::Read {
            store: store.to_string(),
            criteria: criteria.clone(),
        })?;

        Ok(self
            .rows
            .lock()
            .iter()
            .filter(|row| {
                criteria
                    .iter()
                    .all(|(field, value)| row.get(field) == Some(value))
            })
            .cloned()
            .collect())
    }

    fn update(&self, store: &str, data: &Record, criteria: &Record) -> Result<u64> {
        self.record(Call::Update {
            store: store.to_string(),
            data: data.clone(),
            criteria: criteria.clone(),
        })?;
        Ok(1)
    }

    fn delete(&self, store: &str, criteria: &Record) -> Result<u64> {
        self.record(Call::Delete {
            store: store.to_string(),
            criteria: criteria.clone(),
        })?;
        Ok(1)
    }
}

/// Authors stored in table `authors` of gateway `db`:
/// `id -> author_id`, `name -> entity_name`, `born -> born`.
pub fn author_mapping() -> TableMapping {
    TableMapping::new("Author", "db", "authors")
        .field("id", "author_id")
        .field("name", "entity_name")
        .field("born", "born")
        .sequence("authors_id_seq")
}

pub struct Fixture {
    pub registry: Arc<Registry>,
    pub db: Arc<RecordingGateway>,
    pub authors: Mapper,
}

pub fn fixture() -> Fixture {
    let registry = Registry::new();
    let db = RecordingGateway::new();
    registry.add_gateway("db", db.clone());

    let authors = Mapper::new(author_mapping(), &registry);
    registry.add_mapper("Author", authors.clone());

    Fixture {
        registry,
        db,
        authors,
    }
}

/// Authors split over two gateways: names in table `authors` of `db`, and
/// biographies in collection `bios` of `docs`.
pub struct SplitMapping;

impl Mapping for SplitMapping {
    fn model_class(&self) -> &str {
        "SplitAuthor"
    }

    fn map_to_gateways(&self, data: &Record) -> Result<Vec<DataMap>> {
        let id = data.get("id").cloned().unwrap_or_default();
        let criteria = if id.is_unset() {
            record! {}
        } else {
            record! { "id" => id }
        };

        let name = data.get("name").cloned().unwrap_or_default();
        let bio = data.get("bio").cloned().unwrap_or_default();

        Ok(vec![
            DataMap::new("db", "authors")
                .with_data(record! { "name" => name })
                .with_criteria(criteria.clone())
                .with_id_property("id"),
            DataMap::new("docs", "bios")
                .with_data(record! { "bio" => bio })
                .with_criteria(criteria),
        ])
    }

    fn map_to_search_gateway(&self, criteria: &Record) -> Result<DataMap> {
        Ok(DataMap::new("db", "authors").with_criteria(criteria.clone()))
    }

    fn map_to_model(&self, row: &Record) -> Result<DataMap> {
        Ok(DataMap::default().with_data(row.clone()))
    }
}
