use super::Mapping;
use crate::{convert_date_time, DataMap, Error, Record, Result, Value};

use indexmap::IndexMap;

/// Maps a model type onto a single table or collection of one gateway.
///
/// Domain fields are translated to storage fields through an explicit field
/// map. Fields without an entry are not persisted.
///
/// ```
/// use cartograph::TableMapping;
///
/// let authors = TableMapping::new("Author", "db", "authors")
///     .field("id", "author_id")
///     .field("name", "entity_name")
///     .sequence("authors_id_seq");
///
/// assert_eq!(authors.storage_field("name"), Some("entity_name"));
/// ```
#[derive(Debug, Clone)]
pub struct TableMapping {
    model_class: String,
    gateway: String,
    table: String,
    sequence: Option<String>,
    id_property: String,

    /// domain field -> storage field
    fields: IndexMap<String, String>,
}

impl TableMapping {
    pub fn new(
        model_class: impl Into<String>,
        gateway: impl Into<String>,
        table: impl Into<String>,
    ) -> TableMapping {
        TableMapping {
            model_class: model_class.into(),
            gateway: gateway.into(),
            table: table.into(),
            sequence: None,
            id_property: "id".to_string(),
            fields: IndexMap::new(),
        }
    }

    pub fn field(mut self, domain: impl Into<String>, storage: impl Into<String>) -> Self {
        self.fields.insert(domain.into(), storage.into());
        self
    }

    pub fn fields<D, S>(mut self, fields: impl IntoIterator<Item = (D, S)>) -> Self
    where
        D: Into<String>,
        S: Into<String>,
    {
        self.fields
            .extend(fields.into_iter().map(|(d, s)| (d.into(), s.into())));
        self
    }

    pub fn sequence(mut self, sequence: impl Into<String>) -> Self {
        self.sequence = Some(sequence.into());
        self
    }

    /// Names the domain field that identifies a model. Defaults to `id`.
    pub fn with_id_property(mut self, id_property: impl Into<String>) -> Self {
        self.id_property = id_property.into();
        self
    }

    pub fn gateway(&self) -> &str {
        &self.gateway
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// The storage field for a domain field. An unmapped identifier field is
    /// stored under its own name.
    pub fn storage_field(&self, domain: &str) -> Option<&str> {
        match self.fields.get(domain) {
            Some(storage) => Some(storage.as_str()),
            None if domain == self.id_property => Some(self.id_property.as_str()),
            None => None,
        }
    }

    pub fn domain_field(&self, storage: &str) -> Option<&str> {
        match self.fields.iter().find(|(_, s)| *s == storage) {
            Some((domain, _)) => Some(domain.as_str()),
            None if storage == self.id_property && !self.fields.contains_key(storage) => {
                Some(self.id_property.as_str())
            }
            None => None,
        }
    }

    fn storage_id(&self) -> &str {
        self.storage_field(&self.id_property)
            .unwrap_or(&self.id_property)
    }

    fn data_map(&self) -> DataMap {
        DataMap::new(&self.gateway, &self.table)
    }
}

/// Timestamps are stored in their textual form.
fn to_storage(value: &Value) -> Value {
    match value {
        Value::DateTime(v) => Value::String(convert_date_time(v)),
        value => value.clone(),
    }
}

impl Mapping for TableMapping {
    fn model_class(&self) -> &str {
        &self.model_class
    }

    fn id_property(&self) -> &str {
        &self.id_property
    }

    fn map_to_gateways(&self, data: &Record) -> Result<Vec<DataMap>> {
        let identity = data.get(&self.id_property).unwrap_or(&Value::Null);
        let mut map = self.data_map().with_id_property(&self.id_property);

        if let Some(sequence) = &self.sequence {
            map = map.with_sequence(sequence);
        }

        for (domain, storage) in &self.fields {
            let Some(value) = data.get(domain) else {
                continue;
            };

            // Unset identifiers are left for the store to generate
            if *domain == self.id_property && value.is_unset() {
                continue;
            }

            map.insert_data(storage, to_storage(value));
        }

        if !identity.is_unset() {
            map.insert_criteria(self.storage_id(), identity.clone());
        }

        Ok(vec![map])
    }

    fn map_to_search_gateway(&self, criteria: &Record) -> Result<DataMap> {
        let mut map = self.data_map();

        for (key, value) in criteria {
            let storage = self
                .storage_field(key)
                .ok_or_else(|| Error::invalid_search_field(key.as_str()))?;
            map.insert_criteria(storage, to_storage(value));
        }

        Ok(map)
    }

    fn map_to_model(&self, row: &Record) -> Result<DataMap> {
        let mut map = self.data_map();

        for (storage, value) in row {
            if let Some(domain) = self.domain_field(storage) {
                map.insert_data(domain, value.clone());
            }
        }

        Ok(map)
    }
}
