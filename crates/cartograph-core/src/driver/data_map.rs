use crate::{stmt::Record, Value};

/// Translated field data and criteria for one gateway operation.
///
/// Mappings build a fresh `DataMap` on every save, delete and find. Field
/// names in `data` and `criteria` are storage names, already translated from
/// the domain model.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DataMap {
    /// Name of the registered gateway that executes the operation.
    pub gateway: String,

    /// Name of the table or collection.
    pub store: String,

    /// Field values to write.
    pub data: Record,

    /// Field values to match on read, update and delete.
    pub criteria: Record,

    /// Identifier generator used on insert.
    pub sequence: Option<String>,

    /// Domain field that receives the identifier generated on insert.
    pub id_property: Option<String>,
}

impl DataMap {
    pub fn new(gateway: impl Into<String>, store: impl Into<String>) -> DataMap {
        DataMap {
            gateway: gateway.into(),
            store: store.into(),
            ..DataMap::default()
        }
    }

    pub fn with_data(mut self, data: Record) -> DataMap {
        self.data = data;
        self
    }

    pub fn with_criteria(mut self, criteria: Record) -> DataMap {
        self.criteria = criteria;
        self
    }

    pub fn with_sequence(mut self, sequence: impl Into<String>) -> DataMap {
        self.sequence = Some(sequence.into());
        self
    }

    pub fn with_id_property(mut self, id_property: impl Into<String>) -> DataMap {
        self.id_property = Some(id_property.into());
        self
    }

    pub fn insert_data(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.data.insert(field.into(), value.into());
        self
    }

    pub fn insert_criteria(
        &mut self,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.criteria.insert(field.into(), value.into());
        self
    }
}
