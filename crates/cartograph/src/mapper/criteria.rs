use crate::{Record, Value};

/// What [`Mapper::find`](crate::Mapper::find) searches for.
#[derive(Debug, Clone, PartialEq)]
pub enum Criteria {
    /// A bare identifier value.
    Identity(Value),

    /// Equality matches on domain fields, combined with AND. Empty matches
    /// everything.
    Fields(Record),
}

impl Criteria {
    /// Matches every stored model.
    pub fn all() -> Criteria {
        Criteria::Fields(Record::new())
    }

    /// The identifier this criteria looks up, if it is a bare identifier or
    /// a mapping with exactly one entry, the identifier field.
    pub fn identity(&self, id_property: &str) -> Option<&Value> {
        match self {
            Criteria::Identity(value) => Some(value),
            Criteria::Fields(fields) if fields.len() == 1 => fields.get(id_property),
            Criteria::Fields(_) => None,
        }
    }

    pub(crate) fn into_record(self, id_property: &str) -> Record {
        match self {
            Criteria::Identity(value) => {
                let mut record = Record::new();
                record.insert(id_property.to_string(), value);
                record
            }
            Criteria::Fields(fields) => fields,
        }
    }
}

impl From<Record> for Criteria {
    fn from(value: Record) -> Self {
        Criteria::Fields(value)
    }
}

impl From<Value> for Criteria {
    fn from(value: Value) -> Self {
        match value {
            Value::Map(fields) => Criteria::Fields(fields),
            value => Criteria::Identity(value),
        }
    }
}

impl From<i64> for Criteria {
    fn from(value: i64) -> Self {
        Criteria::Identity(value.into())
    }
}

impl From<i32> for Criteria {
    fn from(value: i32) -> Self {
        Criteria::Identity(value.into())
    }
}

impl From<&str> for Criteria {
    fn from(value: &str) -> Self {
        Criteria::Identity(value.into())
    }
}

impl From<String> for Criteria {
    fn from(value: String) -> Self {
        Criteria::Identity(value.into())
    }
}
