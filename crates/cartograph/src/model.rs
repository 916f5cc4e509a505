mod options;
pub use options::ModelOptions;

use crate::{Error, Mapper, Nested, Record, Result, Value};

use parking_lot::RwLock;
use std::{fmt, sync::Arc};

/// A domain object: an ordered, fixed set of named fields bound to the
/// [`Mapper`] that persists it.
///
/// `Model` is a handle. Clones refer to the same instance, which is what the
/// identity map hands back from [`Mapper::find`].
///
/// The field set is fixed when the model is built. Reading or writing a
/// field outside it fails with an undeclared field error; new fields are
/// only added through [`Model::fill`] with `update_schema` set.
#[derive(Clone)]
pub struct Model {
    inner: Arc<Inner>,
}

struct Inner {
    fields: RwLock<Record>,
    id_property: String,
    mapper: RwLock<Option<Mapper>>,
}

impl Model {
    /// Builds a model from resolved options.
    ///
    /// Declared fields start as `Null` and are then filled from the option
    /// data; data keys outside the declared fields are ignored. Without
    /// declared fields, the data keys become the field set.
    pub fn new(options: ModelOptions) -> Result<Model> {
        let ModelOptions {
            mapper,
            mapper_class,
            data,
            id_property,
            fields,
        } = options;

        if mapper.is_none() {
            if let Some(class) = mapper_class {
                return Err(Error::configuration(format!(
                    "mapper class `{class}` was not resolved; call `ModelOptions::resolve` first"
                )));
            }
        }

        let id_property = id_property
            .or_else(|| mapper.as_ref().map(|m| m.id_property().to_string()))
            .unwrap_or_else(|| "id".to_string());

        let record = match fields {
            Some(names) => {
                let mut record: Record = names.into_iter().map(|n| (n, Value::Null)).collect();
                for (key, value) in data {
                    if let Some(slot) = record.get_mut(&key) {
                        *slot = value;
                    }
                }
                record
            }
            None => data,
        };

        Ok(Model {
            inner: Arc::new(Inner {
                fields: RwLock::new(record),
                id_property,
                mapper: RwLock::new(mapper),
            }),
        })
    }

    pub fn get(&self, field: &str) -> Result<Value> {
        self.inner
            .fields
            .read()
            .get(field)
            .cloned()
            .ok_or_else(|| Error::undeclared_field(field))
    }

    pub fn set(&self, field: &str, value: impl Into<Value>) -> Result<&Model> {
        match self.inner.fields.write().get_mut(field) {
            Some(slot) => *slot = value.into(),
            None => return Err(Error::undeclared_field(field)),
        }
        Ok(self)
    }

    /// Resets a declared field to `Null`.
    pub fn unset(&self, field: &str) -> Result<&Model> {
        self.set(field, Value::Null)
    }

    /// Returns `true` if the field is declared and not `Null`.
    pub fn is_set(&self, field: &str) -> bool {
        self.inner
            .fields
            .read()
            .get(field)
            .is_some_and(|value| !value.is_null())
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.inner.fields.read().contains_key(field)
    }

    /// Declared field names, in declaration order.
    pub fn fields(&self) -> Vec<String> {
        self.inner.fields.read().keys().cloned().collect()
    }

    pub fn to_record(&self) -> Record {
        self.inner.fields.read().clone()
    }

    /// Copies `data` onto the model. Keys outside the field set are ignored,
    /// or declared when `update_schema` is set.
    pub fn fill(&self, data: &Record, update_schema: bool) -> &Model {
        let mut fields = self.inner.fields.write();

        for (key, value) in data {
            if let Some(slot) = fields.get_mut(key) {
                *slot = value.clone();
            } else if update_schema {
                fields.insert(key.clone(), value.clone());
            }
        }

        drop(fields);
        self
    }

    pub fn id_property(&self) -> &str {
        &self.inner.id_property
    }

    /// The identifier value, `Null` when the identifier field is undeclared.
    pub fn identity(&self) -> Value {
        self.inner
            .fields
            .read()
            .get(&self.inner.id_property)
            .cloned()
            .unwrap_or_default()
    }

    pub fn set_identity(&self, value: impl Into<Value>) -> Result<&Model> {
        self.set(&self.inner.id_property, value)
    }

    pub fn mapper(&self) -> Result<Mapper> {
        self.inner.mapper.read().clone().ok_or_else(|| {
            Error::configuration(format!(
                "model with identity {} has no mapper",
                self.identity()
            ))
        })
    }

    pub fn set_mapper(&self, mapper: Mapper) -> &Model {
        *self.inner.mapper.write() = Some(mapper);
        self
    }

    /// Persists the model through its mapper.
    pub fn save(&self, cascade: bool) -> Result<()> {
        self.mapper()?.save(self, cascade)
    }

    pub fn delete(&self) -> Result<()> {
        self.mapper()?.delete(self, false)
    }

    /// Returns `true` if both handles refer to the same instance.
    pub fn ptr_eq(&self, other: &Model) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Reads a dotted path through mapping-valued fields, e.g.
    /// `address.city`. The first segment must be a declared field.
    pub fn get_path(&self, path: &str) -> Result<Option<Value>> {
        let (field, rest) = split_path(path);
        let value = self.get(field)?;

        match rest {
            None => Ok(Some(value)),
            Some(rest) => Ok(Nested::from(value).value(rest)),
        }
    }

    /// Writes a dotted path through mapping-valued fields. Intermediate nodes
    /// must already exist.
    pub fn set_path(&self, path: &str, value: impl Into<Value>) -> Result<&Model> {
        let (field, rest) = split_path(path);

        let Some(rest) = rest else {
            return self.set(field, value);
        };

        let mut nested = Nested::from(self.get(field)?);
        nested.set(rest, value)?;
        self.set(field, Value::from(nested))
    }
}

fn split_path(path: &str) -> (&str, Option<&str>) {
    match path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mapper = self.inner.mapper.read();
        f.debug_struct("Model")
            .field(
                "class",
                &mapper.as_ref().map(|mapper| mapper.model_class().to_string()),
            )
            .field("fields", &*self.inner.fields.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_path_segments() {
        assert_eq!(split_path("name"), ("name", None));
        assert_eq!(split_path("address.city"), ("address", Some("city")));
        assert_eq!(split_path("a.b.c"), ("a", Some("b.c")));
    }
}
