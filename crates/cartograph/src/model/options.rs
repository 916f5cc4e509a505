use crate::{Error, Mapper, Record, Registry, Result, Value};

/// Construction options for a [`Model`](crate::Model).
///
/// A mapper is either injected directly or named by class and resolved
/// against a [`Registry`] with [`resolve`](ModelOptions::resolve).
#[derive(Debug, Clone, Default)]
pub struct ModelOptions {
    pub(crate) mapper: Option<Mapper>,
    pub(crate) mapper_class: Option<String>,
    pub(crate) data: Record,
    pub(crate) id_property: Option<String>,

    /// Predeclared field names. When absent, the data keys are the fields.
    pub(crate) fields: Option<Vec<String>>,
}

impl ModelOptions {
    pub fn new() -> ModelOptions {
        ModelOptions::default()
    }

    pub fn mapper(mut self, mapper: Mapper) -> Self {
        self.mapper = Some(mapper);
        self
    }

    pub fn mapper_class(mut self, class: impl Into<String>) -> Self {
        self.mapper_class = Some(class.into());
        self
    }

    pub fn data(mut self, data: Record) -> Self {
        self.data = data;
        self
    }

    pub fn id_property(mut self, id_property: impl Into<String>) -> Self {
        self.id_property = Some(id_property.into());
        self
    }

    pub fn fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Looks up the named mapper class unless a mapper was injected.
    pub fn resolve(mut self, registry: &Registry) -> Result<Self> {
        if self.mapper.is_none() {
            if let Some(class) = &self.mapper_class {
                self.mapper = Some(registry.mapper(class)?);
            }
        }
        Ok(self)
    }

    /// Parses a configuration mapping.
    ///
    /// Recognized keys are `mapper_class` (a mapper registered in
    /// `registry`), `id_property` and `data` (a mapping of initial field
    /// values). Without a `data` key, every other key is field data.
    pub fn from_record(config: Record, registry: &Registry) -> Result<ModelOptions> {
        let mut options = ModelOptions::new();
        let has_data = config.contains_key("data");

        for (key, value) in config {
            match key.as_str() {
                "data" => {
                    options.data = match value {
                        Value::Map(data) => data,
                        value => {
                            return Err(Error::configuration(format!(
                                "data must be a mapping; got {}",
                                value.variant_name()
                            )))
                        }
                    };
                }
                "mapper_class" => {
                    let class = value
                        .into_string()
                        .map_err(|err| {
                            err.context(Error::configuration("mapper_class must be a string"))
                        })?;
                    options.mapper_class = Some(class);
                }
                "id_property" => {
                    let id_property = value
                        .into_string()
                        .map_err(|err| {
                            err.context(Error::configuration("id_property must be a string"))
                        })?;
                    options.id_property = Some(id_property);
                }
                "mapper" => {
                    return Err(Error::configuration(
                        "a mapper instance cannot be configured from a record; use `ModelOptions::mapper`",
                    ));
                }
                _ if !has_data => {
                    options.data.insert(key, value);
                }
                _ => {}
            }
        }

        options.resolve(registry)
    }
}
