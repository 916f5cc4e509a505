/// A FROM target: a table name, optionally aliased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub name: String,
    pub alias: Option<String>,
}

impl TableRef {
    pub fn new(name: impl Into<String>) -> TableRef {
        TableRef {
            name: name.into(),
            alias: None,
        }
    }

    /// Renders as `name AS alias`.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> TableRef {
        self.alias = Some(alias.into());
        self
    }
}

impl From<&str> for TableRef {
    fn from(value: &str) -> Self {
        TableRef::new(value)
    }
}

impl From<String> for TableRef {
    fn from(value: String) -> Self {
        TableRef::new(value)
    }
}
