/// One entry of a SELECT list: an expression, optionally aliased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub expr: String,
    pub alias: Option<String>,
}

impl Column {
    pub fn new(expr: impl Into<String>) -> Column {
        Column {
            expr: expr.into(),
            alias: None,
        }
    }

    /// Renders as `expr AS alias`.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Column {
        self.alias = Some(alias.into());
        self
    }
}

impl From<&str> for Column {
    fn from(value: &str) -> Self {
        Column::new(value)
    }
}

impl From<String> for Column {
    fn from(value: String) -> Self {
        Column::new(value)
    }
}
