use cartograph_core::{Error, Record, Result};

/// `UPDATE table SET column = param, ... [WHERE column = param AND ...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,
    pub assignments: Record,
    pub filter: Record,
}

impl Update {
    pub fn new(table: impl Into<String>, assignments: Record, filter: Record) -> Update {
        Update {
            table: table.into(),
            assignments,
            filter,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.assignments.is_empty() {
            return Err(Error::invalid_clause(format!(
                "UPDATE of `{}` assigns no columns",
                self.table
            )));
        }
        Ok(())
    }
}
