use cartograph_core::Record;

/// `DELETE FROM table [WHERE column = param AND ...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,
    pub filter: Record,
}

impl Delete {
    pub fn new(table: impl Into<String>, filter: Record) -> Delete {
        Delete {
            table: table.into(),
            filter,
        }
    }
}
