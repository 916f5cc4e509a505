use cartograph_core::Record;

/// `INSERT INTO table (columns) VALUES (params)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,
    pub values: Record,
}

impl Insert {
    pub fn new(table: impl Into<String>, values: Record) -> Insert {
        Insert {
            table: table.into(),
            values,
        }
    }
}
