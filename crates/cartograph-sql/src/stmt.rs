mod column;
pub use column::Column;

mod condition;
pub use condition::{Condition, Connective, Entry, Predicate};

mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod join;
pub use join::{Join, JoinKind};

mod operand;
pub use operand::Operand;

mod select;
pub use select::Select;

mod table_ref;
pub use table_ref::TableRef;

mod update;
pub use update::Update;

use cartograph_core::Result;

/// A statement the serializer can render.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}

impl Statement {
    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            Statement::Select(select) => select.validate(),
            Statement::Insert(_) => Ok(()),
            Statement::Update(update) => update.validate(),
            Statement::Delete(_) => Ok(()),
        }
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}
