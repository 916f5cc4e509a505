use super::Select;

use cartograph_core::Value;

/// The right-hand side of a predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Inserted verbatim, e.g. `1234`, `u.id` or `'active'`.
    Expr(String),

    /// A value bound as a statement parameter.
    Value(Value),

    /// A nested SELECT, rendered in parentheses.
    Subquery(Box<Select>),
}

impl Operand {
    pub fn value(value: impl Into<Value>) -> Operand {
        Operand::Value(value.into())
    }

    pub fn as_subquery(&self) -> Option<&Select> {
        match self {
            Operand::Subquery(select) => Some(select),
            _ => None,
        }
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Expr(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Expr(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Expr(value.to_string())
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Expr(value.to_string())
    }
}

impl From<Select> for Operand {
    fn from(value: Select) -> Self {
        Operand::Subquery(Box::new(value))
    }
}
