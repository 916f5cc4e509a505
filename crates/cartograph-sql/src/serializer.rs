#[macro_use]
mod fmt;
use fmt::ToSql;

mod condition;

mod delim;
use delim::{Comma, Delimited};

mod flavor;
use flavor::Flavor;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod select;
mod statement;
mod value;

use crate::stmt::{Select, Statement};

use cartograph_core::Result;

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The database flavor decides how bound parameters are written.
    flavor: Flavor,

    /// When set, values are written as quoted literals instead of being
    /// pushed to the parameter list.
    inline_values: bool,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// Number of parameters pushed while serializing
    num_params: usize,
}

impl Serializer {
    /// Writes values as quoted literals rather than placeholders.
    #[must_use]
    pub fn inline_values(mut self) -> Serializer {
        self.inline_values = true;
        self
    }

    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> Result<String> {
        stmt.validate()?;
        Ok(self.render(stmt, params))
    }

    pub fn serialize_select(&self, select: &Select, params: &mut impl Params) -> Result<String> {
        select.validate()?;
        Ok(self.render(select, params))
    }

    fn render<T: ToSql, P: Params>(&self, node: T, params: &mut P) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            num_params: 0,
        };

        node.to_sql(&mut fmt);

        let num_params = fmt.num_params;
        tracing::debug!(
            flavor = ?self.flavor,
            sql = %ret,
            num_params,
            "serialized statement"
        );

        ret
    }
}
