use super::{Column, Condition, Connective, Entry, Join, Operand, Predicate, TableRef};
use crate::Serializer;

use cartograph_core::{Error, Record, Result, Value};

/// A SELECT statement built clause by clause.
///
/// Builder calls append to the statement and return it for further
/// chaining. Calls that add a connective (`and_where`, `or_having`, ...)
/// fail when the clause they extend is still empty. Rendering with
/// [`Select::sql`] is side-effect free.
///
/// ```
/// use cartograph_sql::{Join, Select};
///
/// let select = Select::new(["u.id", "u.email", "a.zip"])
///     .from_as("users", "u")
///     .join(Join::new("addresses").alias("a").on("a.user_id", "u.id"))
///     .where_(("u.id", "=", 1234));
///
/// assert_eq!(
///     select.sql().unwrap(),
///     "SELECT u.id, u.email, a.zip FROM users AS u JOIN addresses a ON a.user_id = u.id WHERE u.id = 1234"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Select {
    pub(crate) columns: Vec<Column>,
    pub(crate) from: Option<TableRef>,
    pub(crate) joins: Vec<Join>,
    pub(crate) filter: Condition,
    pub(crate) group: Vec<String>,
    pub(crate) having: Condition,
    pub(crate) order: Vec<String>,
    pub(crate) limit: Option<u64>,
    pub(crate) offset: Option<u64>,
}

impl Select {
    pub fn new<I>(columns: I) -> Select
    where
        I: IntoIterator,
        I::Item: Into<Column>,
    {
        Select {
            columns: columns.into_iter().map(Into::into).collect(),
            from: None,
            joins: vec![],
            filter: Condition::default(),
            group: vec![],
            having: Condition::default(),
            order: vec![],
            limit: None,
            offset: None,
        }
    }

    /// `SELECT * FROM table WHERE field = ? AND ...`, one bound equality
    /// per criteria entry. `Null` criteria match with `IS NULL`.
    pub fn matching(table: impl Into<TableRef>, criteria: &Record) -> Select {
        let mut filter = Condition::default();

        for (field, value) in criteria {
            let predicate = match value {
                Value::Null => Predicate::new(field.as_str(), "IS", "NULL"),
                value => Predicate::new(field.as_str(), "=", Operand::Value(value.clone())),
            };

            filter = if filter.is_empty() {
                predicate.into()
            } else {
                filter.push(Connective::And, Entry::Predicate(predicate))
            };
        }

        Select::default().from(table).where_(filter)
    }

    pub fn from(mut self, table: impl Into<TableRef>) -> Select {
        self.from = Some(table.into());
        self
    }

    pub fn from_as(self, table: impl Into<String>, alias: impl Into<String>) -> Select {
        self.from(TableRef::new(table).alias(alias))
    }

    pub fn join(mut self, join: Join) -> Select {
        self.joins.push(join);
        self
    }

    /// Appends `condition` to the WHERE clause. A non-empty clause must be
    /// joined with `and_where`/`or_where` instead, or the statement fails
    /// to render.
    pub fn where_(mut self, condition: impl Into<Condition>) -> Select {
        self.filter = self.filter.append(condition.into());
        self
    }

    pub fn and_where(
        self,
        lhs: impl Into<String>,
        op: impl Into<String>,
        rhs: impl Into<Operand>,
    ) -> Result<Select> {
        self.extend_where(Connective::And, Entry::Predicate(Predicate::new(lhs, op, rhs)))
    }

    pub fn or_where(
        self,
        lhs: impl Into<String>,
        op: impl Into<String>,
        rhs: impl Into<Operand>,
    ) -> Result<Select> {
        self.extend_where(Connective::Or, Entry::Predicate(Predicate::new(lhs, op, rhs)))
    }

    /// Appends `AND (condition)`.
    pub fn and_where_nested(self, condition: Condition) -> Result<Select> {
        self.extend_where(Connective::And, Entry::Group(condition))
    }

    /// Appends `OR (condition)`.
    pub fn or_where_nested(self, condition: Condition) -> Result<Select> {
        self.extend_where(Connective::Or, Entry::Group(condition))
    }

    pub fn group<I>(mut self, exprs: I) -> Select
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.group = exprs.into_iter().map(Into::into).collect();
        self
    }

    /// Appends `condition` to the HAVING clause. Requires a GROUP BY clause.
    pub fn having(mut self, condition: impl Into<Condition>) -> Result<Select> {
        self.require_group()?;
        self.having = self.having.append(condition.into());
        Ok(self)
    }

    pub fn and_having(
        self,
        lhs: impl Into<String>,
        op: impl Into<String>,
        rhs: impl Into<Operand>,
    ) -> Result<Select> {
        self.extend_having(Connective::And, Entry::Predicate(Predicate::new(lhs, op, rhs)))
    }

    pub fn or_having(
        self,
        lhs: impl Into<String>,
        op: impl Into<String>,
        rhs: impl Into<Operand>,
    ) -> Result<Select> {
        self.extend_having(Connective::Or, Entry::Predicate(Predicate::new(lhs, op, rhs)))
    }

    /// Replaces the ORDER BY list. Entries may carry a direction, e.g.
    /// `"a.last_name ASC"`.
    pub fn order<I>(mut self, exprs: I) -> Select
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.order = exprs.into_iter().map(Into::into).collect();
        self
    }

    pub fn limit(mut self, limit: u64) -> Select {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Select {
        self.offset = Some(offset);
        self
    }

    /// Renders the statement. Bound values render as quoted literals.
    pub fn sql(&self) -> Result<String> {
        Serializer::sqlite()
            .inline_values()
            .serialize_select(self, &mut Vec::<Value>::new())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn filter(&self) -> &Condition {
        &self.filter
    }

    pub fn having_condition(&self) -> &Condition {
        &self.having
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(Error::invalid_clause("must contain a SELECT list"));
        }

        if !self.having.is_empty() {
            self.require_group()?;
        }

        for join in &self.joins {
            if join.on.is_none() {
                return Err(Error::invalid_clause(format!(
                    "join on `{}` has no ON condition",
                    join.table
                )));
            }
        }

        self.filter.validate("WHERE")?;
        self.having.validate("HAVING")
    }

    fn extend_where(mut self, connective: Connective, entry: Entry) -> Result<Select> {
        if self.filter.is_empty() {
            return Err(Error::invalid_clause("must contain a WHERE clause"));
        }
        self.filter = self.filter.push(connective, entry);
        Ok(self)
    }

    fn extend_having(mut self, connective: Connective, entry: Entry) -> Result<Select> {
        self.require_group()?;
        if self.having.is_empty() {
            return Err(Error::invalid_clause("must contain a HAVING clause"));
        }
        self.having = self.having.push(connective, entry);
        Ok(self)
    }

    fn require_group(&self) -> Result<()> {
        if self.group.is_empty() {
            return Err(Error::invalid_clause("HAVING requires a GROUP BY clause"));
        }
        Ok(())
    }
}

impl Default for Select {
    /// `SELECT *`
    fn default() -> Self {
        Select::new(["*"])
    }
}
