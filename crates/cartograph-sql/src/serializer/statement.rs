use super::{Comma, Delimited, Formatter, Params, ToSql};

use crate::stmt::{Delete, Insert, Statement, Update};

use cartograph_core::{Record, Value};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = &self.table;

        if self.values.is_empty() {
            fmt!(f, "INSERT INTO " table " DEFAULT VALUES");
            return;
        }

        let columns = Comma(self.values.keys());
        let values = Comma(self.values.values());

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let assignments = Comma(
            self.assignments
                .iter()
                .map(|(column, value)| Assignment(column, value)),
        );

        let table = &self.table;
        fmt!(f, "UPDATE " table " SET " assignments Filter(&self.filter));
    }
}

impl ToSql for &Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = &self.table;
        fmt!(f, "DELETE FROM " table Filter(&self.filter));
    }
}

/// `column = param`
struct Assignment<'a>(&'a String, &'a Value);

impl ToSql for Assignment<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, self.0 " = " self.1);
    }
}

/// ` WHERE a = ?1 AND b IS NULL`, or nothing for empty criteria.
struct Filter<'a>(&'a Record);

impl ToSql for Filter<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if self.0.is_empty() {
            return;
        }

        let matches = Delimited(self.0.iter().map(|(column, value)| Matches(column, value)), " AND ");
        fmt!(f, " WHERE " matches);
    }
}

struct Matches<'a>(&'a String, &'a Value);

impl ToSql for Matches<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self.1 {
            Value::Null => fmt!(f, self.0 " IS NULL"),
            value => fmt!(f, self.0 " = " value),
        }
    }
}
