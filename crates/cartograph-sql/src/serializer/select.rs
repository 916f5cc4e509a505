use super::{Comma, Formatter, Params, ToSql};

use crate::stmt::{Column, Join, Select, TableRef};

impl ToSql for &Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let from = self
            .from
            .as_ref()
            .filter(|table| !table.name.is_empty())
            .map(|table| (" FROM ", table));
        let filter = (!self.filter.is_empty()).then_some((" WHERE ", &self.filter));
        let group = (!self.group.is_empty()).then_some((" GROUP BY ", Comma(&self.group)));
        let having = (!self.having.is_empty()).then_some((" HAVING ", &self.having));
        let order = (!self.order.is_empty()).then_some((" ORDER BY ", Comma(&self.order)));
        let limit = self.limit.map(|limit| (" LIMIT ", limit));
        let offset = self.offset.map(|offset| (" OFFSET ", offset));

        fmt!(f, "SELECT " Comma(&self.columns) from);

        for join in &self.joins {
            fmt!(f, " " join);
        }

        fmt!(f, filter group having order limit offset);
    }
}

impl ToSql for &Column {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let alias = self.alias.as_ref().map(|alias| (" AS ", alias));
        fmt!(f, &self.expr alias);
    }
}

impl ToSql for &TableRef {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let alias = self.alias.as_ref().map(|alias| (" AS ", alias));
        fmt!(f, &self.name alias);
    }
}

impl ToSql for &Join {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let alias = self.alias.as_ref().map(|alias| (" ", alias));
        let on = self
            .on
            .as_ref()
            .map(|(left, right)| ((" ON ", left), (" = ", right)));

        let table = &self.table;
        fmt!(f, self.kind.keyword() " " table alias on);
    }
}
