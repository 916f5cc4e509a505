use super::{Formatter, Params, ToSql};

use crate::stmt::{Condition, Entry, Operand, Predicate, Select};

impl ToSql for &Condition {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let mut s = "";
        for entry in self.entries() {
            fmt!(f, s entry);
            s = " ";
        }
    }
}

impl ToSql for &Entry {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Entry::Predicate(predicate) => predicate.to_sql(f),
            Entry::Connective(connective) => connective.keyword().to_sql(f),
            Entry::Group(group) => fmt!(f, "(" group ")"),
        }
    }
}

impl ToSql for &Predicate {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let Predicate { lhs, op, rhs } = self;
        fmt!(f, lhs " " op " " rhs);
    }
}

impl ToSql for &Operand {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Operand::Expr(expr) => expr.to_sql(f),
            Operand::Value(value) => value.to_sql(f),
            Operand::Subquery(select) => {
                let select: &Select = select;
                fmt!(f, "(" select ")")
            }
        }
    }
}
