use super::{Comma, Formatter, Params, ToSql};

use cartograph_core::Value;

impl ToSql for &Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if f.serializer.inline_values {
            f.dst.push_str(&self.quoted());
            return;
        }

        match self {
            // Lists expand to one parameter per item, e.g. for `IN`.
            Value::List(items) => fmt!(f, "(" Comma(items) ")"),
            value => {
                let placeholder = f.params.push(value);
                f.num_params += 1;
                fmt!(f, placeholder)
            }
        }
    }
}
