use super::{Formatter, ToSql};

use crate::stmt;

impl ToSql for &stmt::Value {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use stmt::Value::*;

        match self {
            Bool(true) => fmt!(f, "true"),
            Bool(false) => fmt!(f, "false"),
            I64(value) => f.dst.push_str(&value.to_string()),
            Null => fmt!(f, "null"),
            String(value) => {
                f.dst.push('\'');
                f.dst.push_str(&value.replace('\'', "''"));
                f.dst.push('\'');
            }
        }
    }
}
