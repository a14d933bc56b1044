use super::{Formatter, ToSql, Tokens};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mut tokens = Tokens::new(f);
        tokens.push(&self.name);
        tokens.push(&self.ty);

        if self.not_null {
            tokens.push("not null");
        }

        if let Some(default) = &self.default {
            tokens.push("default");
            tokens.push(&**default);
        }
    }
}
