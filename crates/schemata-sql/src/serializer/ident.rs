use super::{Formatter, ToSql};

use crate::stmt;

impl ToSql for &stmt::Ident {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::Ident::Name(name) => fmt!(f, name),
            stmt::Ident::Selector { container, name } => fmt!(f, container "." name),
        }
    }
}

impl ToSql for &stmt::TableDesc {
    fn to_sql(self, f: &mut Formatter<'_>) {
        spaced!(f, self.table.get_name(), self.alias.as_ref());
    }
}

impl ToSql for stmt::Target {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self.as_str());
    }
}
