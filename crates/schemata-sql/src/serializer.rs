#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited, Paren, Tokens};

// Fragment serializers
mod column_def;
mod expr;
mod ident;
mod statement;
mod value;

use crate::stmt;

/// Where serialized SQL is written.
pub(crate) struct Formatter<'a> {
    dst: &'a mut String,
}

/// Serializes a fragment on its own and returns the text.
pub(crate) fn render(fragment: impl ToSql) -> String {
    let mut ret = String::new();

    let mut f = Formatter { dst: &mut ret };
    fragment.to_sql(&mut f);

    ret
}

macro_rules! impl_display {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl core::fmt::Display for $ty {
                fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    f.write_str(&render(self))
                }
            }
        )*
    };
}

impl_display!(
    stmt::Statement,
    stmt::AlterStmt,
    stmt::CreateStmt,
    stmt::DropStmt,
    stmt::InsertStmt,
    stmt::UpdateStmt,
    stmt::SelectStmt,
    stmt::WithStmt,
    stmt::OnConflict,
    stmt::Expr,
    stmt::ColumnDef,
    stmt::Ident,
    stmt::TableDesc,
    stmt::Value,
);
