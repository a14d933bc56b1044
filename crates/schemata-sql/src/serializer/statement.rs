use super::{Comma, Formatter, Paren, ToSql};

use crate::stmt;

/// `where` clause body. Statements without a filter render `1 = 1`.
struct Filter<'a>(Option<&'a stmt::Expr>);

impl ToSql for Filter<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self.0 {
            Some(expr) => expr.to_sql(f),
            None => fmt!(f, "1 = 1"),
        }
    }
}

impl ToSql for &stmt::Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::Statement::Alter(stmt) => stmt.to_sql(f),
            stmt::Statement::Create(stmt) => stmt.to_sql(f),
            stmt::Statement::Drop(stmt) => stmt.to_sql(f),
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
            stmt::Statement::Update(stmt) => stmt.to_sql(f),
            stmt::Statement::Select(stmt) => stmt.to_sql(f),
            stmt::Statement::With(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::AlterStmt {
    fn to_sql(self, f: &mut Formatter<'_>) {
        spaced!(f, "alter", self.target, self.name.get_name(), &self.alter);
    }
}

impl ToSql for &stmt::CreateStmt {
    fn to_sql(self, f: &mut Formatter<'_>) {
        // The constraint body carries its own name
        if self.target.is_constraint() {
            spaced!(f, "create", self.create.as_ref());
            return;
        }

        let if_not_exists = self.if_not_exists.then_some("if not exists");

        spaced!(
            f,
            "create",
            self.target,
            if_not_exists,
            self.name.get_name(),
            self.create.as_ref(),
        );
    }
}

impl ToSql for &stmt::DropStmt {
    fn to_sql(self, f: &mut Formatter<'_>) {
        spaced!(f, "drop", self.target, self.name.get_name());
    }
}

impl ToSql for &stmt::InsertStmt {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let fields = Comma(self.values.keys());
        let values = Comma(self.values.values());

        spaced!(
            f,
            "insert into",
            self.table.table.get_name(),
            Paren(fields),
            "values",
            Paren(values),
            self.on_conflict.as_ref(),
        );
    }
}

impl ToSql for &stmt::OnConflict {
    fn to_sql(self, f: &mut Formatter<'_>) {
        spaced!(
            f,
            "on conflict",
            &self.cause,
            "do update set",
            Comma(&self.set),
        );
    }
}

impl ToSql for &stmt::UpdateStmt {
    fn to_sql(self, f: &mut Formatter<'_>) {
        spaced!(
            f,
            "update",
            &self.table,
            "set",
            Comma(&self.set),
            "where",
            Filter(self.filter.as_ref()),
        );
    }
}

impl ToSql for &stmt::SelectStmt {
    fn to_sql(self, f: &mut Formatter<'_>) {
        spaced!(
            f,
            "select",
            Comma(&self.columns),
            "from",
            &self.from,
            "where",
            Filter(self.filter.as_ref()),
        );
    }
}

impl ToSql for &stmt::WithStmt {
    fn to_sql(self, f: &mut Formatter<'_>) {
        spaced!(
            f,
            "with",
            &self.name,
            "as",
            Paren(&self.with),
            &self.select,
        );
    }
}
