use super::{Expr, SelectStmt};

/// A sub-select embedded in an expression, rendered in parentheses.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub stmt: Box<SelectStmt>,
}

impl Expr {
    pub fn stmt(stmt: SelectStmt) -> Self {
        ExprStmt {
            stmt: Box::new(stmt),
        }
        .into()
    }
}

impl From<ExprStmt> for Expr {
    fn from(value: ExprStmt) -> Self {
        Self::Stmt(value)
    }
}

impl From<SelectStmt> for Expr {
    fn from(value: SelectStmt) -> Self {
        Expr::stmt(value)
    }
}
