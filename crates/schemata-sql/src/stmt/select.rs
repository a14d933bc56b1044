use super::{Expr, Statement, TableDesc};

use schemata_core::Dependencies;

/// `select <columns, ...> from <table> [alias] where <filter>`
///
/// A missing filter renders as `where 1 = 1`. A bare select neither depends
/// on nor solves anything; it is expected to be embedded in a `with` or a
/// `create` rather than ordered on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStmt {
    pub columns: Vec<Expr>,
    pub from: TableDesc,
    pub filter: Option<Expr>,
}

impl SelectStmt {
    pub fn new(from: impl Into<TableDesc>) -> SelectStmt {
        SelectStmt {
            columns: vec![],
            from: from.into(),
            filter: None,
        }
    }

    pub fn column(mut self, expr: impl Into<Expr>) -> SelectStmt {
        self.columns.push(expr.into());
        self
    }

    pub fn filter(mut self, expr: impl Into<Expr>) -> SelectStmt {
        self.filter = Some(expr.into());
        self
    }

    pub fn depended_on(&self) -> Dependencies {
        Dependencies::new()
    }

    pub fn solved(&self) -> Dependencies {
        Dependencies::new()
    }
}

impl From<SelectStmt> for Statement {
    fn from(value: SelectStmt) -> Self {
        Self::Select(value)
    }
}
