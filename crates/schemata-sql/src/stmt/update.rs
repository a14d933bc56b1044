use super::{Expr, Statement, TableDesc};

use schemata_core::{Dependencies, Result};

/// `update <table> [alias] set <set, ...> where <filter>`
///
/// A missing filter renders as `where 1 = 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStmt {
    pub table: TableDesc,
    pub set: Vec<Expr>,
    pub filter: Option<Expr>,
}

impl UpdateStmt {
    pub fn new(table: impl Into<TableDesc>) -> UpdateStmt {
        UpdateStmt {
            table: table.into(),
            set: vec![],
            filter: None,
        }
    }

    pub fn set(mut self, expr: impl Into<Expr>) -> UpdateStmt {
        self.set.push(expr.into());
        self
    }

    pub fn filter(mut self, expr: impl Into<Expr>) -> UpdateStmt {
        self.filter = Some(expr.into());
        self
    }

    /// Dependencies of each `set` expression, in order. The filter is not
    /// inspected.
    pub fn depended_on(&self) -> Result<Dependencies> {
        let mut ret = Dependencies::new();
        for set in &self.set {
            ret.append(set.depended_on()?);
        }
        Ok(ret)
    }

    pub fn solved(&self) -> Dependencies {
        Dependencies::new()
    }
}

impl From<UpdateStmt> for Statement {
    fn from(value: UpdateStmt) -> Self {
        Self::Update(value)
    }
}
