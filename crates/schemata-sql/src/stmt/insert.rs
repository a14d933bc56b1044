use super::{Expr, OnConflict, Statement, TableDesc, Target};

use indexmap::IndexMap;
use schemata_core::{Dependencies, Result};

/// `insert into <table> (<fields>) values (<values>) [on conflict ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStmt {
    pub table: TableDesc,

    /// Field names mapped to inserted values. Rendered in insertion order so
    /// the generated SQL is stable across runs.
    pub values: IndexMap<String, Expr>,

    pub on_conflict: Option<OnConflict>,
}

impl InsertStmt {
    pub fn new(table: impl Into<TableDesc>) -> InsertStmt {
        InsertStmt {
            table: table.into(),
            values: IndexMap::new(),
            on_conflict: None,
        }
    }

    /// Appends a field. Setting a field twice replaces its value but keeps its
    /// original position.
    pub fn value(mut self, field: impl Into<String>, value: impl Into<Expr>) -> InsertStmt {
        self.values.insert(field.into(), value.into());
        self
    }

    pub fn on_conflict(mut self, on_conflict: OnConflict) -> InsertStmt {
        self.on_conflict = Some(on_conflict);
        self
    }

    /// The table being inserted into, as a single `{schema, table, ""}` edge.
    pub fn depended_on(&self) -> Result<Dependencies> {
        let table = self.table.table.resolve(Target::Table)?;
        Ok(Dependencies::from(table.to_object()))
    }

    pub fn solved(&self) -> Dependencies {
        Dependencies::new()
    }
}

impl From<InsertStmt> for Statement {
    fn from(value: InsertStmt) -> Self {
        Self::Insert(value)
    }
}
