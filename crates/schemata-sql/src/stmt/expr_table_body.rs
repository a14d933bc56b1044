use super::{ColumnDef, Expr};

use schemata_core::{Dependencies, Result};

/// The parenthesized body of a `create table` statement: column declarations
/// followed by table constraints.
///
/// Creating a table with this body solves each declared column, in
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExprTableBody {
    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<Expr>,
}

impl ExprTableBody {
    pub fn new(columns: Vec<ColumnDef>) -> ExprTableBody {
        ExprTableBody {
            columns,
            constraints: vec![],
        }
    }

    pub fn constraint(mut self, constraint: impl Into<Expr>) -> ExprTableBody {
        self.constraints.push(constraint.into());
        self
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|column| column.name.get_name())
    }

    pub fn depended_on(&self) -> Result<Dependencies> {
        let mut ret = Dependencies::new();

        for column in &self.columns {
            ret.append(column.depended_on()?);
        }

        for constraint in &self.constraints {
            ret.append(constraint.depended_on()?);
        }

        Ok(ret)
    }
}

impl Expr {
    pub fn table_body(columns: Vec<ColumnDef>) -> Self {
        ExprTableBody::new(columns).into()
    }
}

impl From<ExprTableBody> for Expr {
    fn from(value: ExprTableBody) -> Self {
        Self::TableBody(value)
    }
}
