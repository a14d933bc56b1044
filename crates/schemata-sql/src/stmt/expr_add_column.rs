use super::{ColumnDef, Expr};

use schemata_core::{Dependencies, Result};

/// `add column <column definition>`, the body of an `alter table` that adds a
/// column.
///
/// An alter statement carrying this expression solves the added column.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprAddColumn {
    pub column: ColumnDef,
}

impl ExprAddColumn {
    /// Name of the column being added.
    pub fn name(&self) -> &str {
        self.column.name.get_name()
    }

    pub fn depended_on(&self) -> Result<Dependencies> {
        self.column.depended_on()
    }
}

impl Expr {
    pub fn add_column(column: ColumnDef) -> Self {
        ExprAddColumn { column }.into()
    }
}

impl From<ExprAddColumn> for Expr {
    fn from(value: ExprAddColumn) -> Self {
        Self::AddColumn(value)
    }
}
