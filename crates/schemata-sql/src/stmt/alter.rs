use super::{Expr, Ident, Statement, Target};

use schemata_core::{Dependencies, Result};

/// `alter <target> <name> <alter>`
#[derive(Debug, Clone, PartialEq)]
pub struct AlterStmt {
    pub target: Target,
    pub name: Ident,
    pub alter: Expr,
}

impl AlterStmt {
    pub fn depended_on(&self) -> Result<Dependencies> {
        self.alter.depended_on()
    }

    /// The altered object, or the added column when the alteration is an
    /// `add column`.
    pub fn solved(&self) -> Result<Dependencies> {
        let name = self.name.resolve(self.target)?;

        let solved = match self.alter.as_add_column() {
            Some(add) => name.to_field(add.name()),
            None => name.to_object(),
        };

        Ok(Dependencies::from(solved))
    }
}

impl Statement {
    pub fn alter(target: Target, name: impl Into<Ident>, alter: impl Into<Expr>) -> Self {
        AlterStmt {
            target,
            name: name.into(),
            alter: alter.into(),
        }
        .into()
    }

    /// `alter table <table> add column <column>`
    pub fn add_column(table: impl Into<Ident>, column: super::ColumnDef) -> Self {
        Statement::alter(Target::Table, table, Expr::add_column(column))
    }
}

impl From<AlterStmt> for Statement {
    fn from(value: AlterStmt) -> Self {
        Self::Alter(value)
    }
}
