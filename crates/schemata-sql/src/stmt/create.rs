use super::{Expr, Ident, Statement, Target};

use schemata_core::{Dependencies, Result};

/// `create <target> [if not exists] <name> <create>`
///
/// A constraint renders as `create <create>` only; its body names itself.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateStmt {
    pub target: Target,
    pub name: Ident,
    pub create: Option<Expr>,
    pub if_not_exists: bool,
}

impl CreateStmt {
    pub fn depended_on(&self) -> Result<Dependencies> {
        match &self.create {
            Some(create) => create.depended_on(),
            None => Ok(Dependencies::new()),
        }
    }

    /// The created object followed, for a table body, by each declared column
    /// in declaration order.
    pub fn solved(&self) -> Result<Dependencies> {
        let name = self.name.resolve(self.target)?;

        let mut ret = Dependencies::from(name.to_object());

        if let Some(body) = self.create.as_ref().and_then(Expr::as_table_body) {
            ret.extend(body.column_names().map(|column| name.to_field(column)));
        }

        Ok(ret)
    }
}

impl Statement {
    pub fn create(target: Target, name: impl Into<Ident>, create: impl Into<Expr>) -> Self {
        CreateStmt {
            target,
            name: name.into(),
            create: Some(create.into()),
            if_not_exists: false,
        }
        .into()
    }

    pub fn create_if_not_exists(
        target: Target,
        name: impl Into<Ident>,
        create: impl Into<Expr>,
    ) -> Self {
        CreateStmt {
            target,
            name: name.into(),
            create: Some(create.into()),
            if_not_exists: true,
        }
        .into()
    }

    /// `create schema <name>`
    pub fn create_schema(name: impl Into<Ident>) -> Self {
        CreateStmt {
            target: Target::Schema,
            name: name.into(),
            create: None,
            if_not_exists: false,
        }
        .into()
    }

    /// `create table <name> (<columns>)`
    pub fn create_table(name: impl Into<Ident>, columns: Vec<super::ColumnDef>) -> Self {
        Statement::create(Target::Table, name, Expr::table_body(columns))
    }
}

impl From<CreateStmt> for Statement {
    fn from(value: CreateStmt) -> Self {
        Self::Create(value)
    }
}
