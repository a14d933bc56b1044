use super::{Expr, Ident, Target};

use schemata_core::{Dependencies, Result};

/// A column declaration inside a table body or an `add column` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    /// Column name.
    pub name: Ident,

    /// Column type. A qualified type (`schema.type`) is a user-defined type
    /// and is reported as a dependency; unqualified types are built in.
    pub ty: Ident,

    pub not_null: bool,

    pub default: Option<Box<Expr>>,
}

impl ColumnDef {
    pub fn new(name: impl Into<Ident>, ty: impl Into<Ident>) -> ColumnDef {
        ColumnDef {
            name: name.into(),
            ty: ty.into(),
            not_null: false,
            default: None,
        }
    }

    pub fn not_null(mut self) -> ColumnDef {
        self.not_null = true;
        self
    }

    pub fn default(mut self, expr: impl Into<Expr>) -> ColumnDef {
        self.default = Some(Box::new(expr.into()));
        self
    }

    pub fn depended_on(&self) -> Result<Dependencies> {
        let mut ret = Dependencies::new();

        if self.ty.is_qualified() {
            ret.push(self.ty.resolve(Target::Type)?.to_object());
        }

        if let Some(default) = &self.default {
            ret.append(default.depended_on()?);
        }

        Ok(ret)
    }
}
