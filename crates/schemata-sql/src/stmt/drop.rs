use super::{Ident, Statement, Target};

use schemata_core::Dependencies;

/// `drop <target> <name>`
///
/// A drop neither satisfies a creation dependency nor is anything ordered as
/// depending on it, so both edge sets are empty.
#[derive(Debug, Clone, PartialEq)]
pub struct DropStmt {
    pub target: Target,
    pub name: Ident,
}

impl DropStmt {
    pub fn depended_on(&self) -> Dependencies {
        Dependencies::new()
    }

    pub fn solved(&self) -> Dependencies {
        Dependencies::new()
    }
}

impl Statement {
    pub fn drop(target: Target, name: impl Into<Ident>) -> Self {
        DropStmt {
            target,
            name: name.into(),
        }
        .into()
    }
}

impl From<DropStmt> for Statement {
    fn from(value: DropStmt) -> Self {
        Self::Drop(value)
    }
}
