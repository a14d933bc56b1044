use super::{SelectStmt, Statement};

use schemata_core::Dependencies;

/// `with <name> as (<with>) <select>`
#[derive(Debug, Clone, PartialEq)]
pub struct WithStmt {
    pub name: String,
    pub with: SelectStmt,
    pub select: SelectStmt,
}

impl WithStmt {
    pub fn new(name: impl Into<String>, with: SelectStmt, select: SelectStmt) -> WithStmt {
        WithStmt {
            name: name.into(),
            with,
            select,
        }
    }

    /// The outer select's dependencies followed by the common table
    /// expression's.
    pub fn depended_on(&self) -> Dependencies {
        self.select.depended_on().concat(self.with.depended_on())
    }

    /// The outer select's solved edges followed by the common table
    /// expression's.
    pub fn solved(&self) -> Dependencies {
        self.select.solved().concat(self.with.solved())
    }
}

impl From<WithStmt> for Statement {
    fn from(value: WithStmt) -> Self {
        Self::With(value)
    }
}
