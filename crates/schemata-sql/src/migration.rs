use crate::stmt::Statement;

use schemata_core::{err, Dependencies, Result};

/// Configuration for rendering a migration script.
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    /// Appended to every rendered statement
    pub terminator: String,

    /// Placed between statements
    pub separator: String,

    /// Optional comment written as the first line of the script
    pub header: Option<String>,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            terminator: ";".to_string(),
            separator: "\n".to_string(),
            header: None,
        }
    }
}

impl MigrationConfig {
    /// Create a new MigrationConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the statement terminator
    pub fn terminator(mut self, terminator: impl Into<String>) -> Self {
        self.terminator = terminator.into();
        self
    }

    /// Set the separator placed between statements
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the header comment
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
}

/// An ordered batch of statements making up one migration.
///
/// The batch does not reorder anything. It renders the statements as given
/// and collects the dependency edges an external planner needs, attributing
/// any resolution failure to the statement that caused it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Migration {
    statements: Vec<Statement>,
}

/// The dependency edges of one statement in a [`Migration`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatementEdges<'a> {
    /// Position of the statement within the migration.
    pub index: usize,

    pub statement: &'a Statement,

    pub depended_on: Dependencies,

    pub solved: Dependencies,
}

impl Migration {
    pub fn new() -> Migration {
        Migration::default()
    }

    pub fn push(&mut self, statement: impl Into<Statement>) {
        self.statements.push(statement.into());
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Renders every statement in order.
    pub fn script(&self, config: &MigrationConfig) -> String {
        let mut lines = Vec::with_capacity(self.statements.len() + 1);

        if let Some(header) = &config.header {
            lines.push(format!("-- {header}"));
        }

        for statement in &self.statements {
            lines.push(format!("{statement}{}", config.terminator));
        }

        tracing::debug!(statements = self.statements.len(), "rendered migration script");

        lines.join(config.separator.as_str())
    }

    /// Collects the dependency edges of every statement, in order.
    ///
    /// Fails on the first statement whose names cannot be resolved. The
    /// returned error names the statement's position and text.
    pub fn edges(&self) -> Result<Vec<StatementEdges<'_>>> {
        let mut ret = Vec::with_capacity(self.statements.len());

        for (index, statement) in self.statements.iter().enumerate() {
            let depended_on = statement.depended_on().map_err(|e| {
                e.context(err!("depended-on edges of statement #{index} `{statement}`"))
            })?;
            let solved = statement.solved().map_err(|e| {
                e.context(err!("solved edges of statement #{index} `{statement}`"))
            })?;

            tracing::trace!(
                index,
                depended_on = depended_on.len(),
                solved = solved.len(),
                "statement edges"
            );

            ret.push(StatementEdges {
                index,
                statement,
                depended_on,
                solved,
            });
        }

        tracing::debug!(statements = ret.len(), "collected migration edges");

        Ok(ret)
    }
}

impl FromIterator<Statement> for Migration {
    fn from_iter<T: IntoIterator<Item = Statement>>(iter: T) -> Self {
        Migration {
            statements: iter.into_iter().collect(),
        }
    }
}

impl Extend<Statement> for Migration {
    fn extend<T: IntoIterator<Item = Statement>>(&mut self, iter: T) {
        self.statements.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Migration {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
