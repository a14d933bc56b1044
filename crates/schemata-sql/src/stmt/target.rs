use std::fmt;

/// The kind of schema object a DDL statement operates on.
///
/// Selects the noun rendered after `create`/`alter`/`drop` and steers how the
/// statement's name is resolved: only a [`Target::Schema`] may be named
/// without a schema qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Schema,
    Table,
    Column,
    Constraint,
    Index,
    Sequence,
    Type,
    View,
    Function,
    Trigger,
}

impl Target {
    pub fn as_str(self) -> &'static str {
        match self {
            Target::Schema => "schema",
            Target::Table => "table",
            Target::Column => "column",
            Target::Constraint => "constraint",
            Target::Index => "index",
            Target::Sequence => "sequence",
            Target::Type => "type",
            Target::View => "view",
            Target::Function => "function",
            Target::Trigger => "trigger",
        }
    }

    pub fn is_schema(self) -> bool {
        matches!(self, Target::Schema)
    }

    pub fn is_constraint(self) -> bool {
        matches!(self, Target::Constraint)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
