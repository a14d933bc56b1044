use super::{Expr, Ident, Target};

use schemata_core::{Dependencies, Result};

/// `foreign key (<columns>) references <table> (<referenced columns>)`
///
/// Depends on the referenced table and on each referenced column. The
/// referenced table must be schema-qualified.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprForeignKey {
    pub columns: Vec<Ident>,
    pub references: Ident,
    pub ref_columns: Vec<Ident>,
}

impl ExprForeignKey {
    pub fn depended_on(&self) -> Result<Dependencies> {
        let table = self.references.resolve(Target::Table)?;

        let mut ret = Dependencies::from(table.to_object());
        ret.extend(
            self.ref_columns
                .iter()
                .map(|column| table.to_field(column.get_name())),
        );
        Ok(ret)
    }
}

impl Expr {
    pub fn foreign_key<C, R>(columns: C, references: impl Into<Ident>, ref_columns: R) -> Self
    where
        C: IntoIterator,
        C::Item: Into<Ident>,
        R: IntoIterator,
        R::Item: Into<Ident>,
    {
        ExprForeignKey {
            columns: columns.into_iter().map(Into::into).collect(),
            references: references.into(),
            ref_columns: ref_columns.into_iter().map(Into::into).collect(),
        }
        .into()
    }
}

impl From<ExprForeignKey> for Expr {
    fn from(value: ExprForeignKey) -> Self {
        Self::ForeignKey(value)
    }
}
