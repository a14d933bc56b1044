use super::{Expr, Ident};

/// `add constraint <name> <constraint>`
#[derive(Debug, Clone, PartialEq)]
pub struct ExprAddConstraint {
    pub name: Ident,
    pub constraint: Box<Expr>,
}

impl Expr {
    pub fn add_constraint(name: impl Into<Ident>, constraint: impl Into<Expr>) -> Self {
        ExprAddConstraint {
            name: name.into(),
            constraint: Box::new(constraint.into()),
        }
        .into()
    }
}

impl From<ExprAddConstraint> for Expr {
    fn from(value: ExprAddConstraint) -> Self {
        Self::AddConstraint(value)
    }
}
