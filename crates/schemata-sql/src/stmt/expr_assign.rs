use super::{Expr, Ident};

/// `column = value` inside a `set` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprAssign {
    pub column: Ident,
    pub value: Box<Expr>,
}

impl Expr {
    pub fn assign(column: impl Into<Ident>, value: impl Into<Expr>) -> Self {
        ExprAssign {
            column: column.into(),
            value: Box::new(value.into()),
        }
        .into()
    }
}

impl From<ExprAssign> for Expr {
    fn from(value: ExprAssign) -> Self {
        Self::Assign(value)
    }
}
