use super::Expr;

/// `on conflict <cause> do update set <set, ...>`
///
/// Only attachable to an [`InsertStmt`](super::InsertStmt). Not a statement,
/// so it reports no dependency edges.
#[derive(Debug, Clone, PartialEq)]
pub struct OnConflict {
    pub cause: Expr,
    pub set: Vec<Expr>,
}

impl OnConflict {
    pub fn new(cause: impl Into<Expr>) -> OnConflict {
        OnConflict {
            cause: cause.into(),
            set: vec![],
        }
    }

    pub fn set(mut self, expr: impl Into<Expr>) -> OnConflict {
        self.set.push(expr.into());
        self
    }
}
