use super::Expr;

use std::ops;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprOr {
    pub operands: Vec<Expr>,
}

impl Expr {
    pub fn or(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let mut lhs = lhs.into();
        let rhs = rhs.into();

        match (&mut lhs, rhs) {
            (Self::Or(lhs_or), Self::Or(rhs_or)) => {
                lhs_or.operands.extend(rhs_or.operands);
                lhs
            }
            (Self::Or(lhs_or), rhs) => {
                lhs_or.operands.push(rhs);
                lhs
            }
            (_, rhs) => ExprOr {
                operands: vec![lhs, rhs],
            }
            .into(),
        }
    }
}

impl ops::Deref for ExprOr {
    type Target = [Expr];

    fn deref(&self) -> &Self::Target {
        self.operands.deref()
    }
}

impl From<ExprOr> for Expr {
    fn from(value: ExprOr) -> Self {
        Self::Or(value)
    }
}
