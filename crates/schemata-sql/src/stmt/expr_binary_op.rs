use super::{BinaryOp, Expr};

/// A binary operation between two expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    /// The left-hand side expression.
    pub lhs: Box<Expr>,

    /// The operator to apply.
    pub op: BinaryOp,

    /// The right-hand side expression.
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn binary_op(lhs: impl Into<Self>, op: BinaryOp, rhs: impl Into<Self>) -> Self {
        ExprBinaryOp {
            op,
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
        .into()
    }

    pub fn eq(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(lhs, BinaryOp::Eq, rhs)
    }

    pub fn ne(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(lhs, BinaryOp::Ne, rhs)
    }

    pub fn gt(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(lhs, BinaryOp::Gt, rhs)
    }

    pub fn lt(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(lhs, BinaryOp::Lt, rhs)
    }

    pub fn is_null(expr: impl Into<Self>) -> Self {
        Expr::binary_op(expr, BinaryOp::Is, super::Value::Null)
    }
}

impl From<ExprBinaryOp> for Expr {
    fn from(value: ExprBinaryOp) -> Self {
        Self::BinaryOp(value)
    }
}
