use super::*;

use schemata_core::Result;

/// An expression node.
///
/// Most variants only render text. Those that reference other schema objects
/// (foreign keys, qualified column types, embedded selects) also report
/// dependency edges through [`Expr::depended_on`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `add column <column definition>`
    AddColumn(ExprAddColumn),

    /// `add constraint <name> <constraint>`
    AddConstraint(ExprAddConstraint),

    /// AND a set of expressions
    And(ExprAnd),

    /// `column = value`, as used by `set` clauses
    Assign(ExprAssign),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// `foreign key (...) references table (...)`
    ForeignKey(ExprForeignKey),

    /// A column or object reference
    Ident(Ident),

    /// OR a set of expressions
    Or(ExprOr),

    /// SQL text rendered verbatim
    Raw(String),

    /// A parenthesized sub-select
    Stmt(ExprStmt),

    /// The body of a `create table` statement
    TableBody(ExprTableBody),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    /// SQL text rendered verbatim. Contributes no dependencies.
    pub fn raw(text: impl Into<String>) -> Expr {
        Expr::Raw(text.into())
    }

    pub fn ident(ident: impl Into<Ident>) -> Expr {
        Expr::Ident(ident.into())
    }

    pub fn value(value: impl Into<Value>) -> Expr {
        Expr::Value(value.into())
    }

    pub fn as_add_column(&self) -> Option<&ExprAddColumn> {
        match self {
            Expr::AddColumn(expr) => Some(expr),
            _ => None,
        }
    }

    pub fn as_table_body(&self) -> Option<&ExprTableBody> {
        match self {
            Expr::TableBody(expr) => Some(expr),
            _ => None,
        }
    }

    /// Objects that must exist before this expression can be executed, in
    /// the order they appear in the expression.
    pub fn depended_on(&self) -> Result<Dependencies> {
        match self {
            Expr::AddColumn(expr) => expr.depended_on(),
            Expr::AddConstraint(expr) => expr.constraint.depended_on(),
            Expr::And(expr) => operands_depended_on(&expr.operands),
            Expr::Assign(expr) => expr.value.depended_on(),
            Expr::BinaryOp(expr) => Ok(expr.lhs.depended_on()?.concat(expr.rhs.depended_on()?)),
            Expr::ForeignKey(expr) => expr.depended_on(),
            Expr::Or(expr) => operands_depended_on(&expr.operands),
            Expr::Stmt(expr) => Ok(expr.stmt.depended_on()),
            Expr::TableBody(expr) => expr.depended_on(),
            Expr::Ident(_) | Expr::Raw(_) | Expr::Value(_) => Ok(Dependencies::new()),
        }
    }
}

fn operands_depended_on(operands: &[Expr]) -> Result<Dependencies> {
    let mut ret = Dependencies::new();
    for operand in operands {
        ret.append(operand.depended_on()?);
    }
    Ok(ret)
}

impl From<Ident> for Expr {
    fn from(value: Ident) -> Self {
        Self::Ident(value)
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Raw(value.into())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}
