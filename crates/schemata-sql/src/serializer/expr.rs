use super::{Comma, Delimited, Formatter, Paren, ToSql};

use crate::stmt;

/// An operand of `and`/`or`. Nested `or` inside `and` is parenthesized.
struct Operand<'a>(&'a stmt::Expr);

impl ToSql for &stmt::Expr {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use stmt::Expr::*;

        match self {
            AddColumn(expr) => spaced!(f, "add column", &expr.column),
            AddConstraint(expr) => {
                spaced!(f, "add constraint", &expr.name, &*expr.constraint)
            }
            And(expr) => {
                fmt!(f, Delimited(expr.operands.iter().map(Operand), " and "));
            }
            Assign(expr) => {
                let value: &stmt::Expr = &expr.value;
                fmt!(f, &expr.column " = " value);
            }
            BinaryOp(expr) => {
                spaced!(f, &*expr.lhs, expr.op.as_str(), &*expr.rhs);
            }
            ForeignKey(expr) => {
                let ref_columns =
                    (!expr.ref_columns.is_empty()).then(|| Paren(Comma(&expr.ref_columns)));

                spaced!(
                    f,
                    "foreign key",
                    Paren(Comma(&expr.columns)),
                    "references",
                    &expr.references,
                    ref_columns,
                );
            }
            Ident(ident) => ident.to_sql(f),
            Or(expr) => {
                fmt!(f, Delimited(&expr.operands, " or "));
            }
            Raw(text) => fmt!(f, text),
            Stmt(expr) => {
                fmt!(f, Paren(&*expr.stmt));
            }
            TableBody(body) => body.to_sql(f),
            Value(value) => value.to_sql(f),
        }
    }
}

impl ToSql for Operand<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self.0 {
            stmt::Expr::Or(_) => fmt!(f, Paren(self.0)),
            expr => expr.to_sql(f),
        }
    }
}

impl ToSql for &stmt::ExprTableBody {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push('(');

        let mut s = "";
        for column in &self.columns {
            fmt!(f, s column);
            s = ", ";
        }

        for constraint in &self.constraints {
            fmt!(f, s constraint);
            s = ", ";
        }

        f.dst.push(')');
    }
}
