use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    Ne,
    Ge,
    Gt,
    Le,
    Lt,
    Is,
    IsNot,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        use BinaryOp::*;

        match self {
            Eq => "=",
            Ne => "<>",
            Ge => ">=",
            Gt => ">",
            Le => "<=",
            Lt => "<",
            Is => "is",
            IsNot => "is not",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
