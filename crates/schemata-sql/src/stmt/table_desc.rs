use super::Ident;

/// A table reference with an optional alias.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDesc {
    pub table: Ident,
    pub alias: Option<String>,
}

impl TableDesc {
    pub fn new(table: impl Into<Ident>) -> TableDesc {
        TableDesc {
            table: table.into(),
            alias: None,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> TableDesc {
        self.alias = Some(alias.into());
        self
    }
}

impl From<Ident> for TableDesc {
    fn from(value: Ident) -> Self {
        TableDesc::new(value)
    }
}

impl From<&str> for TableDesc {
    fn from(value: &str) -> Self {
        TableDesc::new(value)
    }
}

impl From<String> for TableDesc {
    fn from(value: String) -> Self {
        TableDesc::new(value)
    }
}
