use super::{render, Formatter, ToSql};

/// Comma delimited
pub(super) struct Comma<L>(pub(super) L);

/// Delimited by an arbitrary separator
pub(super) struct Delimited<L>(pub(super) L, pub(super) &'static str);

/// Wrapped in parentheses
pub(super) struct Paren<T>(pub(super) T);

/// Space separated tokens, skipping empty ones.
pub(crate) struct Tokens<'a, 'b> {
    f: &'a mut Formatter<'b>,
    sep: &'static str,
}

impl<L> ToSql for Comma<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        Delimited(self.0, ", ").to_sql(f);
    }
}

impl<L> ToSql for Delimited<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = self.1;
        }
    }
}

impl<T: ToSql> ToSql for Paren<T> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "(" self.0 ")");
    }
}

impl<'a, 'b> Tokens<'a, 'b> {
    pub(crate) fn new(f: &'a mut Formatter<'b>) -> Tokens<'a, 'b> {
        Tokens { f, sep: "" }
    }

    pub(crate) fn push(&mut self, fragment: impl ToSql) {
        let token = render(fragment);
        if token.is_empty() {
            return;
        }

        self.f.dst.push_str(self.sep);
        self.f.dst.push_str(&token);
        self.sep = " ";
    }
}
