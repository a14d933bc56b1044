use super::Formatter;

/// Writes each fragment back to back.
macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_sql($f);
        )*
    }};
}

/// Writes each fragment separated by a single space. Fragments that render
/// to nothing are skipped along with their separator.
macro_rules! spaced {
    ($f:expr, $( $fragments:expr ),* $(,)?) => {{
        let mut tokens = $crate::serializer::Tokens::new($f);
        $(
            tokens.push($fragments);
        )*
    }};
}

pub(crate) trait ToSql {
    fn to_sql(self, f: &mut Formatter<'_>);
}

impl ToSql for &str {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl ToSql for &String {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl<T: ToSql> ToSql for Option<T> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if let Some(fragment) = self {
            fragment.to_sql(f);
        }
    }
}
