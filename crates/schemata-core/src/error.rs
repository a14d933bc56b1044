mod adhoc;
mod unresolvable_schema_reference;

use adhoc::AdhocError;
use std::sync::Arc;
use unresolvable_schema_reference::UnresolvableSchemaReference;

/// Returns early with an error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while rendering statements or computing their
/// dependency edges.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Builds an ad-hoc error from pre-formatted arguments. Prefer the `err!`
    /// macro.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(args)))
    }

    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        match Arc::try_unwrap(consequent.inner) {
            Ok(inner) => {
                assert!(
                    inner.cause.is_none(),
                    "consequent error must not already have a cause"
                );
                Error {
                    inner: Arc::new(ErrorInner {
                        kind: inner.kind,
                        cause: Some(self),
                    }),
                }
            }
            // The consequent is shared elsewhere; keep its message only.
            Err(shared) => Error {
                inner: Arc::new(ErrorInner {
                    kind: ErrorKind::Adhoc(AdhocError::from_args(format_args!(
                        "{}",
                        shared.kind
                    ))),
                    cause: Some(self),
                }),
            },
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Some(cause) = &self.inner.cause {
            return Some(cause);
        }

        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    UnresolvableSchemaReference(UnresolvableSchemaReference),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            UnresolvableSchemaReference(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<core::fmt::Error> for Error {
    fn from(err: core::fmt::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for &str {
    fn into_error(self) -> Error {
        Error::from_args(format_args!("{self}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = err!("root cause");
        let mid = err!("middle context");
        let top = err!("top context");

        let chained = root.context(mid).context(top);
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
    }

    #[test]
    fn context_from_shared_consequent() {
        let shared = err!("statement #3");
        let _keep = shared.clone();

        let err = Error::unresolvable_schema_reference("users").context(shared);
        assert_eq!(
            err.to_string(),
            "statement #3: cannot resolve schema for `users`"
        );
        assert!(err.is_unresolvable_schema_reference());
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
    }

    #[test]
    fn bail_returns_early() {
        fn fails() -> crate::Result<()> {
            bail!("bad statement {}", 7);
        }

        assert_eq!(fails().unwrap_err().to_string(), "bad statement 7");
    }

    #[test]
    fn unresolvable_schema_reference() {
        let err = Error::unresolvable_schema_reference("users");
        assert_eq!(err.to_string(), "cannot resolve schema for `users`");
        assert!(err.is_unresolvable_schema_reference());
        assert_eq!(err.unresolvable_name(), Some("users"));
    }

    #[test]
    fn unresolvable_schema_reference_with_context_chain() {
        let err = Error::unresolvable_schema_reference("users")
            .context(err!("solved edges"))
            .context("statement #0 `create table users`");

        assert_eq!(
            err.to_string(),
            "statement #0 `create table users`: solved edges: cannot resolve schema for `users`"
        );
        assert_eq!(err.unresolvable_name(), Some("users"));
    }

    #[test]
    fn adhoc_is_not_unresolvable() {
        let err = err!("something else");
        assert!(!err.is_unresolvable_schema_reference());
        assert_eq!(err.unresolvable_name(), None);
    }
}
