use super::Error;

/// Error when a name cannot be split into a schema and an object.
///
/// This occurs when an unqualified name (no selector, no `.`) is used for any
/// target other than a schema. Without a schema component no dependency key
/// can be produced for the name.
#[derive(Debug)]
pub(super) struct UnresolvableSchemaReference {
    pub(super) name: Box<str>,
}

impl std::error::Error for UnresolvableSchemaReference {}

impl core::fmt::Display for UnresolvableSchemaReference {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot resolve schema for `{}`", self.name)
    }
}

impl Error {
    /// Creates an unresolvable schema reference error for the literal `name`.
    pub fn unresolvable_schema_reference(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnresolvableSchemaReference(
            UnresolvableSchemaReference {
                name: name.into().into(),
            },
        ))
    }

    /// Returns `true` if this error, or any error it wraps, is an unresolvable
    /// schema reference.
    pub fn is_unresolvable_schema_reference(&self) -> bool {
        self.unresolvable_name().is_some()
    }

    /// Returns the name that could not be resolved, searching the whole
    /// context chain.
    pub fn unresolvable_name(&self) -> Option<&str> {
        self.chain().find_map(|err| match err.kind() {
            super::ErrorKind::UnresolvableSchemaReference(err) => Some(&*err.name),
            _ => None,
        })
    }
}
