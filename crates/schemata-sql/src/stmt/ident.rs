use super::Target;

use schemata_core::{Error, NamedObject, Result};

/// An identifier: either a plain name or a name qualified by its container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ident {
    /// A plain name, possibly containing a `.` separated qualifier.
    Name(String),

    /// `container.name`
    Selector { container: String, name: String },
}

/// The schema and object parts of a resolved identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifiedName<'a> {
    pub schema: &'a str,
    pub object: &'a str,
}

impl Ident {
    pub fn name(name: impl Into<String>) -> Ident {
        Ident::Name(name.into())
    }

    pub fn selector(container: impl Into<String>, name: impl Into<String>) -> Ident {
        Ident::Selector {
            container: container.into(),
            name: name.into(),
        }
    }

    /// The identifier's own name. For a selector this is the rightmost
    /// component.
    pub fn get_name(&self) -> &str {
        match self {
            Ident::Name(name) => name,
            Ident::Selector { name, .. } => name,
        }
    }

    /// The qualifying container, if this is a selector.
    pub fn container(&self) -> Option<&str> {
        match self {
            Ident::Name(_) => None,
            Ident::Selector { container, .. } => Some(container),
        }
    }

    /// Returns `true` if the identifier carries a schema qualifier, either as
    /// a selector or as a `.` inside a plain name.
    pub fn is_qualified(&self) -> bool {
        match self {
            Ident::Name(name) => name.contains('.'),
            Ident::Selector { .. } => true,
        }
    }

    /// Splits the identifier into schema and object.
    ///
    /// * A selector resolves to `(container, name)`.
    /// * A plain name containing `.` is split on the first `.`.
    /// * An unqualified name resolves to `(name, "")` when `target` is a
    ///   schema.
    ///
    /// Any other unqualified name fails with an unresolvable schema reference
    /// error carrying the name. So does a blank schema part, or a blank
    /// object part for anything other than a schema.
    pub fn resolve(&self, target: Target) -> Result<QualifiedName<'_>> {
        let resolved = match self {
            Ident::Selector { container, name } => QualifiedName {
                schema: container,
                object: name,
            },
            Ident::Name(name) => match name.split_once('.') {
                Some((schema, object)) => QualifiedName { schema, object },
                None if target.is_schema() => QualifiedName {
                    schema: name,
                    object: "",
                },
                None => return Err(Error::unresolvable_schema_reference(name.as_str())),
            },
        };

        if resolved.schema.is_empty() || (resolved.object.is_empty() && !target.is_schema()) {
            return Err(Error::unresolvable_schema_reference(self.to_string()));
        }

        tracing::trace!(
            ident = %self,
            %target,
            schema = resolved.schema,
            object = resolved.object,
            "resolved name"
        );

        Ok(resolved)
    }
}

impl QualifiedName<'_> {
    /// `{schema, object, ""}`
    pub fn to_object(self) -> NamedObject {
        NamedObject::object(self.schema, self.object)
    }

    /// `{schema, object, field}`
    pub fn to_field(self, field: impl Into<String>) -> NamedObject {
        NamedObject::field(self.schema, self.object, field)
    }
}

impl From<&str> for Ident {
    fn from(value: &str) -> Self {
        Ident::Name(value.into())
    }
}

impl From<String> for Ident {
    fn from(value: String) -> Self {
        Ident::Name(value)
    }
}

impl From<&String> for Ident {
    fn from(value: &String) -> Self {
        Ident::from(&value[..])
    }
}
