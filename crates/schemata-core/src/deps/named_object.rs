use std::fmt;

/// A three-level qualified key identifying a schema, an object within a
/// schema, or a field of an object.
///
/// An empty component means "unspecified at this level":
///
/// * `{ schema: "s", object: "", field: "" }` is the schema `s`
/// * `{ schema: "s", object: "t", field: "" }` is the object `s.t`
/// * `{ schema: "s", object: "t", field: "c" }` is the column `s.t.c`
///
/// Keys are compared by exact equality. `{s, t, ""}` does not match
/// `{s, t, "c"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamedObject {
    pub schema: String,
    pub object: String,
    pub field: String,
}

impl NamedObject {
    pub fn new(
        schema: impl Into<String>,
        object: impl Into<String>,
        field: impl Into<String>,
    ) -> NamedObject {
        NamedObject {
            schema: schema.into(),
            object: object.into(),
            field: field.into(),
        }
    }

    /// Key for a schema.
    pub fn schema(schema: impl Into<String>) -> NamedObject {
        NamedObject::new(schema, "", "")
    }

    /// Key for an object (table, type, sequence, ...) within a schema.
    pub fn object(schema: impl Into<String>, object: impl Into<String>) -> NamedObject {
        NamedObject::new(schema, object, "")
    }

    /// Key for a field of an object.
    pub fn field(
        schema: impl Into<String>,
        object: impl Into<String>,
        field: impl Into<String>,
    ) -> NamedObject {
        NamedObject::new(schema, object, field)
    }

    pub fn is_schema(&self) -> bool {
        self.object.is_empty() && self.field.is_empty()
    }

    pub fn is_object(&self) -> bool {
        !self.object.is_empty() && self.field.is_empty()
    }

    pub fn is_field(&self) -> bool {
        !self.field.is_empty()
    }

    /// Returns the next coarser key: a field's object, an object's schema.
    /// Returns `None` for a schema key.
    ///
    /// Edges never imply their parents; callers that want "any column of this
    /// table" semantics expand keys with this themselves.
    pub fn parent(&self) -> Option<NamedObject> {
        if self.is_field() {
            Some(NamedObject::object(&self.schema, &self.object))
        } else if self.is_object() {
            Some(NamedObject::schema(&self.schema))
        } else {
            None
        }
    }
}

impl fmt::Display for NamedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for part in [&self.schema, &self.object, &self.field] {
            if part.is_empty() {
                continue;
            }
            write!(f, "{s}{part}")?;
            s = ".";
        }

        Ok(())
    }
}
