use super::NamedObject;

use std::{ops::Deref, slice, vec};

/// An ordered sequence of [`NamedObject`] keys.
///
/// Order is insertion order and is preserved by every operation, so consumers
/// can report the first offending edge deterministically. Duplicates are
/// kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Dependencies(Vec<NamedObject>);

impl Dependencies {
    pub fn new() -> Dependencies {
        Dependencies::default()
    }

    pub fn push(&mut self, item: NamedObject) {
        self.0.push(item);
    }

    /// Moves every key of `other` to the end of `self`, keeping its order.
    pub fn append(&mut self, mut other: Dependencies) {
        self.0.append(&mut other.0);
    }

    /// Returns `self` followed by `other`.
    pub fn concat(mut self, other: Dependencies) -> Dependencies {
        self.append(other);
        self
    }
}

impl Deref for Dependencies {
    type Target = [NamedObject];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<NamedObject>> for Dependencies {
    fn from(value: Vec<NamedObject>) -> Self {
        Dependencies(value)
    }
}

impl From<NamedObject> for Dependencies {
    fn from(value: NamedObject) -> Self {
        Dependencies(vec![value])
    }
}

impl FromIterator<NamedObject> for Dependencies {
    fn from_iter<T: IntoIterator<Item = NamedObject>>(iter: T) -> Self {
        Dependencies(iter.into_iter().collect())
    }
}

impl Extend<NamedObject> for Dependencies {
    fn extend<T: IntoIterator<Item = NamedObject>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Dependencies {
    type Item = NamedObject;
    type IntoIter = vec::IntoIter<NamedObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dependencies {
    type Item = &'a NamedObject;
    type IntoIter = slice::Iter<'a, NamedObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<[NamedObject]> for Dependencies {
    fn eq(&self, other: &[NamedObject]) -> bool {
        self.0 == other
    }
}

impl<const N: usize> PartialEq<[NamedObject; N]> for Dependencies {
    fn eq(&self, other: &[NamedObject; N]) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn concat_preserves_order() {
        let lhs: Dependencies = [
            NamedObject::object("public", "users"),
            NamedObject::field("public", "users", "id"),
        ]
        .into_iter()
        .collect();
        let rhs = Dependencies::from(NamedObject::schema("audit"));

        let all = lhs.concat(rhs);
        assert_eq!(
            all,
            [
                NamedObject::object("public", "users"),
                NamedObject::field("public", "users", "id"),
                NamedObject::schema("audit"),
            ]
        );
        assert_eq!(all.first(), Some(&NamedObject::object("public", "users")));
    }

    #[test]
    fn duplicates_are_kept() {
        let mut deps = Dependencies::new();
        deps.push(NamedObject::schema("public"));
        deps.push(NamedObject::schema("public"));
        assert_eq!(deps.len(), 2);
    }

    #[test]
    fn exact_match_only() {
        let deps = Dependencies::from(NamedObject::field("public", "users", "id"));
        assert!(deps.contains(&NamedObject::field("public", "users", "id")));
        assert!(!deps.contains(&NamedObject::object("public", "users")));
    }
}
