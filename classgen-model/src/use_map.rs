use indexmap::IndexMap;

use crate::{Error, Result, code::is_valid_name};

/// Explicit type references of a class or method, each with an optional alias.
///
/// Keeps insertion order. A reference can only carry one alias.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UseMap {
    entries: IndexMap<String, Option<String>>,
}

impl UseMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `reference`, optionally under `alias`.
    ///
    /// Registering a reference again keeps the first alias; requesting a
    /// different alias for it is a [`Error::TypeConflict`].
    pub fn add(&mut self, reference: &str, alias: Option<&str>) -> Result<()> {
        if !is_valid_name(reference, true) {
            return Err(Error::invalid_identifier("use reference", reference));
        }
        if let Some(alias) = alias.filter(|alias| !is_valid_name(alias, false)) {
            return Err(Error::invalid_identifier("use alias", alias));
        }

        let existing = self.entries.get(reference).cloned();
        match (existing, alias) {
            (None, _) | (Some(None), Some(_)) => {
                // re-inserting an existing key keeps its position
                self.entries
                    .insert(reference.to_string(), alias.map(str::to_string));
                Ok(())
            }
            (Some(Some(current)), Some(requested)) if current != requested => {
                Err(Error::type_conflict(reference, current, requested))
            }
            _ => Ok(()),
        }
    }

    /// Get the alias registered for `reference`, if any.
    pub fn alias(&self, reference: &str) -> Option<&str> {
        self.entries.get(reference).and_then(|alias| alias.as_deref())
    }

    pub fn contains(&self, reference: &str) -> bool {
        self.entries.contains_key(reference)
    }

    /// Remove a reference, returning whether it was registered.
    pub fn remove(&mut self, reference: &str) -> bool {
        self.entries.shift_remove(reference).is_some()
    }

    /// Iterate over `(reference, alias)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(reference, alias)| (reference.as_str(), alias.as_deref()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut uses = UseMap::new();
        uses.add("vendor\\helper\\MyHelper", Some("Helper")).unwrap();
        uses.add("vendor\\data\\DataContainer", None).unwrap();

        assert_eq!(uses.alias("vendor\\helper\\MyHelper"), Some("Helper"));
        assert_eq!(uses.alias("vendor\\data\\DataContainer"), None);
        assert!(uses.contains("vendor\\data\\DataContainer"));
        assert_eq!(uses.len(), 2);
    }

    #[test]
    fn test_conflicting_alias() {
        let mut uses = UseMap::new();
        uses.add("vendor\\Helper", Some("Helper")).unwrap();

        let err = uses.add("vendor\\Helper", Some("Other")).unwrap_err();
        assert!(matches!(err, Error::TypeConflict { .. }));
        assert_eq!(uses.alias("vendor\\Helper"), Some("Helper"));
    }

    #[test]
    fn test_same_alias_or_no_alias_is_accepted() {
        let mut uses = UseMap::new();
        uses.add("vendor\\Helper", Some("Helper")).unwrap();
        uses.add("vendor\\Helper", Some("Helper")).unwrap();
        uses.add("vendor\\Helper", None).unwrap();
        assert_eq!(uses.alias("vendor\\Helper"), Some("Helper"));

        uses.add("vendor\\Other", None).unwrap();
        uses.add("vendor\\Other", Some("Alias")).unwrap();
        assert_eq!(uses.alias("vendor\\Other"), Some("Alias"));
    }

    #[test]
    fn test_invalid_reference_and_alias() {
        let mut uses = UseMap::new();
        assert!(matches!(
            uses.add("1vendor\\Helper", None),
            Err(Error::InvalidIdentifier { .. })
        ));
        assert!(matches!(
            uses.add("vendor\\Helper", Some("bad\\alias")),
            Err(Error::InvalidIdentifier { .. })
        ));
        assert!(uses.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut uses = UseMap::new();
        uses.add("vendor\\Helper", None).unwrap();
        assert!(uses.remove("vendor\\Helper"));
        assert!(!uses.remove("vendor\\Helper"));
    }
}
