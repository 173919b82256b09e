//! Import tracking and alias resolution.

use classgen_model::{Error, Result, code};
use indexmap::IndexMap;

/// Tracks the types referenced while rendering one file.
///
/// Each reference is registered once, optionally under an alias, and every
/// reference keeps a local name no other reference uses. PHP compares class
/// names case-insensitively, so local names do too. Insertion order is kept
/// so callers can list references first-referenced-first, and
/// [`ImportTable::sorted`] gives the deterministic import order.
///
/// # Example
///
/// ```
/// use classgen_codegen::generation::ImportTable;
///
/// let mut imports = ImportTable::new();
/// imports.register("vendor\\helper\\MyHelper", Some("Helper"))?;
/// imports.register("vendor\\data\\Data", None)?;
/// imports.register("vendor\\other\\Data", None)?;
///
/// assert_eq!(imports.local_name("vendor\\helper\\MyHelper"), "Helper");
/// assert_eq!(imports.local_name("vendor\\data\\Data"), "Data");
/// assert_eq!(imports.local_name("vendor\\other\\Data"), "Data2");
/// # Ok::<(), classgen_model::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportTable {
    /// Reference -> optional alias, in registration order
    entries: IndexMap<String, Option<String>>,
}

impl ImportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reference, optionally under an alias.
    ///
    /// A reference that is already registered keeps its alias. Requesting a
    /// different alias for it fails with [`Error::TypeConflict`], and an
    /// alias already used by another reference fails with
    /// [`Error::NameCollision`]. A reference registered without alias whose
    /// short name is taken gets a numbered alias instead.
    pub fn register(&mut self, reference: &str, alias: Option<&str>) -> Result<()> {
        let existing = self.entries.get(reference).cloned();
        match (existing, alias) {
            (None, None) => {
                let short_name = code::short_name(reference);
                let alias = self
                    .owner_of(short_name, reference)
                    .is_some()
                    .then(|| self.free_alias(short_name, reference));
                if let Some(alias) = &alias {
                    log::debug!("{short_name} is taken, importing {reference} as {alias}");
                }
                self.entries.insert(reference.to_string(), alias);
                Ok(())
            }
            (None, Some(requested)) | (Some(None), Some(requested)) => {
                if let Some(owner) = self.owner_of(requested, reference) {
                    log::debug!("alias {requested} of {reference} is used by {owner}");
                    return Err(Error::name_collision(reference, requested, owner));
                }
                log::trace!("registering import {reference} as {requested}");
                self.entries
                    .insert(reference.to_string(), Some(requested.to_string()));
                Ok(())
            }
            (Some(Some(current)), Some(requested)) if current != requested => {
                log::debug!("alias conflict on {reference}: {current} <> {requested}");
                Err(Error::type_conflict(reference, current, requested))
            }
            _ => Ok(()),
        }
    }

    /// The name used for `reference` in the generated source: its alias, or
    /// its short name.
    pub fn local_name(&self, reference: &str) -> String {
        match self.entries.get(reference) {
            Some(Some(alias)) => alias.clone(),
            _ => code::short_name(reference).to_string(),
        }
    }

    /// Position of `reference` in registration order.
    pub fn position(&self, reference: &str) -> Option<usize> {
        self.entries.get_index_of(reference)
    }

    /// Iterate over all references in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(reference, alias)| (reference.as_str(), alias.as_deref()))
    }

    /// All references sorted by their full name, for deterministic output.
    pub fn sorted(&self) -> Vec<(&str, Option<&str>)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// The reference other than `reference` whose local name is `name`.
    fn owner_of(&self, name: &str, reference: &str) -> Option<String> {
        self.entries
            .keys()
            .filter(|other| other.as_str() != reference)
            .find(|other| self.local_name(other).eq_ignore_ascii_case(name))
            .cloned()
    }

    /// First of `Name2`, `Name3`, ... that no other reference uses.
    fn free_alias(&self, short_name: &str, reference: &str) -> String {
        let mut suffix = 2;
        let mut alias = format!("{short_name}{suffix}");
        while self.owner_of(&alias, reference).is_some() {
            suffix += 1;
            alias = format!("{short_name}{suffix}");
        }
        alias
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_local_name() {
        let mut imports = ImportTable::new();
        imports.register("vendor\\Helper", Some("MyHelper")).unwrap();
        imports.register("vendor\\data\\Data", None).unwrap();
        imports.register("Global", None).unwrap();

        assert_eq!(imports.local_name("vendor\\Helper"), "MyHelper");
        assert_eq!(imports.local_name("vendor\\data\\Data"), "Data");
        assert_eq!(imports.local_name("Global"), "Global");
        assert_eq!(imports.iter().count(), 3);
    }

    #[test]
    fn test_conflicting_alias() {
        let mut imports = ImportTable::new();
        imports.register("vendor\\Helper", Some("Helper")).unwrap();

        let err = imports.register("vendor\\Helper", Some("Other")).unwrap_err();
        assert_eq!(err, Error::type_conflict("vendor\\Helper", "Helper", "Other"));
    }

    #[test]
    fn test_alias_upgrades_plain_reference() {
        let mut imports = ImportTable::new();
        imports.register("vendor\\Helper", None).unwrap();
        imports.register("vendor\\Helper", Some("Helper2")).unwrap();
        imports.register("vendor\\Helper", None).unwrap();

        assert_eq!(imports.local_name("vendor\\Helper"), "Helper2");
        assert_eq!(imports.position("vendor\\Helper"), Some(0));
    }

    #[test]
    fn test_same_short_name_gets_numbered_alias() {
        let mut imports = ImportTable::new();
        imports.register("vendor\\MyClass", None).unwrap();
        imports.register("one\\Data", None).unwrap();
        imports.register("two\\Data", None).unwrap();
        imports.register("three\\data", None).unwrap();
        imports.register("other\\MyClass", None).unwrap();

        assert_eq!(imports.local_name("one\\Data"), "Data");
        assert_eq!(imports.local_name("two\\Data"), "Data2");
        assert_eq!(imports.local_name("three\\data"), "data3");
        assert_eq!(imports.local_name("other\\MyClass"), "MyClass2");
    }

    #[test]
    fn test_numbered_alias_skips_taken_names() {
        let mut imports = ImportTable::new();
        imports.register("vendor\\Data2", None).unwrap();
        imports.register("one\\Data", None).unwrap();
        imports.register("two\\Data", None).unwrap();

        assert_eq!(imports.local_name("two\\Data"), "Data3");
    }

    #[test]
    fn test_alias_used_by_another_reference() {
        let mut imports = ImportTable::new();
        imports.register("one\\Data", None).unwrap();

        let err = imports.register("two\\Record", Some("data")).unwrap_err();
        assert_eq!(err, Error::name_collision("two\\Record", "data", "one\\Data"));

        imports.register("two\\Record", None).unwrap();
        let err = imports.register("two\\Record", Some("Data")).unwrap_err();
        assert_eq!(err, Error::name_collision("two\\Record", "Data", "one\\Data"));
        assert_eq!(imports.local_name("two\\Record"), "Record");
    }

    #[test]
    fn test_sorted_and_positions() {
        let mut imports = ImportTable::new();
        imports.register("vendor\\b\\B", None).unwrap();
        imports.register("vendor\\a\\A", None).unwrap();

        let sorted: Vec<_> = imports.sorted().into_iter().map(|(r, _)| r).collect();
        assert_eq!(sorted, vec!["vendor\\a\\A", "vendor\\b\\B"]);
        assert_eq!(imports.position("vendor\\b\\B"), Some(0));
        assert_eq!(imports.position("vendor\\a\\A"), Some(1));
        assert_eq!(imports.position("vendor\\c\\C"), None);
    }
}
