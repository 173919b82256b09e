use indexmap::{IndexMap, IndexSet};

use crate::{Error, Method, Property, Result, UseMap, Variable, code};

/// Kind of type declared by a [`Class`], by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Interface,
    Abstract,
    Concrete,
}

/// Definition of a class or interface.
///
/// Members are keyed by name: adding a member with an existing name replaces
/// it, and removing returns whether the member existed.
///
/// # Example
///
/// ```
/// use classgen_model::{Class, Method};
///
/// let mut class = Class::new("vendor\\library\\MyInterface")?;
/// class.set_interface(true);
/// class.add_method(Method::new("isActive")?);
///
/// assert_eq!(class.short_name(), "MyInterface");
/// assert_eq!(class.namespace(), Some("vendor\\library"));
/// # Ok::<(), classgen_model::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    name: String,
    description: Option<String>,
    extends: Option<String>,
    implements: IndexSet<String>,
    is_interface: bool,
    is_abstract: bool,
    constants: IndexMap<String, Variable>,
    properties: IndexMap<String, Property>,
    methods: IndexMap<String, Method>,
    uses: UseMap,
}

impl Class {
    /// Create a concrete class from its qualified name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let mut class = Self {
            name: String::new(),
            description: None,
            extends: None,
            implements: IndexSet::new(),
            is_interface: false,
            is_abstract: false,
            constants: IndexMap::new(),
            properties: IndexMap::new(),
            methods: IndexMap::new(),
            uses: UseMap::new(),
        };
        class.set_name(name)?;
        Ok(class)
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if !code::is_valid_name(&name, true) {
            return Err(Error::invalid_identifier("class name", name));
        }
        self.name = name;
        Ok(())
    }

    /// The qualified name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace part of the qualified name, if any.
    pub fn namespace(&self) -> Option<&str> {
        code::resolve_qualified_name(&self.name).0
    }

    /// Name without its namespace.
    pub fn short_name(&self) -> &str {
        code::resolve_qualified_name(&self.name).1
    }

    pub fn set_description(&mut self, description: Option<impl Into<String>>) {
        self.description = description.map(Into::into);
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Set or clear the extended class.
    pub fn set_extends(&mut self, extends: Option<impl Into<String>>) -> Result<()> {
        let extends: Option<String> = extends.map(Into::into);
        if let Some(extends) = extends.as_deref().filter(|e| !code::is_valid_name(e, true)) {
            return Err(Error::invalid_identifier("extended class", extends));
        }
        self.extends = extends;
        Ok(())
    }

    pub fn extends(&self) -> Option<&str> {
        self.extends.as_deref()
    }

    pub fn add_implements(&mut self, interface: impl Into<String>) -> Result<()> {
        let interface = interface.into();
        if !code::is_valid_name(&interface, true) {
            return Err(Error::invalid_identifier("implemented interface", interface));
        }
        self.implements.insert(interface);
        Ok(())
    }

    /// Remove an implemented interface, returning whether it was present.
    pub fn remove_implements(&mut self, interface: &str) -> bool {
        self.implements.shift_remove(interface)
    }

    /// Implemented interfaces in insertion order.
    pub fn implements(&self) -> impl Iterator<Item = &str> {
        self.implements.iter().map(String::as_str)
    }

    pub fn set_interface(&mut self, is_interface: bool) {
        self.is_interface = is_interface;
    }

    pub fn is_interface(&self) -> bool {
        self.is_interface
    }

    pub fn set_abstract(&mut self, is_abstract: bool) {
        self.is_abstract = is_abstract;
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// The declared kind; an interface wins over an abstract class.
    pub fn kind(&self) -> ClassKind {
        if self.is_interface {
            ClassKind::Interface
        } else if self.is_abstract {
            ClassKind::Abstract
        } else {
            ClassKind::Concrete
        }
    }

    /// Register a type referenced by the class, optionally under an alias.
    pub fn add_use(&mut self, reference: &str, alias: Option<&str>) -> Result<()> {
        self.uses.add(reference, alias)
    }

    pub fn uses(&self) -> &UseMap {
        &self.uses
    }

    // =========================================================================
    // Constants
    // =========================================================================

    pub fn add_constant(&mut self, constant: Variable) {
        self.constants.insert(constant.name().to_string(), constant);
    }

    pub fn has_constant(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    pub fn constant(&self, name: &str) -> Option<&Variable> {
        self.constants.get(name)
    }

    pub fn remove_constant(&mut self, name: &str) -> bool {
        self.constants.shift_remove(name).is_some()
    }

    pub fn set_constants(&mut self, constants: impl IntoIterator<Item = Variable>) {
        self.constants = constants
            .into_iter()
            .map(|constant| (constant.name().to_string(), constant))
            .collect();
    }

    pub fn constants(&self) -> impl Iterator<Item = &Variable> {
        self.constants.values()
    }

    // =========================================================================
    // Properties
    // =========================================================================

    pub fn add_property(&mut self, property: Property) {
        self.properties
            .insert(property.name().to_string(), property);
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    pub fn remove_property(&mut self, name: &str) -> bool {
        self.properties.shift_remove(name).is_some()
    }

    pub fn set_properties(&mut self, properties: impl IntoIterator<Item = Property>) {
        self.properties = properties
            .into_iter()
            .map(|property| (property.name().to_string(), property))
            .collect();
    }

    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.values()
    }

    // =========================================================================
    // Methods
    // =========================================================================

    pub fn add_method(&mut self, method: Method) {
        self.methods.insert(method.name().to_string(), method);
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }

    pub fn method_mut(&mut self, name: &str) -> Option<&mut Method> {
        self.methods.get_mut(name)
    }

    pub fn remove_method(&mut self, name: &str) -> bool {
        self.methods.shift_remove(name).is_some()
    }

    pub fn set_methods(&mut self, methods: impl IntoIterator<Item = Method>) {
        self.methods = methods
            .into_iter()
            .map(|method| (method.name().to_string(), method))
            .collect();
    }

    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.methods.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal() {
        let class = Class::new("className").unwrap();
        assert_eq!(class.name(), "className");
        assert_eq!(class.namespace(), None);
        assert_eq!(class.short_name(), "className");
        assert_eq!(class.description(), None);
        assert_eq!(class.extends(), None);
        assert_eq!(class.implements().count(), 0);
        assert!(class.uses().is_empty());
        assert_eq!(class.kind(), ClassKind::Concrete);
        assert_eq!(class.constants().count(), 0);
        assert_eq!(class.properties().count(), 0);
        assert_eq!(class.methods().count(), 0);
    }

    #[test]
    fn test_invalid_names() {
        for name in ["1noNumberToStart", "testé\"(§è!", ""] {
            assert!(Class::new(name).is_err(), "{name} should be rejected");
        }

        let mut class = Class::new("vendor\\MyClass").unwrap();
        assert!(matches!(
            class.set_extends(Some("1Base")),
            Err(Error::InvalidIdentifier { .. })
        ));
        assert!(class.add_implements("my interface").is_err());
    }

    #[test]
    fn test_extends() {
        let mut class = Class::new("vendor\\MyClass").unwrap();
        class.set_extends(Some("vendor\\Base")).unwrap();
        assert_eq!(class.extends(), Some("vendor\\Base"));

        class.set_extends(None::<String>).unwrap();
        assert_eq!(class.extends(), None);
    }

    #[test]
    fn test_implements_is_a_set() {
        let mut class = Class::new("vendor\\MyClass").unwrap();
        class.add_implements("interface1").unwrap();
        class.add_implements("interface2").unwrap();
        class.add_implements("interface1").unwrap();

        assert_eq!(
            class.implements().collect::<Vec<_>>(),
            vec!["interface1", "interface2"]
        );
        assert!(class.remove_implements("interface1"));
        assert!(!class.remove_implements("interface1"));
    }

    #[test]
    fn test_kind_priority() {
        let mut class = Class::new("MyClass").unwrap();
        class.set_abstract(true);
        assert_eq!(class.kind(), ClassKind::Abstract);
        class.set_interface(true);
        assert_eq!(class.kind(), ClassKind::Interface);
    }

    #[test]
    fn test_members_are_keyed_by_name() {
        let mut class = Class::new("MyClass").unwrap();
        class.add_property(Property::new("name", "string").unwrap());
        class.add_property(Property::new("name", "vendor\\Name").unwrap());

        assert_eq!(class.properties().count(), 1);
        assert_eq!(
            class.property("name").map(|p| p.variable().ty()),
            Some("vendor\\Name")
        );

        assert!(class.remove_property("name"));
        assert!(!class.remove_property("name"));
        assert!(!class.has_property("name"));
    }

    #[test]
    fn test_constants_and_methods() {
        let mut class = Class::new("MyClass").unwrap();
        class.add_constant(Variable::new("VERSION", "string").unwrap());
        class.add_method(Method::new("run").unwrap());

        assert!(class.has_constant("VERSION"));
        assert!(class.constant("VERSION").is_some());
        assert!(class.has_method("run"));
        assert!(class.method("missing").is_none());

        class.set_methods([Method::new("stop").unwrap()]);
        assert!(!class.has_method("run"));
        assert!(class.has_method("stop"));

        assert!(class.remove_constant("VERSION"));
        assert!(!class.remove_constant("VERSION"));
    }
}
