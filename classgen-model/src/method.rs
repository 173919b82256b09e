use indexmap::IndexMap;

use crate::{Error, Result, UseMap, Variable, Visibility, code};

/// A class method.
///
/// Arguments are kept in declaration order and keyed by name.
///
/// # Example
///
/// ```
/// use classgen_model::{Method, Variable};
///
/// let mut method = Method::new("setName")?;
/// method.add_argument(Variable::new("name", "string")?);
/// method.set_body(Some("$this->name = $name;"));
///
/// assert!(method.has_argument("name"));
/// # Ok::<(), classgen_model::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    name: String,
    description: Option<String>,
    visibility: Visibility,
    is_abstract: bool,
    is_static: bool,
    arguments: IndexMap<String, Variable>,
    return_value: Option<Variable>,
    body: Option<String>,
    uses: UseMap,
}

impl Method {
    /// Create a public, concrete method without arguments or body.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let mut method = Self {
            name: String::new(),
            description: None,
            visibility: Visibility::default(),
            is_abstract: false,
            is_static: false,
            arguments: IndexMap::new(),
            return_value: None,
            body: None,
            uses: UseMap::new(),
        };
        method.set_name(name)?;
        Ok(method)
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if !code::is_valid_name(&name, false) {
            return Err(Error::invalid_identifier("method name", name));
        }
        self.name = name;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
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

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set the visibility from its keyword.
    pub fn set_scope(&mut self, scope: &str) -> Result<()> {
        self.visibility = scope.parse()?;
        Ok(())
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn set_abstract(&mut self, is_abstract: bool) {
        self.is_abstract = is_abstract;
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn set_static(&mut self, is_static: bool) {
        self.is_static = is_static;
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Add an argument, replacing any argument with the same name in place.
    pub fn add_argument(&mut self, argument: impl Into<Variable>) {
        let argument = argument.into();
        self.arguments.insert(argument.name().to_string(), argument);
    }

    pub fn with_argument(mut self, argument: impl Into<Variable>) -> Self {
        self.add_argument(argument);
        self
    }

    pub fn has_argument(&self, name: &str) -> bool {
        self.arguments.contains_key(name)
    }

    pub fn argument(&self, name: &str) -> Option<&Variable> {
        self.arguments.get(name)
    }

    /// Remove an argument, returning whether it existed.
    pub fn remove_argument(&mut self, name: &str) -> bool {
        self.arguments.shift_remove(name).is_some()
    }

    /// Replace all arguments.
    pub fn set_arguments(&mut self, arguments: impl IntoIterator<Item = Variable>) {
        self.arguments = arguments
            .into_iter()
            .map(|argument| (argument.name().to_string(), argument))
            .collect();
    }

    /// Arguments in declaration order.
    pub fn arguments(&self) -> impl Iterator<Item = &Variable> {
        self.arguments.values()
    }

    pub fn set_return_value(&mut self, return_value: Option<impl Into<Variable>>) {
        self.return_value = return_value.map(Into::into);
    }

    pub fn with_return_value(mut self, return_value: impl Into<Variable>) -> Self {
        self.return_value = Some(return_value.into());
        self
    }

    pub fn return_value(&self) -> Option<&Variable> {
        self.return_value.as_ref()
    }

    pub fn set_body(&mut self, body: Option<impl Into<String>>) {
        self.body = body.map(Into::into);
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Register a type referenced by the body, optionally under an alias.
    pub fn add_use(&mut self, reference: &str, alias: Option<&str>) -> Result<()> {
        self.uses.add(reference, alias)
    }

    pub fn uses(&self) -> &UseMap {
        &self.uses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal() {
        let method = Method::new("isActive").unwrap();
        assert_eq!(method.name(), "isActive");
        assert_eq!(method.description(), None);
        assert_eq!(method.visibility(), Visibility::Public);
        assert!(!method.is_abstract());
        assert!(!method.is_static());
        assert_eq!(method.arguments().count(), 0);
        assert!(method.return_value().is_none());
        assert!(method.body().is_none());
        assert!(method.uses().is_empty());
    }

    #[test]
    fn test_invalid_name() {
        assert!(matches!(
            Method::new("1noNumberToStart"),
            Err(Error::InvalidIdentifier { .. })
        ));
        assert!(Method::new("").is_err());
    }

    #[test]
    fn test_arguments_keep_declaration_order() {
        let mut method = Method::new("connect").unwrap();
        method.add_argument(Variable::new("host", "string").unwrap());
        method.add_argument(Variable::new("port", "integer").unwrap());
        method.add_argument(Variable::new("host", "vendor\\net\\Host").unwrap());

        let names: Vec<_> = method.arguments().map(Variable::name).collect();
        assert_eq!(names, vec!["host", "port"]);
        assert_eq!(method.argument("host").unwrap().ty(), "vendor\\net\\Host");
    }

    #[test]
    fn test_remove_argument() {
        let mut method = Method::new("connect").unwrap();
        method.add_argument(Variable::new("host", "string").unwrap());

        assert!(method.remove_argument("host"));
        assert!(!method.remove_argument("host"));
        assert!(!method.has_argument("host"));
    }

    #[test]
    fn test_set_arguments_replaces() {
        let mut method = Method::new("connect").unwrap();
        method.add_argument(Variable::new("host", "string").unwrap());
        method.set_arguments([Variable::new("dsn", "string").unwrap()]);

        assert!(!method.has_argument("host"));
        assert!(method.has_argument("dsn"));
    }

    #[test]
    fn test_set_scope() {
        let mut method = Method::new("run").unwrap();
        method.set_scope("private").unwrap();
        assert_eq!(method.visibility(), Visibility::Private);
        assert!(matches!(
            method.set_scope("friend"),
            Err(Error::InvalidScope { .. })
        ));
    }

    #[test]
    fn test_use_conflict() {
        let mut method = Method::new("run").unwrap();
        method.add_use("vendor\\Helper", Some("Helper")).unwrap();
        assert!(matches!(
            method.add_use("vendor\\Helper", Some("Other")),
            Err(Error::TypeConflict { .. })
        ));
    }
}
