use crate::{Error, Literal, Result, code};

/// Read access shared by every variable-like member.
///
/// Implemented by [`Variable`] and by [`Property`](crate::Property), which
/// composes a variable with a visibility.
pub trait CodeVariable {
    /// Name of the variable, without any sigil.
    fn name(&self) -> &str;

    /// Free-text description used in documentation.
    fn description(&self) -> Option<&str>;

    /// Type of the variable: a qualified name or a `|` union of them.
    fn ty(&self) -> &str;

    /// The default value, if one was set.
    fn default_value(&self) -> Option<&Literal>;

    /// Whether a default value was set, which may itself be `false`, `0` or empty.
    fn has_default_value(&self) -> bool {
        self.default_value().is_some()
    }
}

/// A named, typed value: a constant, an argument or a return value.
///
/// # Example
///
/// ```
/// use classgen_model::{CodeVariable, Variable};
///
/// let mut flag = Variable::new("isActive", "boolean")?;
/// assert!(!flag.has_default_value());
///
/// flag.set_default_value(false);
/// assert!(flag.has_default_value());
/// # Ok::<(), classgen_model::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    ty: String,
    description: Option<String>,
    default_value: Option<Literal>,
}

impl Variable {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Result<Self> {
        let mut variable = Self {
            name: String::new(),
            ty: String::new(),
            description: None,
            default_value: None,
        };
        variable.set_name(name)?;
        variable.set_type(ty)?;
        Ok(variable)
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if !code::is_valid_name(&name, false) {
            return Err(Error::invalid_identifier("variable name", name));
        }
        self.name = name;
        Ok(())
    }

    pub fn set_type(&mut self, ty: impl Into<String>) -> Result<()> {
        let ty = ty.into();
        if !code::is_valid_type(&ty) {
            return Err(Error::invalid_identifier("variable type", ty));
        }
        self.ty = ty;
        Ok(())
    }

    pub fn set_description(&mut self, description: Option<impl Into<String>>) {
        self.description = description.map(Into::into);
    }

    /// Builder-style variant of [`Variable::set_description`].
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_default_value(&mut self, value: impl Into<Literal>) {
        self.default_value = Some(value.into());
    }

    /// Builder-style variant of [`Variable::set_default_value`].
    pub fn with_default_value(mut self, value: impl Into<Literal>) -> Self {
        self.set_default_value(value);
        self
    }

    /// Remove the default value, so none is rendered.
    pub fn clear_default_value(&mut self) {
        self.default_value = None;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn default_value(&self) -> Option<&Literal> {
        self.default_value.as_ref()
    }

    pub fn has_default_value(&self) -> bool {
        self.default_value.is_some()
    }
}

impl CodeVariable for Variable {
    fn name(&self) -> &str {
        Variable::name(self)
    }

    fn description(&self) -> Option<&str> {
        Variable::description(self)
    }

    fn ty(&self) -> &str {
        Variable::ty(self)
    }

    fn default_value(&self) -> Option<&Literal> {
        Variable::default_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let variable = Variable::new("name", "string").unwrap();
        assert_eq!(variable.name(), "name");
        assert_eq!(variable.ty(), "string");
        assert_eq!(variable.description(), None);
        assert!(!variable.has_default_value());
        assert_eq!(variable.default_value(), None);
    }

    #[test]
    fn test_invalid_name() {
        for name in ["1noNumberToStart", "testé\"(§è!", "", "vendor\\name"] {
            assert!(
                matches!(
                    Variable::new(name, "string"),
                    Err(Error::InvalidIdentifier { .. })
                ),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_type() {
        for ty in ["1noNumberToStart", "", "string|", "a b"] {
            assert!(Variable::new("name", ty).is_err(), "{ty} should be rejected");
        }
        assert!(Variable::new("name", "string|vendor\\MyClass").is_ok());
    }

    #[test]
    fn test_default_value_flag() {
        let mut variable = Variable::new("flag", "boolean").unwrap();

        variable.set_default_value(false);
        assert!(variable.has_default_value());
        assert_eq!(variable.default_value(), Some(&Literal::Bool(false)));

        variable.set_default_value(Literal::Null);
        assert!(variable.has_default_value());

        variable.clear_default_value();
        assert!(!variable.has_default_value());
    }

    #[test]
    fn test_description() {
        let mut variable = Variable::new("name", "string")
            .unwrap()
            .with_description("Name of the user");
        assert_eq!(variable.description(), Some("Name of the user"));

        variable.set_description(None::<String>);
        assert_eq!(variable.description(), None);
    }

    #[test]
    fn test_trait_access() {
        fn describe(variable: &impl CodeVariable) -> String {
            format!("{} {}", variable.ty(), variable.name())
        }

        let variable = Variable::new("count", "integer").unwrap();
        assert_eq!(describe(&variable), "integer count");
    }
}
