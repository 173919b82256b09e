use crate::{CodeVariable, Literal, Result, Variable, Visibility};

/// A class property: a [`Variable`] with a visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    variable: Variable,
    visibility: Visibility,
}

impl Property {
    /// Create a public property.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Result<Self> {
        Ok(Self {
            variable: Variable::new(name, ty)?,
            visibility: Visibility::default(),
        })
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// Set the visibility from its keyword, rejecting anything but
    /// `public`, `protected` and `private`.
    pub fn set_scope(&mut self, scope: &str) -> Result<()> {
        self.visibility = scope.parse()?;
        Ok(())
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    pub fn variable_mut(&mut self) -> &mut Variable {
        &mut self.variable
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.variable.set_description(Some(description));
        self
    }

    pub fn with_default_value(mut self, value: impl Into<Literal>) -> Self {
        self.variable.set_default_value(value);
        self
    }

    pub fn name(&self) -> &str {
        self.variable.name()
    }
}

impl CodeVariable for Property {
    fn name(&self) -> &str {
        self.variable.name()
    }

    fn description(&self) -> Option<&str> {
        self.variable.description()
    }

    fn ty(&self) -> &str {
        self.variable.ty()
    }

    fn default_value(&self) -> Option<&Literal> {
        self.variable.default_value()
    }
}

impl From<Property> for Variable {
    fn from(property: Property) -> Self {
        property.variable
    }
}

/// A public property around an existing variable.
impl From<Variable> for Property {
    fn from(variable: Variable) -> Self {
        Self {
            variable,
            visibility: Visibility::default(),
        }
    }
}
