//! PHP `use` import statement.

use classgen_codegen::{CodeFragment, Renderable};
use classgen_model::code::NAMESPACE_SEPARATOR;

/// A `use` statement importing one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Use {
    reference: String,
    alias: Option<String>,
}

impl Use {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            alias: None,
        }
    }

    /// Import the type under another name.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Format the use statement; a name without namespace is rooted at the
    /// global namespace.
    pub fn format(&self) -> String {
        let root = if self.reference.contains(NAMESPACE_SEPARATOR) {
            String::new()
        } else {
            NAMESPACE_SEPARATOR.to_string()
        };
        match &self.alias {
            Some(alias) => format!("use {}{} as {};", root, self.reference, alias),
            None => format!("use {}{};", root, self.reference),
        }
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.format())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_use() {
        assert_eq!(
            Use::new("vendor\\library\\data\\DataContainer").format(),
            "use vendor\\library\\data\\DataContainer;"
        );
    }

    #[test]
    fn test_global_use_is_rooted() {
        assert_eq!(Use::new("DateTime").format(), "use \\DateTime;");
        assert_eq!(Use::new("\\DateTime").format(), "use \\DateTime;");
    }

    #[test]
    fn test_aliased_use() {
        assert_eq!(
            Use::new("vendor\\library\\helper\\MyHelper")
                .alias("Helper")
                .format(),
            "use vendor\\library\\helper\\MyHelper as Helper;"
        );
    }
}
