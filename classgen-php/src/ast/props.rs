//! PHP property declaration.

use classgen_codegen::{CodeFragment, Renderable};
use classgen_model::Visibility;

use super::DocComment;

/// A property declaration such as `private $isActive = false;`.
#[derive(Debug, Clone)]
pub struct Prop {
    name: String,
    visibility: Visibility,
    default: Option<String>,
    doc: DocComment,
}

impl Prop {
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            visibility,
            default: None,
            doc: DocComment::new(),
        }
    }

    /// Set the already encoded default value.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn doc(mut self, doc: DocComment) -> Self {
        self.doc = doc;
        self
    }

    fn format(&self) -> String {
        match &self.default {
            Some(value) => format!("{} ${} = {};", self.visibility, self.name, value),
            None => format!("{} ${};", self.visibility, self.name),
        }
    }
}

impl Renderable for Prop {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.to_fragments();
        fragments.push(CodeFragment::Text(self.format()));
        fragments
    }
}
