//! PHP class constant declaration.

use classgen_codegen::{CodeFragment, Renderable};

use super::DocComment;

/// A `const NAME = value;` declaration.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
    doc: DocComment,
}

impl Const {
    /// Create a constant from its name and already encoded value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            doc: DocComment::new(),
        }
    }

    pub fn doc(mut self, doc: DocComment) -> Self {
        self.doc = doc;
        self
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.to_fragments();
        fragments.push(CodeFragment::Text(format!(
            "const {} = {};",
            self.name, self.value
        )));
        fragments
    }
}
