//! PHP method declaration.

use classgen_codegen::{CodeFragment, Renderable};
use classgen_model::Visibility;

use super::DocComment;

/// A method parameter, `[Hint ]$name[ = default]`.
#[derive(Debug, Clone)]
pub struct Param {
    name: String,
    hint: Option<String>,
    default: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hint: None,
            default: None,
        }
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Set the already encoded default value.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn format(&self) -> String {
        let mut param = String::new();
        if let Some(hint) = &self.hint {
            param.push_str(hint);
            param.push(' ');
        }
        param.push('$');
        param.push_str(&self.name);
        if let Some(default) = &self.default {
            param.push_str(" = ");
            param.push_str(default);
        }
        param
    }
}

/// A method with its documentation and optional body.
///
/// Without a body the signature is a declaration ending with `;`, as
/// required for interface and abstract methods.
#[derive(Debug, Clone)]
pub struct Function {
    name: String,
    visibility: Visibility,
    is_abstract: bool,
    is_static: bool,
    params: Vec<Param>,
    doc: DocComment,
    body: Option<String>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_abstract: false,
            is_static: false,
            params: Vec::new(),
            doc: DocComment::new(),
            body: None,
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn abstract_(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn static_(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn doc(mut self, doc: DocComment) -> Self {
        self.doc = doc;
        self
    }

    /// Give the method a body; an empty body still opens a block.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    fn signature(&self) -> String {
        let mut sig = String::new();
        if self.is_abstract {
            sig.push_str("abstract ");
        }
        sig.push_str(self.visibility.as_str());
        sig.push(' ');
        if self.is_static {
            sig.push_str("static ");
        }
        let params: Vec<String> = self.params.iter().map(Param::format).collect();
        sig.push_str(&format!("function {}({})", self.name, params.join(", ")));
        sig
    }
}

impl Renderable for Function {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.to_fragments();
        let signature = self.signature();

        match &self.body {
            // an encoded array default spans several lines
            None => fragments.push(CodeFragment::text(format!("{signature};"))),
            Some(body) => {
                let body = if body.is_empty() {
                    Vec::new()
                } else {
                    vec![CodeFragment::text(body.as_str())]
                };
                fragments.push(CodeFragment::block(
                    format!("{signature} {{"),
                    body,
                    Some("}".to_string()),
                ));
            }
        }

        fragments
    }
}
