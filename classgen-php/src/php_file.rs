//! PhpFile abstraction for structured PHP class files.
//!
//! Lays out the sections of a class file in their fixed order: open tag,
//! namespace, imports, class header, members, closing brace.

use classgen_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::{ClassDecl, Use};

/// A structured representation of one PHP class file.
///
/// # Example
///
/// ```
/// use classgen_model::ClassKind;
/// use classgen_php::{ast::{ClassDecl, Use}, PhpFile};
///
/// let code = PhpFile::new(ClassDecl::new(ClassKind::Interface, "Empty"))
///     .namespace("vendor")
///     .use_stmt(Use::new("other\\Thing"))
///     .render();
///
/// assert_eq!(code, "<?php\n\nnamespace vendor;\n\nuse other\\Thing;\n\ninterface Empty {\n\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct PhpFile {
    namespace: Option<String>,
    uses: Vec<Use>,
    header: ClassDecl,
    members: Vec<Vec<CodeFragment>>,
}

impl PhpFile {
    /// Create a file around a class declaration.
    pub fn new(header: ClassDecl) -> Self {
        Self {
            namespace: None,
            uses: Vec::new(),
            header,
            members: Vec::new(),
        }
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Add a use statement.
    pub fn use_stmt(mut self, use_stmt: Use) -> Self {
        self.uses.push(use_stmt);
        self
    }

    /// Add multiple use statements.
    pub fn use_stmts(mut self, uses: impl IntoIterator<Item = Use>) -> Self {
        self.uses.extend(uses);
        self
    }

    /// Add a class member (any Renderable).
    pub fn member<R: Renderable>(mut self, node: R) -> Self {
        self.members.push(node.to_fragments());
        self
    }

    /// Add multiple class members.
    pub fn members<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.members.push(node.to_fragments());
        }
        self
    }

    /// Render the file with PHP indentation (4 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::PHP)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        builder.push_line("<?php").push_blank();

        if let Some(namespace) = &self.namespace {
            builder.push_line(&format!("namespace {namespace};")).push_blank();
        }

        for use_stmt in &self.uses {
            builder.emit(use_stmt);
        }
        if !self.uses.is_empty() {
            builder.push_blank();
        }

        builder.emit(&self.header).push_blank();

        // every member is followed by a blank line, including the last one
        builder.push_indent();
        for fragments in &self.members {
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
            builder.push_blank();
        }
        builder.push_dedent();

        builder.push_line("}");
        builder.build()
    }
}
