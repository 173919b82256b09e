use classgen_codegen::{ImportTable, Indent, LanguageCodegen};
use classgen_model::{
    Class, CodeVariable, Error, Method, Property, Result, Variable, Visibility, code,
};

use crate::{
    PhpFile,
    ast::{ClassDecl, Const, DocComment, Function, Param, Prop, Use, doc_type},
    export::export_default,
};

/// Pseudo types that are valid hints but never imported.
const BUILTIN_TYPES: &[&str] = &[
    "array", "callable", "iterable", "object", "self", "null", "void",
];

/// PHP class generator.
///
/// The generator keeps no state between calls: the import table of a class
/// lives only for the duration of [`Generator::generate_class`], so one
/// generator can render any number of classes.
///
/// # Example
///
/// ```
/// use classgen_php::Generator;
///
/// let generator = Generator::new();
/// let mut class = generator.create_class("vendor\\library\\MyInterface", None, &[], true, false)?;
/// class.add_method(generator.create_method("isActive", [], None, None, false, false)?);
///
/// let source = generator.generate_class(&class)?;
/// assert!(source.contains("    public function isActive();\n"));
/// # Ok::<(), classgen_model::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Generator {
    indent: Indent,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "php"
    }

    fn file_extension(&self) -> &'static str {
        "php"
    }

    fn generate_class(&self, class: &Class) -> Result<String> {
        Generator::generate_class(self, class)
    }
}

impl Generator {
    /// Create a generator indenting with 4 spaces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with a custom indentation unit.
    pub fn with_indent(indent: Indent) -> Self {
        Self { indent }
    }

    pub fn indent(&self) -> Indent {
        self.indent
    }

    // =========================================================================
    // Factory
    // =========================================================================

    /// Create a class definition.
    pub fn create_class(
        &self,
        name: &str,
        extends: Option<&str>,
        implements: &[&str],
        is_interface: bool,
        is_abstract: bool,
    ) -> Result<Class> {
        let mut class = Class::new(name)?;
        class.set_extends(extends)?;
        for interface in implements {
            class.add_implements(*interface)?;
        }
        class.set_interface(is_interface);
        class.set_abstract(is_abstract);
        Ok(class)
    }

    /// Create a method; a missing visibility means public.
    pub fn create_method(
        &self,
        name: &str,
        arguments: impl IntoIterator<Item = Variable>,
        body: Option<&str>,
        visibility: Option<Visibility>,
        is_abstract: bool,
        is_static: bool,
    ) -> Result<Method> {
        let mut method = Method::new(name)?;
        method.set_arguments(arguments);
        method.set_body(body);
        method.set_visibility(visibility.unwrap_or_default());
        method.set_abstract(is_abstract);
        method.set_static(is_static);
        Ok(method)
    }

    /// Create a property; a missing visibility means public.
    pub fn create_property(
        &self,
        name: &str,
        ty: &str,
        visibility: Option<Visibility>,
    ) -> Result<Property> {
        Ok(Property::new(name, ty)?.with_visibility(visibility.unwrap_or_default()))
    }

    pub fn create_variable(&self, name: &str, ty: &str) -> Result<Variable> {
        Variable::new(name, ty)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the complete source file of a class.
    ///
    /// Fails with [`Error::TypeConflict`] when a type is referenced under two
    /// different aliases, with [`Error::NameCollision`] when an explicit alias
    /// is already the name of another type, and with
    /// [`Error::MissingDefaultValue`] for a constant without value. Nothing is
    /// rendered in any of these cases.
    pub fn generate_class(&self, class: &Class) -> Result<String> {
        log::debug!("generating class {}", class.name());

        let (namespace, name) = code::resolve_qualified_name(class.name());
        let mut imports = ImportTable::new();
        collect_imports(class, &mut imports)?;

        let header = class_decl(class, name, &imports);
        let constants = class
            .constants()
            .map(constant)
            .collect::<Result<Vec<_>>>()?;
        let properties: Vec<Prop> = class.properties().map(property).collect();
        let methods: Vec<Function> = class
            .methods()
            .map(|method| function(method, class.is_interface(), &imports))
            .collect();

        let file = PhpFile::new(header)
            .use_stmts(use_stmts(&imports, namespace))
            .members(constants)
            .members(properties)
            .members(methods);
        let file = match namespace {
            Some(namespace) => file.namespace(namespace),
            None => file,
        };

        Ok(file.render_with_indent(self.indent))
    }
}

/// Register every type the class refers to: the class itself so its short
/// name stays reserved, explicit uses, then the implicit references of the
/// header and the members.
fn collect_imports(class: &Class, imports: &mut ImportTable) -> Result<()> {
    imports.register(class.name(), None)?;
    for (reference, alias) in class.uses().iter() {
        imports.register(reference, alias)?;
    }
    for method in class.methods() {
        for (reference, alias) in method.uses().iter() {
            imports.register(reference, alias)?;
        }
    }

    if let Some(parent) = class.extends() {
        register_type(imports, parent)?;
    }
    for interface in class.implements() {
        register_type(imports, interface)?;
    }
    for property in class.properties() {
        register_type(imports, property.ty())?;
    }
    for method in class.methods() {
        for argument in method.arguments() {
            register_type(imports, argument.ty())?;
        }
    }
    for method in class.methods() {
        if let Some(return_value) = method.return_value() {
            register_type(imports, return_value.ty())?;
        }
    }

    Ok(())
}

fn is_importable(ty: &str) -> bool {
    !code::is_union_type(ty) && !code::is_undefinable_type(ty) && !BUILTIN_TYPES.contains(&ty)
}

fn register_type(imports: &mut ImportTable, ty: &str) -> Result<()> {
    if is_importable(ty) {
        imports.register(ty, None)?;
    }
    Ok(())
}

/// Hint for an argument type; unions and scalars are documented only.
fn type_hint(imports: &ImportTable, ty: &str) -> Option<String> {
    if code::is_union_type(ty) || code::is_undefinable_type(ty) {
        None
    } else if BUILTIN_TYPES.contains(&ty) {
        Some(ty.to_string())
    } else {
        Some(imports.local_name(ty))
    }
}

fn class_decl(class: &Class, name: &str, imports: &ImportTable) -> ClassDecl {
    let mut decl = ClassDecl::new(class.kind(), name)
        .doc(DocComment::new().text(class.description()));

    if let Some(parent) = class.extends() {
        decl = decl.extends(imports.local_name(parent));
    }

    // first referenced first, not alphabetical
    let mut interfaces: Vec<&str> = class.implements().collect();
    interfaces.sort_by_key(|interface| imports.position(interface).unwrap_or(usize::MAX));
    for interface in interfaces {
        decl = decl.implements(imports.local_name(interface));
    }

    decl
}

fn use_stmts(imports: &ImportTable, namespace: Option<&str>) -> Vec<Use> {
    let mut uses = Vec::new();
    for (reference, alias) in imports.sorted() {
        let (reference_namespace, short_name) = code::resolve_qualified_name(reference);
        if reference_namespace == namespace && alias.is_none() {
            log::trace!("skipping same namespace import {reference}");
            continue;
        }

        let mut use_stmt = Use::new(reference);
        if let Some(alias) = alias.filter(|alias| *alias != short_name) {
            use_stmt = use_stmt.alias(alias);
        }
        uses.push(use_stmt);
    }
    uses
}

fn variable_doc(description: Option<&str>, ty: &str) -> DocComment {
    DocComment::new().text(description).tag("var", doc_type(ty))
}

fn constant(constant: &Variable) -> Result<Const> {
    let value = constant
        .default_value()
        .ok_or_else(|| Error::MissingDefaultValue {
            constant: constant.name().to_string(),
        })?;
    Ok(Const::new(constant.name(), export_default(value))
        .doc(variable_doc(constant.description(), constant.ty())))
}

fn property(property: &Property) -> Prop {
    let mut prop = Prop::new(property.name(), property.visibility())
        .doc(variable_doc(property.description(), property.ty()));
    if let Some(value) = property.default_value() {
        prop = prop.default_value(export_default(value));
    }
    prop
}

/// `type $name description`, or `type description` for a return value.
fn tag_value(ty: &str, name: Option<&str>, description: Option<&str>) -> String {
    let mut value = doc_type(ty);
    if let Some(name) = name {
        value.push_str(" $");
        value.push_str(name);
    }
    value.push(' ');
    value.push_str(description.unwrap_or_default());
    value
}

fn function(method: &Method, in_interface: bool, imports: &ImportTable) -> Function {
    let mut doc = DocComment::new().text(method.description().map(str::trim_start));
    let mut function = Function::new(method.name())
        .visibility(method.visibility())
        .abstract_(method.is_abstract())
        .static_(method.is_static());

    for argument in method.arguments() {
        doc = doc.tag(
            "param",
            tag_value(argument.ty(), Some(argument.name()), argument.description()),
        );

        let mut param = Param::new(argument.name());
        if let Some(hint) = type_hint(imports, argument.ty()) {
            param = param.hint(hint);
        }
        if let Some(value) = argument.default_value() {
            param = param.default_value(export_default(value));
        }
        function = function.param(param);
    }

    doc = match method.return_value() {
        Some(return_value) => doc.tag(
            "return",
            tag_value(return_value.ty(), None, return_value.description()),
        ),
        None => doc.tag("return", "null"),
    };
    function = function.doc(doc);

    if in_interface || method.is_abstract() {
        function
    } else {
        function.body(method.body().unwrap_or_default())
    }
}
