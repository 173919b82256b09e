//! Conversion of a parsed manifest into a class model.

use classgen_model::{Class, Method, Property, Variable};
use indexmap::IndexMap;

use super::{
    Manifest,
    validate::{BuildContext, literal},
};
use crate::{MethodDef, PropertyDef, Result, VariableDef};

impl Manifest {
    /// Build the class model described by this manifest.
    ///
    /// Every value goes through the validating setters of the model; a
    /// rejected value is reported against its place in the manifest.
    ///
    /// # Example
    ///
    /// ```
    /// use std::str::FromStr;
    /// use classgen_manifest::Manifest;
    ///
    /// let manifest = Manifest::from_str(r#"
    ///     [class]
    ///     name = 'vendor\MyInterface'
    ///     interface = true
    ///
    ///     [[class.methods]]
    ///     name = "isActive"
    /// "#)?;
    ///
    /// let class = manifest.to_class()?;
    /// assert!(class.is_interface());
    /// assert!(class.has_method("isActive"));
    /// # Ok::<(), Box<classgen_manifest::Error>>(())
    /// ```
    pub fn to_class(&self) -> Result<Class> {
        let ctx = BuildContext::new(self.source());
        let def = &self.class;

        let mut class = Class::new(def.name.as_str()).map_err(|e| ctx.model_error(e, &def.name))?;
        class.set_description(ctx.description(def.description.as_ref(), "class")?);
        if let Some(parent) = &def.extends {
            class
                .set_extends(Some(parent.as_str()))
                .map_err(|e| ctx.model_error(e, parent))?;
        }
        for interface in &def.implements {
            class
                .add_implements(interface.as_str())
                .map_err(|e| ctx.model_error(e, interface))?;
        }
        class.set_interface(def.interface);
        class.set_abstract(def.is_abstract);
        add_uses(&ctx, &def.uses, |reference, alias| class.add_use(reference, alias))?;

        for (index, entry) in def.constants.iter().enumerate() {
            let constant: VariableDef = ctx.entry(entry, "constants", index, "constant")?;
            class.add_constant(variable(&ctx.push("constants"), &constant)?);
        }
        for (index, entry) in def.properties.iter().enumerate() {
            let property_def: PropertyDef = ctx.entry(entry, "properties", index, "property")?;
            class.add_property(property(&ctx.push("properties"), &property_def)?);
        }
        for (index, entry) in def.methods.iter().enumerate() {
            let method_def: MethodDef = ctx.entry(entry, "methods", index, "method")?;
            class.add_method(method(&ctx, &method_def)?);
        }

        Ok(class)
    }
}

/// Register `use` entries; an empty alias means no alias.
fn add_uses(
    ctx: &BuildContext<'_>,
    uses: &IndexMap<String, String>,
    mut add: impl FnMut(&str, Option<&str>) -> classgen_model::Result<()>,
) -> Result<()> {
    for (reference, alias) in uses {
        let alias = Some(alias.as_str()).filter(|alias| !alias.is_empty());
        add(reference.as_str(), alias).map_err(|e| ctx.model_error(e, reference))?;
    }
    Ok(())
}

fn variable(ctx: &BuildContext<'_>, def: &VariableDef) -> Result<Variable> {
    let mut variable =
        Variable::new(def.name.as_str(), def.ty.as_str()).map_err(|e| ctx.model_error(e, &def.name))?;
    variable.set_description(ctx.push(&def.name).description(def.description.as_ref(), "variable")?);
    if let Some(value) = &def.default {
        variable.set_default_value(literal(value));
    }
    Ok(variable)
}

fn property(ctx: &BuildContext<'_>, def: &PropertyDef) -> Result<Property> {
    let mut property = Property::from(variable(ctx, &def.variable)?);
    if let Some(scope) = &def.visibility {
        property
            .set_scope(scope)
            .map_err(|e| ctx.model_error(e, scope))?;
    }
    Ok(property)
}

fn method(ctx: &BuildContext<'_>, def: &MethodDef) -> Result<Method> {
    let mut method = Method::new(def.name.as_str()).map_err(|e| ctx.model_error(e, &def.name))?;
    let ctx = ctx.push(&def.name);

    method.set_description(ctx.description(def.description.as_ref(), "method")?);
    if let Some(scope) = &def.visibility {
        method
            .set_scope(scope)
            .map_err(|e| ctx.model_error(e, scope))?;
    }
    method.set_abstract(def.is_abstract);
    method.set_static(def.is_static);
    method.set_body(def.body.as_deref());
    add_uses(&ctx, &def.uses, |reference, alias| method.add_use(reference, alias))?;

    for (index, entry) in def.arguments.iter().enumerate() {
        let argument: VariableDef = ctx.entry(entry, "arguments", index, "argument")?;
        method.add_argument(variable(&ctx, &argument)?);
    }
    if let Some(returns) = &def.returns {
        method.set_return_value(Some(variable(&ctx, returns)?));
    }

    Ok(method)
}
