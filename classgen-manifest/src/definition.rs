//! Raw class definitions as written in a manifest.
//!
//! Member lists and descriptions are kept as plain TOML values so that
//! an entry of the wrong kind is reported against the collection it sits in.

use indexmap::IndexMap;

use serde::Deserialize;

/// The `[class]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassDef {
    /// Qualified class name, e.g. `vendor\library\MyClass`
    pub name: String,

    #[serde(default)]
    pub description: Option<toml::Value>,

    /// Qualified name of the extended class
    #[serde(default)]
    pub extends: Option<String>,

    #[serde(default)]
    pub implements: Vec<String>,

    #[serde(default)]
    pub interface: bool,

    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,

    /// Reference -> alias in manifest order; an empty alias imports under
    /// the short name
    #[serde(default, rename = "use")]
    pub uses: IndexMap<String, String>,

    #[serde(default)]
    pub constants: Vec<toml::Value>,

    #[serde(default)]
    pub properties: Vec<toml::Value>,

    #[serde(default)]
    pub methods: Vec<toml::Value>,
}

/// A constant, argument or return value.
#[derive(Debug, Clone, Deserialize)]
pub struct VariableDef {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub description: Option<toml::Value>,

    /// TOML has no null, so a missing default means no default
    #[serde(default)]
    pub default: Option<toml::Value>,
}

/// An entry of `[[class.properties]]`.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyDef {
    #[serde(flatten)]
    pub variable: VariableDef,

    #[serde(default)]
    pub visibility: Option<String>,
}

/// An entry of `[[class.methods]]`.
#[derive(Debug, Clone, Deserialize)]
pub struct MethodDef {
    pub name: String,

    #[serde(default)]
    pub description: Option<toml::Value>,

    #[serde(default)]
    pub visibility: Option<String>,

    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,

    #[serde(default, rename = "static")]
    pub is_static: bool,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default, rename = "use")]
    pub uses: IndexMap<String, String>,

    #[serde(default)]
    pub arguments: Vec<toml::Value>,

    #[serde(default)]
    pub returns: Option<VariableDef>,
}
