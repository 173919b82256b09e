//! Declarative class definitions for the classgen source generator.
//!
//! A manifest describes one class and the settings used to render it:
//!
//! ```toml
//! [generator]
//! style = "spaces"
//! width = 4
//!
//! [class]
//! name = 'vendor\library\MyClass'
//! implements = ['vendor\library\MyInterface']
//!
//! [[class.properties]]
//! name = "isActive"
//! type = "boolean"
//! visibility = "private"
//! default = false
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod definition;
mod error;
mod manifest;
mod settings;

pub use definition::{ClassDef, MethodDef, PropertyDef, VariableDef};
pub use error::{Error, Result, SourceContext};
pub use manifest::Manifest;
pub use settings::{GeneratorSettings, IndentStyle};
