//! PHP class generator for the classgen source generator.
//!
//! [`Generator`] renders a [`classgen_model::Class`] into the complete
//! source of a PHP file: namespace, sorted `use` imports, the class header
//! and every constant, property and method with its documentation block.

mod generator;
mod php_file;

pub mod ast;
pub mod export;

pub use classgen_codegen::{Indent, LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use php_file::PhpFile;
