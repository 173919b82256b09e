//! Shared code generation utilities for the classgen source generator.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific generators (e.g., `classgen-php`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Render-pass state (ImportTable)
//! - [`language`] - Language generator trait (LanguageCodegen)

pub mod builder;
pub mod generation;
pub mod language;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use generation::ImportTable;
pub use language::{LanguageCodegen, PreviewFile};
