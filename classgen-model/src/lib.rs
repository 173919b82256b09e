//! Class model for the classgen source generator.
//!
//! This crate holds the passive records a generator renders: [`Class`],
//! [`Method`], [`Property`] and [`Variable`], plus the predicates that
//! validate their names and types.
//!
//! # Module Organization
//!
//! - [`code`] - Identifier, type and visibility predicates
//! - [`Literal`] - Default values for constants, properties and arguments
//! - [`Error`] - Model and generation errors

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod class;
pub mod code;
mod error;
mod literal;
mod method;
mod property;
mod use_map;
mod variable;
mod visibility;

pub use class::{Class, ClassKind};
pub use error::{Error, Result};
pub use literal::{ArrayKey, Literal};
pub use method::Method;
pub use property::Property;
pub use use_map::UseMap;
pub use variable::{CodeVariable, Variable};
pub use visibility::Visibility;
