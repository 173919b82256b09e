//! Manifest types and parsing for class definition files.

mod build;
mod parse;
mod validate;

use classgen_codegen::Indent;
use serde::Deserialize;

use crate::{ClassDef, GeneratorSettings, SourceContext};

/// Root of a class manifest
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Layout of the generated source
    #[serde(default)]
    pub generator: GeneratorSettings,

    /// The class to generate
    pub class: ClassDef,

    #[serde(skip)]
    source: SourceContext,
}

impl Manifest {
    /// Indentation requested by the `[generator]` table.
    pub fn indent(&self) -> Indent {
        self.generator.indent()
    }

    /// Source the manifest was parsed from.
    pub fn source(&self) -> &SourceContext {
        &self.source
    }
}
