//! Declaration nodes for PHP source.
//!
//! Every node implements [`Renderable`](classgen_codegen::Renderable) and
//! leaves type resolution to the generator: hints, defaults and names
//! arrive already resolved and encoded.

mod class;
mod consts;
pub mod doc;
mod fns;
mod props;
mod uses;

pub use class::ClassDecl;
pub use consts::Const;
pub use doc::{DocComment, doc_type};
pub use fns::{Function, Param};
pub use props::Prop;
pub use uses::Use;
