//! Build optimizer passes for tsz output.
//!
//! Passes take an immutable [`tsz_ast`] tree and return a rewritten tree that
//! shares every untouched subtree with the input.
//!
//! Currently provided:
//! - [`wrap_enums`]: wraps compiler-emitted enums in pure-annotated IIFEs so
//!   minifiers can drop unused ones

pub mod wrap_enums;
pub use wrap_enums::{
    EnumShape, WrapEnumsError, might_contain_enum_pattern, rewrite_enums, rewrite_statements,
};

// Logging setup
pub mod tracing_config;
pub use tracing_config::init_tracing;
