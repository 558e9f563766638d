use thiserror::Error;

/// Errors raised while wrapping enums.
///
/// Shape mismatches are never errors; the statements are left as they are.
/// Anything reported here means the detectors and the wrapper builder disagree
/// about a matched shape, which is a bug in this pass rather than a property
/// of the input program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WrapEnumsError {
    /// A matched wrapper call does not have a parenthesized function expression
    /// as its callee.
    #[error("invalid IIFE structure for enum `{name}`: expected `(function ({name}) {{ ... }})(...)`")]
    InvalidIifeStructure { name: String },
}
