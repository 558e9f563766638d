//! Enum wrapping pass.
//!
//! Rewrites the statement sequences older compilers emitted for enums into a
//! single `var E = /*@__PURE__*/ ((function () { ...; return E; })());`
//! statement, so minifiers can drop unused enums as one side-effect-free unit.
//!
//! The pass has two entry points:
//! - [`might_contain_enum_pattern`]: a cheap textual check on the source,
//!   permissive and advisory, to skip files that cannot contain an enum shape
//! - [`rewrite_enums`]: the tree rewrite itself, which shares every untouched
//!   subtree with its input

mod detect;
mod error;
pub mod prefilter;
mod walker;
mod wrapper;

pub use detect::EnumShape;
pub use error::WrapEnumsError;
pub use prefilter::might_contain_enum_pattern;

use tsz_ast::{NodeList, NodeRef};
use walker::BlockWalker;

/// Rewrite every recognized enum in the tree rooted at `root`.
///
/// Returns `root` itself (same `Arc`) when nothing was rewritten.
pub fn rewrite_enums(root: &NodeRef) -> Result<NodeRef, WrapEnumsError> {
    let _span = tracing::debug_span!("wrap_enums", root = %root.kind()).entered();

    let mut walker = BlockWalker::new();
    let result = walker.visit(root)?;
    tracing::debug!(rewritten = walker.rewritten(), "[wrap_enums] done");
    Ok(result)
}

/// Rewrite every recognized enum in a bare statement list and its nested
/// scopes.
///
/// Returns `statements` itself (same `Arc`) when nothing was rewritten.
pub fn rewrite_statements(statements: &NodeList) -> Result<NodeList, WrapEnumsError> {
    let _span = tracing::debug_span!("wrap_enums", statements = statements.len()).entered();

    let mut walker = BlockWalker::new();
    let result = walker.walk_statements(statements)?;
    tracing::debug!(rewritten = walker.rewritten(), "[wrap_enums] done");
    Ok(result)
}
