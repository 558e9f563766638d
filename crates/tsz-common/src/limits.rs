//! Centralized limits and thresholds for the tsz optimizer passes.
//!
//! This module provides shared constants for recursion depths and inline
//! capacities used by the tree rewriting passes.
//!
//! # Categories
//!
//! - **Recursion Depths**: Limits to prevent stack overflow in recursive walks
//! - **Capacity Limits**: Pre-allocation sizes for small collections

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum depth for AST traversal during tree rewriting.
///
/// Prevents stack overflow when a pass recursively visits deeply nested
/// nodes. Subtrees below this depth are returned untouched. Used by the
/// enum wrapping walker.
///
/// # JavaScript example
///
/// ```javascript
/// // Deeply nested blocks:
/// {{{{{{{{{{{{{{{{{{{{{{{{{
///   var x = 1; // 500 levels of nesting
/// }}}}}}}}}}}}}}}}}}}}}}}}}
///
/// // Deeply nested function expressions:
/// (function () { (function () { (function () { /* ... 500 levels ... */ })(); })(); })();
/// ```
pub const MAX_AST_DEPTH: u32 = 500;

/// Maximum depth for the debug printer.
///
/// The printer writes a `/* ... */` placeholder instead of descending further.
pub const MAX_PRINT_DEPTH: u32 = 1_000;

// =============================================================================
// Capacity Limits
// =============================================================================

/// Inline capacity for enum member runs collected during detection.
///
/// Most emitted enums have a handful of members; runs up to this size stay
/// on the stack.
pub const ENUM_MEMBERS_INLINE: usize = 8;
