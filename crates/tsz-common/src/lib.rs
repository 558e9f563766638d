//! Common types and utilities for the tsz optimizer crates.
//!
//! This crate provides foundational pieces used across the tsz crates:
//! - Traversal limits and thresholds
//! - Synthetic comment helpers (`/*@__PURE__*/` annotations)

// Centralized limits and thresholds
pub mod limits;

// Synthetic comment utilities
pub mod comments;
pub use comments::{PURE_ANNOTATION, SyntheticComment};
