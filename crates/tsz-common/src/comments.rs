//! Synthetic Comments
//!
//! Comments are not part of the syntax tree produced by the parser, but passes
//! can attach synthetic comments to nodes they create. The most important one
//! is the `/*@__PURE__*/` annotation, which tells minifiers that a call may be
//! dropped when its result is unused.

use serde::{Deserialize, Serialize};

/// Annotation text marking a call expression as side-effect free.
pub const PURE_ANNOTATION: &str = "@__PURE__";

/// A comment created by a pass rather than read from source text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticComment {
    /// Comment text without delimiters
    pub text: String,
    /// Whether this is a multi-line (`/* */`) comment
    pub is_multi_line: bool,
}

impl SyntheticComment {
    /// Create a new synthetic comment.
    pub fn new(text: impl Into<String>, is_multi_line: bool) -> Self {
        SyntheticComment {
            text: text.into(),
            is_multi_line,
        }
    }

    /// The `/*@__PURE__*/` annotation.
    pub fn pure() -> Self {
        Self::new(PURE_ANNOTATION, true)
    }

    /// Render the comment with its delimiters.
    pub fn render(&self) -> String {
        if self.is_multi_line {
            format!("/*{}*/", self.text)
        } else {
            format!("//{}", self.text)
        }
    }
}
