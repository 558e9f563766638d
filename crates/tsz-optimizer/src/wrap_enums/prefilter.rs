//! Textual pre-filter for the enum wrapping pass.
//!
//! Answers "could this source contain an enum shape?" without parsing. The
//! answer is permissive: a `true` only costs a tree walk that finds nothing,
//! while a `false` skips the walk entirely, so every shape the detectors
//! accept must produce `true` when printed the way compilers emit it.

use memchr::memmem;
use once_cell::sync::Lazy;
use regex::Regex;

/// `var E;` (optionally `/*@__PURE__*/`) then `(function (E) {`, with any
/// spacing and any of the declaration keywords.
static WRAPPED_ENUM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:var|let|const)\s+([\w$]+)\s*;(?:\s*/\*\s*[@#]__PURE__\s*\*/)*\s*(?:\(\s*)+function\s*\(\s*([\w$]+)\s*\)\s*\{",
    )
    .expect("valid regex")
});

/// `var E = {};` or `var E = { A: 0 };` then a statement starting with `E.`
/// or `E[`.
static FLAT_ENUM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:var|let|const)\s+([\w$]+)\s*=\s*\{[^{};]*\}\s*;\s*([\w$]+)\s*[.\[]")
        .expect("valid regex")
});

/// `/** @enum {number} */`
static ENUM_ANNOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/\*\*\s*@enum\s*\{\w+\}\s*\*/")
        .expect("valid regex")
});

/// Declaration keywords an enum host statement can start with
const DECLARATION_KEYWORDS: [&[u8]; 3] = [b"var", b"let", b"const"];

/// Whether `text` might contain an enum the wrapping pass can rewrite.
///
/// Never authoritative: the tree walk decides what is an enum.
pub fn might_contain_enum_pattern(text: &str) -> bool {
    let bytes = text.as_bytes();
    let has_declaration = DECLARATION_KEYWORDS
        .iter()
        .any(|keyword| memmem::find(bytes, keyword).is_some());
    let has_annotation = memmem::find(bytes, b"@enum").is_some();
    if !has_declaration && !has_annotation {
        return false;
    }

    (has_declaration
        && (same_name_captures(&WRAPPED_ENUM, text) || same_name_captures(&FLAT_ENUM, text)))
        || (has_annotation && ENUM_ANNOTATION.is_match(text))
}

/// Any match whose two capture groups name the same identifier.
fn same_name_captures(pattern: &Regex, text: &str) -> bool {
    pattern.captures_iter(text).any(|caps| {
        matches!(
            (caps.get(1), caps.get(2)),
            (Some(declared), Some(used)) if declared.as_str() == used.as_str()
        )
    })
}
