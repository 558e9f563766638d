//! Tracing setup for the optimizer passes.
//!
//! Events are filtered with `TSZ_LOG` (falling back to `RUST_LOG`) and
//! rendered in the format named by `TSZ_LOG_FORMAT`: `text` (default),
//! `tree` (`tracing-tree`) or `json`.
//!
//! ```bash
//! # Which enums were wrapped, and in which shape
//! TSZ_LOG=wrap_enums TSZ_LOG_FORMAT=tree my-pipeline
//!
//! # Also print every rewritten statement
//! TSZ_LOG=wrap_enums=trace my-pipeline
//! ```
//!
//! A bare pass name in `TSZ_LOG` is shorthand for its module target, so
//! `wrap_enums=trace` means `tsz_optimizer::wrap_enums=trace` and a name with
//! no level means `debug`.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Passes that can be named directly in `TSZ_LOG`.
const PASS_TARGETS: &[(&str, &str)] = &[("wrap_enums", "tsz_optimizer::wrap_enums")];

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Flat text lines (default).
    Text,
    /// Indented span tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON, one object per event.
    Json,
}

impl LogFormat {
    /// Parse a `TSZ_LOG_FORMAT` value. Unknown values fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("TSZ_LOG_FORMAT").unwrap_or_default())
    }
}

/// Expand pass-name shorthands in a comma separated filter string.
///
/// `wrap_enums` becomes `tsz_optimizer::wrap_enums=debug` and
/// `wrap_enums=trace` keeps its level. Every other directive is passed
/// through unchanged.
pub fn expand_filter_directives(raw: &str) -> String {
    raw.split(',')
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .map(|directive| {
            let (target, level) = directive
                .split_once('=')
                .map_or((directive, None), |(target, level)| (target, Some(level)));
            match PASS_TARGETS.iter().find(|(pass, _)| *pass == target) {
                Some((_, module)) => format!("{module}={}", level.unwrap_or("debug")),
                None => directive.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn build_filter() -> EnvFilter {
    match std::env::var("TSZ_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(expand_filter_directives(&val)),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Install the global subscriber for the optimizer passes.
///
/// Does nothing unless `TSZ_LOG` or `RUST_LOG` is set. A second call, or a
/// subscriber already installed by the host pipeline, is left in place.
/// Output goes to stderr.
pub fn init_tracing() {
    if std::env::var_os("TSZ_LOG").is_none() && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let filter = build_filter();
    let installed = match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true);
            Registry::default().with(filter).with(tree_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);
            Registry::default().with(filter).with(text_layer).try_init()
        }
    };

    if installed.is_err() {
        tracing::debug!("[tracing] global subscriber already installed");
    }
}
