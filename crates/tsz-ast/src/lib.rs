//! Immutable JavaScript syntax tree for the tsz optimizer passes.
//!
//! This crate provides the tree that the build optimizer rewrites:
//! - Node model (`Node`, `NodeRef`, `NodeList`) with `Arc` structural sharing
//! - Node kind discriminants (`SyntaxKind`)
//! - Builder helpers for constructing nodes
//! - Generic child mapping (`Node::map_children`)
//! - A debug printer (`AstPrinter`)
//!
//! Parsing is done elsewhere; trees arrive here already built (or deserialized
//! from JSON via serde).

pub mod kind;
pub use kind::SyntaxKind;

pub mod node;
pub use node::{
    Modifiers, Node, NodeList, NodeRef, Parameter, Text, VarKind, VariableDeclaration,
};

// Query helpers
pub mod node_access;
pub use node_access::skip_parentheses;

// Constructors
mod builders;

// Generic child visiting
pub mod visit;

// Debug printer
pub mod printer;
pub use printer::AstPrinter;
