//! LSL compiler front-end: tokens → expression tree → resolved literals.
//!
//! The pipeline is:
//!
//! 1. [`tokenize`] splits source into [`Token`]s with line numbers.
//! 2. [`Node::from_tokens`] builds a flat `ExpressionTree` root.
//! 3. [`Node::classify`] assigns node kinds and paren levels.
//! 4. [`Node::resolve_all`] turns literal nodes into [`Literal`] values.
//!
//! Operator precedence, name resolution and code generation belong to later
//! stages and are not handled here.
//!
//! # Quick start
//!
//! ```rust
//! use lsl_tree::compiler::{compile_source, Literal, ResolverOptions};
//!
//! let (tree, errors) = compile_source("x = -0x1F;", &ResolverOptions::default());
//! assert!(errors.is_empty());
//! assert_eq!(tree.children[2].value, Some(Literal::Int(-31)));
//! ```

pub mod classify;
pub mod error;
pub mod escape;
pub mod token;
pub mod tree;
pub mod value;

// Re-exports for convenience.
pub use error::{CompileError, UnsupportedOperation};
pub use escape::decode_escapes;
pub use token::{tokenize, Token};
pub use tree::{Node, NodeKind, ResolverOptions};
pub use value::Literal;

/// Run the whole front-end over `src`.
///
/// Always returns a tree; literals that failed to resolve are left without a
/// value and reported in the error list, in source order.
#[tracing::instrument(level = "debug", skip(src), fields(len = src.len()))]
pub fn compile_source(src: &str, opts: &ResolverOptions) -> (Node, Vec<CompileError>) {
    let tokens = tokenize(src);
    let mut tree = Node::from_tokens(&tokens);
    tree.classify();
    let errors = tree.resolve_all(opts);
    tracing::debug!(nodes = tree.children.len(), errors = errors.len(), "front-end finished");
    (tree, errors)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
