//! Expression-tree nodes and literal resolution.
//!
//! A tree starts out flat: [`Node::from_tokens`] produces an
//! [`ExpressionTree`](NodeKind::ExpressionTree) root with one child per token.
//! String and char tokens are recognised immediately; everything else is
//! [`Unknown`](NodeKind::Unknown) until [`Node::classify`] runs.  Literal
//! nodes are then resolved in place by [`Node::resolve`].
//!
//! Numeric literals follow LSL's rules, first match wins:
//!
//! | Text | Result |
//! |------|--------|
//! | base-10 `i32`, or `0x…` | `Int` |
//! | `-0x…` | `Int`, negated |
//! | `…L` (long integers enabled) | `Long` |
//! | float, optional trailing `f` | `Float` (`-0.0` keeps its sign) |

use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::error::CompileError;
use super::escape::decode_escapes;
use super::token::Token;
use super::value::Literal;

// ── Node kinds ────────────────────────────────────────────────────────────────

/// What a tree node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    /// Root of a tree built from a token list.
    ExpressionTree,
    /// Not yet classified.
    Unknown,

    // Literals
    StringValue,
    CharValue,
    /// Numeric literal.
    Value,

    // Operators
    LeftUnaryOperator,
    RightUnaryOperator,
    BinaryOperator,

    // Structure
    Function,
    FunctionArgument,
    Declaration,
    VectorLiteral,
    RotationLiteral,
    Separator,
    LevelBegin,
    LevelEnd,
    Variable,
    MemberAccess,
    ThisOperator,
}

impl NodeKind {
    /// Kinds that carry a resolved [`Literal`].
    pub fn is_literal(self) -> bool {
        matches!(self, NodeKind::StringValue | NodeKind::CharValue | NodeKind::Value)
    }
}

// ── Options ───────────────────────────────────────────────────────────────────

/// Language extensions that change how literals resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Accept `123L` as a 64-bit integer literal.
    pub enable_long_integers: bool,
}

// ── Node ──────────────────────────────────────────────────────────────────────

/// A node in an expression tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    /// Source text; string and char literals have their quotes stripped.
    pub entry: String,
    pub line: usize,
    pub paren_level: i32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    /// Only ever set on literal kinds, and only after resolution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Literal>,
}

impl Node {
    pub fn new(kind: NodeKind, entry: impl Into<String>, line: usize) -> Self {
        Node {
            kind,
            entry: entry.into(),
            line,
            paren_level: 0,
            children: Vec::new(),
            value: None,
        }
    }

    /// Build a flat tree: an `ExpressionTree` root with one child per token.
    ///
    /// The root takes the first token's line, or 0 for an empty list.
    #[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let line = tokens.first().map_or(0, |t| t.line);
        let mut root = Node::new(NodeKind::ExpressionTree, "", line);
        root.children = tokens.iter().map(Node::from_token).collect();
        root
    }

    fn from_token(tok: &Token) -> Self {
        if tok.text.starts_with('"') {
            Node::new(NodeKind::StringValue, strip_quotes(&tok.text), tok.line)
        } else if tok.text.starts_with('\'') {
            Node::new(NodeKind::CharValue, strip_quotes(&tok.text), tok.line)
        } else {
            Node::new(NodeKind::Unknown, tok.text.as_str(), tok.line)
        }
    }

    /// Whether [`Node::resolve`] has attached a literal value.
    pub fn is_resolved(&self) -> bool {
        self.value.is_some()
    }

    /// Resolve a literal node's text into [`Node::value`].
    ///
    /// Nodes of non-literal kinds are left untouched.  Resolution always
    /// starts again from `entry`, so calling this twice gives the same value.
    /// On error `value` is not modified.
    pub fn resolve(&mut self, opts: &ResolverOptions) -> Result<(), CompileError> {
        let value = match self.kind {
            NodeKind::StringValue => Literal::Str(decode_escapes(&self.entry)),
            NodeKind::CharValue => {
                let decoded = decode_escapes(&self.entry);
                let mut chars = decoded.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Literal::Char(c),
                    _ => return Err(CompileError::not_a_value(self.line, &self.entry)),
                }
            }
            NodeKind::Value => resolve_number(&self.entry, self.line, opts)?,
            _ => return Ok(()),
        };
        debug!(line = self.line, entry = %self.entry, %value, "resolved literal");
        self.value = Some(value);
        Ok(())
    }

    /// Resolve every literal node in the tree, depth first.
    ///
    /// Unlike [`Node::resolve`] this does not stop at the first failure; all
    /// errors are returned in tree order.
    pub fn resolve_all(&mut self, opts: &ResolverOptions) -> Vec<CompileError> {
        let mut errors = Vec::new();
        self.resolve_into(opts, &mut errors);
        errors
    }

    fn resolve_into(&mut self, opts: &ResolverOptions, errors: &mut Vec<CompileError>) {
        if let Err(e) = self.resolve(opts) {
            errors.push(e);
        }
        for child in &mut self.children {
            child.resolve_into(opts, errors);
        }
    }

    fn write_outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{:?} @{}", "", self.kind, self.line, indent = depth * 2)?;
        if !self.entry.is_empty() {
            write!(f, " {}", self.entry)?;
        }
        if let Some(v) = &self.value {
            write!(f, " = {v}")?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.write_outline(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    /// Indented outline, one node per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, 0)
    }
}

// ── Literal helpers ───────────────────────────────────────────────────────────

/// Drop the first and last character.  Anything shorter than two characters
/// becomes empty.
fn strip_quotes(text: &str) -> String {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    chars.as_str().to_owned()
}

fn resolve_number(
    entry: &str,
    line: usize,
    opts: &ResolverOptions,
) -> Result<Literal, CompileError> {
    if let Ok(n) = entry.parse::<i32>() {
        return Ok(Literal::Int(n));
    }
    if let Some(digits) = strip_hex_prefix(entry) {
        return parse_hex(digits, entry, line).map(Literal::Int);
    }
    if let Some(digits) = entry.strip_prefix('-').and_then(strip_hex_prefix) {
        let n = parse_hex(digits, entry, line)?;
        return Ok(Literal::Int(n.wrapping_neg()));
    }
    if opts.enable_long_integers {
        if let Some(digits) = entry.strip_suffix(['l', 'L']) {
            if let Ok(n) = digits.parse::<i64>() {
                return Ok(Literal::Long(n));
            }
        }
    }
    if let Some(x) = parse_float(entry) {
        return Ok(Literal::Float(x));
    }
    Err(CompileError::not_a_value(line, entry))
}

fn strip_hex_prefix(text: &str) -> Option<&str> {
    text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))
}

/// Hex digits as a 32-bit pattern: `0xFFFFFFFF` is `-1`.
fn parse_hex(digits: &str, entry: &str, line: usize) -> Result<i32, CompileError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CompileError::not_a_value(line, entry));
    }
    u32::from_str_radix(digits, 16)
        .map(|n| n as i32)
        .map_err(|_| CompileError::not_a_value(line, entry))
}

/// Permissive float parse: one trailing `f` is ignored, the rest goes to the
/// standard parser as-is (so `1e5f` is accepted).  The text must start with a
/// digit or `.` after an optional sign, which keeps `nan` and `infinity` out.
fn parse_float(entry: &str) -> Option<f64> {
    let text = entry.trim();
    let text = text.strip_suffix('f').unwrap_or(text);
    let unsigned = text.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(text);
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    let x: f64 = text.parse().ok()?;
    if entry.starts_with('-') && x.to_bits() == 0 {
        return Some(-0.0);
    }
    Some(x)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
