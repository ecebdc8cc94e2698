//! Constant literal values attached to resolved tree nodes.
//!
//! The variant set is closed: LSL source can only spell five kinds of
//! literal, so every consumer matches exhaustively.

use std::fmt;

use serde::Serialize;

use super::error::UnsupportedOperation;

/// A resolved LSL literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Literal {
    Int(i32),
    /// Only produced when long integers are enabled in [`ResolverOptions`](super::ResolverOptions).
    Long(i64),
    Float(f64),
    Char(char),
    Str(String),
}

impl fmt::Display for Literal {
    /// Culture-invariant rendering: `.` is always the decimal separator and a
    /// negative zero keeps its sign (`-0`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{n}"),
            Literal::Long(n) => write!(f, "{n}"),
            Literal::Float(x) => write!(f, "{x}"),
            Literal::Char(c) => write!(f, "{c}"),
            Literal::Str(s) => f.write_str(s),
        }
    }
}

impl Literal {
    /// Arithmetic negation.
    ///
    /// Integers wrap at the boundary (`-i32::MIN == i32::MIN`); floats flip
    /// the sign bit, so negating `0.0` yields `-0.0`.
    pub fn negate(&self) -> Result<Literal, UnsupportedOperation> {
        match self {
            Literal::Int(n) => Ok(Literal::Int(n.wrapping_neg())),
            Literal::Long(n) => Ok(Literal::Long(n.wrapping_neg())),
            Literal::Float(x) => Ok(Literal::Float(-x)),
            Literal::Char(_) => Err(UnsupportedOperation("cannot negate a char literal")),
            Literal::Str(_) => Err(UnsupportedOperation("cannot negate a string literal")),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
