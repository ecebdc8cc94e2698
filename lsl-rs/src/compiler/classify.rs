//! Token classification for flat trees.
//!
//! [`Node::classify`] gives every `Unknown` child of a freshly built tree a
//! concrete [`NodeKind`] and records paren nesting.  Unary minus directly in
//! front of a numeric literal is folded into the literal, so `-0x1F` and
//! `-0.0` reach the resolver as single values.

use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use super::tree::{Node, NodeKind};

const TYPE_KEYWORDS: &[&str] = &["integer", "float", "string", "key", "vector", "rotation", "list"];

/// Control-flow keywords stay `Unknown` for the statement parser.
const FLOW_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "return", "jump", "state", "default",
];

const BINARY_OPERATORS: &[&str] = &[
    "+", "*", "/", "%", "=", "==", "!=", "<", ">", "<=", ">=", "&&", "||", "&", "|", "^", "<<",
    ">>", "+=", "-=", "*=", "/=", "%=",
];

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?\.?[0-9]").expect("number pattern is valid"))
}

fn ident_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid")
    })
}

/// Whether a node of this kind ends an operand, making a following `-`
/// binary and a following `++` postfix.
fn ends_operand(kind: Option<NodeKind>) -> bool {
    matches!(
        kind,
        Some(
            NodeKind::Value
                | NodeKind::StringValue
                | NodeKind::CharValue
                | NodeKind::Variable
                | NodeKind::LevelEnd
                | NodeKind::RightUnaryOperator
        )
    )
}

fn classify_token(text: &str, prev: Option<NodeKind>, next_is_open: bool) -> NodeKind {
    match text {
        "(" => NodeKind::LevelBegin,
        ")" => NodeKind::LevelEnd,
        "," | ";" | "{" | "}" => NodeKind::Separator,
        "." => NodeKind::MemberAccess,
        "this" => NodeKind::ThisOperator,
        "!" | "~" => NodeKind::LeftUnaryOperator,
        "++" | "--" if ends_operand(prev) => NodeKind::RightUnaryOperator,
        "++" | "--" => NodeKind::LeftUnaryOperator,
        "-" if ends_operand(prev) => NodeKind::BinaryOperator,
        "-" => NodeKind::LeftUnaryOperator,
        t if BINARY_OPERATORS.contains(&t) => NodeKind::BinaryOperator,
        t if TYPE_KEYWORDS.contains(&t) => NodeKind::Declaration,
        t if FLOW_KEYWORDS.contains(&t) => NodeKind::Unknown,
        t if number_re().is_match(t) => NodeKind::Value,
        t if ident_re().is_match(t) && next_is_open => NodeKind::Function,
        t if ident_re().is_match(t) => NodeKind::Variable,
        _ => NodeKind::Unknown,
    }
}

impl Node {
    /// Classify this node's `Unknown` children and set their paren level.
    ///
    /// Children that already have a kind keep it.  Running this twice is
    /// harmless.
    pub fn classify(&mut self) {
        let mut level = 0;
        let mut prev = None;
        for i in 0..self.children.len() {
            let next_is_open = self
                .children
                .get(i + 1)
                .is_some_and(|n| n.kind == NodeKind::Unknown && n.entry == "(");
            let child = &mut self.children[i];
            if child.kind == NodeKind::Unknown {
                child.kind = classify_token(&child.entry, prev, next_is_open);
                trace!(
                    line = child.line,
                    entry = %child.entry,
                    kind = ?child.kind,
                    "classified token"
                );
            }
            if child.kind == NodeKind::LevelEnd {
                level -= 1;
            }
            child.paren_level = level;
            if child.kind == NodeKind::LevelBegin {
                level += 1;
            }
            prev = Some(child.kind);
        }
        self.fold_negative_literals();
    }

    fn fold_negative_literals(&mut self) {
        let children = std::mem::take(&mut self.children);
        let mut out = Vec::with_capacity(children.len());
        let mut iter = children.into_iter().peekable();
        while let Some(node) = iter.next() {
            if node.kind == NodeKind::LeftUnaryOperator && node.entry == "-" {
                let folded = iter.next_if(|n| {
                    n.kind == NodeKind::Value && n.line == node.line && !n.entry.starts_with('-')
                });
                if let Some(mut literal) = folded {
                    literal.entry.insert(0, '-');
                    out.push(literal);
                    continue;
                }
            }
            out.push(node);
        }
        self.children = out;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use crate::compiler::token::tokenize;

    use super::*;

    fn classified(src: &str) -> Node {
        let mut root = Node::from_tokens(&tokenize(src));
        root.classify();
        root
    }

    fn kinds(src: &str) -> Vec<NodeKind> {
        classified(src).children.iter().map(|c| c.kind).collect()
    }

    #[test]
    fn call_with_arguments() {
        use NodeKind::*;
        assert_eq!(
            kinds("llSay(0, \"hi\");"),
            [Function, LevelBegin, Value, Separator, StringValue, LevelEnd, Separator]
        );
    }

    #[test]
    fn declaration_and_assignment() {
        use NodeKind::*;
        assert_eq!(
            kinds("integer x = y * 2;"),
            [Declaration, Variable, BinaryOperator, Variable, BinaryOperator, Value, Separator]
        );
    }

    #[test]
    fn unary_versus_binary_minus() {
        use NodeKind::*;
        assert_eq!(kinds("a - b"), [Variable, BinaryOperator, Variable]);
        assert_eq!(kinds("a = -b"), [Variable, BinaryOperator, LeftUnaryOperator, Variable]);
        assert_eq!(kinds("(a) - b"), [LevelBegin, Variable, LevelEnd, BinaryOperator, Variable]);
    }

    #[test]
    fn increment_position() {
        use NodeKind::*;
        assert_eq!(kinds("i++"), [Variable, RightUnaryOperator]);
        assert_eq!(kinds("++i"), [LeftUnaryOperator, Variable]);
    }

    #[test]
    fn member_access_and_this() {
        use NodeKind::*;
        assert_eq!(
            kinds("this.pos.x"),
            [ThisOperator, MemberAccess, Variable, MemberAccess, Variable]
        );
    }

    #[test]
    fn flow_keywords_stay_unknown() {
        assert_eq!(kinds("if")[0], NodeKind::Unknown);
        assert_eq!(kinds("return x")[0], NodeKind::Unknown);
    }

    #[test]
    fn paren_levels() {
        let root = classified("f((a), b)");
        let levels: Vec<_> = root.children.iter().map(|c| c.paren_level).collect();
        // f ( ( a ) , b )
        assert_eq!(levels, [0, 0, 1, 2, 1, 1, 1, 0]);
    }

    #[test]
    fn negative_literals_fold() {
        let root = classified("x = -0x1F + -0.0");
        let entries: Vec<_> = root.children.iter().map(|c| c.entry.as_str()).collect();
        assert_eq!(entries, ["x", "=", "-0x1F", "+", "-0.0"]);
        assert_eq!(root.children[2].kind, NodeKind::Value);
    }

    #[test]
    fn binary_minus_does_not_fold() {
        let root = classified("a - 1");
        assert_eq!(root.children.len(), 3);
        assert_eq!(root.children[2].entry, "1");
    }

    #[test]
    fn double_negation_folds_once() {
        let root = classified("- - 5");
        let entries: Vec<_> = root.children.iter().map(|c| c.entry.as_str()).collect();
        assert_eq!(entries, ["-", "-5"]);
    }

    #[test]
    fn minus_on_previous_line_does_not_fold() {
        let root = classified("-\n5");
        assert_eq!(root.children.len(), 2);
    }

    #[test]
    fn classify_twice_is_stable() {
        let mut root = classified("a = -1; b++");
        let once = root.clone();
        root.classify();
        assert_eq!(root, once);
    }
}
