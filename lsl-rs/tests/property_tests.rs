use proptest::prelude::*;
use lsl_tree::compiler::{
    compile_source, decode_escapes, tokenize, Literal, Node, NodeKind, ResolverOptions, Token,
};

fn resolve_value(entry: &str, opts: &ResolverOptions) -> Result<Literal, String> {
    let mut node = Node::new(NodeKind::Value, entry, 1);
    node.resolve(opts).map_err(|e| e.to_string())?;
    node.value.ok_or_else(|| "no value".to_owned())
}

proptest! {
    /// Escape decoding is the identity on text without backslashes.
    #[test]
    fn decode_identity_without_escapes(s in "[^\\\\]*") {
        prop_assert_eq!(decode_escapes(&s), s);
    }
}

proptest! {
    /// One child per token, each keeping its token's line.
    #[test]
    fn build_keeps_count_and_lines(
        items in prop::collection::vec(("\\PC{0,8}", 1usize..10_000), 0..32)
    ) {
        let tokens: Vec<Token> = items.iter().map(|(t, l)| Token::new(t.clone(), *l)).collect();
        let root = Node::from_tokens(&tokens);
        prop_assert_eq!(root.kind, NodeKind::ExpressionTree);
        prop_assert_eq!(root.children.len(), tokens.len());
        prop_assert_eq!(root.line, tokens.first().map_or(0, |t| t.line));
        for (child, tok) in root.children.iter().zip(&tokens) {
            prop_assert_eq!(child.line, tok.line);
            prop_assert!(child.value.is_none());
        }
    }
}

proptest! {
    /// Decimal integers resolve to themselves and render back unchanged.
    #[test]
    fn decimal_int_round_trip(n in any::<i32>()) {
        let text = n.to_string();
        let v = resolve_value(&text, &ResolverOptions::default()).unwrap();
        prop_assert_eq!(v.to_string(), text);
        prop_assert_eq!(v, Literal::Int(n));
    }
}

proptest! {
    /// Hex literals are 32-bit patterns; a leading minus negates them.
    #[test]
    fn hex_literals(n in any::<u32>()) {
        let opts = ResolverOptions::default();
        prop_assert_eq!(resolve_value(&format!("0x{n:X}"), &opts), Ok(Literal::Int(n as i32)));
        prop_assert_eq!(
            resolve_value(&format!("-0x{n:x}"), &opts),
            Ok(Literal::Int((n as i32).wrapping_neg()))
        );
    }
}

proptest! {
    /// With long integers on, any i64 with an `L` suffix resolves as Long.
    #[test]
    fn long_suffix(n in any::<i64>()) {
        let opts = ResolverOptions { enable_long_integers: true };
        prop_assert_eq!(resolve_value(&format!("{n}L"), &opts), Ok(Literal::Long(n)));
    }
}

proptest! {
    /// Resolving twice always gives the same outcome, success or failure.
    #[test]
    fn resolve_is_idempotent(s in "\\PC{0,12}", longs in any::<bool>()) {
        let opts = ResolverOptions { enable_long_integers: longs };
        for kind in [NodeKind::Value, NodeKind::StringValue, NodeKind::CharValue] {
            let mut node = Node::new(kind, s.clone(), 1);
            let first = node.resolve(&opts);
            let v1 = format!("{:?}", node.value);
            let second = node.resolve(&opts);
            prop_assert_eq!(first, second);
            prop_assert_eq!(format!("{:?}", node.value), v1);
        }
    }
}

proptest! {
    /// The lexer and the whole pipeline never panic, and lines only grow.
    #[test]
    fn pipeline_does_not_panic(s in "\\PC*") {
        let tokens = tokenize(&s);
        prop_assert!(tokens.windows(2).all(|w| w[0].line <= w[1].line));
        prop_assert!(tokens.iter().all(|t| t.line >= 1 && !t.text.is_empty()));
        let (tree, _) = compile_source(&s, &ResolverOptions::default());
        for node in &tree.children {
            prop_assert!(!node.is_resolved() || node.kind.is_literal());
        }
    }
}
