//! Property-based tests for the compiler pipeline.

use essql::ast::{CompOp, Cond, ConjOp, Expr};
use essql::generator::{gen_cond_clause, gen_range_op};
use essql::{Lexer, TokenKind, parse, parse_condition};
use proptest::prelude::*;

fn comp_op() -> impl Strategy<Value = CompOp> {
    prop::sample::select(CompOp::ALL.to_vec())
}

fn numeric_cond() -> impl Strategy<Value = Cond> {
    let leaf = ("[a-z][a-z0-9_]{0,8}", comp_op(), -1.0e6f64..1.0e6)
        .prop_map(|(ident, op, n)| Cond::comp(ident, op, Expr::Number(n)));
    leaf.prop_recursive(6, 32, 2, |inner| {
        (prop::bool::ANY, inner.clone(), inner).prop_map(|(and, l, r)| {
            Cond::conj(if and { ConjOp::And } else { ConjOp::Or }, l, r)
        })
    })
}

proptest! {
    #[test]
    fn prop_lexer_always_terminates(input in ".{0,64}") {
        let mut lexer = Lexer::new(&input);
        let mut seen = 0;
        while lexer.scan().kind != TokenKind::Eof {
            seen += 1;
            prop_assert!(seen <= input.chars().count());
        }
        prop_assert_eq!(lexer.scan().kind, TokenKind::Eof);
    }

    #[test]
    fn prop_parse_never_panics(input in ".{0,64}") {
        let _ = parse(&input);
        let _ = parse_condition(&input);
    }

    #[test]
    fn prop_parse_never_panics_on_query_alphabet(input in "[a-z0-9 ()=<>!\"'.,*-]{0,48}|(AND |OR |SELECT |FROM |WHERE ){0,6}") {
        let _ = parse_condition(&input);
    }

    #[test]
    fn prop_range_ops_are_total(op in comp_op()) {
        prop_assert_eq!(gen_range_op(op).is_some(), op.is_range());
    }

    #[test]
    fn prop_numeric_trees_always_generate(cond in numeric_cond()) {
        let es = gen_cond_clause(&cond).unwrap();
        prop_assert_eq!(&es, &gen_cond_clause(&cond).unwrap());
        prop_assert!(serde_json::from_str::<serde_json::Value>(&es).is_ok());
    }

    #[test]
    fn prop_display_reparses_to_same_tree(cond in numeric_cond()) {
        let reparsed = parse_condition(&cond.to_string()).unwrap();
        prop_assert_eq!(gen_cond_clause(&reparsed).unwrap(), gen_cond_clause(&cond).unwrap());
    }

    #[test]
    fn prop_and_chain_nests_right(n in 2usize..600) {
        let text = (0..n).map(|i| format!("f{} = {}", i, i)).collect::<Vec<_>>().join(" AND ");
        let cond = parse_condition(&text).unwrap();
        prop_assert_eq!(cond.depth(), n);

        let es = gen_cond_clause(&cond).unwrap();
        prop_assert_eq!(es.matches(r#"{"bool": {"must": ["#).count(), n - 1);
    }
}
