//! Property-based tests for the lexer and parser.

use monkey::{
    lexer::{lexer::Lexer, tokens::TokenKind},
    parse,
};
use proptest::prelude::*;

fn operand_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_]{1,6}".prop_filter("keywords are not operands", |s| {
            !matches!(s.as_str(), "fn" | "let" | "true" | "false" | "if" | "else" | "return")
        }),
        (0u32..100_000).prop_map(|n| n.to_string()),
    ]
}

/// Generates infix chains such as `a + 3 * b`.
fn infix_chain_strategy() -> impl Strategy<Value = String> {
    let operator = prop_oneof![
        Just("+"),
        Just("-"),
        Just("*"),
        Just("/"),
        Just("<"),
        Just(">"),
        Just("=="),
        Just("!="),
    ];

    (operand_strategy(), prop::collection::vec((operator, operand_strategy()), 0..8)).prop_map(|(first, rest)| {
        let mut source = first;
        for (op, operand) in rest {
            source.push(' ');
            source.push_str(op);
            source.push(' ');
            source.push_str(&operand);
        }
        source
    })
}

proptest! {
    /// Property: the lexer never panics and stays at end of input once reached
    #[test]
    fn lexer_terminates_and_stays_at_end(source in any::<String>()) {
        let mut lexer = Lexer::new(source.clone());
        let mut count = 0;

        loop {
            let token = lexer.next_token();
            count += 1;
            prop_assert!(count <= source.len() + 1);
            if token.kind == TokenKind::EndOfInput {
                prop_assert_eq!(token.literal, "");
                break;
            }
            prop_assert!(!token.literal.is_empty());
        }

        for _ in 0..3 {
            prop_assert_eq!(lexer.next_token().kind, TokenKind::EndOfInput);
        }
    }

    /// Property: the parser never panics on arbitrary input
    #[test]
    fn parser_never_panics(source in any::<String>()) {
        let _ = parse(&source);
    }

    /// Property: rendering a parsed infix chain and reparsing it is stable
    #[test]
    fn rendered_infix_chains_reparse_identically(source in infix_chain_strategy()) {
        let (program, errors) = parse(&source);
        prop_assert!(errors.is_empty(), "errors: {:?}", errors);

        let rendered = program.to_string();
        let (reparsed, errors) = parse(&rendered);
        prop_assert!(errors.is_empty(), "errors: {:?}", errors);
        prop_assert_eq!(reparsed.to_string(), rendered);
    }
}
