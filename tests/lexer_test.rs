// Integration tests for the Blueprint lexer

use blueprint::parser::lexer::{LexErrorKind, Lexer};
use blueprint::parser::token::{Token, TokenKind};

fn lex_one(source: &str) -> Lexer {
    let mut lexer = Lexer::new(source);
    lexer.next_token().expect("Lexing failed");
    lexer
}

#[test]
fn test_integer_lexemes() {
    for text in ["0", "7", "42", "0012", "9223372036854775807"] {
        let lexer = lex_one(text);
        assert!(lexer.current_token().is(TokenKind::IntegerLiteral), "{text}");
        assert_eq!(lexer.integer_value().unwrap(), text.parse::<i64>().unwrap());
    }
}

#[test]
fn test_float_lexemes() {
    for text in ["0.0", "3.14", ".25", "10.", "007.5"] {
        let lexer = lex_one(text);
        assert!(lexer.current_token().is(TokenKind::FloatLiteral), "{text}");
        assert_eq!(lexer.float_value().unwrap(), text.parse::<f64>().unwrap());
    }

    let lexer = lex_one(".");
    assert!(lexer.current_token().is(TokenKind::FloatLiteral));
    assert_eq!(lexer.float_value().unwrap(), 0.0);
}

#[test]
fn test_two_decimal_points_is_not_end_of_input() {
    for text in ["1.2.3", "..", "0..5"] {
        let err = Lexer::new(text).next_token().expect_err("Lexing should fail");
        assert_eq!(err.kind, LexErrorKind::MultipleDecimalPoints, "{text}");
    }
}

#[test]
fn test_identifiers() {
    for text in ["x", "Application", "camelCase", "v2", "If", "classes", "i64"] {
        let lexer = lex_one(text);
        assert!(lexer.current_token().is(TokenKind::Identifier), "{text}");
        assert_eq!(lexer.identifier_name().unwrap(), text);
    }
}

#[test]
fn test_every_keyword_has_its_own_token() {
    let keywords = [
        ("i32", TokenKind::I32),
        ("f32", TokenKind::F32),
        ("bool", TokenKind::Bool),
        ("char", TokenKind::Char),
        ("void", TokenKind::Void),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("class", TokenKind::Class),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("while", TokenKind::While),
        ("public", TokenKind::Public),
    ];

    for (text, kind) in keywords {
        let lexer = lex_one(text);
        assert_eq!(lexer.current_token().kind, kind, "{text}");
        assert!(lexer.identifier_name().is_err());
    }
}

#[test]
fn test_comments_emit_no_tokens() {
    let tokens = Lexer::new("// only a comment\n/* and\n a block */")
        .tokenize()
        .expect("Lexing failed");

    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is(TokenKind::Eof));
    assert_eq!(tokens[0].location.line, 3);
}

#[test]
fn test_unterminated_block_comment() {
    let err = Lexer::new("class /* oops")
        .tokenize()
        .expect_err("Lexing should fail");

    assert_eq!(err.kind, LexErrorKind::UnterminatedBlockComment);
    assert!(err.to_string().starts_with("Lexer error at line 1, column 7"));
}

#[test]
fn test_operators_are_single_characters() {
    let tokens = Lexer::new("<= && x").tokenize().expect("Lexing failed");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Punct('<'),
            TokenKind::Punct('='),
            TokenKind::Punct('&'),
            TokenKind::Punct('&'),
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
    assert!(tokens[0].is_adjacent_to(&tokens[1]));
    assert!(!tokens[1].is_adjacent_to(&tokens[2]));
}

#[test]
fn test_relexing_is_idempotent() {
    let source = "class A : Application { public void f(f32 x) { f32 y = x * 1.5; } }";

    let first: Vec<Token> = Lexer::new(source).tokenize().unwrap();
    let second: Vec<Token> = Lexer::new(source).tokenize().unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_eof_repeats() {
    let mut lexer = Lexer::new("x");
    lexer.next_token().unwrap();

    assert!(lexer.next_token().unwrap().is(TokenKind::Eof));
    assert!(lexer.next_token().unwrap().is(TokenKind::Eof));
}
