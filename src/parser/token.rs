//! Token model shared by the lexer and the parser
//!
//! A [`Token`] pairs a [`TokenKind`] with the literal payload decoded for it
//! and the location of its lexeme. Keywords are looked up in a process-wide
//! table that is built once on first use and never mutated afterwards.

use super::ast::SourceLocation;
use super::lexer::{LexError, LexErrorKind};
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::LazyLock;

/// Lexical categories.
///
/// Anything that is not a keyword, literal or identifier is returned as the
/// raw character in [`TokenKind::Punct`]; multi-character operators are
/// assembled by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,

    // Primitive types
    I32,
    F32,
    Bool,
    Char,
    Void,

    // Literals
    True,
    False,
    IntegerLiteral,
    FloatLiteral,
    CharLiteral,

    Identifier,

    // Declarations
    Class,

    // Control flow
    If,
    Else,
    While,

    // Access modifiers
    Public,

    /// Single-character punctuation or operator
    Punct(char),
}

impl TokenKind {
    pub const PRIMITIVE_TYPES: [TokenKind; 5] = [
        TokenKind::I32,
        TokenKind::F32,
        TokenKind::Bool,
        TokenKind::Char,
        TokenKind::Void,
    ];

    pub const LITERALS: [TokenKind; 5] = [
        TokenKind::IntegerLiteral,
        TokenKind::FloatLiteral,
        TokenKind::CharLiteral,
        TokenKind::True,
        TokenKind::False,
    ];

    pub const CONTROL_FLOW: [TokenKind; 3] =
        [TokenKind::If, TokenKind::Else, TokenKind::While];

    pub const ACCESS_MODIFIERS: [TokenKind; 1] = [TokenKind::Public];

    pub fn is_primitive_type(self) -> bool {
        Self::PRIMITIVE_TYPES.contains(&self)
    }

    pub fn is_literal(self) -> bool {
        Self::LITERALS.contains(&self)
    }

    pub fn is_control_flow(self) -> bool {
        Self::CONTROL_FLOW.contains(&self)
    }

    pub fn is_access_modifier(self) -> bool {
        Self::ACCESS_MODIFIERS.contains(&self)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "end of file"),
            TokenKind::I32 => write!(f, "'i32'"),
            TokenKind::F32 => write!(f, "'f32'"),
            TokenKind::Bool => write!(f, "'bool'"),
            TokenKind::Char => write!(f, "'char'"),
            TokenKind::Void => write!(f, "'void'"),
            TokenKind::True => write!(f, "'true'"),
            TokenKind::False => write!(f, "'false'"),
            TokenKind::IntegerLiteral => write!(f, "integer literal"),
            TokenKind::FloatLiteral => write!(f, "float literal"),
            TokenKind::CharLiteral => write!(f, "char literal"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Class => write!(f, "'class'"),
            TokenKind::If => write!(f, "'if'"),
            TokenKind::Else => write!(f, "'else'"),
            TokenKind::While => write!(f, "'while'"),
            TokenKind::Public => write!(f, "'public'"),
            TokenKind::Punct(c) => write!(f, "'{}'", c.escape_default()),
        }
    }
}

static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| {
        FxHashMap::from_iter([
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
        ])
    });

/// Look up a scanned word in the keyword table.
pub fn keyword(text: &str) -> Option<TokenKind> {
    KEYWORDS.get(text).copied()
}

/// Literal payload decoded alongside a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    Integer(i64),
    Float(f64),
    Bool(bool),
    Char(char),
    Identifier(String),
}

/// A classified lexeme.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub location: SourceLocation,
    /// Lexeme length in characters
    pub length: usize,
}

impl Token {
    pub fn new(kind: TokenKind, location: SourceLocation, length: usize) -> Self {
        Self {
            kind,
            value: TokenValue::None,
            location,
            length,
        }
    }

    pub fn with_value(mut self, value: TokenValue) -> Self {
        self.value = value;
        self
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct(c)
    }

    /// Character offset one past the end of the lexeme.
    pub fn end_offset(&self) -> usize {
        self.location.offset + self.length
    }

    /// True when `next` starts exactly where this token ends.
    pub fn is_adjacent_to(&self, next: &Token) -> bool {
        self.end_offset() == next.location.offset
    }

    pub fn integer_value(&self) -> Result<i64, LexError> {
        match self.value {
            TokenValue::Integer(n) => Ok(n),
            _ => Err(self.payload_mismatch("integer")),
        }
    }

    pub fn float_value(&self) -> Result<f64, LexError> {
        match self.value {
            TokenValue::Float(n) => Ok(n),
            _ => Err(self.payload_mismatch("float")),
        }
    }

    pub fn bool_value(&self) -> Result<bool, LexError> {
        match self.value {
            TokenValue::Bool(b) => Ok(b),
            _ => Err(self.payload_mismatch("bool")),
        }
    }

    pub fn char_value(&self) -> Result<char, LexError> {
        match self.value {
            TokenValue::Char(c) => Ok(c),
            _ => Err(self.payload_mismatch("char")),
        }
    }

    pub fn identifier_name(&self) -> Result<&str, LexError> {
        match &self.value {
            TokenValue::Identifier(name) => Ok(name),
            _ => Err(self.payload_mismatch("identifier")),
        }
    }

    fn payload_mismatch(&self, expected: &'static str) -> LexError {
        LexError {
            kind: LexErrorKind::PayloadMismatch {
                expected,
                found: self.kind,
            },
            location: self.location,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            TokenValue::Integer(n) => write!(f, "integer literal {}", n),
            TokenValue::Float(n) => write!(f, "float literal {:?}", n),
            TokenValue::Char(c) => {
                write!(f, "char literal '{}'", c.escape_default())
            }
            TokenValue::Identifier(name) => write!(f, "identifier '{}'", name),
            TokenValue::Bool(_) | TokenValue::None => write!(f, "{}", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(keyword("i32"), Some(TokenKind::I32));
        assert_eq!(keyword("public"), Some(TokenKind::Public));
        assert_eq!(keyword("Application"), None);
        assert_eq!(keyword("int"), None);
    }

    #[test]
    fn test_category_queries() {
        assert!(TokenKind::Void.is_primitive_type());
        assert!(!TokenKind::Identifier.is_primitive_type());
        assert!(TokenKind::True.is_literal());
        assert!(TokenKind::CharLiteral.is_literal());
        assert!(!TokenKind::Char.is_literal());
        assert!(TokenKind::Else.is_control_flow());
        assert!(!TokenKind::Class.is_control_flow());
        assert!(TokenKind::Public.is_access_modifier());
        assert!(!TokenKind::Punct('+').is_access_modifier());
    }

    #[test]
    fn test_payload_mismatch_is_checked() {
        let token = Token::new(TokenKind::Identifier, SourceLocation::new(1, 1, 0), 3)
            .with_value(TokenValue::Identifier("foo".to_string()));

        assert_eq!(token.identifier_name().unwrap(), "foo");
        let err = token.integer_value().unwrap_err();
        assert!(matches!(
            err.kind,
            LexErrorKind::PayloadMismatch {
                expected: "integer",
                found: TokenKind::Identifier
            }
        ));
    }

    #[test]
    fn test_adjacency() {
        let lt = Token::new(TokenKind::Punct('<'), SourceLocation::new(1, 1, 0), 1);
        let eq = Token::new(TokenKind::Punct('='), SourceLocation::new(1, 2, 1), 1);
        let spaced = Token::new(TokenKind::Punct('='), SourceLocation::new(1, 3, 2), 1);

        assert!(lt.is_adjacent_to(&eq));
        assert!(!lt.is_adjacent_to(&spaced));
    }
}
