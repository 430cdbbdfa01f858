//! Lexer for Blueprint source code
//!
//! Produces one [`Token`] per [`Lexer::next_token`] call and keeps the most
//! recent one (with its decoded payload) as the current token. Comments are
//! skipped and never surface as tokens. Operators are returned one character
//! at a time; the parser joins `<=`, `==`, `&&` and friends.

use super::ast::SourceLocation;
use super::token::{keyword, Token, TokenKind, TokenValue};
use tracing::trace;

/// Lexer error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error(
    "Lexer error at line {}, column {}: {kind}",
    .location.line,
    .location.column
)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub location: SourceLocation,
}

impl LexError {
    pub fn new(kind: LexErrorKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexErrorKind {
    #[error("second '.' in numeric literal")]
    MultipleDecimalPoints,
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    #[error("invalid numeric literal '{0}'")]
    InvalidNumber(String),
    #[error("invalid character literal")]
    InvalidCharLiteral,
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("requested {expected} payload from {found}")]
    PayloadMismatch {
        expected: &'static str,
        found: TokenKind,
    },
    #[error("no token to push back")]
    NothingToUnget,
}

/// Lexer state saved before each read so one token can be pushed back.
#[derive(Debug, Clone)]
struct Checkpoint {
    position: usize,
    line: usize,
    column: usize,
    current: Token,
}

/// Lexer for Blueprint source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    current: Token,
    checkpoint: Option<Checkpoint>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    ///
    /// The current token starts out as end-of-file until the first
    /// [`next_token`](Self::next_token) call.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            current: Token::new(TokenKind::Eof, SourceLocation::new(1, 1, 0), 0),
            checkpoint: None,
        }
    }

    /// Advance past the next token and make it current.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let checkpoint = Checkpoint {
            position: self.position,
            line: self.line,
            column: self.column,
            current: self.current.clone(),
        };

        let token = match self.scan_token() {
            Ok(token) => token,
            Err(err) => {
                self.checkpoint = None;
                return Err(err);
            }
        };
        trace!(token = %token, line = token.location.line, "lexed");

        self.checkpoint = Some(checkpoint);
        self.current = token.clone();
        Ok(token)
    }

    /// Undo the most recent [`next_token`](Self::next_token).
    ///
    /// Only one level is kept; a second call without a read in between
    /// fails with [`LexErrorKind::NothingToUnget`].
    pub fn unget_current_token(&mut self) -> Result<(), LexError> {
        let checkpoint = self.checkpoint.take().ok_or_else(|| {
            LexError::new(LexErrorKind::NothingToUnget, self.current_location())
        })?;

        self.position = checkpoint.position;
        self.line = checkpoint.line;
        self.column = checkpoint.column;
        self.current = checkpoint.current;
        Ok(())
    }

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn integer_value(&self) -> Result<i64, LexError> {
        self.current.integer_value()
    }

    pub fn float_value(&self) -> Result<f64, LexError> {
        self.current.float_value()
    }

    pub fn bool_value(&self) -> Result<bool, LexError> {
        self.current.bool_value()
    }

    pub fn char_value(&self) -> Result<char, LexError> {
        self.current.char_value()
    }

    pub fn identifier_name(&self) -> Result<&str, LexError> {
        self.current.identifier_name()
    }

    /// Tokenize the remaining input, ending with (and including) end-of-file.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let done = token.is(TokenKind::Eof);
            tokens.push(token);
            if done {
                break;
            }
        }

        Ok(tokens)
    }

    fn scan_token(&mut self) -> Result<Token, LexError> {
        loop {
            self.skip_whitespace();

            let loc = self.current_location();
            let Some(ch) = self.peek() else {
                return Ok(Token::new(TokenKind::Eof, loc, 0));
            };

            if ch.is_ascii_alphabetic() {
                return Ok(self.identifier_or_keyword(loc));
            }

            if ch.is_ascii_digit() || ch == '.' {
                return self.number_literal(loc);
            }

            if ch == '/' {
                match self.peek_ahead(1) {
                    Some('/') => {
                        self.skip_line_comment();
                        continue;
                    }
                    Some('*') => {
                        self.skip_block_comment()?;
                        continue;
                    }
                    _ => {}
                }
            }

            if ch == '\'' {
                return self.char_literal(loc);
            }

            self.advance();
            return Ok(Token::new(TokenKind::Punct(ch), loc, 1));
        }
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self, loc: SourceLocation) -> Token {
        let mut ident = String::new();

        while let Some(ch) = self.peek() {
            if !ch.is_ascii_alphanumeric() {
                break;
            }
            ident.push(ch);
            self.advance();
        }

        let length = ident.len();
        match keyword(&ident) {
            Some(TokenKind::True) => {
                Token::new(TokenKind::True, loc, length).with_value(TokenValue::Bool(true))
            }
            Some(TokenKind::False) => {
                Token::new(TokenKind::False, loc, length).with_value(TokenValue::Bool(false))
            }
            Some(kind) => Token::new(kind, loc, length),
            None => Token::new(TokenKind::Identifier, loc, length)
                .with_value(TokenValue::Identifier(ident)),
        }
    }

    /// Parse numeric literal: digits with at most one '.'
    fn number_literal(&mut self, loc: SourceLocation) -> Result<Token, LexError> {
        let mut num_str = String::new();
        let mut seen_dot = false;

        while let Some(ch) = self.peek() {
            if ch == '.' {
                if seen_dot {
                    return Err(LexError::new(LexErrorKind::MultipleDecimalPoints, loc));
                }
                seen_dot = true;
            } else if !ch.is_ascii_digit() {
                break;
            }
            num_str.push(ch);
            self.advance();
        }

        let length = num_str.len();
        let invalid = || LexError::new(LexErrorKind::InvalidNumber(num_str.clone()), loc);

        if seen_dot {
            // A bare '.' reads as 0.0
            let value = if num_str == "." {
                0.0
            } else {
                num_str.parse::<f64>().map_err(|_| invalid())?
            };
            Ok(Token::new(TokenKind::FloatLiteral, loc, length).with_value(TokenValue::Float(value)))
        } else {
            let value = num_str.parse::<i64>().map_err(|_| invalid())?;
            Ok(Token::new(TokenKind::IntegerLiteral, loc, length)
                .with_value(TokenValue::Integer(value)))
        }
    }

    /// Parse character literal
    fn char_literal(&mut self, loc: SourceLocation) -> Result<Token, LexError> {
        self.advance(); // opening quote

        let ch = self.advance().ok_or_else(|| {
            LexError::new(LexErrorKind::UnexpectedEndOfInput, self.current_location())
        })?;

        let value = match ch {
            '\\' => {
                let escaped = self.advance().ok_or_else(|| {
                    LexError::new(LexErrorKind::UnexpectedEndOfInput, self.current_location())
                })?;

                match escaped {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    '\\' => '\\',
                    '\'' => '\'',
                    '0' => '\0',
                    _ => return Err(LexError::new(LexErrorKind::InvalidCharLiteral, loc)),
                }
            }
            '\'' => return Err(LexError::new(LexErrorKind::InvalidCharLiteral, loc)),
            _ => ch,
        };

        if self.advance() != Some('\'') {
            return Err(LexError::new(LexErrorKind::InvalidCharLiteral, loc));
        }

        let length = self.position - loc.offset;
        Ok(Token::new(TokenKind::CharLiteral, loc, length).with_value(TokenValue::Char(value)))
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Skip single-line comment (// ...)
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            self.advance();
            if ch == '\n' {
                break;
            }
        }
    }

    /// Skip multi-line comment (/* ... */)
    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start_loc = self.current_location();
        self.advance(); // skip '/'
        self.advance(); // skip '*'

        while !self.is_at_end() {
            if self.peek() == Some('*') && self.peek_ahead(1) == Some('/') {
                self.advance(); // skip '*'
                self.advance(); // skip '/'
                return Ok(());
            }
            self.advance();
        }

        Err(LexError::new(LexErrorKind::UnterminatedBlockComment, start_loc))
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column, self.position)
    }
}
