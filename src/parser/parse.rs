//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and the top-level loop
//! - `declarations`: class definitions, method implementations, types
//! - `statements`: statements inside method bodies
//! - `expressions`: expressions with precedence climbing
//!
//! # Lookahead
//!
//! The parser pulls tokens from the [`Lexer`] on demand. `current` is the
//! token being examined; `lookahead` buffers at most one further token,
//! which is how two-character operators like `<=` are recognised without
//! rewinding the lexer.
//!
//! # Errors
//!
//! Every production either returns a complete node or a [`ParseError`].
//! There is no recovery: the first error unwinds the whole parse.

use crate::parser::ast::*;
use crate::parser::lexer::{LexError, LexErrorKind, Lexer};
use crate::parser::options::ParserOptions;
use crate::parser::token::{Token, TokenKind};
use tracing::debug;

/// Parser error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error(
    "Parse error at line {}, column {}: {kind}",
    .location.line,
    .location.column
)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub location: SourceLocation,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("{0}")]
    Lex(LexErrorKind),
    #[error("Expected {expected}, found {found}")]
    Expected { expected: String, found: String },
    #[error("Unknown blueprint '{name}', expected one of: {allowed}")]
    UnknownBlueprint { name: String, allowed: String },
    #[error("{0} not yet supported")]
    Unsupported(String),
    #[error("Expression nested more than {0} levels deep")]
    NestingTooDeep(usize),
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            kind: ParseErrorKind::Lex(err.kind),
            location: err.location,
        }
    }
}

/// Maximum nesting of primary expressions (parentheses and unary operators)
pub const MAX_EXPRESSION_DEPTH: usize = 256;

/// Recursive descent parser for Blueprint source
pub struct Parser {
    pub(crate) lexer: Lexer,
    pub(crate) current: Token,
    pub(crate) lookahead: Option<Token>,
    pub(crate) options: ParserOptions,
    pub(crate) depth: usize,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        Self::with_options(source, ParserOptions::default())
    }

    pub fn with_options(source: &str, options: ParserOptions) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            lookahead: None,
            options,
            depth: 0,
        })
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// The token the parser is looking at.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Parse the entire input.
    ///
    /// Literals and identifiers at the top level become leaf expressions;
    /// `class` starts a class definition. Any other token is an error.
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        debug!("parsing started");
        let mut program = Program::new();

        while !self.is_at_end() {
            let item = self.parse_top_level_item()?;
            program.items.push(item);
        }

        debug!(items = program.items.len(), "parsing completed");
        Ok(program)
    }

    fn parse_top_level_item(&mut self) -> Result<Item, ParseError> {
        let kind = self.current.kind;

        if kind.is_literal() {
            return Ok(Item::Expr(self.parse_literal()?));
        }

        match kind {
            TokenKind::Identifier => Ok(Item::Expr(self.parse_identifier()?)),
            TokenKind::Class => Ok(Item::Class(self.parse_class_definition()?)),
            _ => Err(self.error_expected("literal, identifier or 'class' at top level")),
        }
    }

    // ===== Helper methods =====

    /// Consume the current token and return it.
    pub(crate) fn advance(&mut self) -> Result<Token, ParseError> {
        let next = match self.lookahead.take() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// The token after the current one, without consuming anything.
    pub(crate) fn peek_next(&mut self) -> Result<&Token, ParseError> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        Ok(&*self.lookahead.insert(token))
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.current.is(TokenKind::Eof)
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub(crate) fn check_punct(&self, c: char) -> bool {
        self.current.is_punct(c)
    }

    pub(crate) fn match_punct(&mut self, c: char) -> Result<bool, ParseError> {
        if self.check_punct(c) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.current.location
    }

    pub(crate) fn expect(&mut self, kind: TokenKind, ctx: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.error_expected(format!("{kind} {ctx}")))
        }
    }

    pub(crate) fn expect_punct(&mut self, c: char, ctx: &str) -> Result<Token, ParseError> {
        self.expect(TokenKind::Punct(c), ctx)
    }

    /// Consume an identifier and return its text. `what` names the role
    /// of the identifier for the error message.
    pub(crate) fn expect_identifier(&mut self, what: &str) -> Result<String, ParseError> {
        if !self.check(TokenKind::Identifier) {
            return Err(self.error_expected(what));
        }
        let name = self.current.identifier_name()?.to_string();
        self.advance()?;
        Ok(name)
    }

    pub(crate) fn error_expected(&self, expected: impl Into<String>) -> ParseError {
        ParseError::new(
            ParseErrorKind::Expected {
                expected: expected.into(),
                found: self.current.to_string(),
            },
            self.current_location(),
        )
    }

    pub(crate) fn error_unsupported(&self, what: impl Into<String>) -> ParseError {
        ParseError::new(ParseErrorKind::Unsupported(what.into()), self.current_location())
    }
}
