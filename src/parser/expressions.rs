//! Expression parsing implementation
//!
//! This module handles parsing of expressions using precedence climbing
//! for binary operators and recursive descent for everything else.
//!
//! # Supported Expressions
//!
//! - Literals: integers, floats, booleans, characters
//! - Identifiers
//! - Parenthesized expressions
//! - Unary operators: `-`, `!`
//! - Binary operators: `* /`, `+ -`, `< > <= >=`, `== !=`, `&& ||`
//!
//! # Operators
//!
//! The lexer hands out operators one character at a time. Two-character
//! operators are formed here when the second character immediately follows
//! the first, so `<=` is one operator while `< =` is `<` followed by a
//! stray `=`.
//!
//! All binary operators are left-associative.

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, ParseErrorKind, Parser, MAX_EXPRESSION_DEPTH};
use crate::parser::token::TokenKind;

/// Binding power of a binary operator; higher binds tighter.
pub fn precedence(op: BinaryOp) -> Option<u8> {
    match op {
        BinaryOp::And | BinaryOp::Or => Some(5),
        BinaryOp::Eq | BinaryOp::Ne => Some(10),
        BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Ge => Some(15),
        BinaryOp::Add | BinaryOp::Sub => Some(20),
        BinaryOp::Mul | BinaryOp::Div => Some(40),
        BinaryOp::Mod => None,
    }
}

impl Parser {
    /// Parse expression (top-level entry point)
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let lhs = self.parse_primary_expression()?;
        self.parse_binary_op_rhs(0, lhs)
    }

    /// Parse parenthesized expression: ( expression )
    pub fn parse_paren_expression(&mut self) -> Result<Expr, ParseError> {
        self.expect_punct('(', "at start of parenthesized expression")?;
        let expr = self.parse_expression()?;
        self.expect_punct(')', "at end of parenthesized expression")?;
        Ok(expr)
    }

    /// Fold binary operators onto `lhs` while they bind at least as tightly
    /// as `min_precedence`.
    pub fn parse_binary_op_rhs(
        &mut self,
        min_precedence: u8,
        mut lhs: Expr,
    ) -> Result<Expr, ParseError> {
        loop {
            let Some((op, prec)) = self.peek_binary_op()? else {
                return Ok(lhs);
            };
            if prec < min_precedence {
                return Ok(lhs);
            }

            self.parse_binary_operator()?;
            let mut rhs = self.parse_primary_expression()?;

            // A tighter operator after rhs takes rhs as its left operand
            if let Some((_, next_prec)) = self.peek_binary_op()? {
                if next_prec > prec {
                    rhs = self.parse_binary_op_rhs(prec + 1, rhs)?;
                }
            }

            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    /// Consume a binary operator if one starts at the current token.
    pub fn parse_binary_operator(&mut self) -> Result<Option<BinaryOp>, ParseError> {
        let Some((op, _)) = self.peek_binary_op()? else {
            return Ok(None);
        };

        self.advance()?;
        if op.symbol().len() == 2 {
            self.advance()?;
        }
        Ok(Some(op))
    }

    /// Identify the binary operator at the current token without consuming
    /// it. Operators without a precedence are not recognised.
    fn peek_binary_op(&mut self) -> Result<Option<(BinaryOp, u8)>, ParseError> {
        let TokenKind::Punct(first) = self.current.kind else {
            return Ok(None);
        };

        let second = match first {
            '=' | '!' | '<' | '>' => Some('='),
            '&' => Some('&'),
            '|' => Some('|'),
            _ => None,
        };

        let joined = match second {
            Some(second) => {
                let end = self.current.end_offset();
                let next = self.peek_next()?;
                next.is_punct(second) && next.location.offset == end
            }
            None => false,
        };

        let op = match (first, joined) {
            ('+', _) => BinaryOp::Add,
            ('-', _) => BinaryOp::Sub,
            ('*', _) => BinaryOp::Mul,
            ('/', _) => BinaryOp::Div,
            ('=', true) => BinaryOp::Eq,
            ('!', true) => BinaryOp::Ne,
            ('<', true) => BinaryOp::Le,
            ('<', false) => BinaryOp::Lt,
            ('>', true) => BinaryOp::Ge,
            ('>', false) => BinaryOp::Gt,
            ('&', true) => BinaryOp::And,
            ('|', true) => BinaryOp::Or,
            _ => return Ok(None),
        };

        Ok(precedence(op).map(|prec| (op, prec)))
    }

    /// Parse primary (literals, identifiers, unary and parenthesized expressions)
    ///
    /// Fails with [`ParseErrorKind::NestingTooDeep`] once primaries nest
    /// past [`MAX_EXPRESSION_DEPTH`].
    pub fn parse_primary_expression(&mut self) -> Result<Expr, ParseError> {
        if self.depth >= MAX_EXPRESSION_DEPTH {
            return Err(ParseError::new(
                ParseErrorKind::NestingTooDeep(MAX_EXPRESSION_DEPTH),
                self.current_location(),
            ));
        }

        self.depth += 1;
        let result = self.parse_primary_kind();
        self.depth -= 1;
        result
    }

    fn parse_primary_kind(&mut self) -> Result<Expr, ParseError> {
        match self.current.kind {
            kind if kind.is_literal() => self.parse_literal(),
            TokenKind::Identifier => self.parse_identifier(),
            TokenKind::Punct('(') => self.parse_paren_expression(),
            TokenKind::Punct('-') => self.parse_unary(UnaryOp::Negate),
            TokenKind::Punct('!') => self.parse_unary(UnaryOp::Not),
            _ => Err(self.error_expected("expression")),
        }
    }

    fn parse_unary(&mut self, op: UnaryOp) -> Result<Expr, ParseError> {
        self.advance()?;
        let operand = self.parse_primary_expression()?;
        Ok(Expr::unary(op, operand))
    }

    /// Parse any literal leaf
    pub(crate) fn parse_literal(&mut self) -> Result<Expr, ParseError> {
        match self.current.kind {
            TokenKind::IntegerLiteral => self.parse_integer_value(),
            TokenKind::FloatLiteral => self.parse_float_value(),
            TokenKind::True | TokenKind::False => self.parse_bool_value(),
            TokenKind::CharLiteral => self.parse_char_value(),
            _ => Err(self.error_expected("literal")),
        }
    }

    pub fn parse_integer_value(&mut self) -> Result<Expr, ParseError> {
        let value = self.current.integer_value()?;
        self.advance()?;
        Ok(Expr::IntegerLiteral(value))
    }

    pub fn parse_float_value(&mut self) -> Result<Expr, ParseError> {
        let value = self.current.float_value()?;
        self.advance()?;
        Ok(Expr::FloatLiteral(value))
    }

    pub fn parse_bool_value(&mut self) -> Result<Expr, ParseError> {
        let value = self.current.bool_value()?;
        self.advance()?;
        Ok(Expr::BoolLiteral(value))
    }

    pub fn parse_char_value(&mut self) -> Result<Expr, ParseError> {
        let value = self.current.char_value()?;
        self.advance()?;
        Ok(Expr::CharLiteral(value))
    }

    pub fn parse_identifier(&mut self) -> Result<Expr, ParseError> {
        let name = self.expect_identifier("identifier")?;
        Ok(Expr::Identifier(name))
    }
}
