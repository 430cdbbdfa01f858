//! Statement parsing implementation
//!
//! Method bodies currently accept variable declarations only:
//!
//! ```text
//! statement ::= var_decl
//! var_decl  ::= type identifier "=" expression ";"
//! ```
//!
//! `if`, `while`, blocks and assignments exist in the AST but have no
//! grammar yet; they are rejected with an "unsupported" error instead of
//! being skipped.

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::TokenKind;

impl Parser {
    /// Parse block statements (inside braces, excluding the braces themselves)
    pub(crate) fn parse_block_statements(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();

        while !self.check_punct('}') && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    /// Parse a statement
    pub fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.current.kind {
            TokenKind::Void => Err(self.error_expected("variable type")),
            kind if kind.is_primitive_type() => self.parse_variable_declaration(),
            TokenKind::If => Err(self.error_unsupported("'if' statements are")),
            TokenKind::While => Err(self.error_unsupported("'while' statements are")),
            TokenKind::Punct('{') => Err(self.error_unsupported("Block statements are")),
            TokenKind::Identifier => Err(self.error_unsupported("Assignment statements are")),
            _ => Err(self.error_expected("statement")),
        }
    }

    /// Parse variable declaration: type name = initializer;
    fn parse_variable_declaration(&mut self) -> Result<Stmt, ParseError> {
        let ty = self.parse_primitive_type("variable type")?;
        let name = self.expect_identifier("variable name")?;

        self.expect_punct('=', "after variable name")?;
        let initializer = self.parse_expression()?;
        self.expect_punct(';', "after variable initializer")?;

        Ok(Stmt::VarDecl {
            ty,
            name,
            initializer,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::{ParseError, ParseErrorKind, Parser};

    fn parse_stmt(source: &str) -> Result<Stmt, ParseError> {
        Parser::new(source)?.parse_statement()
    }

    #[test]
    fn test_var_decl_with_literal() {
        let stmt = parse_stmt("i32 y = 0;").unwrap();

        assert_eq!(
            stmt,
            Stmt::VarDecl {
                ty: Type::Int32,
                name: "y".to_string(),
                initializer: Expr::IntegerLiteral(0),
            }
        );
    }

    #[test]
    fn test_var_decl_initializer_is_parsed() {
        let stmt = parse_stmt("bool ok = a < b && c;").unwrap();

        let expected = Expr::binary(
            BinaryOp::And,
            Expr::binary(BinaryOp::Lt, Expr::identifier("a"), Expr::identifier("b")),
            Expr::identifier("c"),
        );
        assert_eq!(
            stmt,
            Stmt::VarDecl {
                ty: Type::Bool,
                name: "ok".to_string(),
                initializer: expected,
            }
        );
    }

    #[test]
    fn test_var_decl_of_each_type() {
        assert!(matches!(
            parse_stmt("f32 f = 1.5;").unwrap(),
            Stmt::VarDecl { ty: Type::Float32, .. }
        ));
        assert!(matches!(
            parse_stmt("char c = 'x';").unwrap(),
            Stmt::VarDecl { ty: Type::Char, .. }
        ));
    }

    #[test]
    fn test_void_variable_is_rejected() {
        let err = parse_stmt("void v = 0;").unwrap_err();

        assert!(matches!(err.kind, ParseErrorKind::Expected { .. }));
    }

    #[test]
    fn test_missing_semicolon() {
        let err = parse_stmt("i32 y = 1 }").unwrap_err();

        assert!(err.to_string().contains("Expected ';' after variable initializer"));
    }

    #[test]
    fn test_missing_initializer() {
        let err = parse_stmt("i32 y;").unwrap_err();

        assert!(err.to_string().contains("Expected '=' after variable name"));
    }

    #[test]
    fn test_unimplemented_statements_fail_clearly() {
        for source in ["if (x) { }", "while (x) { }", "{ }", "x = 1;"] {
            let err = parse_stmt(source).unwrap_err();
            assert!(
                matches!(err.kind, ParseErrorKind::Unsupported(_)),
                "{source}: {err}"
            );
        }
    }
}
