//! Declaration parsing implementation
//!
//! This module handles parsing of class definitions and their members:
//!
//! - Class definitions: `class Name : Blueprint { ... }`
//! - Method implementations: `public void name(params) { ... }`
//! - Primitive types and parameter lists
//!
//! # Grammar
//!
//! ```text
//! class_def   ::= "class" identifier ":" blueprint "{" method_impl* "}"
//! method_impl ::= access_modifier "void" identifier "(" params? ")" "{" statement* "}"
//! params      ::= type identifier ("," type identifier)*
//! type        ::= "i32" | "f32" | "bool" | "char" | "void"
//! ```
//!
//! Only `void` methods are accepted. Any failure inside a method abandons the
//! enclosing class.

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, ParseErrorKind, Parser};
use crate::parser::token::TokenKind;
use tracing::debug;

impl Parser {
    /// Parse class definition: class Name : Blueprint { methods }
    pub fn parse_class_definition(&mut self) -> Result<Class, ParseError> {
        let location = self
            .expect(TokenKind::Class, "at start of class definition")?
            .location;

        let name = self.expect_identifier("class name")?;
        debug!(class = %name, "parsing class definition");

        self.expect_punct(':', "after class name")?;
        let blueprint = self.parse_blueprint_name()?;
        self.expect_punct('{', "after blueprint name")?;

        let mut methods = Vec::new();
        while !self.check_punct('}') && !self.is_at_end() {
            let method = self.parse_method_implementation()?;
            debug!(method = %method.name, params = method.params.len(), "parsed method");
            methods.push(method);
        }

        self.expect_punct('}', "after class body")?;

        Ok(Class {
            name,
            methods,
            blueprints: vec![blueprint],
            location,
        })
    }

    /// The name after ':' must be an identifier from the allowed set.
    fn parse_blueprint_name(&mut self) -> Result<String, ParseError> {
        let location = self.current_location();
        let name = self.expect_identifier("blueprint name after ':'")?;

        if self.options.allows_blueprint(&name) {
            Ok(name)
        } else {
            Err(ParseError::new(
                ParseErrorKind::UnknownBlueprint {
                    name,
                    allowed: self.options.blueprints().join(", "),
                },
                location,
            ))
        }
    }

    /// Parse method implementation: modifier void name(params) { body }
    pub fn parse_method_implementation(&mut self) -> Result<MethodImpl, ParseError> {
        let location = self.current_location();

        let access_modifier = AccessModifier::from_token(self.current.kind)
            .ok_or_else(|| self.error_expected("access modifier before method implementation"))?;
        self.advance()?;

        let return_type = self.parse_return_type()?;
        let name = self.expect_identifier("method name")?;
        debug!(method = %name, "parsing method implementation");

        self.expect_punct('(', "after method name")?;
        let params = self.parse_parameter_list()?;
        self.expect_punct(')', "after parameters")?;

        self.expect_punct('{', "before method body")?;
        let body = self.parse_block_statements()?;
        self.expect_punct('}', "after method body")?;

        Ok(MethodImpl {
            access_modifiers: vec![access_modifier],
            return_type,
            name,
            params,
            body,
            location,
        })
    }

    fn parse_return_type(&mut self) -> Result<Type, ParseError> {
        match Type::from_token(self.current.kind) {
            Some(Type::Void) => {
                self.advance()?;
                Ok(Type::Void)
            }
            Some(other) => Err(self.error_unsupported(format!("Return type '{other}' is"))),
            None => Err(self.error_expected("return type")),
        }
    }

    /// Parse parameter list: type name, type name, ...
    pub(crate) fn parse_parameter_list(&mut self) -> Result<Vec<TypedIdentifier>, ParseError> {
        let mut params = Vec::new();

        if self.check_punct(')') {
            return Ok(params);
        }

        loop {
            let ty = self.parse_primitive_type("parameter type")?;
            let name = self.expect_identifier("parameter name")?;
            params.push(TypedIdentifier::new(ty, name));

            if !self.match_punct(',')? {
                break;
            }
        }

        Ok(params)
    }

    pub(crate) fn parse_primitive_type(&mut self, what: &str) -> Result<Type, ParseError> {
        let ty = Type::from_token(self.current.kind).ok_or_else(|| self.error_expected(what))?;
        self.advance()?;
        Ok(ty)
    }
}
