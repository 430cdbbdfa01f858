//! Blueprint source code parser
//!
//! This module transforms Blueprint source text into an Abstract Syntax Tree (AST):
//! - [`token`]: Token kinds, payloads and the keyword table
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//! - [`printer`]: Rendering an AST back to source-like text
//! - [`options`]: Parser configuration
//!
//! # Supported Language
//!
//! - Classes deriving from a blueprint: `class Main : Application { ... }`
//! - `public void` methods with primitive-typed parameters
//! - Variable declarations with an initializer expression
//! - Expressions: literals, identifiers, parentheses, unary `-` and `!`,
//!   arithmetic, comparison and logical operators
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with precedence climbing for binary operators.
//! No external parser generator dependencies.

pub mod ast;
mod declarations;
mod expressions;
pub mod lexer;
pub mod options;
pub mod parse;
pub mod printer;
mod statements;
pub mod token;

pub use expressions::precedence;
