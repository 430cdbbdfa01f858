//! # Introduction
//!
//! Blueprint is a small statically-typed, class-based language. This crate is
//! its front end: it turns source text into an abstract syntax tree.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST
//! ```
//!
//! 1. [`parser::lexer`] classifies characters into [`parser::token::Token`]s,
//!    skipping whitespace and comments.
//! 2. [`parser::parse`] pulls tokens on demand and builds the tree with
//!    recursive descent; expressions use precedence climbing.
//! 3. [`parser::ast`] holds the immutable node types; [`parser::printer`]
//!    renders them back as text.
//!
//! ## Example
//!
//! ```
//! use blueprint::parser::parse::Parser;
//!
//! let source = "class Main : Application { public void run(i32 n) { i32 x = n * 2; } }";
//! let program = Parser::new(source)?.parse()?;
//!
//! let class = program.classes().next().unwrap();
//! assert_eq!(class.name, "Main");
//! assert_eq!(class.methods[0].params[0].name, "n");
//! # Ok::<(), blueprint::parser::parse::ParseError>(())
//! ```
//!
//! Semantic analysis, type checking and code generation are not part of
//! this crate.

pub mod parser;
