// AST (Abstract Syntax Tree) definitions for the Blueprint language

use super::token::TokenKind;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
    /// Character offset from the start of the source
    pub offset: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

/// Primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Int32,
    Float32,
    Bool,
    Char,
    Void,
}

impl Type {
    pub fn from_token(kind: TokenKind) -> Option<Type> {
        match kind {
            TokenKind::I32 => Some(Type::Int32),
            TokenKind::F32 => Some(Type::Float32),
            TokenKind::Bool => Some(Type::Bool),
            TokenKind::Char => Some(Type::Char),
            TokenKind::Void => Some(Type::Void),
            _ => None,
        }
    }
}

/// A parameter: type and name
#[derive(Debug, Clone, PartialEq)]
pub struct TypedIdentifier {
    pub ty: Type,
    pub name: String,
}

impl TypedIdentifier {
    pub fn new(ty: Type, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Logical
    And,
    Or,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Negate, // -x
    Not,    // !x
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Negate => "-",
            UnaryOp::Not => "!",
        }
    }
}

/// Expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntegerLiteral(i64),
    FloatLiteral(f64),
    BoolLiteral(bool),
    CharLiteral(char),
    Identifier(String),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }
}

/// Statements
///
/// Only `VarDecl` has a grammar rule so far; the other variants are built
/// by hand until their productions exist.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl {
        ty: Type,
        name: String,
        initializer: Expr,
    },
    Assignment {
        name: String,
        value: Expr,
    },
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    Block(Vec<Stmt>),
}

/// Access modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessModifier {
    Public,
}

impl AccessModifier {
    pub fn from_token(kind: TokenKind) -> Option<AccessModifier> {
        match kind {
            TokenKind::Public => Some(AccessModifier::Public),
            _ => None,
        }
    }
}

/// Method implementation inside a class body
#[derive(Debug, Clone, PartialEq)]
pub struct MethodImpl {
    pub access_modifiers: Vec<AccessModifier>,
    pub return_type: Type,
    pub name: String,
    pub params: Vec<TypedIdentifier>,
    pub body: Vec<Stmt>,
    pub location: SourceLocation,
}

/// Class definition
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub name: String,
    pub methods: Vec<MethodImpl>,
    /// Blueprint (base class) names listed after ':'
    pub blueprints: Vec<String>,
    pub location: SourceLocation,
}

/// A top-level item
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Class(Class),
    Expr(Expr),
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub items: Vec<Item>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    pub fn classes(&self) -> impl Iterator<Item = &Class> {
        self.items.iter().filter_map(|item| match item {
            Item::Class(class) => Some(class),
            Item::Expr(_) => None,
        })
    }
}
