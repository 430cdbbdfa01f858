//! Source-like rendering of the AST
//!
//! Expressions print fully parenthesized so the tree shape is visible:
//! `1 + 2 * 3` renders as `(1 + (2 * 3))`. Classes, methods and statements
//! render as indented source text.

use crate::parser::ast::*;
use std::fmt::{self, Display, Formatter};

const INDENT: &str = "    ";

fn pad(f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Type::Int32 => "i32",
            Type::Float32 => "f32",
            Type::Bool => "bool",
            Type::Char => "char",
            Type::Void => "void",
        };
        f.write_str(name)
    }
}

impl Display for TypedIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

impl Display for AccessModifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AccessModifier::Public => f.write_str("public"),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::IntegerLiteral(n) => write!(f, "{}", n),
            // Debug keeps the fractional part: 1.0 rather than 1
            Expr::FloatLiteral(n) => write!(f, "{:?}", n),
            Expr::BoolLiteral(b) => write!(f, "{}", b),
            Expr::CharLiteral(c) => write!(f, "'{}'", c.escape_default()),
            Expr::Identifier(name) => f.write_str(name),
            Expr::Binary { op, left, right } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
            Expr::Unary { op, operand } => write!(f, "({}{})", op.symbol(), operand),
        }
    }
}

fn write_stmt(f: &mut Formatter<'_>, stmt: &Stmt, depth: usize) -> fmt::Result {
    match stmt {
        Stmt::VarDecl {
            ty,
            name,
            initializer,
        } => write!(f, "{} {} = {};", ty, name, initializer),
        Stmt::Assignment { name, value } => write!(f, "{} = {};", name, value),
        Stmt::If {
            condition,
            then_branch,
            else_branch,
        } => {
            write!(f, "if {} ", condition)?;
            write_stmt(f, then_branch, depth)?;
            if let Some(else_branch) = else_branch {
                f.write_str(" else ")?;
                write_stmt(f, else_branch, depth)?;
            }
            Ok(())
        }
        Stmt::While { condition, body } => {
            write!(f, "while {} ", condition)?;
            write_stmt(f, body, depth)
        }
        Stmt::Block(statements) => write_block(f, statements, depth),
    }
}

fn write_block(f: &mut Formatter<'_>, statements: &[Stmt], depth: usize) -> fmt::Result {
    if statements.is_empty() {
        return f.write_str("{ }");
    }

    f.write_str("{\n")?;
    for stmt in statements {
        pad(f, depth + 1)?;
        write_stmt(f, stmt, depth + 1)?;
        f.write_str("\n")?;
    }
    pad(f, depth)?;
    f.write_str("}")
}

fn write_method(f: &mut Formatter<'_>, method: &MethodImpl, depth: usize) -> fmt::Result {
    pad(f, depth)?;
    for modifier in &method.access_modifiers {
        write!(f, "{} ", modifier)?;
    }
    write!(f, "{} {}(", method.return_type, method.name)?;
    for (i, param) in method.params.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", param)?;
    }
    f.write_str(") ")?;
    write_block(f, &method.body, depth)
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_stmt(f, self, 0)
    }
}

impl Display for MethodImpl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_method(f, self, 0)
    }
}

impl Display for Class {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "class {} : {} ", self.name, self.blueprints.join(", "))?;

        if self.methods.is_empty() {
            return f.write_str("{ }");
        }

        f.write_str("{\n")?;
        for method in &self.methods {
            write_method(f, method, 1)?;
            f.write_str("\n")?;
        }
        f.write_str("}")
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Item::Class(class) => write!(f, "{}", class),
            Item::Expr(expr) => write!(f, "{}", expr),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}
