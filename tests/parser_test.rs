// Integration tests for the Blueprint parser

use blueprint::parser::ast::*;
use blueprint::parser::options::ParserOptions;
use blueprint::parser::parse::{ParseErrorKind, Parser};
use std::fs;
use std::path::Path;

#[test]
fn test_single_method_class() {
    let source = "class Foo : Application { public void bar(i32 x) { i32 y = 0 ; } }";

    let mut parser = Parser::new(source).expect("Parser creation failed");
    let program = parser.parse().expect("Parsing failed");

    assert_eq!(program.items.len(), 1);
    let class = program.classes().next().expect("Expected a class");
    assert_eq!(class.name, "Foo");
    assert_eq!(class.blueprints, vec!["Application".to_string()]);
    assert_eq!(class.methods.len(), 1);

    let method = &class.methods[0];
    assert_eq!(method.name, "bar");
    assert_eq!(method.params, vec![TypedIdentifier::new(Type::Int32, "x")]);
    assert_eq!(
        method.body,
        vec![Stmt::VarDecl {
            ty: Type::Int32,
            name: "y".to_string(),
            initializer: Expr::IntegerLiteral(0),
        }]
    );
}

#[test]
fn test_missing_colon_produces_no_class() {
    let source = "class Foo Application { }";

    let mut parser = Parser::new(source).expect("Parser creation failed");
    let err = parser.parse().expect_err("Parsing should fail");

    assert!(matches!(err.kind, ParseErrorKind::Expected { .. }));
    assert_eq!(err.location.line, 1);
    assert_eq!(err.location.column, 11);
}

#[test]
fn test_multiple_classes_and_leaves() {
    let source = r#"
        class First : Application {
            public void a() { }
        }
        answer
        class Second : Application {
            public void b(char c) { char d = c; }
        }
    "#;

    let mut parser = Parser::new(source).expect("Parser creation failed");
    let program = parser.parse().expect("Parsing failed");

    assert_eq!(program.items.len(), 3);
    assert!(matches!(&program.items[1], Item::Expr(Expr::Identifier(name)) if name == "answer"));

    let names: Vec<&str> = program.classes().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);
}

#[test]
fn test_error_inside_method_abandons_class() {
    let source = r#"
        class Broken : Application {
            public void ok() { i32 x = 1; }
            public void bad() { i32 y = ; }
        }
    "#;

    let mut parser = Parser::new(source).expect("Parser creation failed");
    let err = parser.parse().expect_err("Parsing should fail");

    assert_eq!(err.location.line, 4);
    assert!(err.to_string().contains("Expected expression"));
}

#[test]
fn test_unsupported_statement_in_method() {
    let source = "class Foo : Application { public void run() { while (true) { } } }";

    let mut parser = Parser::new(source).expect("Parser creation failed");
    let err = parser.parse().expect_err("Parsing should fail");

    assert_eq!(
        err.kind,
        ParseErrorKind::Unsupported("'while' statements are".to_string())
    );
    assert!(err.to_string().ends_with("'while' statements are not yet supported"));
}

#[test]
fn test_additional_blueprints() {
    let source = "class Worker : Service { } class Main : Application { }";

    let err = Parser::new(source).unwrap().parse().unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::UnknownBlueprint { .. }));

    let options = ParserOptions::default().with_blueprint("Service");
    let program = Parser::with_options(source, options).unwrap().parse().unwrap();
    let blueprints: Vec<&str> = program
        .classes()
        .map(|c| c.blueprints[0].as_str())
        .collect();
    assert_eq!(blueprints, vec!["Service", "Application"]);
}

#[test]
fn test_printed_ast_parses_to_same_tree() {
    let source = r#"
        class Calc : Application {
            public void run(i32 a, i32 b) {
                i32 sum = a + b * 2;
                bool same = (a - b) == 0 || a >= b;
                f32 half = 1.5 / 2.;
            }
        }
    "#;

    let program = Parser::new(source).unwrap().parse().unwrap();
    let printed = program.to_string();
    let reparsed = Parser::new(&printed).unwrap().parse().unwrap();

    assert_eq!(program.items.len(), reparsed.items.len());
    let (Item::Class(original), Item::Class(again)) = (&program.items[0], &reparsed.items[0]) else {
        panic!("Expected classes");
    };
    assert_eq!(original.name, again.name);
    assert_eq!(original.methods[0].params, again.methods[0].params);
    assert_eq!(original.methods[0].body, again.methods[0].body);
}

#[test]
fn test_demo_program() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/shop.bp");
    let source = fs::read_to_string(path).expect("Failed to read demo file");

    let mut parser = Parser::new(&source).expect("Parser creation failed");
    let program = parser.parse().expect("Parsing failed");

    let class = program.classes().next().expect("Expected a class");
    assert_eq!(class.name, "Shop");
    assert_eq!(class.methods.len(), 2);

    let sell = &class.methods[1];
    assert_eq!(sell.params.len(), 3);
    assert_eq!(sell.body.len(), 5);

    match &sell.body[2] {
        Stmt::VarDecl {
            ty: Type::Bool,
            initializer,
            ..
        } => assert_eq!(initializer.to_string(), "((count >= 10) && (!member))"),
        other => panic!("Expected bool declaration, got {other:?}"),
    }
    match &sell.body[1] {
        Stmt::VarDecl { initializer, .. } => {
            assert_eq!(initializer.to_string(), "(total - (total * 0.1))")
        }
        other => panic!("Expected declaration, got {other:?}"),
    }
}
