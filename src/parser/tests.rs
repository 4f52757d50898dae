//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs including:
//! - `variable` and `return` statements
//! - Operator precedence and associativity
//! - `if` expressions, function literals and calls
//! - Diagnostics and recovery on malformed input

use super::parser::{parse, Parser, MAX_NESTING_DEPTH};
use crate::{
    ast::{
        ast::Program,
        expressions::{Expr, Identifier},
        statements::Stmt,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::Lexer, tokens::TokenKind},
};

fn parse_source(source: &str) -> (Program, Vec<Error>) {
    parse(source.to_string(), Some("test.lang".to_string()))
}

fn parse_ok(source: &str) -> Program {
    let (program, errors) = parse_source(source);
    assert!(errors.is_empty(), "unexpected diagnostics for {:?}: {:?}", source, errors);
    program
}

fn messages(errors: &[Error]) -> Vec<String> {
    errors.iter().map(|e| e.to_string()).collect()
}

fn single_expr(program: &Program) -> &Expr {
    assert_eq!(program.len(), 1, "expected one statement in {}", program);
    match &program.statements[0] {
        Stmt::Expression(stmt) => &stmt.expression,
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

#[test]
fn test_parse_let_statement() {
    let program = parse_ok("variable x = 5;");

    assert_eq!(program.len(), 1);
    match &program.statements[0] {
        Stmt::Let(stmt) => {
            assert_eq!(stmt.name, Identifier::new("x"));
            assert_eq!(stmt.value, Expr::integer(5));
        }
        other => panic!("expected a let statement, got {:?}", other),
    }
}

#[test]
fn test_parse_let_statement_names() {
    let program = parse_ok("variable x = 5;\nvariable y = 10;\nvariable foo = 838383;");

    let names: Vec<&str> = program
        .iter()
        .map(|stmt| match stmt {
            Stmt::Let(stmt) => stmt.name.value.as_str(),
            other => panic!("expected a let statement, got {:?}", other),
        })
        .collect();

    assert_eq!(names, vec!["x", "y", "foo"]);
}

#[test]
fn test_let_without_semicolon() {
    let program = parse_ok("variable x = 5\nvariable y = x");
    assert_eq!(program.to_string(), "variable x = 5;\nvariable y = x;");
}

#[test]
fn test_malformed_let_statements() {
    let (program, errors) = parse_source("variable x 5; variable = 10; variable 20;");

    assert!(program.is_empty());
    assert_eq!(
        messages(&errors),
        vec![
            "expected next token to be Assign, got Integer instead",
            "expected identifier after let, found \"=\"",
            "expected identifier after let, found \"20\"",
        ]
    );
}

#[test]
fn test_diagnostic_positions() {
    let (_, errors) = parse_source("variable x 5;\nvariable = 10;");

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].get_position().0, 11);
    assert_eq!(errors[1].get_position().0, 23);
    assert_eq!(errors[0].get_position().1.as_str(), "test.lang");
}

#[test]
fn test_parse_return_statements() {
    let program = parse_ok("return 5;\nreturn 10;\nreturn 993322;");

    let values: Vec<&Expr> = program
        .iter()
        .map(|stmt| match stmt {
            Stmt::Return(stmt) => &stmt.value,
            other => panic!("expected a return statement, got {:?}", other),
        })
        .collect();

    assert_eq!(
        values,
        vec![&Expr::integer(5), &Expr::integer(10), &Expr::integer(993322)]
    );
}

#[test]
fn test_parse_literals() {
    assert_eq!(single_expr(&parse_ok("foobar;")), &Expr::identifier("foobar"));
    assert_eq!(single_expr(&parse_ok("5;")), &Expr::integer(5));
    assert_eq!(single_expr(&parse_ok("true;")), &Expr::boolean(true));
    assert_eq!(single_expr(&parse_ok("false")), &Expr::boolean(false));
}

#[test]
fn test_parse_prefix_expressions() {
    assert_eq!(
        single_expr(&parse_ok("!5;")),
        &Expr::prefix("!", Expr::integer(5))
    );
    assert_eq!(
        single_expr(&parse_ok("-15;")),
        &Expr::prefix("-", Expr::integer(15))
    );
    assert_eq!(
        single_expr(&parse_ok("!true;")),
        &Expr::prefix("!", Expr::boolean(true))
    );
}

#[test]
fn test_parse_infix_expressions() {
    let operators = ["+", "-", "*", "/", ">", "<", ">=", "<=", "==", "!="];

    for operator in operators {
        let source = format!("5 {} 6;", operator);
        assert_eq!(
            single_expr(&parse_ok(&source)),
            &Expr::infix(Expr::integer(5), operator, Expr::integer(6)),
            "operator {}",
            operator
        );
    }
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("-a * b", "((-a) * b);"),
        ("!-a", "(!(-a));"),
        ("a + b + c", "((a + b) + c);"),
        ("a - b - c", "((a - b) - c);"),
        ("a * b * c", "((a * b) * c);"),
        ("a * b / c", "((a * b) / c);"),
        ("a + b * c", "(a + (b * c));"),
        ("a + b / c", "(a + (b / c));"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f);"),
        ("3 + 4; -5 * 5", "(3 + 4);\n((-5) * 5);"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4));"),
        ("5 <= 4 != 3 >= 4", "((5 <= 4) != (3 >= 4));"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)));",
        ),
        ("true == false != true", "((true == false) != true);"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4);"),
        ("(5 + 5) * 2", "((5 + 5) * 2);"),
        ("2 / (5 + 5)", "(2 / (5 + 5));"),
        ("-(5 + 5)", "(-(5 + 5));"),
        ("!(true == true)", "(!(true == true));"),
    ];

    for (source, expected) in cases {
        assert_eq!(parse_ok(source).to_string(), expected, "source {:?}", source);
    }
}

#[test]
fn test_call_precedence() {
    let cases = [
        ("a + add(b * c) + d", "((a + add((b * c))) + d);"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)));",
        ),
        ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g));"),
        ("add(1, 2) * 3", "(add(1, 2) * 3);"),
        ("-a(b)", "(-a(b));"),
    ];

    for (source, expected) in cases {
        assert_eq!(parse_ok(source).to_string(), expected, "source {:?}", source);
    }
}

#[test]
fn test_parse_if_expression() {
    let program = parse_ok("if (x < y) { x }");

    match single_expr(&program) {
        Expr::If(if_expr) => {
            assert_eq!(
                *if_expr.condition,
                Expr::infix(Expr::identifier("x"), "<", Expr::identifier("y"))
            );
            assert_eq!(if_expr.consequence.len(), 1);
            assert!(if_expr.alternative.is_none());
        }
        other => panic!("expected an if expression, got {:?}", other),
    }
}

#[test]
fn test_parse_if_else_expression() {
    let program = parse_ok("if (x < y) { x } else { y; return 1; }");

    match single_expr(&program) {
        Expr::If(if_expr) => {
            assert_eq!(if_expr.consequence.len(), 1);
            let alternative = if_expr.alternative.as_ref().expect("missing else block");
            assert_eq!(alternative.len(), 2);
            assert!(matches!(alternative.statements[1], Stmt::Return(_)));
        }
        other => panic!("expected an if expression, got {:?}", other),
    }
}

#[test]
fn test_parse_function_literal() {
    let program = parse_ok("function(x, y) { x + y; }");

    match single_expr(&program) {
        Expr::Function(function) => {
            assert_eq!(
                function.parameters,
                vec![Identifier::new("x"), Identifier::new("y")]
            );
            assert_eq!(function.body.len(), 1);
            assert_eq!(function.body.to_string(), "{ (x + y); }");
        }
        other => panic!("expected a function literal, got {:?}", other),
    }
}

#[test]
fn test_function_parameter_lists() {
    let cases: [(&str, Vec<&str>); 3] = [
        ("function() {};", vec![]),
        ("function(x) {};", vec!["x"]),
        ("function(x, y, z) {};", vec!["x", "y", "z"]),
    ];

    for (source, expected) in cases {
        match single_expr(&parse_ok(source)) {
            Expr::Function(function) => {
                let names: Vec<&str> = function
                    .parameters
                    .iter()
                    .map(|p| p.value.as_str())
                    .collect();
                assert_eq!(names, expected, "source {:?}", source);
            }
            other => panic!("expected a function literal, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_call_expression() {
    let program = parse_ok("add(1, 2 * 3, 4 + 5);");

    assert_eq!(
        single_expr(&program),
        &Expr::call(
            Expr::identifier("add"),
            vec![
                Expr::integer(1),
                Expr::infix(Expr::integer(2), "*", Expr::integer(3)),
                Expr::infix(Expr::integer(4), "+", Expr::integer(5)),
            ]
        )
    );
}

#[test]
fn test_call_without_arguments() {
    assert_eq!(
        single_expr(&parse_ok("f()")),
        &Expr::call(Expr::identifier("f"), vec![])
    );
}

#[test]
fn test_immediately_called_function_literal() {
    let program = parse_ok("function(x) { x; }(5)");

    match single_expr(&program) {
        Expr::Call(call) => {
            assert!(matches!(*call.function, Expr::Function(_)));
            assert_eq!(call.arguments, vec![Expr::integer(5)]);
        }
        other => panic!("expected a call, got {:?}", other),
    }
    assert_eq!(program.to_string(), "function(x) { x; }(5);");
}

#[test]
fn test_rendered_program_parses_back() {
    let source = "
        variable add = function(a, b) { return a + b; };
        variable result = add(1, -2 * 3);
        if (result >= 10) { result } else { !true; };
        variable empty = function() { };
        add(add(1, 2), (3));
    ";

    let program = parse_ok(source);
    let rendered = program.to_string();
    let reparsed = parse_ok(&rendered);

    assert_eq!(reparsed, program);
    assert_eq!(reparsed.to_string(), rendered);
}

#[test]
fn test_empty_program() {
    let program = parse_ok("");
    assert!(program.is_empty());

    let program = parse_ok("  \n\t ");
    assert!(program.is_empty());
}

#[test]
fn test_unterminated_block() {
    let (program, errors) = parse_source("if (x) { variable y = 1;");

    assert!(errors.is_empty());
    match single_expr(&program) {
        Expr::If(if_expr) => assert_eq!(if_expr.consequence.len(), 1),
        other => panic!("expected an if expression, got {:?}", other),
    }
}

#[test]
fn test_unterminated_function_body() {
    let (program, errors) = parse_source("variable f = function(x) { return x;");

    assert!(errors.is_empty());
    assert_eq!(program.to_string(), "variable f = function(x) { return x; };");
}

#[test]
fn test_unterminated_grouped_expression() {
    let (program, errors) = parse_source("(1 + 2");

    assert_eq!(
        messages(&errors),
        vec!["expected next token to be RParen, got EOF instead"]
    );
    assert_eq!(program.to_string(), "(1 + 2);");
}

#[test]
fn test_unterminated_call() {
    let (program, errors) = parse_source("add(1, 2");

    assert_eq!(
        messages(&errors),
        vec!["expected next token to be RParen, got EOF instead"]
    );
    assert_eq!(program.to_string(), "add(1, 2);");
}

#[test]
fn test_call_ending_after_comma() {
    let (program, errors) = parse_source("add(1,");

    assert_eq!(
        messages(&errors),
        vec!["no prefix parse function for token type EOF"]
    );
    assert_eq!(errors[0].get_position().0, 6);
    assert_eq!(program.to_string(), "add(1);");

    let (program, errors) = parse_source("f(");
    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "f();");
}

#[test]
fn test_call_with_trailing_comma() {
    let (program, errors) = parse_source("add(1, ); add(2)");

    assert_eq!(
        messages(&errors),
        vec!["no prefix parse function for token type RParen"]
    );
    assert_eq!(program.to_string(), "add(1);\nadd(2);");
}

#[test]
fn test_unterminated_call_before_next_statement() {
    let (program, errors) = parse_source("add(1,\nvariable y = 2;");

    assert_eq!(
        messages(&errors),
        vec!["no prefix parse function for token type Let"]
    );
    assert_eq!(program.to_string(), "add(1);\nvariable y = 2;");
}

#[test]
fn test_illegal_character_in_expression() {
    let (program, errors) = parse_source("variable x = @;");

    assert!(program.is_empty());
    assert_eq!(
        messages(&errors),
        vec!["no prefix parse function for token type Illegal"]
    );
    assert_eq!(errors[0].get_position().0, 13);
}

#[test]
fn test_missing_prefix_rule() {
    let (_, errors) = parse_source("* 5;");

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].get_kind(),
        &ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Multiplication
        }
    );
}

#[test]
fn test_integer_overflow() {
    let (program, errors) = parse_source("99999999999999999999;");

    assert!(program.is_empty());
    assert_eq!(
        messages(&errors),
        vec!["could not parse \"99999999999999999999\" as integer"]
    );

    assert_eq!(
        single_expr(&parse_ok("9223372036854775807;")),
        &Expr::integer(i64::MAX)
    );
}

#[test]
fn test_deeply_nested_prefix() {
    let source = format!("{}1;", "-".repeat(10_000));
    let (program, errors) = parse_source(&source);

    assert!(program.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].get_kind(),
        &ErrorImpl::NestingTooDeep {
            limit: MAX_NESTING_DEPTH
        }
    );
    assert_eq!(errors[0].get_position().0 as usize, MAX_NESTING_DEPTH);
}

#[test]
fn test_deeply_nested_groups_and_calls() {
    let groups = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    let calls = format!("{}1{}", "f(".repeat(10_000), ")".repeat(10_000));

    for source in [groups, calls] {
        let (program, errors) = parse_source(&source);

        assert!(program.is_empty());
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0].get_kind(),
            ErrorImpl::NestingTooDeep { .. }
        ));
    }
}

#[test]
fn test_nesting_below_limit() {
    let source = format!("{}x{};", "(".repeat(100), ")".repeat(100));
    assert_eq!(parse_ok(&source).to_string(), "x;");

    let source = format!("{}x;", "-".repeat(100));
    assert!(matches!(single_expr(&parse_ok(&source)), Expr::Prefix(_)));
}

#[test]
fn test_if_requires_parenthesized_condition() {
    let (_, errors) = parse_source("if x { 1 }");

    assert!(!errors.is_empty());
    assert_eq!(
        errors[0].to_string(),
        "expected next token to be LParen, got Identifier instead"
    );
}

#[test]
fn test_bad_function_parameter() {
    let (program, errors) = parse_source("function(x, 1) { x };");

    assert!(program.is_empty());
    assert_eq!(
        errors[0].to_string(),
        "expected next token to be Identifier, got Integer instead"
    );
}

#[test]
fn test_recovery_keeps_following_statements() {
    let (program, errors) = parse_source("variable = 1; variable y = 2; return y;");

    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "variable y = 2;\nreturn y;");
}

#[test]
fn test_recovery_inside_block() {
    let (program, errors) = parse_source("if (a) { variable = 1; b } else { c }");

    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "if (a) { b; } else { c; };");
}

#[test]
fn test_recovery_at_block_end() {
    let (program, errors) = parse_source("if (a) { variable x = } variable y = 1;");

    assert_eq!(
        messages(&errors),
        vec!["no prefix parse function for token type RBrace"]
    );
    assert_eq!(program.to_string(), "if (a) { };\nvariable y = 1;");
}

#[test]
fn test_parser_lookahead() {
    let mut parser = Parser::new(Lexer::new(String::from("a + b"), None));

    assert_eq!(parser.current_token_kind(), TokenKind::Identifier);
    assert_eq!(parser.peek_token_kind(), TokenKind::Plus);

    parser.advance();
    assert_eq!(parser.current_token().literal, "+");
    assert_eq!(parser.peek_token().literal, "b");

    parser.advance();
    parser.advance();
    assert!(!parser.has_tokens());

    parser.advance();
    assert_eq!(parser.current_token_kind(), TokenKind::EOF);
}

#[test]
fn test_expect_peek_does_not_move_on_failure() {
    let mut parser = Parser::new(Lexer::new(String::from("variable x"), None));

    let error = parser
        .expect_peek(TokenKind::Assign)
        .expect_err("expected a diagnostic");
    assert_eq!(parser.current_token_kind(), TokenKind::Let);
    assert_eq!(error.get_position().0, 9);

    assert!(parser.expect_peek(TokenKind::Identifier).is_ok());
    assert_eq!(parser.current_token().literal, "x");
}

#[test]
fn test_parser_diagnostics() {
    let mut parser = Parser::new(Lexer::new(String::from("variable 1; )"), None));
    let (_, errors) = parser.parse_program();

    assert_eq!(parser.errors(), errors.as_slice());
    assert_eq!(
        parser.diagnostics(),
        vec![
            "expected identifier after let, found \"1\"",
            "no prefix parse function for token type RParen",
        ]
    );
    assert_eq!(errors[0].get_position().1.as_str(), "shell");
}
