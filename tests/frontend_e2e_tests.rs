//! End-to-end tests for the Avocat front end: source text through the
//! scanner and parser to statements.

use avocat::{EType, Error, Expression, Parser, Scanner, Statement, TokenKind};

fn parse(source: &str) -> avocat::Result<Vec<Statement>> {
    Parser::new(Scanner::new(source)).parse()
}

#[test]
fn test_single_declaration() {
    let statements = parse("dec age = 18").unwrap();

    assert_eq!(statements.len(), 1);
    let Statement::Var {
        name,
        value,
        declared_type,
    } = &statements[0]
    else {
        panic!("expected Var statement");
    };
    assert_eq!(name.text, "age");
    assert_eq!(*declared_type, EType::Null);
    assert!(matches!(value, Expression::Integer(t) if t.text == "18"));
}

#[test]
fn test_program_with_multiple_statement_kinds() {
    let source = "dec age = (18)\ndec age = (32 + 1)\ndec nom = \"Hilton\"";
    let statements = parse(source).unwrap();

    assert_eq!(statements.len(), 3);
    assert!(statements
        .iter()
        .all(|s| matches!(s, Statement::Var { .. })));
}

#[test]
fn test_full_program_with_exit() {
    let source = "dec a: entier = 2 + 3\n\nterminer(0)\n";
    let statements = parse(source).unwrap();

    assert_eq!(statements.len(), 3);
    assert!(matches!(
        statements[0],
        Statement::Var {
            declared_type: EType::Integer,
            ..
        }
    ));
    assert!(matches!(statements[1], Statement::Eof(_)));
    assert!(matches!(statements[2], Statement::Exit { .. }));
}

#[test]
fn test_right_nested_operations() {
    let statements = parse("dec x = 1 + 2 + 3").unwrap();

    let Statement::Var { value, .. } = &statements[0] else {
        panic!("expected Var statement");
    };
    // a OP b OP c always parses as a OP (b OP c).
    let Expression::Operation { left, right, .. } = value else {
        panic!("expected operation");
    };
    assert!(matches!(**left, Expression::Integer(ref t) if t.text == "1"));
    let Expression::Operation { left, right, .. } = &**right else {
        panic!("expected right-nested operation");
    };
    assert!(matches!(**left, Expression::Integer(ref t) if t.text == "2"));
    assert!(matches!(**right, Expression::Integer(ref t) if t.text == "3"));
}

#[test]
fn test_exit_accepts_only_the_integer_variant() {
    assert!(parse("terminer(5)\n").is_ok());
    assert!(matches!(
        parse("terminer(1 + 1)\n"),
        Err(Error::Syntax { .. })
    ));
    assert!(matches!(
        parse("terminer(1.5)\n"),
        Err(Error::Syntax { .. })
    ));
    assert!(matches!(
        parse("terminer(\"0\")\n"),
        Err(Error::Syntax { .. })
    ));
}

#[test]
fn test_comment_lines_produce_nothing() {
    let source = "# entête\ndec a = 1\n# fin\n";
    let statements = parse(source).unwrap();

    assert_eq!(statements.len(), 1);
    assert!(matches!(statements[0], Statement::Var { .. }));
}

#[test]
fn test_error_reports_position() {
    let err = parse("dec a = 1\ndec b = @").unwrap_err();

    assert_eq!(err.position(), (2, 9));
    assert!(err.to_string().contains("(ligne: 2, position: 9)"));
}

#[test]
fn test_failure_is_terminal_but_earlier_statements_stand() {
    let mut parser = Parser::new(Scanner::new("dec age = 18\ndec age == 32\ndec x = 1"));

    let first = parser.next().unwrap().unwrap();
    assert!(matches!(first, Statement::Var { .. }));

    let err = parser.next().unwrap().unwrap_err();
    // No resynchronization: the same terminal error comes back on every
    // further pull instead of the third statement.
    assert_eq!(parser.next().unwrap().unwrap_err(), err);
    assert_eq!(parser.next().unwrap().unwrap_err(), err);
}

#[test]
fn test_statement_display() {
    let statements = parse("dec age = 10 + 1\nterminer(0)\n").unwrap();

    let rendered: Vec<String> = statements.iter().map(|s| s.to_string()).collect();
    assert_eq!(rendered[0], "Var<age, Oper<Expr<10> + Expr<1>>>");
    assert_eq!(rendered[1], "Exit<Expr<0>>");
}

#[test]
fn test_statements_serialize() {
    let statements = parse("dec nom = \"Sow\"").unwrap();
    let json = serde_json::to_value(&statements).unwrap();

    assert_eq!(json[0]["Var"]["name"]["text"], "nom");
    assert_eq!(json[0]["Var"]["declared_type"], "Null");
}

#[test]
fn test_lexer_only_properties() {
    // Tokens appear in source order with 1-indexed positions.
    let tokens = Scanner::new("dec a: caractere = 'a'").scan_tokens().unwrap();

    assert_eq!(tokens.len(), 7);
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::TwoPoints,
            TokenKind::TypeChar,
            TokenKind::Equal,
            TokenKind::Char,
            TokenKind::NewLine,
        ]
    );
    for pair in tokens.windows(2) {
        assert!(pair[0].line >= 1 && pair[0].column >= 1);
        assert!((pair[0].line, pair[0].column) < (pair[1].line, pair[1].column));
    }
}
