//! Тесты для лексического анализатора sqllex

use crate::common::{LexError, LexerConfig};
use crate::parser::{lex, Lexer, Location, Token, TokenKind};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn kinds_and_values(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|t| (t.kind, t.value.as_str())).collect()
}

#[test]
fn test_empty_input() {
    assert_eq!(lex("").unwrap(), Vec::new());
    assert_eq!(lex("   \n\t ").unwrap(), Vec::new());
}

#[test]
fn test_single_symbols() {
    for symbol in [",", "(", ")", ";", "*"] {
        let tokens = lex(symbol).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Symbol);
        assert_eq!(tokens[0].value, symbol);
    }
}

#[test]
fn test_whitespace_is_transparent() {
    let padded = lex("  *  ").unwrap();
    let bare = lex("*").unwrap();

    assert_eq!(kinds_and_values(&padded), vec![(TokenKind::Symbol, "*")]);
    assert!(padded[0].equals(&bare[0]));
    assert_eq!(padded[0].location, Location::new(0, 2));
}

#[test]
fn test_select_statement() {
    init_logging();
    let tokens = lex("select * from table;").unwrap();

    // `table` зарезервировано и всегда остается ключевым словом
    assert_eq!(
        kinds_and_values(&tokens),
        vec![
            (TokenKind::Keyword, "select"),
            (TokenKind::Symbol, "*"),
            (TokenKind::Keyword, "from"),
            (TokenKind::Keyword, "table"),
            (TokenKind::Symbol, ";"),
        ]
    );
}

#[test]
fn test_select_from_identifier() {
    let tokens = lex("select * from users;").unwrap();
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "users");
}

#[test]
fn test_quoted_reserved_word_is_identifier() {
    let tokens = lex("select * from \"table\"").unwrap();
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "table");
}

#[test]
fn test_case_insensitive_keywords() {
    let tokens = lex("select SELECT Select sElEcT").unwrap();

    assert_eq!(tokens.len(), 4);
    for token in &tokens {
        assert_eq!(token.kind, TokenKind::Keyword);
        assert_eq!(token.value, "select");
    }
}

#[test]
fn test_into_is_not_int() {
    let tokens = lex("into").unwrap();
    assert_eq!(kinds_and_values(&tokens), vec![(TokenKind::Keyword, "into")]);

    let tokens = lex("int").unwrap();
    assert_eq!(kinds_and_values(&tokens), vec![(TokenKind::Keyword, "int")]);
}

#[test]
fn test_keyword_boundary() {
    let tokens = lex("selection").unwrap();
    assert_eq!(kinds_and_values(&tokens), vec![(TokenKind::Identifier, "selection")]);

    let tokens = lex("intox int_col text2 from_").unwrap();
    for token in &tokens {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_keyword_followed_by_symbol() {
    let tokens = lex("values(1,2)").unwrap();
    assert_eq!(
        kinds_and_values(&tokens),
        vec![
            (TokenKind::Keyword, "values"),
            (TokenKind::Symbol, "("),
            (TokenKind::NumericLiteral, "1"),
            (TokenKind::Symbol, ","),
            (TokenKind::NumericLiteral, "2"),
            (TokenKind::Symbol, ")"),
        ]
    );
}

#[test]
fn test_identifiers() {
    let tokens = lex("user_name table123 _private column1").unwrap();

    assert_eq!(tokens.len(), 4);
    for token in &tokens {
        assert_eq!(token.kind, TokenKind::Identifier);
    }

    assert_eq!(tokens[0].value, "user_name");
    assert_eq!(tokens[1].value, "table123");
    assert_eq!(tokens[2].value, "_private");
    assert_eq!(tokens[3].value, "column1");
}

#[test]
fn test_identifier_keeps_case() {
    let tokens = lex("Users").unwrap();
    assert_eq!(tokens[0].value, "Users");
}

#[test]
fn test_quoted_identifiers() {
    let tokens = lex("\"user name\" \"say \"\"hi\"\"\"").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "user name");
    assert_eq!(tokens[1].value, "say \"hi\"");
}

#[test]
fn test_empty_quoted_identifier_fails() {
    assert!(lex("\"\"").is_err());
}

#[test]
fn test_string_literals() {
    let tokens = lex("'hello' 'world with spaces' 'it''s'").unwrap();

    assert_eq!(tokens.len(), 3);
    for token in &tokens {
        assert_eq!(token.kind, TokenKind::StringLiteral);
    }

    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "world with spaces");
    assert_eq!(tokens[2].value, "it's");
}

#[test]
fn test_unterminated_string() {
    let error = lex("'abc").unwrap_err();
    assert_eq!(error, LexError { line: 1, column: 1, previous: None });
}

#[test]
fn test_multiline_string_location() {
    let tokens = lex("'a\nb' x").unwrap();
    assert_eq!(tokens[0].value, "a\nb");
    assert_eq!(tokens[1].location, Location::new(1, 3));
}

#[test]
fn test_numeric_literals() {
    for input in ["123", "123.45", "1e10", "1e+5", "1e-5", "0", ".5", "1.", "2.5E3"] {
        let tokens = lex(input).unwrap();
        assert_eq!(tokens.len(), 1, "input {:?}", input);
        assert_eq!(tokens[0].kind, TokenKind::NumericLiteral);
        assert_eq!(tokens[0].value, input);
    }
}

#[test]
fn test_malformed_numeric_literals() {
    for input in ["1.2.3", "1e", "1ee4", "1e+", "1e5.2", "."] {
        let error = lex(input).unwrap_err();
        assert_eq!((error.line, error.column), (1, 1), "input {:?}", input);
    }
}

#[test]
fn test_numeric_then_identifier() {
    let tokens = lex("123abc").unwrap();
    assert_eq!(
        kinds_and_values(&tokens),
        vec![
            (TokenKind::NumericLiteral, "123"),
            (TokenKind::Identifier, "abc"),
        ]
    );
}

#[test]
fn test_locations() {
    let tokens = lex("select a,\n  b from t").unwrap();

    let locations: Vec<Location> = tokens.iter().map(|t| t.location).collect();
    assert_eq!(
        locations,
        vec![
            Location::new(0, 0),
            Location::new(0, 7),
            Location::new(0, 8),
            Location::new(1, 2),
            Location::new(1, 4),
            Location::new(1, 9),
        ]
    );
}

#[test]
fn test_error_reports_previous_token() {
    let error = lex("select a from t where x = 1").unwrap_err();

    assert_eq!(error.line, 1);
    assert_eq!(error.column, 25);
    assert_eq!(error.previous.as_deref(), Some("x"));
    assert_eq!(error.to_string(), "unable to lex token after `x`, at 1:25");
}

#[test]
fn test_error_on_second_line() {
    let error = lex("select *\n  @").unwrap_err();
    assert_eq!((error.line, error.column), (2, 3));
    assert_eq!(error.previous.as_deref(), Some("*"));
}

#[test]
fn test_comments_are_skipped() {
    let tokens = lex("select -- комментарий\n* /* многострочный\nкомментарий */ from t").unwrap();

    assert_eq!(
        kinds_and_values(&tokens),
        vec![
            (TokenKind::Keyword, "select"),
            (TokenKind::Symbol, "*"),
            (TokenKind::Keyword, "from"),
            (TokenKind::Identifier, "t"),
        ]
    );
    assert_eq!(tokens[2].location, Location::new(2, 15));
}

#[test]
fn test_comment_at_end_of_input() {
    let tokens = lex("t -- хвост").unwrap();
    assert_eq!(tokens.len(), 1);
}

#[test]
fn test_unterminated_block_comment() {
    let error = lex("t /* open").unwrap_err();
    assert_eq!((error.line, error.column), (1, 3));
}

#[test]
fn test_comments_can_be_disabled() {
    let config = LexerConfig {
        comments: false,
        ..LexerConfig::default()
    };
    let lexer = Lexer::from_config(config).unwrap();

    assert!(lexer.tokenize("a -- b").is_err());
    assert!(lexer.tokenize("a b").is_ok());
}

#[test]
fn test_quoted_identifiers_can_be_disabled() {
    let config = LexerConfig {
        quoted_identifiers: false,
        ..LexerConfig::default()
    };
    let lexer = Lexer::from_config(config).unwrap();

    let error = lexer.tokenize("select \"x\"").unwrap_err();
    assert_eq!(error.column, 8);
}

#[test]
fn test_extra_keywords() {
    let config = LexerConfig {
        extra_keywords: vec!["UPDATE".to_string(), "set".to_string()],
        ..LexerConfig::default()
    };
    let lexer = Lexer::from_config(config).unwrap();

    assert!(lexer.keywords().iter().any(|k| k == "update"));
    let tokens = lexer.tokenize("update t set x").unwrap();
    assert_eq!(
        kinds_and_values(&tokens),
        vec![
            (TokenKind::Keyword, "update"),
            (TokenKind::Identifier, "t"),
            (TokenKind::Keyword, "set"),
            (TokenKind::Identifier, "x"),
        ]
    );

    // без дополнений это идентификатор
    assert_eq!(lex("update").unwrap()[0].kind, TokenKind::Identifier);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = LexerConfig {
        extra_keywords: vec!["not valid".to_string()],
        ..LexerConfig::default()
    };
    assert!(Lexer::from_config(config).is_err());
}

#[test]
fn test_create_table_statement() {
    let sql = "CREATE TABLE users (id INT, name TEXT);\nINSERT INTO users VALUES (1, 'Phil');";
    let tokens = lex(sql).unwrap();

    let expected = vec![
        (TokenKind::Keyword, "create"),
        (TokenKind::Keyword, "table"),
        (TokenKind::Identifier, "users"),
        (TokenKind::Symbol, "("),
        (TokenKind::Identifier, "id"),
        (TokenKind::Keyword, "int"),
        (TokenKind::Symbol, ","),
        (TokenKind::Identifier, "name"),
        (TokenKind::Keyword, "text"),
        (TokenKind::Symbol, ")"),
        (TokenKind::Symbol, ";"),
        (TokenKind::Keyword, "insert"),
        (TokenKind::Keyword, "into"),
        (TokenKind::Identifier, "users"),
        (TokenKind::Keyword, "values"),
        (TokenKind::Symbol, "("),
        (TokenKind::NumericLiteral, "1"),
        (TokenKind::Symbol, ","),
        (TokenKind::StringLiteral, "Phil"),
        (TokenKind::Symbol, ")"),
        (TokenKind::Symbol, ";"),
    ];
    assert_eq!(kinds_and_values(&tokens), expected);
    assert_eq!(tokens[11].location, Location::new(1, 0));
}

#[test]
fn test_crlf_line_endings() {
    let tokens = lex("select\r\nx").unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].location, Location::new(1, 0));
}
