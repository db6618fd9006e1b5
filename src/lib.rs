//! sqllex - лексический анализатор SQL
//!
//! Преобразует исходный SQL текст в упорядоченный поток классифицированных токенов
//! (ключевые слова, символы, идентификаторы, строковые и числовые литералы)
//! для последующего парсера.
//!
//! ```
//! use sqllex::{lex, TokenKind};
//!
//! let tokens = lex("select * from users;").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[3].value, "users");
//! ```

pub mod common;
pub mod parser;

pub use common::error::{Error, LexError, Result};
pub use common::LexerConfig;
pub use parser::{lex, Cursor, Lexer, Location, Token, TokenKind};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
