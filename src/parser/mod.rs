//! Лексический анализатор SQL для sqllex

pub mod cursor;
pub mod lexer;
pub mod lexer_methods;
pub mod lexer_readers;
pub mod matcher;
pub mod token;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use cursor::{Cursor, Location};
pub use lexer::{lex, Lexer, Scan};
pub use matcher::longest_match;
pub use token::{Token, TokenKind, KEYWORDS, SYMBOLS};
