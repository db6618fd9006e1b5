//! Токены для SQL лексера sqllex
//!
//! Определяет виды токенов, которые может распознать лексический анализатор,
//! а также статические реестры ключевых слов и символов.

use crate::parser::cursor::Location;
use std::fmt;

/// Встроенные ключевые слова (в нижнем регистре)
pub const KEYWORDS: &[&str] = &[
    "select", "from", "as", "table", "create", "insert", "into", "values", "int", "text", "where",
];

/// Символы пунктуации, которые попадают в поток токенов
pub const SYMBOLS: &[&str] = &[",", "(", ")", ";", "*"];

/// Виды токенов SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Symbol,
    Identifier,
    StringLiteral,
    NumericLiteral,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Symbol => "symbol",
            TokenKind::Identifier => "identifier",
            TokenKind::StringLiteral => "string",
            TokenKind::NumericLiteral => "numeric",
        };
        write!(f, "{}", name)
    }
}

/// Токен со значением, видом и позицией первого символа
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    pub kind: TokenKind,
    pub location: Location,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, location: Location) -> Self {
        Self {
            value: value.into(),
            kind,
            location,
        }
    }

    /// Сравнивает значение и вид токена, не учитывая позицию.
    ///
    /// Так парсер сверяет ожидаемый токен с фактическим.
    pub fn equals(&self, other: &Token) -> bool {
        self.value == other.value && self.kind == other.kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}('{}') at {}", self.kind, self.value, self.location)
    }
}

/// Может ли символ начинать простой идентификатор
pub fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

/// Может ли символ продолжать идентификатор или ключевое слово
pub fn is_identifier_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
