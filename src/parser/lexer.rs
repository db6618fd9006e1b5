//! Лексический анализатор SQL для sqllex
//!
//! Преобразует входной SQL текст в последовательность токенов для дальнейшего парсинга.
//! Ключевые слова, символы, строковые и числовые литералы и идентификаторы
//! распознаются отдельными функциями; драйвер перебирает их в фиксированном порядке.

use crate::common::{LexError, LexerConfig, Result};
use crate::parser::cursor::Cursor;
use crate::parser::token::{Token, KEYWORDS};
use lazy_static::lazy_static;

lazy_static! {
    /// Лексер со встроенным диалектом, общий для всех вызовов `lex`
    static ref DEFAULT_LEXER: Lexer = Lexer::new();
}

/// Разбивает `source` на токены встроенным диалектом
pub fn lex(source: &str) -> std::result::Result<Vec<Token>, LexError> {
    DEFAULT_LEXER.tokenize(source)
}

/// Результат успешной попытки распознавателя.
///
/// `token == None` означает пустой токен: пробел или комментарий,
/// который сдвигает курсор, но в поток не попадает.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    pub token: Option<Token>,
    pub cursor: Cursor,
}

impl Scan {
    pub fn token(token: Token, cursor: Cursor) -> Self {
        Self {
            token: Some(token),
            cursor,
        }
    }

    pub fn skip(cursor: Cursor) -> Self {
        Self {
            token: None,
            cursor,
        }
    }
}

/// Лексический анализатор SQL
#[derive(Debug, Clone)]
pub struct Lexer {
    /// Настройки диалекта
    pub(crate) config: LexerConfig,
    /// Встроенные и дополнительные ключевые слова в нижнем регистре
    pub(crate) keywords: Vec<String>,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    /// Создает лексический анализатор со встроенным диалектом
    pub fn new() -> Self {
        Self::with_config(LexerConfig::default())
    }

    /// Создает лексический анализатор с проверкой конфигурации
    pub fn from_config(config: LexerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: LexerConfig) -> Self {
        let mut keywords: Vec<String> = KEYWORDS.iter().map(|k| k.to_string()).collect();
        for keyword in &config.extra_keywords {
            let keyword = keyword.to_ascii_lowercase();
            if !keywords.contains(&keyword) {
                keywords.push(keyword);
            }
        }

        Self { config, keywords }
    }

    /// Ключевые слова, которые распознает лексер
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}
