//! Обработка ошибок для sqllex

use crate::parser::cursor::Location;
use thiserror::Error;

/// Фатальная ошибка сканирования: ни один распознаватель не подошёл.
///
/// Строка и колонка хранятся начиная с единицы.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unable to lex token{}, at {line}:{column}", after(.previous))]
pub struct LexError {
    pub line: usize,
    pub column: usize,
    /// Значение последнего принятого токена, если он был
    pub previous: Option<String>,
}

fn after(previous: &Option<String>) -> String {
    match previous {
        Some(value) => format!(" after `{}`", value),
        None => String::new(),
    }
}

impl LexError {
    /// Создает ошибку по позиции, в которой сканирование остановилось
    pub fn at(location: Location, previous: Option<String>) -> Self {
        Self {
            line: location.line + 1,
            column: location.column + 1,
            previous,
        }
    }
}

/// Основной тип ошибки для sqllex
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка лексического анализа
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка разбора TOML конфигурации
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Тип результата для sqllex
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
