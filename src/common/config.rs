//! Конфигурация для sqllex
//!
//! Настраивает диалект, который принимает лексический анализатор

use crate::common::error::{Error, Result};
use crate::parser::token::{is_identifier_continue, is_identifier_start};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Конфигурация лексического анализатора
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Дополнительные ключевые слова диалекта
    pub extra_keywords: Vec<String>,
    /// Разрешить комментарии `-- ...` и `/* ... */`
    pub comments: bool,
    /// Разрешить идентификаторы в двойных кавычках
    pub quoted_identifiers: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            extra_keywords: Vec::new(),
            comments: true,
            quoted_identifiers: true,
        }
    }
}

impl LexerConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Разбирает конфигурацию из TOML текста
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LexerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Загружает конфигурацию из переменных окружения
    pub fn from_env() -> Result<Self> {
        let mut config = LexerConfig::default();

        if let Ok(keywords) = std::env::var("SQLLEX_EXTRA_KEYWORDS") {
            config.extra_keywords = keywords
                .split(',')
                .map(str::trim)
                .filter(|keyword| !keyword.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Ok(value) = std::env::var("SQLLEX_COMMENTS") {
            config.comments = parse_flag("SQLLEX_COMMENTS", &value)?;
        }

        if let Ok(value) = std::env::var("SQLLEX_QUOTED_IDENTIFIERS") {
            config.quoted_identifiers = parse_flag("SQLLEX_QUOTED_IDENTIFIERS", &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Объединяет конфигурацию с другой: берутся поля `other`,
    /// отличающиеся от значений по умолчанию
    pub fn merge(mut self, other: Self) -> Self {
        for keyword in other.extra_keywords {
            if !self.extra_keywords.contains(&keyword) {
                self.extra_keywords.push(keyword);
            }
        }
        if !other.comments {
            self.comments = false;
        }
        if !other.quoted_identifiers {
            self.quoted_identifiers = false;
        }
        self
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        for keyword in &self.extra_keywords {
            let mut chars = keyword.chars();
            let valid = chars.next().is_some_and(is_identifier_start)
                && chars.all(is_identifier_continue)
                && keyword.is_ascii();
            if !valid {
                return Err(Error::configuration(format!(
                    "Keyword `{}` is not a valid bare identifier",
                    keyword
                )));
            }
        }
        Ok(())
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::configuration(format!(
            "{} must be a boolean, got `{}`",
            name, value
        ))),
    }
}
