//! Позиция курсора лексического анализатора
//!
//! Курсор - это неизменяемый снимок прогресса сканирования: смещение в байтах
//! плюс строка и колонка. Каждый распознаватель получает курсор по значению и
//! возвращает новый, поэтому неудачная попытка ничего не меняет.

use std::fmt;

/// Позиция в исходном тексте (строка и колонка считаются с нуля)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Начало текста
    pub fn start() -> Self {
        Self::default()
    }
}

/// Отображается в привычном для пользователя виде, с единицы
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Курсор сканирования
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Смещение в байтах от начала исходного текста
    pub offset: usize,
    /// Строка и колонка, соответствующие смещению
    pub location: Location,
}

impl Cursor {
    pub fn start() -> Self {
        Self::default()
    }

    /// Возвращает символ под курсором
    pub fn peek(self, source: &str) -> Option<char> {
        self.rest(source).chars().next()
    }

    /// Непрочитанный остаток текста
    pub fn rest(self, source: &str) -> &str {
        source.get(self.offset..).unwrap_or("")
    }

    pub fn is_at_end(self, source: &str) -> bool {
        self.offset >= source.len()
    }

    /// Возвращает курсор, сдвинутый за символ `ch`.
    ///
    /// Перевод строки увеличивает номер строки и сбрасывает колонку.
    #[must_use]
    pub fn advance(self, ch: char) -> Self {
        let location = if ch == '\n' {
            Location::new(self.location.line + 1, 0)
        } else {
            Location::new(self.location.line, self.location.column + 1)
        };

        Self {
            offset: self.offset + ch.len_utf8(),
            location,
        }
    }

    /// Сдвигает курсор через весь фрагмент `text`
    #[must_use]
    pub fn advance_str(self, text: &str) -> Self {
        text.chars().fold(self, Cursor::advance)
    }
}
