//! Драйвер лексического анализатора

use crate::common::LexError;
use crate::parser::cursor::Cursor;
use crate::parser::lexer::{Lexer, Scan};
use crate::parser::token::Token;

/// Распознаватель: чистая функция от текста и курсора.
///
/// `None` означает неудачу без побочных эффектов.
type Recognizer = fn(&Lexer, &str, Cursor) -> Option<Scan>;

/// Порядок важен: ключевые слова раньше идентификаторов, символы рано
/// (они же съедают пробелы), строка раньше чисел, числа раньше идентификаторов.
const RECOGNIZERS: [Recognizer; 5] = [
    Lexer::read_keyword,
    Lexer::read_symbol,
    Lexer::read_string,
    Lexer::read_numeric,
    Lexer::read_identifier,
];

impl Lexer {
    /// Возвращает все токены из входного текста
    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, LexError> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut cursor = Cursor::start();

        'scan: while !cursor.is_at_end(source) {
            for recognizer in RECOGNIZERS {
                let Some(scan) = recognizer(self, source, cursor) else {
                    continue;
                };
                debug_assert!(scan.cursor.offset > cursor.offset);

                cursor = scan.cursor;
                if let Some(token) = scan.token {
                    log::trace!("Принят токен {}", token);
                    tokens.push(token);
                }
                continue 'scan;
            }

            let error = LexError::at(cursor.location, tokens.last().map(|t| t.value.clone()));
            log::debug!("Сканирование остановлено на {}: {}", cursor.location, error);
            return Err(error);
        }

        log::debug!(
            "Сканирование завершено: {} токенов, {} байт",
            tokens.len(),
            source.len()
        );
        Ok(tokens)
    }
}
