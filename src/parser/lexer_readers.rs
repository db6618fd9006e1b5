// Распознаватели токенов для лексического анализатора
//
// Каждый распознаватель получает курсор по значению и при неудаче
// возвращает `None`, ничего не потребляя.

use crate::parser::cursor::Cursor;
use crate::parser::lexer::{Lexer, Scan};
use crate::parser::matcher::longest_match;
use crate::parser::token::{is_identifier_continue, is_identifier_start, Token, TokenKind, SYMBOLS};

impl Lexer {
    /// Читает ключевое слово.
    ///
    /// Совпадение, за которым идет буква, цифра или `_`, отвергается:
    /// `selection` - это идентификатор, а не `select` с хвостом.
    pub(crate) fn read_keyword(&self, source: &str, start: Cursor) -> Option<Scan> {
        let (keyword, cursor) = longest_match(source, start, &self.keywords, true)?;

        if cursor.peek(source).is_some_and(is_identifier_continue) {
            return None;
        }

        Some(Scan::token(
            Token::new(TokenKind::Keyword, keyword, start.location),
            cursor,
        ))
    }

    /// Читает символ пунктуации, либо пропускает пробел или комментарий
    pub(crate) fn read_symbol(&self, source: &str, start: Cursor) -> Option<Scan> {
        let ch = start.peek(source)?;

        if matches!(ch, ' ' | '\t' | '\n' | '\r') {
            return Some(Scan::skip(start.advance(ch)));
        }

        if self.config.comments {
            if let Some(cursor) = read_comment(source, start) {
                return Some(Scan::skip(cursor));
            }
        }

        let (symbol, cursor) = longest_match(source, start, SYMBOLS, false)?;
        Some(Scan::token(
            Token::new(TokenKind::Symbol, symbol, start.location),
            cursor,
        ))
    }

    /// Читает строковый литерал в одинарных кавычках
    pub(crate) fn read_string(&self, source: &str, start: Cursor) -> Option<Scan> {
        let (value, cursor) = read_delimited(source, start, '\'')?;
        Some(Scan::token(
            Token::new(TokenKind::StringLiteral, value, start.location),
            cursor,
        ))
    }

    /// Читает числовой литерал.
    ///
    /// Грамматика: цифры с не более чем одной точкой, затем необязательная
    /// экспонента `e`/`E` с необязательным знаком и хотя бы одной цифрой.
    /// Вторая точка, вторая экспонента или экспонента без цифр - неудача целиком.
    /// Грамматика намеренно сужена: нужна хотя бы одна цифра до экспоненты,
    /// поэтому одиночная `.` числом не считается.
    pub(crate) fn read_numeric(&self, source: &str, start: Cursor) -> Option<Scan> {
        let first = start.peek(source)?;
        if !first.is_ascii_digit() && first != '.' {
            return None;
        }

        let mut cursor = start;
        let mut period_found = false;
        let mut exponent_found = false;
        let mut mantissa_digits = false;

        while let Some(ch) = cursor.peek(source) {
            match ch {
                '0'..='9' => {
                    mantissa_digits |= !exponent_found;
                    cursor = cursor.advance(ch);
                }
                '.' => {
                    if period_found {
                        return None;
                    }
                    period_found = true;
                    cursor = cursor.advance(ch);
                }
                'e' | 'E' => {
                    if exponent_found || !mantissa_digits {
                        return None;
                    }
                    // после экспоненты точка запрещена
                    exponent_found = true;
                    period_found = true;

                    let mut next = cursor.advance(ch);
                    if let Some(sign @ ('+' | '-')) = next.peek(source) {
                        next = next.advance(sign);
                    }
                    if !next.peek(source).is_some_and(|c| c.is_ascii_digit()) {
                        return None;
                    }
                    cursor = next;
                }
                _ => break,
            }
        }

        if !mantissa_digits {
            return None;
        }

        let value = &source[start.offset..cursor.offset];
        Some(Scan::token(
            Token::new(TokenKind::NumericLiteral, value, start.location),
            cursor,
        ))
    }

    /// Читает идентификатор: простой или в двойных кавычках
    pub(crate) fn read_identifier(&self, source: &str, start: Cursor) -> Option<Scan> {
        let first = start.peek(source)?;

        if first == '"' {
            if !self.config.quoted_identifiers {
                return None;
            }
            let (value, cursor) = read_delimited(source, start, '"')?;
            if value.is_empty() {
                return None;
            }
            return Some(Scan::token(
                Token::new(TokenKind::Identifier, value, start.location),
                cursor,
            ));
        }

        if !is_identifier_start(first) {
            return None;
        }

        let mut cursor = start.advance(first);
        while let Some(ch) = cursor.peek(source) {
            if !is_identifier_continue(ch) {
                break;
            }
            cursor = cursor.advance(ch);
        }

        let value = &source[start.offset..cursor.offset];
        Some(Scan::token(
            Token::new(TokenKind::Identifier, value, start.location),
            cursor,
        ))
    }
}

/// Читает значение, ограниченное символом `delimiter`.
///
/// Удвоенный разделитель внутри значения означает сам разделитель.
/// Возвращает значение без разделителей и курсор за закрывающим.
pub(crate) fn read_delimited(
    source: &str,
    start: Cursor,
    delimiter: char,
) -> Option<(String, Cursor)> {
    if start.peek(source)? != delimiter {
        return None;
    }

    let mut cursor = start.advance(delimiter);
    let mut value = String::new();

    while let Some(ch) = cursor.peek(source) {
        cursor = cursor.advance(ch);

        if ch == delimiter {
            if cursor.peek(source) == Some(delimiter) {
                value.push(delimiter);
                cursor = cursor.advance(delimiter);
                continue;
            }
            return Some((value, cursor));
        }

        value.push(ch);
    }

    // незакрытый литерал
    None
}

/// Пропускает комментарий `-- ...` до конца строки или `/* ... */`
fn read_comment(source: &str, start: Cursor) -> Option<Cursor> {
    let rest = start.rest(source);

    if rest.starts_with("--") {
        let body = rest.find('\n').map_or(rest, |end| &rest[..end]);
        return Some(start.advance_str(body));
    }

    if let Some(inner) = rest.strip_prefix("/*") {
        let end = inner.find("*/")? + "/**/".len();
        return Some(start.advance_str(&rest[..end]));
    }

    None
}
