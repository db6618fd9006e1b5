//! Поиск самого длинного совпадения среди фиксированного набора строк
//!
//! Общий алгоритм для ключевых слов и символов: решает неоднозначность
//! общих префиксов вроде `in` / `int` / `into` / `insert`.

use crate::parser::cursor::Cursor;

/// Ищет самый длинный вариант из `options`, который точно совпадает с текстом,
/// начиная с курсора `start`.
///
/// Текст читается посимвольно в буфер. Вариант выбывает, когда буфер стал
/// длиннее него или перестал быть его префиксом. При `fold_case` символы
/// буфера приводятся к нижнему регистру ASCII, поэтому `options` в этом случае
/// должны быть в нижнем регистре.
///
/// Возвращает совпавший вариант и курсор сразу за ним.
pub fn longest_match<'a, S: AsRef<str>>(
    source: &str,
    start: Cursor,
    options: &'a [S],
    fold_case: bool,
) -> Option<(&'a str, Cursor)> {
    let mut buffer = String::new();
    let mut eliminated = vec![false; options.len()];
    let mut remaining = options.len();
    let mut best: Option<(&'a str, Cursor)> = None;
    let mut cursor = start;

    while remaining > 0 {
        let Some(ch) = cursor.peek(source) else {
            break;
        };
        buffer.push(if fold_case { ch.to_ascii_lowercase() } else { ch });
        cursor = cursor.advance(ch);

        for (index, option) in options.iter().enumerate() {
            if eliminated[index] {
                continue;
            }
            let option = option.as_ref();

            if option == buffer {
                eliminated[index] = true;
                remaining -= 1;
                if best.map_or(true, |(current, _)| option.len() > current.len()) {
                    best = Some((option, cursor));
                }
                continue;
            }

            if buffer.len() > option.len() || !option.starts_with(buffer.as_str()) {
                eliminated[index] = true;
                remaining -= 1;
            }
        }
    }

    best
}
