#![allow(clippy::module_inception)]

pub mod ast;
pub mod environment;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Byte range of a token or node in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn null() -> Self {
        Span { start: 0, end: 0 }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Finds the line containing byte offset `position`.
///
/// Returns the 1-based line number, the line text (without its newline) and
/// the offset of `position` within that line. Offsets past the end of the
/// source resolve to the end of the last line.
pub fn get_line_at_position(source: &str, position: usize) -> (usize, &str, usize) {
    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return (line_number, line.trim_end_matches(['\n', '\r']), position - start);
        }

        start = end;
        line_number += 1;
    }

    // Past the end: point just after the last line.
    match source.split_inclusive('\n').last() {
        Some(last) if !last.ends_with('\n') => (line_number - 1, last, last.len()),
        _ => (line_number, "", 0),
    }
}

/// Converts a byte offset within `line` into a character column.
///
/// Offsets that do not fall on a char boundary are rounded down to the
/// character containing them; offsets past the end count every character.
pub fn get_char_column(line: &str, byte_offset: usize) -> usize {
    line.char_indices()
        .take_while(|(index, c)| index + c.len_utf8() <= byte_offset)
        .count()
}
