#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

pub use parser::parser::parse;

/// Byte offset into the source text.
///
/// Offsets past `u32::MAX` saturate to `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position(pub u32);

/// Half-open byte range `[start, end)` of a token in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span {
            start: Position(u32::try_from(start).unwrap_or(u32::MAX)),
            end: Position(u32::try_from(end).unwrap_or(u32::MAX)),
        }
    }

    pub fn len(&self) -> usize {
        self.end.0.saturating_sub(self.start.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Returns the 1-based line number, the line text and the 0-based column of `position`.
///
/// Positions past the end of `source` resolve to the end of the last line.
pub fn get_line_at_position(source: &str, position: Position) -> (usize, String, usize) {
    let pos = (position.0 as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    // `pos` sits at the very end of the input
    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => (line_number - 1, line.to_string(), line.len()),
        _ => (line_number, String::new(), 0),
    }
}

#[cfg(test)]
mod tests {
    use super::{get_line_at_position, Position, Span};

    #[test]
    fn test_get_line_at_position() {
        let source = "let x = 5;\nlet y = 10;\n  z";

        let (line_number, line, line_pos) = get_line_at_position(source, Position(4));
        assert_eq!(line_number, 1);
        assert_eq!(line, "let x = 5;\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = get_line_at_position(source, Position(15));
        assert_eq!(line_number, 2);
        assert_eq!(line, "let y = 10;\n");
        assert_eq!(line_pos, 4);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let source = "a\n  z";
        let (line_number, line, line_pos) = get_line_at_position(source, Position(5));
        assert_eq!(line_number, 2);
        assert_eq!(line, "  z");
        assert_eq!(line_pos, 3);

        let (line_number, line, line_pos) = get_line_at_position("a\n", Position(2));
        assert_eq!(line_number, 2);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);

        let (line_number, _, line_pos) = get_line_at_position("", Position(0));
        assert_eq!(line_number, 1);
        assert_eq!(line_pos, 0);
    }

    #[test]
    fn test_span_len() {
        let span = Span::new(3, 5);
        assert_eq!(span.len(), 2);
        assert!(!span.is_empty());
        assert!(Span::new(7, 7).is_empty());
    }

    #[test]
    fn test_span_offsets_saturate() {
        let span = Span::new(usize::MAX, usize::MAX);
        assert_eq!(span.start, Position(u32::MAX));
        assert_eq!(span.end, Position(u32::MAX));
        assert!(span.is_empty());

        let last = Span::new(u32::MAX as usize - 1, (u32::MAX as usize).saturating_add(1));
        assert_eq!(last.len(), 1);
    }
}
