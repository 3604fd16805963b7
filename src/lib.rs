#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod symbols;

extern crate regex;

/// Byte offset into a source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Span covering `self` up to the end of `other`.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start.clone(),
            end: other.end.clone(),
        }
    }
}

/// Returns the 1-based line number, the line text and the offset of `position` inside that line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // EOF sits one past the last character
    let last_line = content.split_inclusive('\n').last().unwrap_or("");
    Some((line_number.max(2) - 1, last_line.to_string(), last_line.len()))
}

pub fn format_error(error: &Error, file: &str, content: &str) -> String {
    /*
        Error: UnexpectedToken (expected `;`, found "}")
        -> gain.dsp
           |
        20 | x = 2 }
           | ------^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) = get_line_at_position(content, error.get_position().0)
    else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ' || *c == '\t').count();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    const SOURCE: &str = "int x = 1;\n{\n  return y;\n}\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 4).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "int x = 1;\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 22).unwrap();
        assert_eq!(line_number, 3);
        assert_eq!(line, "  return y;\n");
        assert_eq!(line_pos, 9);
    }

    #[test]
    fn test_get_line_past_end() {
        assert!(super::get_line_at_position(SOURCE, 500).is_none());
    }

    #[test]
    fn test_format_error_points_at_column() {
        let error = Error::new(
            ErrorImpl::UnknownSymbol {
                symbol: "y".to_string(),
            },
            Position(22, Rc::new("test.dsp".to_string())),
        );

        let rendered = super::format_error(&error, "test.dsp", SOURCE);
        let lines = rendered.lines().collect::<Vec<_>>();

        assert!(lines[0].starts_with("Error: UnknownSymbol"));
        assert_eq!(lines[1], "-> test.dsp");
        assert_eq!(lines[3], "3 | return y;");
        assert_eq!(lines[4], "  | -------^");
    }
}
