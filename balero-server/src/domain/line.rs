//! BART line colors.

use std::fmt;

/// Error returned when parsing an unknown line color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown line color: {color}")]
pub struct InvalidLine {
    color: String,
}

/// One of the five BART service lines, named by color.
///
/// The real-time feed labels every estimate with its line color, and riders
/// refer to lines the same way. Parsing is case-insensitive.
///
/// # Examples
///
/// ```
/// use balero_server::domain::Line;
///
/// assert_eq!(Line::parse("yellow").unwrap(), Line::Yellow);
/// assert_eq!(Line::parse("YELLOW").unwrap(), Line::Yellow);
/// assert!(Line::parse("purple").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Yellow,
    Red,
    Blue,
    Orange,
    Green,
}

impl Line {
    /// All lines, in the order riders see them listed.
    pub const ALL: [Line; 5] = [
        Line::Yellow,
        Line::Red,
        Line::Blue,
        Line::Orange,
        Line::Green,
    ];

    /// Parse a line color from a string, ignoring case.
    pub fn parse(s: &str) -> Result<Self, InvalidLine> {
        match s.to_ascii_lowercase().as_str() {
            "yellow" => Ok(Line::Yellow),
            "red" => Ok(Line::Red),
            "blue" => Ok(Line::Blue),
            "orange" => Ok(Line::Orange),
            "green" => Ok(Line::Green),
            _ => Err(InvalidLine {
                color: s.to_string(),
            }),
        }
    }

    /// Returns the lowercase color name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Line::Yellow => "yellow",
            Line::Red => "red",
            Line::Blue => "blue",
            Line::Orange => "orange",
            Line::Green => "green",
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
