//! Travel direction.

use std::fmt;

/// Error returned when parsing an invalid direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction: {given} (expected n or s)")]
pub struct InvalidDirection {
    given: String,
}

/// Platform direction as BART reports it.
///
/// Every BART platform is signed either North or South and the real-time
/// feed filters on the same single letter. Riders text `n` or `s`; the full
/// words are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
}

impl Direction {
    /// Parse a direction from a string, ignoring case.
    ///
    /// Accepts `n`, `s`, `north` and `south`.
    pub fn parse(s: &str) -> Result<Self, InvalidDirection> {
        match s.to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "s" | "south" => Ok(Direction::South),
            _ => Err(InvalidDirection {
                given: s.to_string(),
            }),
        }
    }

    /// Returns the single-letter form used in feed queries and replies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::South => "s",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_short_forms() {
        assert_eq!(Direction::parse("n").unwrap(), Direction::North);
        assert_eq!(Direction::parse("s").unwrap(), Direction::South);
    }

    #[test]
    fn parse_long_forms() {
        assert_eq!(Direction::parse("north").unwrap(), Direction::North);
        assert_eq!(Direction::parse("south").unwrap(), Direction::South);
        assert_eq!(Direction::parse("North").unwrap(), Direction::North);
        assert_eq!(Direction::parse("SOUTH").unwrap(), Direction::South);
    }

    #[test]
    fn reject_other_tokens() {
        assert!(Direction::parse("e").is_err());
        assert!(Direction::parse("west").is_err());
        assert!(Direction::parse("").is_err());
        assert!(Direction::parse("ns").is_err());
    }

    #[test]
    fn as_str_is_single_letter() {
        assert_eq!(Direction::North.as_str(), "n");
        assert_eq!(Direction::South.as_str(), "s");
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Direction::North), "n");
        assert_eq!(format!("{}", Direction::South), "s");
    }
}
