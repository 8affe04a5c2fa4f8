//! Inbound SMS command parsing.
//!
//! The whole command language is single tokens: a bare station code sets
//! the station, a color word sets the line, `n` or `s` sets the direction.
//! `home <code>` is the only two-word form. Parsing is case-insensitive
//! and station tokens are checked against the directory, so only real
//! stations ever reach a contact record.

use crate::domain::{Direction, Line, StationCode};
use crate::network::BartNetwork;

/// A recognized inbound SMS command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `!help`: the command reference.
    Help,
    /// `!stations`: the station directory.
    Stations,
    /// A bare station code: set the rider's boarding station.
    SetStation(StationCode),
    /// `n` or `s`: set the platform direction.
    SetDirection(Direction),
    /// A color word: set the rider's line.
    SetLine(Line),
    /// `home <code>`: set the stop the rider gets off at.
    SetHome(StationCode),
    /// `whoami`: show the current settings.
    WhoAmI,
    /// `deleteme`: remove the rider's record.
    DeleteMe,
    /// `ready`: fetch and score the departure board.
    Ready,
}

impl Command {
    /// Parse an SMS body into a command.
    ///
    /// Returns `None` for anything unrecognized, including station-shaped
    /// tokens that are not in the directory; the dispatcher answers those
    /// with the help text.
    pub fn parse(body: &str, network: &BartNetwork) -> Option<Command> {
        let msg = body.trim().to_ascii_lowercase();

        match msg.as_str() {
            "!help" => return Some(Command::Help),
            "!stations" => return Some(Command::Stations),
            "whoami" => return Some(Command::WhoAmI),
            "deleteme" => return Some(Command::DeleteMe),
            "ready" => return Some(Command::Ready),
            _ => {}
        }

        if let Some(code) = msg.strip_prefix("home ") {
            let station = known_station(code.trim(), network)?;
            return Some(Command::SetHome(station));
        }

        if let Ok(direction) = Direction::parse(&msg) {
            return Some(Command::SetDirection(direction));
        }

        if let Ok(line) = Line::parse(&msg) {
            return Some(Command::SetLine(line));
        }

        if let Some(station) = known_station(&msg, network) {
            return Some(Command::SetStation(station));
        }

        None
    }
}

fn known_station(token: &str, network: &BartNetwork) -> Option<StationCode> {
    let code = StationCode::parse(token).ok()?;
    network.is_station(&code).then_some(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::bart_network;

    fn parse(body: &str) -> Option<Command> {
        Command::parse(body, &bart_network())
    }

    fn code(s: &str) -> StationCode {
        StationCode::parse(s).unwrap()
    }

    #[test]
    fn bang_commands() {
        assert_eq!(parse("!help"), Some(Command::Help));
        assert_eq!(parse("!stations"), Some(Command::Stations));
    }

    #[test]
    fn management_commands() {
        assert_eq!(parse("whoami"), Some(Command::WhoAmI));
        assert_eq!(parse("deleteme"), Some(Command::DeleteMe));
        assert_eq!(parse("ready"), Some(Command::Ready));
    }

    #[test]
    fn station_codes_set_the_station() {
        assert_eq!(parse("wcrk"), Some(Command::SetStation(code("wcrk"))));
        assert_eq!(parse("12th"), Some(Command::SetStation(code("12th"))));
    }

    #[test]
    fn unknown_station_shaped_tokens_are_rejected() {
        // Valid code shape, but no such station
        assert_eq!(parse("zzzz"), None);
    }

    #[test]
    fn direction_letters() {
        assert_eq!(parse("n"), Some(Command::SetDirection(Direction::North)));
        assert_eq!(parse("s"), Some(Command::SetDirection(Direction::South)));
        assert_eq!(
            parse("north"),
            Some(Command::SetDirection(Direction::North))
        );
    }

    #[test]
    fn color_words_set_the_line() {
        assert_eq!(parse("yellow"), Some(Command::SetLine(Line::Yellow)));
        assert_eq!(parse("green"), Some(Command::SetLine(Line::Green)));
    }

    #[test]
    fn blue_is_a_line_not_a_station() {
        // "blue" is a valid 4-character code shape; the color word wins
        assert_eq!(parse("blue"), Some(Command::SetLine(Line::Blue)));
    }

    #[test]
    fn home_command() {
        assert_eq!(parse("home wcrk"), Some(Command::SetHome(code("wcrk"))));
        assert_eq!(parse("home  phil"), Some(Command::SetHome(code("phil"))));
    }

    #[test]
    fn home_with_bad_station_is_rejected() {
        assert_eq!(parse("home zzzz"), None);
        assert_eq!(parse("home"), None);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(parse("WCRK"), Some(Command::SetStation(code("wcrk"))));
        assert_eq!(parse("Yellow"), Some(Command::SetLine(Line::Yellow)));
        assert_eq!(parse("READY"), Some(Command::Ready));
        assert_eq!(parse("!HELP"), Some(Command::Help));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse("  ready \n"), Some(Command::Ready));
        assert_eq!(parse(" wcrk "), Some(Command::SetStation(code("wcrk"))));
    }

    #[test]
    fn gibberish_is_unrecognized() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("hello there"), None);
        assert_eq!(parse("help"), None); // needs the bang
        assert_eq!(parse("purple"), None);
    }
}
