//! The per-rider contact record.

use crate::domain::{Direction, Line, StationCode};

/// Everything the assistant remembers about one rider.
///
/// A record is created the first time a number texts in, with every field
/// except the phone number unset. Riders fill the fields in one command at
/// a time; `ready` needs station, direction and line, while the home stop
/// is optional and only sharpens destination weighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Phone number in the form the SMS gateway reports it.
    pub phone: String,
    /// Station whose departure board the rider watches.
    pub station: Option<StationCode>,
    /// Platform direction at that station.
    pub direction: Option<Direction>,
    /// Line the rider boards.
    pub line: Option<Line>,
    /// Stop the rider gets off at, for destination weighting.
    pub home: Option<StationCode>,
}

impl Contact {
    /// Create a blank record for a phone number.
    pub fn new(phone: impl Into<String>) -> Self {
        Contact {
            phone: phone.into(),
            station: None,
            direction: None,
            line: None,
            home: None,
        }
    }

    /// Whether the record has everything `ready` needs.
    pub fn is_configured(&self) -> bool {
        self.station.is_some() && self.direction.is_some() && self.line.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_blank() {
        let contact = Contact::new("+15551230000");

        assert_eq!(contact.phone, "+15551230000");
        assert!(contact.station.is_none());
        assert!(contact.direction.is_none());
        assert!(contact.line.is_none());
        assert!(contact.home.is_none());
        assert!(!contact.is_configured());
    }

    #[test]
    fn configured_needs_station_direction_and_line() {
        let mut contact = Contact::new("+15551230000");
        contact.station = Some(StationCode::parse("wcrk").unwrap());
        contact.direction = Some(Direction::North);
        assert!(!contact.is_configured());

        contact.line = Some(Line::Yellow);
        assert!(contact.is_configured());

        // The home stop is optional
        assert!(contact.home.is_none());
    }
}
