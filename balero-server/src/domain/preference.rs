//! Rider preferences used when scoring arrivals.

use crate::domain::line::Line;
use crate::domain::station::StationCode;

/// What the rider cares about when reading a departure board.
///
/// The advisor weights arrivals by destination: a train terminating at the
/// rider's home stop is the strongest match, and a train terminating at any
/// stop beyond it still passes through. Everything else is scored on the
/// preferred line and bunching alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiderPreference {
    /// Line the rider actually boards. Arrivals on other lines score zero.
    pub line: Line,
    /// The rider's own stop, if configured.
    pub home_stop: Option<StationCode>,
    /// Stops past the home stop in the direction of travel. A train
    /// terminating at one of these passes through the home stop.
    pub through_stops: Vec<StationCode>,
}

impl RiderPreference {
    /// Create a preference with destination weighting.
    pub fn new(
        line: Line,
        home_stop: Option<StationCode>,
        through_stops: Vec<StationCode>,
    ) -> Self {
        RiderPreference {
            line,
            home_stop,
            through_stops,
        }
    }

    /// Create a preference that scores on line and bunching only.
    pub fn for_line(line: Line) -> Self {
        RiderPreference {
            line,
            home_stop: None,
            through_stops: Vec::new(),
        }
    }
}
