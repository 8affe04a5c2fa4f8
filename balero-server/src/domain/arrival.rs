//! A single upcoming train arrival.

use crate::domain::line::Line;
use crate::domain::station::StationCode;

/// One train due at the rider's station, flattened from the real-time feed.
///
/// Arrivals start with a score of zero; the advisor raises it as scoring
/// rules match. Within a board, arrivals are ordered by `minutes` ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    /// Terminal station the train is headed to.
    pub destination: StationCode,
    /// Line color the feed reported for this train.
    pub line: Line,
    /// Whole minutes until departure. Zero means the train is leaving now.
    pub minutes: u32,
    /// Relevance score assigned by the advisor.
    pub score: u32,
}

impl Arrival {
    /// Create an unscored arrival.
    pub fn new(destination: StationCode, line: Line, minutes: u32) -> Self {
        Arrival {
            destination,
            line,
            minutes,
            score: 0,
        }
    }
}
