//! Flattening of raw departure boards into ordered arrival events.

use crate::bart::TrainEtd;
use crate::domain::{Arrival, Line, StationCode};

/// Error returned when a raw estimate cannot be normalized.
///
/// Raised on the first bad record; no partial output is produced. The feed
/// promises whole-minute estimates and a fixed color vocabulary, so any of
/// these indicates an upstream contract change worth surfacing rather than
/// papering over.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedEstimate {
    /// A minutes field that is neither a non-negative integer nor `Leaving`.
    #[error("train {train} estimate {estimate}: minutes {value:?} is neither a whole number nor \"Leaving\"")]
    Minutes {
        train: usize,
        estimate: usize,
        value: String,
    },

    /// A line color outside the known five.
    #[error("train {train} estimate {estimate}: unknown line color {color:?}")]
    Color {
        train: usize,
        estimate: usize,
        color: String,
    },

    /// A destination abbreviation that is not a station code.
    #[error("train {train}: invalid destination code {code:?}")]
    Destination { train: usize, code: String },
}

/// The feed marks a train currently boarding with this token instead of a
/// minute count.
const LEAVING: &str = "Leaving";

/// Flatten a departure board into one event per estimate, sorted by minutes.
///
/// Every estimate on the board becomes an [`Arrival`], whatever its line.
/// Line filtering belongs to the scorer, which needs the full sequence to
/// spot cross-line bunching. The returned events are sorted ascending by
/// minutes; ties keep the board's own order.
pub fn normalize(trains: &[TrainEtd]) -> Result<Vec<Arrival>, MalformedEstimate> {
    let mut events = Vec::new();

    for (train_idx, train) in trains.iter().enumerate() {
        let destination = StationCode::parse(&train.abbreviation).map_err(|_| {
            MalformedEstimate::Destination {
                train: train_idx,
                code: train.abbreviation.clone(),
            }
        })?;

        for (estimate_idx, estimate) in train.estimates.iter().enumerate() {
            let minutes = parse_minutes(&estimate.minutes).ok_or_else(|| {
                MalformedEstimate::Minutes {
                    train: train_idx,
                    estimate: estimate_idx,
                    value: estimate.minutes.clone(),
                }
            })?;

            let line = Line::parse(&estimate.color).map_err(|_| MalformedEstimate::Color {
                train: train_idx,
                estimate: estimate_idx,
                color: estimate.color.clone(),
            })?;

            events.push(Arrival::new(destination, line, minutes));
        }
    }

    // sort_by_key is stable, so equal-minute events keep board order
    events.sort_by_key(|event| event.minutes);

    Ok(events)
}

fn parse_minutes(value: &str) -> Option<u32> {
    if value == LEAVING {
        return Some(0);
    }
    value.parse().ok()
}
