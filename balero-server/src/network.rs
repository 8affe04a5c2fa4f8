//! The BART network: station directory and line topology.
//!
//! Knows which 4-letter codes are real stations, which stations each line
//! calls at, and what lies beyond a given stop. Each route is stored in
//! northbound call order; for the two transbay routes that bend east
//! (blue and green), the East Bay terminus counts as the north end, which
//! matches how the feed signs those trains at the San Francisco stations.

use std::collections::{HashMap, HashSet};

use crate::domain::{Direction, Line, StationCode};

/// Station directory plus per-line route maps.
#[derive(Debug, Clone, Default)]
pub struct BartNetwork {
    /// All stations, in directory order.
    stations: Vec<StationCode>,

    /// Membership index over `stations`.
    members: HashSet<StationCode>,

    /// Stations each line calls at, in northbound order.
    runs: HashMap<Line, Vec<StationCode>>,
}

impl BartNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station to the directory. Duplicates are ignored.
    pub fn add_station(&mut self, code: StationCode) {
        if self.members.insert(code) {
            self.stations.push(code);
        }
    }

    /// Add a line's route, in northbound call order.
    ///
    /// Route stops are registered in the directory as well.
    pub fn add_route(&mut self, line: Line, stops: Vec<StationCode>) {
        for stop in &stops {
            self.add_station(*stop);
        }
        self.runs.insert(line, stops);
    }

    /// All stations in directory order.
    pub fn stations(&self) -> &[StationCode] {
        &self.stations
    }

    /// Whether a code names a real station.
    pub fn is_station(&self, code: &StationCode) -> bool {
        self.members.contains(code)
    }

    /// A line's stations in northbound call order. Empty for a line with
    /// no route loaded.
    pub fn run(&self, line: Line) -> &[StationCode] {
        self.runs.get(&line).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a line calls at a station.
    pub fn serves(&self, line: Line, station: &StationCode) -> bool {
        self.run(line).contains(station)
    }

    /// Stations a train on `line` heading `direction` calls at after
    /// leaving `station`, nearest first.
    ///
    /// Returns an empty vector when the line does not call at the station.
    pub fn stops_beyond(
        &self,
        line: Line,
        direction: Direction,
        station: &StationCode,
    ) -> Vec<StationCode> {
        let run = self.run(line);
        let Some(pos) = run.iter().position(|stop| stop == station) else {
            return Vec::new();
        };

        match direction {
            Direction::North => run[pos + 1..].to_vec(),
            Direction::South => run[..pos].iter().rev().copied().collect(),
        }
    }
}

/// Builder for assembling a network.
///
/// Provides a fluent API; invalid station codes are skipped.
#[derive(Debug, Default)]
pub struct BartNetworkBuilder {
    inner: BartNetwork,
}

impl BartNetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory station.
    pub fn station(mut self, code: &str) -> Self {
        if let Ok(code) = StationCode::parse(code) {
            self.inner.add_station(code);
        }
        self
    }

    /// Add a line's route in northbound call order.
    pub fn route(mut self, line: Line, stops: &[&str]) -> Self {
        let stops: Vec<StationCode> = stops
            .iter()
            .filter_map(|stop| StationCode::parse(stop).ok())
            .collect();
        self.inner.add_route(line, stops);
        self
    }

    /// Build the network.
    pub fn build(self) -> BartNetwork {
        self.inner
    }
}

/// The BART system as of the Antioch extension: 48 stations, five lines.
pub fn bart_network() -> BartNetwork {
    let mut builder = BartNetworkBuilder::new();

    // Directory order is the order riders see in the station list reply
    for code in [
        "12th", "16th", "19th", "24th", "ashb", "antc", "balb", "bayf", "cast", "civc", "cols",
        "colm", "conc", "daly", "dbrk", "dubl", "deln", "plza", "embr", "frmt", "ftvl", "glen",
        "hayw", "lafy", "lake", "mcar", "mlbr", "mont", "nbrk", "ncon", "oakl", "orin", "pitt",
        "pctr", "phil", "powl", "rich", "rock", "sbrn", "sfia", "sanl", "shay", "ssan", "ucty",
        "warm", "wcrk", "wdub", "woak",
    ] {
        builder = builder.station(code);
    }

    builder
        // Millbrae/SFO – Antioch
        .route(
            Line::Yellow,
            &[
                "mlbr", "sfia", "sbrn", "ssan", "colm", "daly", "balb", "glen", "24th", "16th",
                "civc", "powl", "mont", "embr", "woak", "12th", "19th", "mcar", "rock", "orin",
                "lafy", "wcrk", "phil", "conc", "ncon", "pitt", "pctr", "antc",
            ],
        )
        // Millbrae – Richmond
        .route(
            Line::Red,
            &[
                "mlbr", "sbrn", "ssan", "colm", "daly", "balb", "glen", "24th", "16th", "civc",
                "powl", "mont", "embr", "woak", "12th", "19th", "mcar", "ashb", "dbrk", "nbrk",
                "plza", "deln", "rich",
            ],
        )
        // Warm Springs – Richmond, via downtown Oakland
        .route(
            Line::Orange,
            &[
                "warm", "frmt", "ucty", "shay", "hayw", "bayf", "sanl", "cols", "ftvl", "lake",
                "12th", "19th", "mcar", "ashb", "dbrk", "nbrk", "plza", "deln", "rich",
            ],
        )
        // Daly City – Dublin/Pleasanton
        .route(
            Line::Blue,
            &[
                "daly", "balb", "glen", "24th", "16th", "civc", "powl", "mont", "embr", "woak",
                "lake", "ftvl", "cols", "sanl", "bayf", "cast", "wdub", "dubl",
            ],
        )
        // Daly City – Warm Springs
        .route(
            Line::Green,
            &[
                "daly", "balb", "glen", "24th", "16th", "civc", "powl", "mont", "embr", "woak",
                "lake", "ftvl", "cols", "sanl", "bayf", "hayw", "shay", "ucty", "frmt", "warm",
            ],
        )
        .build()
}
