//! Mock BART client for testing without network access.
//!
//! Serves departure boards from JSON files or values inserted by tests,
//! as if they were live API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{Direction, StationCode};

use super::error::BartError;
use super::types::{EtdResponse, TrainEtd};

/// A station platform: the unit the real API serves boards for.
type BoardKey = (StationCode, Direction);

/// Mock BART client that serves canned departure boards.
///
/// This is useful for development and testing without hitting the real
/// API, and for demoing against recorded traffic.
#[derive(Clone)]
pub struct MockBartClient {
    /// Pre-loaded boards, keyed by station and direction.
    boards: Arc<RwLock<HashMap<BoardKey, Vec<TrainEtd>>>>,
}

impl MockBartClient {
    /// Create a mock client with no boards. Tests add boards with
    /// [`MockBartClient::insert`].
    pub fn empty() -> Self {
        Self {
            boards: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock client by loading JSON files from a directory.
    ///
    /// Expects files named `{station}_{direction}.json` (e.g.
    /// `wcrk_n.json`), each holding a full `etd` response envelope.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, BartError> {
        let data_dir = data_dir.as_ref();
        let mut boards = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| BartError::Api {
            status: 0,
            message: format!("Failed to read mock data directory: {}", e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| BartError::Api {
                status: 0,
                message: format!("Failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| BartError::Api {
                    status: 0,
                    message: format!("Invalid filename: {:?}", path),
                })?;

            let key = parse_board_key(stem).ok_or_else(|| BartError::Api {
                status: 0,
                message: format!(
                    "Invalid board filename {:?} (expected station_direction.json)",
                    path
                ),
            })?;

            let json = std::fs::read_to_string(&path).map_err(|e| BartError::Api {
                status: 0,
                message: format!("Failed to read {:?}: {}", path, e),
            })?;

            let response: EtdResponse =
                serde_json::from_str(&json).map_err(|e| BartError::Api {
                    status: 0,
                    message: format!("Failed to parse {:?}: {}", path, e),
                })?;

            let trains = response
                .root
                .station
                .into_iter()
                .next()
                .map(|station| station.etd)
                .unwrap_or_default();

            boards.insert(key, trains);
        }

        if boards.is_empty() {
            return Err(BartError::Api {
                status: 0,
                message: format!("No mock board files found in {:?}", data_dir),
            });
        }

        Ok(Self {
            boards: Arc::new(RwLock::new(boards)),
        })
    }

    /// Add or replace the board for one platform.
    pub async fn insert(
        &self,
        station: StationCode,
        direction: Direction,
        trains: Vec<TrainEtd>,
    ) {
        let mut boards = self.boards.write().await;
        boards.insert((station, direction), trains);
    }

    /// Get upcoming departures for one station platform.
    ///
    /// Mimics the real `BartClient::etd` interface.
    pub async fn etd(
        &self,
        station: &StationCode,
        direction: Direction,
    ) -> Result<Vec<TrainEtd>, BartError> {
        let boards = self.boards.read().await;

        let trains = boards
            .get(&(*station, direction))
            .ok_or_else(|| BartError::Api {
                status: 404,
                message: format!(
                    "No mock board for {}/{}. Available: {:?}",
                    station,
                    direction,
                    boards
                        .keys()
                        .map(|(s, d)| format!("{}/{}", s, d))
                        .collect::<Vec<_>>()
                ),
            })?;

        Ok(trains.clone())
    }

    /// List platforms with a board loaded.
    pub async fn available_boards(&self) -> Vec<BoardKey> {
        let boards = self.boards.read().await;
        boards.keys().copied().collect()
    }
}

fn parse_board_key(stem: &str) -> Option<BoardKey> {
    let (station, direction) = stem.split_once('_')?;
    let station = StationCode::parse(station).ok()?;
    let direction = Direction::parse(direction).ok()?;
    Some((station, direction))
}
