//! Caching layer for BART responses.
//!
//! The feed recomputes estimates on a sub-minute cycle, so a short TTL
//! keeps replies fresh while absorbing repeated `ready` texts. Boards are
//! keyed by station and platform direction, the same unit the API serves.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::bart::{BartClient, BartError, TrainEtd};
use crate::domain::{Direction, StationCode};

/// Cache key for departure boards: (station, platform direction).
type BoardKey = (StationCode, Direction);

/// Cached departure board entry.
type BoardEntry = Arc<Vec<TrainEtd>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30),
            max_capacity: 256,
        }
    }
}

/// Cache for BART departure boards.
pub struct EtdCache {
    /// Boards keyed by (station, direction).
    boards: MokaCache<BoardKey, BoardEntry>,
}

impl EtdCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let boards = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { boards }
    }

    /// Get a cached board entry.
    pub async fn get_board(&self, key: &BoardKey) -> Option<BoardEntry> {
        self.boards.get(key).await
    }

    /// Insert a board entry into the cache.
    pub async fn insert_board(&self, key: BoardKey, entry: BoardEntry) {
        self.boards.insert(key, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.boards.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.boards.invalidate_all();
    }
}

/// BART client with caching.
///
/// Wraps a `BartClient` and caches departure boards per platform.
pub struct CachedBartClient {
    client: BartClient,
    cache: EtdCache,
}

impl CachedBartClient {
    /// Create a new cached client.
    pub fn new(client: BartClient, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: EtdCache::new(cache_config),
        }
    }

    /// Get upcoming departures for one platform, using cache if available.
    pub async fn etd(
        &self,
        station: &StationCode,
        direction: Direction,
    ) -> Result<Arc<Vec<TrainEtd>>, BartError> {
        let key = (*station, direction);

        // Try cache first
        if let Some(cached) = self.cache.get_board(&key).await {
            return Ok(cached);
        }

        // Fetch from the API
        let trains = self.client.etd(station, direction).await?;

        // Cache and return
        let entry = Arc::new(trains);
        self.cache.insert_board(key, entry.clone()).await;

        Ok(entry)
    }

    /// Access the underlying client for operations that bypass cache.
    pub fn client(&self) -> &BartClient {
        &self.client
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_key(station: &str, direction: Direction) -> BoardKey {
        (StationCode::parse(station).unwrap(), direction)
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(30));
        assert_eq!(config.max_capacity, 256);
    }

    #[test]
    fn cache_creation() {
        let config = CacheConfig::default();
        let cache = EtdCache::new(&config);
        assert_eq!(cache.entry_count(), 0);
    }

    #[tokio::test]
    async fn insert_then_get() {
        let cache = EtdCache::new(&CacheConfig::default());
        let key = board_key("wcrk", Direction::North);

        assert!(cache.get_board(&key).await.is_none());

        cache.insert_board(key, Arc::new(vec![])).await;

        let entry = cache.get_board(&key).await.unwrap();
        assert!(entry.is_empty());
    }

    #[tokio::test]
    async fn directions_cache_separately() {
        let cache = EtdCache::new(&CacheConfig::default());

        cache
            .insert_board(board_key("wcrk", Direction::North), Arc::new(vec![]))
            .await;

        assert!(
            cache
                .get_board(&board_key("wcrk", Direction::South))
                .await
                .is_none()
        );
    }
}
