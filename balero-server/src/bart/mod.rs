//! BART real-time API client.
//!
//! This module provides an HTTP client for BART's legacy real-time API,
//! which reports estimated departures per station platform.
//!
//! Key characteristics of the feed:
//! - The JSON is **bridged from XML**, so every scalar arrives as a string
//!   and attributes keep their `@` prefixes
//! - A train currently boarding reports minutes as the literal `Leaving`
//! - Estimates arrive grouped by destination, not in departure order
//! - A freely usable validation key is published in the API docs

mod client;
mod error;
mod mock;
mod types;

pub use client::{BartClient, BartConfig};
pub use error::BartError;
pub use mock::MockBartClient;
pub use types::{EtdResponse, TrainEstimate, TrainEtd};
