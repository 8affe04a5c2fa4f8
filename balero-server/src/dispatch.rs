//! Inbound message dispatch.
//!
//! [`Dispatcher::handle`] is the whole conversation: it takes one inbound
//! SMS and returns the text to send back. Contact management, command
//! parsing, board fetching and scoring all meet here; the advisor itself
//! stays pure, so this is also where every failure is logged and turned
//! into a rider-readable reply.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::advisor::{self, ScoreWeights};
use crate::bart::{BartClient, BartError, MockBartClient, TrainEtd};
use crate::cache::CachedBartClient;
use crate::command::Command;
use crate::contact::{Contact, ContactStore};
use crate::domain::{Direction, RiderPreference, StationCode};
use crate::network::BartNetwork;
use crate::reply;

/// Source of departure boards.
///
/// Implemented by the live client, the cached client, and the mock, so the
/// dispatcher never cares where a board came from.
#[async_trait]
pub trait EtdProvider: Send + Sync {
    /// Get upcoming departures for one station platform.
    async fn etd(
        &self,
        station: &StationCode,
        direction: Direction,
    ) -> Result<Vec<TrainEtd>, BartError>;
}

#[async_trait]
impl EtdProvider for BartClient {
    async fn etd(
        &self,
        station: &StationCode,
        direction: Direction,
    ) -> Result<Vec<TrainEtd>, BartError> {
        BartClient::etd(self, station, direction).await
    }
}

#[async_trait]
impl EtdProvider for CachedBartClient {
    async fn etd(
        &self,
        station: &StationCode,
        direction: Direction,
    ) -> Result<Vec<TrainEtd>, BartError> {
        let trains = CachedBartClient::etd(self, station, direction).await?;
        Ok(trains.as_ref().clone())
    }
}

#[async_trait]
impl EtdProvider for MockBartClient {
    async fn etd(
        &self,
        station: &StationCode,
        direction: Direction,
    ) -> Result<Vec<TrainEtd>, BartError> {
        MockBartClient::etd(self, station, direction).await
    }
}

/// Handles one inbound SMS end to end.
pub struct Dispatcher {
    store: Arc<dyn ContactStore>,
    provider: Arc<dyn EtdProvider>,
    network: BartNetwork,
    weights: ScoreWeights,
}

impl Dispatcher {
    /// Create a dispatcher over a contact store and a board provider.
    pub fn new(
        store: Arc<dyn ContactStore>,
        provider: Arc<dyn EtdProvider>,
        network: BartNetwork,
        weights: ScoreWeights,
    ) -> Self {
        Self {
            store,
            provider,
            network,
            weights,
        }
    }

    /// Handle one inbound message and produce the reply text.
    ///
    /// Never fails: storage and feed errors are logged and answered with a
    /// generic failure notice rather than silence.
    pub async fn handle(&self, from: &str, body: &str) -> String {
        let contact = match self.store.fetch(from).await {
            Ok(contact) => contact,
            Err(e) => {
                error!(phone = from, error = %e, "contact lookup failed");
                return reply::fetch_failed();
            }
        };

        // First contact from this number: register it and explain the
        // commands. The message that triggered registration is not
        // interpreted as a command.
        let Some(contact) = contact else {
            info!(phone = from, "new contact");
            let contact = Contact::new(from);
            if let Err(e) = self.store.save(&contact).await {
                error!(phone = from, error = %e, "saving new contact failed");
                return reply::fetch_failed();
            }
            return reply::new_user(from);
        };

        match Command::parse(body, &self.network) {
            Some(Command::Help) | None => reply::help(),
            Some(Command::Stations) => reply::stations(&self.network),
            Some(Command::WhoAmI) => reply::settings(&contact),
            Some(Command::SetStation(station)) => {
                let mut contact = contact;
                contact.station = Some(station);
                self.save_and_confirm(contact).await
            }
            Some(Command::SetDirection(direction)) => {
                let mut contact = contact;
                contact.direction = Some(direction);
                self.save_and_confirm(contact).await
            }
            Some(Command::SetLine(line)) => {
                let mut contact = contact;
                contact.line = Some(line);
                self.save_and_confirm(contact).await
            }
            Some(Command::SetHome(home)) => {
                let mut contact = contact;
                contact.home = Some(home);
                self.save_and_confirm(contact).await
            }
            Some(Command::DeleteMe) => match self.store.delete(&contact.phone).await {
                Ok(()) => {
                    info!(phone = %contact.phone, "contact deleted");
                    reply::deleted(&contact.phone)
                }
                Err(e) => {
                    error!(phone = %contact.phone, error = %e, "delete failed");
                    reply::fetch_failed()
                }
            },
            Some(Command::Ready) => self.ready(&contact).await,
        }
    }

    async fn save_and_confirm(&self, contact: Contact) -> String {
        match self.store.save(&contact).await {
            Ok(()) => reply::settings(&contact),
            Err(e) => {
                error!(phone = %contact.phone, error = %e, "save failed");
                reply::fetch_failed()
            }
        }
    }

    /// The `ready` flow: fetch the rider's board, score it, compose the
    /// alert. Prompts for the first missing profile field instead of
    /// querying the feed with a hole in the request.
    async fn ready(&self, contact: &Contact) -> String {
        let Some(station) = contact.station else {
            return reply::no_station();
        };
        let Some(line) = contact.line else {
            return reply::no_line();
        };
        let Some(direction) = contact.direction else {
            return reply::no_direction();
        };

        let trains = match self.provider.etd(&station, direction).await {
            Ok(trains) => trains,
            Err(e) => {
                warn!(%station, %direction, error = %e, "board fetch failed");
                return reply::fetch_failed();
            }
        };

        let events = match advisor::normalize(&trains) {
            Ok(events) => events,
            Err(e) => {
                // The feed broke its own contract; worth a loud log
                error!(%station, %direction, error = %e, "malformed departure board");
                return reply::fetch_failed();
            }
        };

        let through_stops = contact
            .home
            .map(|home| self.network.stops_beyond(line, direction, &home))
            .unwrap_or_default();
        let pref = RiderPreference::new(line, contact.home, through_stops);

        let scored = advisor::score(events, &pref, &self.weights);
        debug!(
            %station,
            %direction,
            arrivals = scored.len(),
            "scored departure board"
        );

        if scored.iter().any(|arrival| arrival.score > 0) {
            reply::alert(&reply::pacific_timestamp(), &scored)
        } else {
            reply::no_trains()
        }
    }
}
