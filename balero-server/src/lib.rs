//! SMS assistant for BART riders.
//!
//! Riders text a few one-word commands to set up a station, direction,
//! line and home stop, then text `ready` to get the upcoming arrivals at
//! their station scored for relevance: trains bound for their stop, and
//! bunches of trains arriving close together.

pub mod advisor;
pub mod bart;
pub mod cache;
pub mod command;
pub mod contact;
pub mod dispatch;
pub mod domain;
pub mod network;
pub mod reply;
pub mod web;
