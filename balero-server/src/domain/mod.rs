//! Domain types for the BART SMS assistant.
//!
//! This module contains the core domain model types that represent
//! validated transit data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod arrival;
mod direction;
mod line;
mod preference;
mod station;

pub use arrival::Arrival;
pub use direction::{Direction, InvalidDirection};
pub use line::{InvalidLine, Line};
pub use preference::RiderPreference;
pub use station::{InvalidStationCode, StationCode};
