//! Arrival scoring engine.
//!
//! This module answers: "my phone says these trains are coming - which one
//! should I actually walk to the platform for?"
//!
//! Raw departure boards are flattened into a time-ordered event sequence,
//! then scored against the rider's line and stops. High scores mark trains
//! bound for the rider's stop arriving in tight bunches; a score of zero
//! means a train the rider cannot use.
//!
//! The engine is pure: no I/O, no logging, no clocks. Callers fetch boards
//! and decide what to do with the scores.

mod normalize;
mod score;
mod weights;

pub use normalize::{MalformedEstimate, normalize};
pub use score::score;
pub use weights::ScoreWeights;
