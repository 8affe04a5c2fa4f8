//! Web layer for the SMS assistant.
//!
//! One webhook endpoint receives inbound messages from the SMS gateway and
//! returns the reply text for it to deliver. Outbound transport stays on
//! the gateway's side of the fence.

mod dto;
mod routes;
mod state;

pub use dto::{InboundSms, SmsReply};
pub use routes::create_router;
pub use state::AppState;
