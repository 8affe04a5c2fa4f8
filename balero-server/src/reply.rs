//! Outbound message composition.
//!
//! Every reply the assistant sends is built here as a plain string; the SMS
//! gateway handles delivery. Builders are pure so tests can assert exact
//! texts; the only clock access is [`pacific_timestamp`], which callers pass
//! into [`alert`] explicitly.

use chrono::Utc;
use chrono_tz::America::Los_Angeles;

use crate::contact::Contact;
use crate::domain::Arrival;
use crate::network::BartNetwork;

/// The command reference.
pub fn help() -> String {
    "Stations: mont, powl, ncon (!stations for list)\n\
     Dir: n, s\n\
     Line: yellow, red, blue, orange, green\n\
     \n\
     commands:\n\
     !help - this command\n\
     !stations - station list\n\
     home <station> - set home stop\n\
     deleteme - remove record\n\
     whoami - show config\n\
     ready - get train info"
        .to_string()
}

/// The station directory, space-separated in directory order.
pub fn stations(network: &BartNetwork) -> String {
    network
        .stations()
        .iter()
        .map(|code| code.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The rider's current settings, with `-` for unset fields.
pub fn settings(contact: &Contact) -> String {
    fn field(value: Option<impl ToString>) -> String {
        value.map_or_else(|| "-".to_string(), |v| v.to_string())
    }

    format!(
        "Settings\n\nStation: {}\nDir: {}\nLine: {}\nHome: {}",
        field(contact.station),
        field(contact.direction),
        field(contact.line),
        field(contact.home),
    )
}

/// Greeting for a number texting in for the first time.
pub fn new_user(phone: &str) -> String {
    format!("New user. Added {phone}\n\n{}", help())
}

/// Confirmation that a record was removed.
pub fn deleted(phone: &str) -> String {
    format!("Deleted {phone}")
}

/// Prompt for a `ready` without a station on the profile.
pub fn no_station() -> String {
    "No station on your profile. Please provide a station abbreviation.".to_string()
}

/// Prompt for a `ready` without a line on the profile.
pub fn no_line() -> String {
    "No line on your profile. Please provide a line (color).".to_string()
}

/// Prompt for a `ready` without a direction on the profile.
pub fn no_direction() -> String {
    "No direction on your profile. Please provide a direction.".to_string()
}

/// Reply when the board holds nothing the rider can use.
pub fn no_trains() -> String {
    "No trains found".to_string()
}

/// Reply when fetching or reading the board failed.
pub fn fetch_failed() -> String {
    "Could not fetch train info right now. Try again in a minute.".to_string()
}

/// The arrival alert: a timestamp header, then one line per scoring train.
///
/// Only positive-scoring arrivals appear, in board order. Callers check for
/// an all-zero board first and send [`no_trains`] instead.
pub fn alert(timestamp: &str, arrivals: &[Arrival]) -> String {
    let mut msg = timestamp.to_string();

    for arrival in arrivals.iter().filter(|a| a.score > 0) {
        msg.push_str(&format!(
            "\n{} pts - {} in {} minutes",
            arrival.score,
            arrival.destination.as_str().to_uppercase(),
            arrival.minutes,
        ));
    }

    msg
}

/// Current wall-clock time where the riders are, e.g. `Aug  2 15:04:05`.
pub fn pacific_timestamp() -> String {
    Utc::now()
        .with_timezone(&Los_Angeles)
        .format("%b %e %H:%M:%S")
        .to_string()
}
