//! Webhook request and response DTOs.

use serde::{Deserialize, Serialize};

/// One inbound SMS, as the gateway's two-way messaging webhook posts it.
///
/// Field names follow the gateway's JSON envelope, which is camelCase
/// except for `DestinationNumber`; that quirk is preserved as-is. Only the
/// sender and body matter to the assistant, so everything else is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundSms {
    /// The rider's phone number.
    #[serde(rename = "originationNumber")]
    pub origination_number: String,

    /// The number the rider texted.
    #[serde(rename = "DestinationNumber", default)]
    pub destination_number: Option<String>,

    /// Keyword the gateway matched, if any.
    #[serde(rename = "messageKeyword", default)]
    pub message_keyword: Option<String>,

    /// The text the rider sent.
    #[serde(rename = "messageBody", default)]
    pub message_body: String,

    /// Gateway identifier for this message.
    #[serde(rename = "inboundMessageId", default)]
    pub inbound_message_id: Option<String>,

    /// Identifier of the outbound message this replies to, if any.
    #[serde(rename = "previousPublishedMessageId", default)]
    pub previous_published_message_id: Option<String>,
}

/// The reply text for the gateway to deliver.
#[derive(Debug, Clone, Serialize)]
pub struct SmsReply {
    /// Message to send back to the rider.
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_envelope() {
        let json = r#"{
            "originationNumber": "+15551230000",
            "DestinationNumber": "+15559990000",
            "messageKeyword": "KEYWORD_ABC",
            "messageBody": "ready",
            "inboundMessageId": "msg-1",
            "previousPublishedMessageId": "msg-0"
        }"#;

        let sms: InboundSms = serde_json::from_str(json).unwrap();

        assert_eq!(sms.origination_number, "+15551230000");
        assert_eq!(sms.destination_number.as_deref(), Some("+15559990000"));
        assert_eq!(sms.message_keyword.as_deref(), Some("KEYWORD_ABC"));
        assert_eq!(sms.message_body, "ready");
        assert_eq!(sms.inbound_message_id.as_deref(), Some("msg-1"));
        assert_eq!(sms.previous_published_message_id.as_deref(), Some("msg-0"));
    }

    #[test]
    fn deserialize_minimal_envelope() {
        let json = r#"{"originationNumber": "+15551230000"}"#;

        let sms: InboundSms = serde_json::from_str(json).unwrap();

        assert_eq!(sms.origination_number, "+15551230000");
        assert_eq!(sms.message_body, "");
        assert!(sms.destination_number.is_none());
    }

    #[test]
    fn missing_origination_number_is_an_error() {
        let json = r#"{"messageBody": "ready"}"#;

        assert!(serde_json::from_str::<InboundSms>(json).is_err());
    }

    #[test]
    fn serialize_reply() {
        let reply = SmsReply {
            reply: "No trains found".to_string(),
        };

        assert_eq!(
            serde_json::to_string(&reply).unwrap(),
            r#"{"reply":"No trains found"}"#
        );
    }
}
