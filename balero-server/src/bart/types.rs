//! BART real-time API response DTOs.
//!
//! These types map directly to the `etd.aspx` JSON responses. The JSON is
//! machine-translated from XML, so attribute fields keep their `@` prefixes,
//! the URI arrives wrapped in a `#cdata-section` object, and every scalar is
//! a string. Fields the assistant never reads are left `Option` so a sparse
//! payload still decodes.

use serde::Deserialize;

/// Top-level envelope around an `etd` response.
#[derive(Debug, Clone, Deserialize)]
pub struct EtdResponse {
    /// XML declaration echoed by the bridge.
    #[serde(rename = "?xml")]
    pub xml: Option<XmlDecl>,

    /// The response body.
    pub root: EtdRoot,
}

/// XML declaration attributes.
#[derive(Debug, Clone, Deserialize)]
pub struct XmlDecl {
    #[serde(rename = "@version")]
    pub version: Option<String>,

    #[serde(rename = "@encoding")]
    pub encoding: Option<String>,
}

/// A value the XML-to-JSON bridge wrapped in a `#cdata-section` object.
#[derive(Debug, Clone, Deserialize)]
pub struct CdataWrapped {
    #[serde(rename = "#cdata-section")]
    pub value: String,
}

/// Body of an `etd` response.
#[derive(Debug, Clone, Deserialize)]
pub struct EtdRoot {
    /// Response identifier.
    #[serde(rename = "@id")]
    pub id: Option<String>,

    /// Request URI, wrapped in a CDATA object by the bridge.
    pub uri: Option<CdataWrapped>,

    /// Date the response was generated (e.g. `08/21/2026`).
    pub date: Option<String>,

    /// Time the response was generated (e.g. `03:15:22 PM PDT`).
    pub time: Option<String>,

    /// Stations in this response. A single-station query returns one entry;
    /// the field is omitted entirely when nothing matched.
    #[serde(default)]
    pub station: Vec<StationEtd>,
}

/// Departures grouped by station.
#[derive(Debug, Clone, Deserialize)]
pub struct StationEtd {
    /// Human-readable station name.
    pub name: String,

    /// Station abbreviation (e.g. `WCRK`).
    pub abbr: String,

    /// Departures grouped by destination. Omitted when no trains are due.
    #[serde(default)]
    pub etd: Vec<TrainEtd>,
}

/// All upcoming departures toward one destination.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainEtd {
    /// Human-readable destination name (e.g. `Antioch`).
    pub destination: String,

    /// Destination station abbreviation (e.g. `ANTC`).
    pub abbreviation: String,

    /// Whether this is limited service.
    pub limited: Option<String>,

    /// Individual departure estimates, soonest first.
    #[serde(rename = "estimate", default)]
    pub estimates: Vec<TrainEstimate>,
}

/// A single departure estimate.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainEstimate {
    /// Minutes until departure, or the literal `Leaving` for a train
    /// currently boarding.
    pub minutes: String,

    /// Platform number.
    pub platform: Option<String>,

    /// Platform direction, `North` or `South`.
    pub direction: Option<String>,

    /// Train length in cars.
    pub length: Option<String>,

    /// Line color (e.g. `YELLOW`).
    pub color: String,

    /// Line color as a hex value.
    pub hexcolor: Option<String>,

    /// Whether bikes are allowed (`1` or `0`).
    pub bikeflag: Option<String>,

    /// Delay in seconds beyond the schedule.
    pub delay: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_etd_response() {
        let json = r##"{
            "?xml": {"@version": "1.0", "@encoding": "utf-8"},
            "root": {
                "@id": "1",
                "uri": {"#cdata-section": "http://api.bart.gov/api/etd.aspx?cmd=etd&orig=wcrk&dir=n&json=y"},
                "date": "08/21/2026",
                "time": "03:15:22 PM PDT",
                "station": [
                    {
                        "name": "Walnut Creek",
                        "abbr": "WCRK",
                        "etd": [
                            {
                                "destination": "Antioch",
                                "abbreviation": "ANTC",
                                "limited": "0",
                                "estimate": [
                                    {
                                        "minutes": "Leaving",
                                        "platform": "1",
                                        "direction": "North",
                                        "length": "6",
                                        "color": "YELLOW",
                                        "hexcolor": "#ffff33",
                                        "bikeflag": "1",
                                        "delay": "0"
                                    },
                                    {
                                        "minutes": "14",
                                        "platform": "1",
                                        "direction": "North",
                                        "length": "10",
                                        "color": "YELLOW",
                                        "hexcolor": "#ffff33",
                                        "bikeflag": "1",
                                        "delay": "126"
                                    }
                                ]
                            }
                        ]
                    }
                ]
            }
        }"##;

        let response: EtdResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.root.date.as_deref(), Some("08/21/2026"));
        assert_eq!(response.root.station.len(), 1);

        let station = &response.root.station[0];
        assert_eq!(station.name, "Walnut Creek");
        assert_eq!(station.abbr, "WCRK");
        assert_eq!(station.etd.len(), 1);

        let train = &station.etd[0];
        assert_eq!(train.destination, "Antioch");
        assert_eq!(train.abbreviation, "ANTC");
        assert_eq!(train.estimates.len(), 2);
        assert_eq!(train.estimates[0].minutes, "Leaving");
        assert_eq!(train.estimates[1].minutes, "14");
        assert_eq!(train.estimates[1].color, "YELLOW");
        assert_eq!(train.estimates[1].delay.as_deref(), Some("126"));
    }

    #[test]
    fn deserialize_empty_board() {
        // The bridge drops the etd array entirely when no trains are due.
        let json = r#"{
            "root": {
                "date": "08/21/2026",
                "time": "02:03:11 AM PDT",
                "station": [
                    {"name": "Walnut Creek", "abbr": "WCRK"}
                ]
            }
        }"#;

        let response: EtdResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.root.station[0].etd.len(), 0);
    }

    #[test]
    fn deserialize_missing_station_list() {
        let json = r#"{"root": {"date": "08/21/2026", "time": "03:15:22 PM PDT"}}"#;

        let response: EtdResponse = serde_json::from_str(json).unwrap();

        assert!(response.root.station.is_empty());
    }

    #[test]
    fn deserialize_train_without_estimates() {
        let json = r#"{"destination": "SF Airport", "abbreviation": "SFIA"}"#;

        let train: TrainEtd = serde_json::from_str(json).unwrap();

        assert_eq!(train.abbreviation, "SFIA");
        assert!(train.estimates.is_empty());
        assert!(train.limited.is_none());
    }

    #[test]
    fn deserialize_sparse_estimate() {
        let json = r#"{"minutes": "3", "color": "RED"}"#;

        let estimate: TrainEstimate = serde_json::from_str(json).unwrap();

        assert_eq!(estimate.minutes, "3");
        assert_eq!(estimate.color, "RED");
        assert!(estimate.platform.is_none());
        assert!(estimate.delay.is_none());
    }
}
