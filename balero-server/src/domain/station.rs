//! Station code types.

use std::fmt;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A valid 4-character BART station abbreviation.
///
/// BART identifies every station by a 4-character lowercase code made of
/// ASCII letters and digits (`wcrk`, `12th`, `sfia`). This type guarantees
/// that any `StationCode` value is valid by construction; input is accepted
/// in any case and stored lowercase.
///
/// # Examples
///
/// ```
/// use balero_server::domain::StationCode;
///
/// let wcrk = StationCode::parse("wcrk").unwrap();
/// assert_eq!(wcrk.as_str(), "wcrk");
///
/// // Uppercase input is normalized
/// assert_eq!(StationCode::parse("WCRK").unwrap(), wcrk);
///
/// // Wrong length is rejected
/// assert!(StationCode::parse("wcr").is_err());
/// assert!(StationCode::parse("wcrkk").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationCode([u8; 4]);

impl StationCode {
    /// Parse a station code from a string.
    ///
    /// The input must be exactly 4 ASCII letters or digits, in any case.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 4 {
            return Err(InvalidStationCode {
                reason: "must be exactly 4 characters",
            });
        }

        let mut code = [0u8; 4];
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_alphanumeric() {
                return Err(InvalidStationCode {
                    reason: "must be ASCII letters or digits",
                });
            }
            code[i] = b.to_ascii_lowercase();
        }

        Ok(StationCode(code))
    }

    /// Returns the station code as a lowercase string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII letters and digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.as_str())
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
