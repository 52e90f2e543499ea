//! Airport code type.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// An airport code as it appears in the schedule.
///
/// Codes are case-sensitive keys: `"prg"` and `"PRG"` are different
/// airports as far as the route graph is concerned. Callers taking codes
/// from users should go through [`AirportCode::normalized`] first.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::AirportCode;
///
/// let raw = AirportCode::new("prg");
/// let normalized = AirportCode::normalized(" prg ");
///
/// assert_eq!(normalized.as_str(), "PRG");
/// assert_ne!(raw, normalized);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AirportCode(String);

impl AirportCode {
    /// Wrap a code exactly as given.
    pub fn new(code: impl Into<String>) -> Self {
        AirportCode(code.into())
    }

    /// Trim and upper-case a user-supplied code.
    pub fn normalized(code: &str) -> Self {
        AirportCode(code.trim().to_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AirportCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AirportCode {
    fn from(code: &str) -> Self {
        AirportCode::new(code)
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Airport({})", self.0)
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
