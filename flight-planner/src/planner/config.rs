//! Search configuration for the planner.

use chrono::Duration;

use super::SearchError;

/// Shortest layover that still leaves time to make the connection.
pub const DEFAULT_MIN_LAYOVER_MINS: i64 = 60;

/// Longest layover still treated as a connection rather than a stay.
pub const DEFAULT_MAX_LAYOVER_MINS: i64 = 6 * 60;

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Minimum time between landing and the next takeoff (minutes, inclusive).
    pub min_layover_mins: i64,

    /// Maximum time between landing and the next takeoff (minutes, inclusive).
    pub max_layover_mins: i64,
}

impl SearchConfig {
    /// Create a new configuration with the given layover window.
    pub fn new(min_layover_mins: i64, max_layover_mins: i64) -> Self {
        Self {
            min_layover_mins,
            max_layover_mins,
        }
    }

    /// Returns the minimum layover as a Duration.
    ///
    /// `None` if the value is too large to represent.
    pub fn min_layover(&self) -> Option<Duration> {
        Duration::try_minutes(self.min_layover_mins)
    }

    /// Returns the maximum layover as a Duration.
    ///
    /// `None` if the value is too large to represent.
    pub fn max_layover(&self) -> Option<Duration> {
        Duration::try_minutes(self.max_layover_mins)
    }

    /// Check whether a layover falls inside the window.
    ///
    /// A window that fails [`validate`](Self::validate) allows nothing.
    pub fn allows_layover(&self, layover: Duration) -> bool {
        match (self.min_layover(), self.max_layover()) {
            (Some(min), Some(max)) => min <= layover && layover <= max,
            _ => false,
        }
    }

    /// Reject negative, inverted or unrepresentable windows.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.min_layover().is_none() || self.max_layover().is_none() {
            return Err(SearchError::InvalidConfig(
                "layover bounds are out of range".to_string(),
            ));
        }
        if self.min_layover_mins < 0 {
            return Err(SearchError::InvalidConfig(
                "minimum layover must not be negative".to_string(),
            ));
        }
        if self.max_layover_mins < self.min_layover_mins {
            return Err(SearchError::InvalidConfig(format!(
                "maximum layover ({} min) is shorter than minimum layover ({} min)",
                self.max_layover_mins, self.min_layover_mins
            )));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_layover_mins: DEFAULT_MIN_LAYOVER_MINS,
            max_layover_mins: DEFAULT_MAX_LAYOVER_MINS,
        }
    }
}
