//! Initial read position for shards without a checkpoint.

use crate::ConnectorError;
use serde::{Deserialize, Serialize};

/// Where to start reading a shard when no checkpoint exists yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InitialStreamPosition {
    /// Oldest record still retained by the stream
    TrimHorizon,
    /// Only records written after the spout starts
    Latest,
    /// First record at or after the given instant (epoch millis)
    AtTimestamp { timestamp_millis: u64 },
}

impl InitialStreamPosition {
    /// Check if reading starts from the retention boundary
    pub fn is_trim_horizon(&self) -> bool {
        matches!(self, InitialStreamPosition::TrimHorizon)
    }
}

impl Default for InitialStreamPosition {
    fn default() -> Self {
        InitialStreamPosition::Latest
    }
}

impl std::fmt::Display for InitialStreamPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitialStreamPosition::TrimHorizon => write!(f, "TRIM_HORIZON"),
            InitialStreamPosition::Latest => write!(f, "LATEST"),
            InitialStreamPosition::AtTimestamp { timestamp_millis } => {
                write!(f, "AT_TIMESTAMP({})", timestamp_millis)
            }
        }
    }
}

impl std::str::FromStr for InitialStreamPosition {
    type Err = ConnectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TRIM_HORIZON" => Ok(InitialStreamPosition::TrimHorizon),
            "LATEST" => Ok(InitialStreamPosition::Latest),
            _ => Err(ConnectorError::invalid_argument(format!(
                "Unknown initial stream position: '{}'",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_latest() {
        assert_eq!(InitialStreamPosition::default(), InitialStreamPosition::Latest);
        assert!(!InitialStreamPosition::default().is_trim_horizon());
    }

    #[test]
    fn test_position_from_str() {
        assert_eq!(
            "trim_horizon".parse::<InitialStreamPosition>().unwrap(),
            InitialStreamPosition::TrimHorizon
        );
        assert_eq!(
            "LATEST".parse::<InitialStreamPosition>().unwrap(),
            InitialStreamPosition::Latest
        );
        assert!("AT_SEQUENCE_NUMBER"
            .parse::<InitialStreamPosition>()
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_position_display() {
        assert_eq!(InitialStreamPosition::TrimHorizon.to_string(), "TRIM_HORIZON");
        assert_eq!(InitialStreamPosition::Latest.to_string(), "LATEST");
        assert_eq!(
            InitialStreamPosition::AtTimestamp {
                timestamp_millis: 1_400_000_000_000
            }
            .to_string(),
            "AT_TIMESTAMP(1400000000000)"
        );
    }

    #[test]
    fn test_position_json_shape() {
        let json = serde_json::to_value(InitialStreamPosition::AtTimestamp {
            timestamp_millis: 42,
        })
        .unwrap();
        assert_eq!(json["type"], "AT_TIMESTAMP");
        assert_eq!(json["timestamp_millis"], 42);
    }
}
