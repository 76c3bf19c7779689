//! Stream service regions.

use crate::ConnectorError;
use serde::{Deserialize, Serialize};

/// Region hosting the stream
///
/// Defaults to [`Region::DEFAULT`] (`us-west-2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "us-gov-west-1")]
    GovCloud,
    #[serde(rename = "us-east-1")]
    UsEast1,
    #[serde(rename = "us-west-1")]
    UsWest1,
    #[serde(rename = "us-west-2")]
    UsWest2,
    #[serde(rename = "eu-west-1")]
    EuWest1,
    #[serde(rename = "eu-central-1")]
    EuCentral1,
    #[serde(rename = "ap-southeast-1")]
    ApSoutheast1,
    #[serde(rename = "ap-southeast-2")]
    ApSoutheast2,
    #[serde(rename = "ap-northeast-1")]
    ApNortheast1,
    #[serde(rename = "sa-east-1")]
    SaEast1,
    #[serde(rename = "cn-north-1")]
    CnNorth1,
}

impl Region {
    /// Region used when none is configured
    pub const DEFAULT: Region = Region::UsWest2;

    /// Every known region
    pub const ALL: [Region; 11] = [
        Region::GovCloud,
        Region::UsEast1,
        Region::UsWest1,
        Region::UsWest2,
        Region::EuWest1,
        Region::EuCentral1,
        Region::ApSoutheast1,
        Region::ApSoutheast2,
        Region::ApNortheast1,
        Region::SaEast1,
        Region::CnNorth1,
    ];

    /// Canonical region name, e.g. `us-east-1`
    pub fn name(&self) -> &'static str {
        match self {
            Region::GovCloud => "us-gov-west-1",
            Region::UsEast1 => "us-east-1",
            Region::UsWest1 => "us-west-1",
            Region::UsWest2 => "us-west-2",
            Region::EuWest1 => "eu-west-1",
            Region::EuCentral1 => "eu-central-1",
            Region::ApSoutheast1 => "ap-southeast-1",
            Region::ApSoutheast2 => "ap-southeast-2",
            Region::ApNortheast1 => "ap-northeast-1",
            Region::SaEast1 => "sa-east-1",
            Region::CnNorth1 => "cn-north-1",
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Region::DEFAULT
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Region {
    type Err = ConnectorError;

    /// Accepts `us-east-1` as well as the identifier form `US_EAST_1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        if normalized == "govcloud" {
            return Ok(Region::GovCloud);
        }
        Region::ALL
            .into_iter()
            .find(|region| region.name() == normalized)
            .ok_or_else(|| ConnectorError::invalid_argument(format!("Unknown region: '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_region() {
        assert_eq!(Region::default(), Region::UsWest2);
        assert_eq!(Region::DEFAULT.to_string(), "us-west-2");
    }

    #[test]
    fn test_region_from_str() {
        assert_eq!("us-east-1".parse::<Region>().unwrap(), Region::UsEast1);
        assert_eq!("US_EAST_1".parse::<Region>().unwrap(), Region::UsEast1);
        assert_eq!("EU-Central-1".parse::<Region>().unwrap(), Region::EuCentral1);
        assert_eq!("GovCloud".parse::<Region>().unwrap(), Region::GovCloud);
        assert_eq!("us-gov-west-1".parse::<Region>().unwrap(), Region::GovCloud);

        assert!("".parse::<Region>().unwrap_err().is_invalid_argument());
        assert!("mars-north-1".parse::<Region>().is_err());
    }

    #[test]
    fn test_region_names_round_trip() {
        for region in Region::ALL {
            assert_eq!(region.name().parse::<Region>().unwrap(), region);
        }
    }
}
