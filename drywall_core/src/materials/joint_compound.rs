//! Joint Compound (Mud) Types
//!
//! Coverage rates and purchase packing constants for drywall joint compound.
//!
//! ## Coverage
//!
//! Coverage is expressed in gallons per square foot of board per coat.
//! Setting-type compound goes on thinner than all-purpose; topping compound
//! thinner still (final coats only).

use serde::{Deserialize, Serialize};

/// Retail bucket size used for bulk purchase packing (gallons)
pub const BUCKET_GALLONS: f64 = 5.0;

/// Joint compound formulation.
///
/// Serializes with the original form keys (`"allPurpose"`, `"topping"`,
/// `"setting"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum MudType {
    /// All-purpose compound: taping, filling, and finish coats
    #[default]
    AllPurpose,
    /// Topping compound: final coats only, sands easiest
    Topping,
    /// Setting-type compound: chemical cure, fast turnaround
    Setting,
}

impl MudType {
    /// All formulations for UI selection
    pub const ALL: [MudType; 3] = [MudType::AllPurpose, MudType::Topping, MudType::Setting];

    /// Coverage rate in gallons per square foot per coat
    pub fn coverage_gal_per_sqft(&self) -> f64 {
        match self {
            MudType::AllPurpose => 0.05,
            MudType::Topping => 0.03,
            MudType::Setting => 0.04,
        }
    }

    /// Get display name (e.g., "All-Purpose")
    pub fn display_name(&self) -> &'static str {
        match self {
            MudType::AllPurpose => "All-Purpose",
            MudType::Topping => "Topping Compound",
            MudType::Setting => "Setting Compound",
        }
    }

    /// Parse a host-supplied key ("allPurpose", "topping", "setting").
    ///
    /// Unrecognized keys fall back to all-purpose, the documented default.
    pub fn from_key(key: &str) -> Self {
        match key {
            "topping" => MudType::Topping,
            "setting" => MudType::Setting,
            _ => MudType::AllPurpose,
        }
    }
}

impl std::fmt::Display for MudType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_rates() {
        assert_eq!(MudType::AllPurpose.coverage_gal_per_sqft(), 0.05);
        assert_eq!(MudType::Topping.coverage_gal_per_sqft(), 0.03);
        assert_eq!(MudType::Setting.coverage_gal_per_sqft(), 0.04);
    }

    #[test]
    fn test_from_key_fallback() {
        assert_eq!(MudType::from_key("topping"), MudType::Topping);
        assert_eq!(MudType::from_key("setting"), MudType::Setting);
        assert_eq!(MudType::from_key("allPurpose"), MudType::AllPurpose);
        assert_eq!(MudType::from_key("spackle"), MudType::AllPurpose);
    }

    #[test]
    fn test_serialization_uses_form_keys() {
        let json = serde_json::to_string(&MudType::AllPurpose).unwrap();
        assert_eq!(json, "\"allPurpose\"");

        let parsed: MudType = serde_json::from_str("\"setting\"").unwrap();
        assert_eq!(parsed, MudType::Setting);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(MudType::Topping.to_string(), "Topping Compound");
    }
}
