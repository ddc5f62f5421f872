//! Drywall Fasteners
//!
//! Screw density by stud spacing, plus the packing constants for standard
//! 1-5/8" drywall screws.

use serde::{Deserialize, Serialize};

/// Screws per pound for standard 1-5/8" drywall screws
pub const SCREWS_PER_POUND: u32 = 200;

/// Pounds per retail box
pub const POUNDS_PER_BOX: u32 = 5;

/// On-center stud spacing.
///
/// Framing spaced closer needs more fasteners per square foot of board.
/// Serializes with the original form keys (`"16"`, `"24"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StudSpacing {
    /// 16" on-center (typical walls)
    #[default]
    #[serde(rename = "16")]
    Sixteen,
    /// 24" on-center (typical ceilings, some walls)
    #[serde(rename = "24")]
    TwentyFour,
}

impl StudSpacing {
    /// Both spacing options for UI selection
    pub const ALL: [StudSpacing; 2] = [StudSpacing::Sixteen, StudSpacing::TwentyFour];

    /// Screw density in screws per square foot of board
    pub fn screws_per_sqft(&self) -> f64 {
        match self {
            StudSpacing::Sixteen => 1.0,
            StudSpacing::TwentyFour => 0.75,
        }
    }

    /// Approximate screws to hang one 4x8 sheet at this spacing
    pub fn screws_per_sheet(&self) -> u32 {
        match self {
            StudSpacing::Sixteen => 32,
            StudSpacing::TwentyFour => 24,
        }
    }

    /// Get display name (e.g., "16\" OC")
    pub fn display_name(&self) -> &'static str {
        match self {
            StudSpacing::Sixteen => "16\" OC",
            StudSpacing::TwentyFour => "24\" OC",
        }
    }

    /// Parse a host-supplied key ("16" or "24").
    ///
    /// Unrecognized keys fall back to 16" OC, the form default.
    pub fn from_key(key: &str) -> Self {
        match key {
            "24" => StudSpacing::TwentyFour,
            _ => StudSpacing::Sixteen,
        }
    }

    /// Create from a spacing in inches, falling back to 16" OC
    pub fn from_inches(inches: u32) -> Self {
        match inches {
            24 => StudSpacing::TwentyFour,
            _ => StudSpacing::Sixteen,
        }
    }
}

impl std::fmt::Display for StudSpacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screw_density() {
        assert_eq!(StudSpacing::Sixteen.screws_per_sqft(), 1.0);
        assert_eq!(StudSpacing::TwentyFour.screws_per_sqft(), 0.75);
    }

    #[test]
    fn test_screws_per_sheet() {
        assert_eq!(StudSpacing::Sixteen.screws_per_sheet(), 32);
        assert_eq!(StudSpacing::TwentyFour.screws_per_sheet(), 24);
    }

    #[test]
    fn test_from_key_fallback() {
        assert_eq!(StudSpacing::from_key("24"), StudSpacing::TwentyFour);
        assert_eq!(StudSpacing::from_key("16"), StudSpacing::Sixteen);
        assert_eq!(StudSpacing::from_key("19.2"), StudSpacing::Sixteen);
    }

    #[test]
    fn test_from_inches() {
        assert_eq!(StudSpacing::from_inches(24), StudSpacing::TwentyFour);
        assert_eq!(StudSpacing::from_inches(16), StudSpacing::Sixteen);
        assert_eq!(StudSpacing::from_inches(0), StudSpacing::Sixteen);
    }

    #[test]
    fn test_serialization_uses_form_keys() {
        let json = serde_json::to_string(&StudSpacing::TwentyFour).unwrap();
        assert_eq!(json, "\"24\"");

        let parsed: StudSpacing = serde_json::from_str("\"16\"").unwrap();
        assert_eq!(parsed, StudSpacing::Sixteen);
    }
}
