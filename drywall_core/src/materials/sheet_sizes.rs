//! Standard Drywall Sheet Sizes
//!
//! Provides the stocked panel dimensions with derived coverage areas.
//! All panels are 4 ft wide; the length options trade hauling convenience
//! against seam count.
//!
//! ## Coverage
//!
//! - 4x8 = 32 sq ft (the baseline sheet, also used for cost estimates)
//! - 4x10 = 40 sq ft
//! - 4x12 = 48 sq ft

use serde::{Deserialize, Serialize};

/// Standard drywall sheet size designation.
///
/// Serializes with the retail designation (`"4x8"`, `"4x10"`, `"4x12"`) so
/// host form values map directly onto the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SheetSize {
    /// 4 ft x 8 ft (32 sq ft)
    #[default]
    #[serde(rename = "4x8")]
    FourByEight,
    /// 4 ft x 10 ft (40 sq ft)
    #[serde(rename = "4x10")]
    FourByTen,
    /// 4 ft x 12 ft (48 sq ft)
    #[serde(rename = "4x12")]
    FourByTwelve,
}

impl SheetSize {
    /// All stocked sheet sizes for UI selection (most common first)
    pub const ALL: [SheetSize; 3] = [
        SheetSize::FourByEight,
        SheetSize::FourByTen,
        SheetSize::FourByTwelve,
    ];

    /// Get the panel dimensions (width, height) in feet
    pub fn dimensions_ft(&self) -> (f64, f64) {
        match self {
            SheetSize::FourByEight => (4.0, 8.0),
            SheetSize::FourByTen => (4.0, 10.0),
            SheetSize::FourByTwelve => (4.0, 12.0),
        }
    }

    /// Get panel width in feet (4 ft for all stocked sizes)
    pub fn width_ft(&self) -> f64 {
        self.dimensions_ft().0
    }

    /// Get panel height in feet
    pub fn height_ft(&self) -> f64 {
        self.dimensions_ft().1
    }

    /// Coverage area of one sheet in square feet (width x height)
    pub fn area_sqft(&self) -> f64 {
        let (w, h) = self.dimensions_ft();
        w * h
    }

    /// Get display name (e.g., "4x8")
    pub fn display_name(&self) -> &'static str {
        match self {
            SheetSize::FourByEight => "4x8",
            SheetSize::FourByTen => "4x10",
            SheetSize::FourByTwelve => "4x12",
        }
    }

    /// Parse a host-supplied key ("4x8", "4x10", "4x12").
    ///
    /// Unrecognized keys fall back to the 4x8 sheet, the form default.
    pub fn from_key(key: &str) -> Self {
        match key {
            "4x10" => SheetSize::FourByTen,
            "4x12" => SheetSize::FourByTwelve,
            _ => SheetSize::FourByEight,
        }
    }
}

impl std::fmt::Display for SheetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_areas() {
        assert_eq!(SheetSize::FourByEight.area_sqft(), 32.0);
        assert_eq!(SheetSize::FourByTen.area_sqft(), 40.0);
        assert_eq!(SheetSize::FourByTwelve.area_sqft(), 48.0);
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(SheetSize::FourByTen.dimensions_ft(), (4.0, 10.0));
        assert_eq!(SheetSize::FourByTwelve.width_ft(), 4.0);
        assert_eq!(SheetSize::FourByTwelve.height_ft(), 12.0);
    }

    #[test]
    fn test_from_key_fallback() {
        assert_eq!(SheetSize::from_key("4x10"), SheetSize::FourByTen);
        assert_eq!(SheetSize::from_key("4x12"), SheetSize::FourByTwelve);
        assert_eq!(SheetSize::from_key("4x8"), SheetSize::FourByEight);
        // Unknown keys land on the form default
        assert_eq!(SheetSize::from_key("5x9"), SheetSize::FourByEight);
        assert_eq!(SheetSize::from_key(""), SheetSize::FourByEight);
    }

    #[test]
    fn test_serialization_uses_retail_keys() {
        let json = serde_json::to_string(&SheetSize::FourByTen).unwrap();
        assert_eq!(json, "\"4x10\"");

        let parsed: SheetSize = serde_json::from_str("\"4x12\"").unwrap();
        assert_eq!(parsed, SheetSize::FourByTwelve);
    }

    #[test]
    fn test_display() {
        assert_eq!(SheetSize::FourByEight.to_string(), "4x8");
    }

    #[test]
    fn test_all_contains_all_variants() {
        assert_eq!(SheetSize::ALL.len(), 3);
    }
}
