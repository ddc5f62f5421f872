//! # Cost Rate Tables
//!
//! Market-range unit costs for drywall materials and hanging/finishing
//! labor. Every rate is a low/high pair representing a national-average
//! estimate band (2026); totals built from these tables keep the low and
//! high bounds separate, so `low <= high` holds for every derived range.
//!
//! ## Rate Summary
//!
//! | Item            | Unit        | Low   | High  |
//! |-----------------|-------------|-------|-------|
//! | Sheet (4x8)     | per sheet   | $10   | $15   |
//! | Joint compound  | per sq ft   | $0.10 | $0.15 |
//! | Tape            | per sq ft   | $0.02 | $0.04 |
//! | Screws          | per sq ft   | $0.02 | $0.03 |
//! | Labor: basic    | per sq ft   | $1.00 | $1.50 |
//! | Labor: standard | per sq ft   | $1.50 | $2.25 |
//! | Labor: smooth   | per sq ft   | $2.00 | $2.75 |
//! | Labor: premium  | per sq ft   | $2.50 | $3.50 |
//!
//! Labor tiers map onto the Gypsum Association finish levels: basic covers
//! Level 0-2, standard is Level 3, smooth is Level 4, premium is Level 5.

use std::ops::Add;

use serde::{Deserialize, Serialize};

// ============================================================================
// Cost Range
// ============================================================================

/// A low/high dollar range.
///
/// Used both for per-unit rates in the tables below and for computed cost
/// totals. Arithmetic keeps the bounds independent: lows add to lows, highs
/// to highs, and scaling applies to both, so a range built from ordered
/// rates stays ordered.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostRange {
    /// Lower bound in dollars
    pub low: f64,
    /// Upper bound in dollars
    pub high: f64,
}

impl CostRange {
    /// A zero-width range at $0
    pub const ZERO: CostRange = CostRange { low: 0.0, high: 0.0 };

    /// Create a new range
    pub const fn new(low: f64, high: f64) -> Self {
        CostRange { low, high }
    }

    /// Multiply both bounds by a quantity (sheet count, square footage, ...)
    pub fn scale(self, quantity: f64) -> Self {
        CostRange {
            low: self.low * quantity,
            high: self.high * quantity,
        }
    }

    /// Midpoint of the range, for single-number summaries
    pub fn midpoint(self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Whether the bounds are ordered (low <= high)
    pub fn is_ordered(self) -> bool {
        self.low <= self.high
    }
}

impl Add for CostRange {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        CostRange {
            low: self.low + rhs.low,
            high: self.high + rhs.high,
        }
    }
}

// ============================================================================
// Material Rates
// ============================================================================

/// Cost per 4x8 sheet of 1/2" drywall
pub const SHEET_COST: CostRange = CostRange::new(10.0, 15.0);

/// Joint compound cost per square foot of board
pub const MUD_COST_PER_SQFT: CostRange = CostRange::new(0.10, 0.15);

/// Joint tape cost per square foot of board
pub const TAPE_COST_PER_SQFT: CostRange = CostRange::new(0.02, 0.04);

/// Screw cost per square foot of board
pub const SCREW_COST_PER_SQFT: CostRange = CostRange::new(0.02, 0.03);

// ============================================================================
// Project Type
// ============================================================================

/// Who performs the hanging and finishing work.
///
/// Serializes with the original form keys (`"diy"`, `"professional"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Owner-performed: materials only, labor is $0
    #[default]
    Diy,
    /// Contractor-performed: labor billed per square foot by finish tier
    Professional,
}

impl ProjectType {
    /// Both project types for UI selection
    pub const ALL: [ProjectType; 2] = [ProjectType::Diy, ProjectType::Professional];

    /// Whether labor is billed for this project type
    pub fn has_labor(&self) -> bool {
        matches!(self, ProjectType::Professional)
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::Diy => "DIY",
            ProjectType::Professional => "Professional",
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Finish Level
// ============================================================================

/// Labor tier by target finish quality.
///
/// The drywall trade grades finish on a 0-5 scale; labor pricing groups the
/// scale into four tiers. Serializes with the original form keys
/// (`"basic"`, `"standard"`, `"smooth"`, `"premium"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FinishLevel {
    /// Level 0-2: tape and bed only (garages, utility spaces)
    Basic,
    /// Level 3: standard finish for textured walls
    #[default]
    Standard,
    /// Level 4: smooth finish for flat paint
    Smooth,
    /// Level 5: skim-coated finish for gloss paint and critical lighting
    Premium,
}

impl FinishLevel {
    /// All labor tiers for UI selection
    pub const ALL: [FinishLevel; 4] = [
        FinishLevel::Basic,
        FinishLevel::Standard,
        FinishLevel::Smooth,
        FinishLevel::Premium,
    ];

    /// Labor rate per square foot for this tier
    pub fn labor_rate_per_sqft(&self) -> CostRange {
        match self {
            FinishLevel::Basic => CostRange::new(1.00, 1.50),
            FinishLevel::Standard => CostRange::new(1.50, 2.25),
            FinishLevel::Smooth => CostRange::new(2.00, 2.75),
            FinishLevel::Premium => CostRange::new(2.50, 3.50),
        }
    }

    /// The finish levels (0-5 scale) this tier covers
    pub fn level_range(&self) -> &'static str {
        match self {
            FinishLevel::Basic => "Level 0-2",
            FinishLevel::Standard => "Level 3",
            FinishLevel::Smooth => "Level 4",
            FinishLevel::Premium => "Level 5",
        }
    }

    /// Get display name (e.g., "Standard")
    pub fn display_name(&self) -> &'static str {
        match self {
            FinishLevel::Basic => "Basic",
            FinishLevel::Standard => "Standard",
            FinishLevel::Smooth => "Smooth",
            FinishLevel::Premium => "Premium",
        }
    }

    /// Parse a host-supplied key ("basic", "standard", "smooth", "premium").
    ///
    /// Unrecognized keys fall back to the standard tier, matching the
    /// original behavior of defaulting labor pricing to Level 3.
    pub fn from_key(key: &str) -> Self {
        match key {
            "basic" => FinishLevel::Basic,
            "smooth" => FinishLevel::Smooth,
            "premium" => FinishLevel::Premium,
            _ => FinishLevel::Standard,
        }
    }
}

impl std::fmt::Display for FinishLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_arithmetic() {
        let a = CostRange::new(10.0, 15.0);
        let b = CostRange::new(1.0, 2.0);
        let sum = a + b;
        assert_eq!(sum, CostRange::new(11.0, 17.0));

        let scaled = b.scale(400.0);
        assert_eq!(scaled, CostRange::new(400.0, 800.0));
        assert!((scaled.midpoint() - 600.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_rate_tables_are_ordered() {
        assert!(SHEET_COST.is_ordered());
        assert!(MUD_COST_PER_SQFT.is_ordered());
        assert!(TAPE_COST_PER_SQFT.is_ordered());
        assert!(SCREW_COST_PER_SQFT.is_ordered());
        for level in FinishLevel::ALL {
            assert!(level.labor_rate_per_sqft().is_ordered());
        }
    }

    #[test]
    fn test_labor_tiers_increase_with_finish_quality() {
        let mut prev = CostRange::ZERO;
        for level in FinishLevel::ALL {
            let rate = level.labor_rate_per_sqft();
            assert!(rate.low >= prev.low);
            assert!(rate.high >= prev.high);
            prev = rate;
        }
    }

    #[test]
    fn test_finish_level_fallback() {
        assert_eq!(FinishLevel::from_key("premium"), FinishLevel::Premium);
        assert_eq!(FinishLevel::from_key("basic"), FinishLevel::Basic);
        // Unknown tiers price as standard
        assert_eq!(FinishLevel::from_key("museum"), FinishLevel::Standard);
        assert_eq!(FinishLevel::from_key(""), FinishLevel::Standard);
    }

    #[test]
    fn test_project_type_labor_flag() {
        assert!(!ProjectType::Diy.has_labor());
        assert!(ProjectType::Professional.has_labor());
    }

    #[test]
    fn test_serialization_uses_form_keys() {
        assert_eq!(
            serde_json::to_string(&ProjectType::Professional).unwrap(),
            "\"professional\""
        );
        assert_eq!(
            serde_json::to_string(&FinishLevel::Smooth).unwrap(),
            "\"smooth\""
        );

        let parsed: FinishLevel = serde_json::from_str("\"premium\"").unwrap();
        assert_eq!(parsed, FinishLevel::Premium);
    }

    #[test]
    fn test_cost_range_serialization() {
        let range = CostRange::new(186.0, 283.0);
        let json = serde_json::to_string(&range).unwrap();
        let roundtrip: CostRange = serde_json::from_str(&json).unwrap();
        assert_eq!(range, roundtrip);
    }
}
