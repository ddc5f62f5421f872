//! # Cost Estimate
//!
//! Prices a job from its square footage using the low/high rate tables in
//! [`crate::cost_rates`]. Every dollar figure is a [`CostRange`]; low and
//! high bounds are computed independently and never cross-mixed.
//!
//! ## Assumptions
//!
//! - Sheet count for costing always prices the 4x8 sheet (32 sq ft),
//!   regardless of the size chosen in the sheet estimator
//! - Labor applies only to professional jobs, at the selected finish tier
//! - Rates are 2026 national averages; regional pricing varies
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use drywall_core::estimators::cost::{calculate, CostInput};
//! use drywall_core::cost_rates::{FinishLevel, ProjectType};
//!
//! let input = CostInput {
//!     area_sqft: 400.0,
//!     project_type: ProjectType::Diy,
//!     finish_level: FinishLevel::Standard,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.sheet_count, 13);
//! println!(
//!     "Estimated total: ${:.0} - ${:.0}",
//!     result.total_cost.low, result.total_cost.high
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::cost_rates::{
    CostRange, FinishLevel, ProjectType, MUD_COST_PER_SQFT, SCREW_COST_PER_SQFT, SHEET_COST,
    TAPE_COST_PER_SQFT,
};
use crate::errors::{check_non_negative, EstimateError, EstimateResult};
use crate::materials::SheetSize;

/// Input parameters for the cost estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area_sqft": 400.0,
///   "project_type": "professional",
///   "finish_level": "standard"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostInput {
    /// Total drywall area in square feet (net of openings, before waste)
    pub area_sqft: f64,

    /// DIY prices materials only; professional adds finish labor
    pub project_type: ProjectType,

    /// Finish quality tier, sets the labor rate (ignored for DIY)
    pub finish_level: FinishLevel,
}

impl Default for CostInput {
    fn default() -> Self {
        CostInput {
            area_sqft: 400.0,
            project_type: ProjectType::Diy,
            finish_level: FinishLevel::Standard,
        }
    }
}

impl CostInput {
    /// Validate input parameters.
    pub fn validate(&self) -> EstimateResult<()> {
        check_non_negative("area_sqft", self.area_sqft)?;
        Ok(())
    }
}

/// Results from the cost estimate. All dollar figures are low/high ranges.
///
/// ## JSON Example
///
/// ```json
/// {
///   "sheet_count": 13,
///   "sheet_cost": { "low": 130.0, "high": 195.0 },
///   "mud_cost": { "low": 40.0, "high": 60.0 },
///   "tape_cost": { "low": 8.0, "high": 16.0 },
///   "screw_cost": { "low": 8.0, "high": 12.0 },
///   "materials_cost": { "low": 186.0, "high": 283.0 },
///   "labor_cost": { "low": 0.0, "high": 0.0 },
///   "total_cost": { "low": 186.0, "high": 283.0 },
///   "cost_per_sqft": { "low": 0.465, "high": 0.7075 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostResult {
    /// Sheets priced, always at the 4x8 size
    pub sheet_count: u32,

    // === Material Components ===
    /// Sheet cost (count x $10-15 per sheet)
    pub sheet_cost: CostRange,

    /// Joint compound cost (area x $0.10-0.15 per sq ft)
    pub mud_cost: CostRange,

    /// Tape cost (area x $0.02-0.04 per sq ft)
    pub tape_cost: CostRange,

    /// Screw cost (area x $0.02-0.03 per sq ft)
    pub screw_cost: CostRange,

    /// Sum of the four material components
    pub materials_cost: CostRange,

    // === Labor and Totals ===
    /// Finish labor; zero for DIY
    pub labor_cost: CostRange,

    /// Materials plus labor
    pub total_cost: CostRange,

    /// Total divided by area
    pub cost_per_sqft: CostRange,
}

/// Calculate a low/high cost estimate for a drywall job.
///
/// This is a pure function suitable for LLM invocation.
///
/// # Arguments
///
/// * `input` - Area, project type, and finish tier
///
/// # Returns
///
/// * `Ok(CostResult)` - Per-component, materials, labor, and total ranges
/// * `Err(EstimateError)` - Invalid input, or zero area (cost per square
///   foot would divide by zero)
///
/// # Example
///
/// ```rust
/// use drywall_core::estimators::cost::{calculate, CostInput};
///
/// let result = calculate(&CostInput::default()).unwrap();
/// assert!(result.total_cost.low <= result.total_cost.high);
/// ```
pub fn calculate(input: &CostInput) -> EstimateResult<CostResult> {
    input.validate()?;

    let area = input.area_sqft;

    // Costing always prices the 4x8 sheet
    let sheet_count = (area / SheetSize::FourByEight.area_sqft()).ceil() as u32;

    let sheet_cost = SHEET_COST.scale(sheet_count as f64);
    let mud_cost = MUD_COST_PER_SQFT.scale(area);
    let tape_cost = TAPE_COST_PER_SQFT.scale(area);
    let screw_cost = SCREW_COST_PER_SQFT.scale(area);
    let materials_cost = sheet_cost + mud_cost + tape_cost + screw_cost;

    let labor_cost = if input.project_type.has_labor() {
        input.finish_level.labor_rate_per_sqft().scale(area)
    } else {
        CostRange::ZERO
    };

    let total_cost = materials_cost + labor_cost;

    // An explicit error beats returning Infinity or NaN
    if area == 0.0 {
        return Err(EstimateError::division_by_zero("cost per square foot"));
    }
    let cost_per_sqft = CostRange::new(total_cost.low / area, total_cost.high / area);

    Ok(CostResult {
        sheet_count,
        sheet_cost,
        mud_cost,
        tape_cost,
        screw_cost,
        materials_cost,
        labor_cost,
        total_cost,
        cost_per_sqft,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 400 sq ft DIY job at the standard tier
    fn diy_400() -> CostInput {
        CostInput::default()
    }

    #[test]
    fn test_diy_materials_only() {
        let result = calculate(&diy_400()).unwrap();

        // ceil(400 / 32) = 13 sheets
        assert_eq!(result.sheet_count, 13);
        assert!((result.sheet_cost.low - 130.0).abs() < 0.01);
        assert!((result.sheet_cost.high - 195.0).abs() < 0.01);
        assert!((result.mud_cost.low - 40.0).abs() < 0.01);
        assert!((result.mud_cost.high - 60.0).abs() < 0.01);
        assert!((result.tape_cost.low - 8.0).abs() < 0.01);
        assert!((result.tape_cost.high - 16.0).abs() < 0.01);
        assert!((result.screw_cost.low - 8.0).abs() < 0.01);
        assert!((result.screw_cost.high - 12.0).abs() < 0.01);

        // 130 + 40 + 8 + 8 = 186 low; 195 + 60 + 16 + 12 = 283 high
        assert!((result.materials_cost.low - 186.0).abs() < 0.01);
        assert!((result.materials_cost.high - 283.0).abs() < 0.01);

        // DIY carries no labor; total equals materials
        assert_eq!(result.labor_cost, CostRange::ZERO);
        assert!((result.total_cost.low - 186.0).abs() < 0.01);
        assert!((result.total_cost.high - 283.0).abs() < 0.01);
        assert!((result.cost_per_sqft.low - 0.465).abs() < 0.001);
    }

    #[test]
    fn test_professional_adds_labor() {
        let input = CostInput {
            project_type: ProjectType::Professional,
            ..diy_400()
        };
        let result = calculate(&input).unwrap();

        // Standard tier: 400 x $1.50-2.25
        assert!((result.labor_cost.low - 600.0).abs() < 0.01);
        assert!((result.labor_cost.high - 900.0).abs() < 0.01);
        assert!((result.total_cost.low - 786.0).abs() < 0.01);
        assert!((result.total_cost.high - 1183.0).abs() < 0.01);
    }

    #[test]
    fn test_finish_level_ignored_for_diy() {
        let basic = calculate(&CostInput {
            finish_level: FinishLevel::Basic,
            ..diy_400()
        })
        .unwrap();
        let premium = calculate(&CostInput {
            finish_level: FinishLevel::Premium,
            ..diy_400()
        })
        .unwrap();

        assert_eq!(basic.total_cost, premium.total_cost);
    }

    #[test]
    fn test_premium_finish_costs_more_than_basic() {
        let pro = |level: FinishLevel| {
            calculate(&CostInput {
                project_type: ProjectType::Professional,
                finish_level: level,
                ..diy_400()
            })
            .unwrap()
        };

        let basic = pro(FinishLevel::Basic);
        let premium = pro(FinishLevel::Premium);
        assert!(premium.total_cost.low > basic.total_cost.low);
        assert!(premium.total_cost.high > basic.total_cost.high);
    }

    #[test]
    fn test_components_sum_to_totals() {
        let input = CostInput {
            area_sqft: 731.0,
            project_type: ProjectType::Professional,
            finish_level: FinishLevel::Smooth,
        };
        let result = calculate(&input).unwrap();

        let parts = result.sheet_cost + result.mud_cost + result.tape_cost + result.screw_cost;
        assert!((parts.low - result.materials_cost.low).abs() < 1e-9);
        assert!((parts.high - result.materials_cost.high).abs() < 1e-9);

        let total = result.materials_cost + result.labor_cost;
        assert!((total.low - result.total_cost.low).abs() < 1e-9);
        assert!((total.high - result.total_cost.high).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_stay_ordered() {
        for area in [1.0, 32.0, 400.0, 2500.0] {
            for project_type in ProjectType::ALL {
                for finish_level in FinishLevel::ALL {
                    let result = calculate(&CostInput {
                        area_sqft: area,
                        project_type,
                        finish_level,
                    })
                    .unwrap();
                    assert!(result.materials_cost.is_ordered());
                    assert!(result.labor_cost.is_ordered());
                    assert!(result.total_cost.is_ordered());
                    assert!(result.cost_per_sqft.is_ordered());
                }
            }
        }
    }

    #[test]
    fn test_zero_area_is_division_error() {
        let input = CostInput {
            area_sqft: 0.0,
            ..diy_400()
        };
        let result = calculate(&input);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().error_code(), "DIVISION_BY_ZERO");
    }

    #[test]
    fn test_negative_area_rejected() {
        let input = CostInput {
            area_sqft: -400.0,
            ..diy_400()
        };
        let result = calculate(&input);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = CostInput {
            area_sqft: 500.0,
            project_type: ProjectType::Professional,
            finish_level: FinishLevel::Smooth,
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"professional\""));
        assert!(json.contains("\"smooth\""));

        let roundtrip: CostInput = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.project_type, ProjectType::Professional);
        assert_eq!(roundtrip.finish_level, FinishLevel::Smooth);

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: CostResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sheet_count, result.sheet_count);
        assert!((back.total_cost.low - result.total_cost.low).abs() < 1e-9);
    }
}
