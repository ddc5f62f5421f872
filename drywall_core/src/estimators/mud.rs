//! # Joint Compound (Mud) Estimate
//!
//! Converts area, compound type, and coat count into gallons, then packs
//! the gallons into five-gallon buckets plus one-gallon top-up units.
//!
//! Coverage rates per coat live in [`crate::materials::joint_compound`].
//! Setting compound covers less per gallon than all-purpose because it is
//! mixed from powder and applied heavier.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use drywall_core::estimators::mud::{calculate, MudInput};
//! use drywall_core::materials::MudType;
//!
//! let input = MudInput {
//!     area_sqft: 400.0,
//!     mud_type: MudType::AllPurpose,
//!     coats: 3,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.five_gal_buckets, 12);
//! println!("Buy {} five-gallon buckets", result.five_gal_buckets);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{check_non_negative, EstimateError, EstimateResult};
use crate::materials::{MudType, BUCKET_GALLONS};

/// Input parameters for the mud estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area_sqft": 400.0,
///   "mud_type": "allPurpose",
///   "coats": 3
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MudInput {
    /// Total drywall area in square feet
    pub area_sqft: f64,

    /// Compound type, selects the per-coat coverage rate
    pub mud_type: MudType,

    /// Number of coats; standard taping is three (tape, fill, skim)
    pub coats: u32,
}

impl Default for MudInput {
    fn default() -> Self {
        MudInput {
            area_sqft: 400.0,
            mud_type: MudType::AllPurpose,
            coats: 3,
        }
    }
}

impl MudInput {
    /// Validate input parameters.
    pub fn validate(&self) -> EstimateResult<()> {
        check_non_negative("area_sqft", self.area_sqft)?;
        if self.coats == 0 {
            return Err(EstimateError::invalid_input(
                "coats",
                self.coats.to_string(),
                "at least one coat is required",
            ));
        }
        Ok(())
    }
}

/// Results from the mud estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mud_type": "allPurpose",
///   "gallons_per_coat": 20.0,
///   "total_gallons": 60.0,
///   "five_gal_buckets": 12,
///   "one_gal_buckets": 0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MudResult {
    /// Compound type the coverage was based on
    pub mud_type: MudType,

    /// Gallons consumed by a single coat
    pub gallons_per_coat: f64,

    /// Gallons across all coats
    pub total_gallons: f64,

    /// Whole five-gallon buckets (floor)
    pub five_gal_buckets: u32,

    /// One-gallon top-up units covering the remainder (ceil)
    pub one_gal_buckets: u32,
}

/// Calculate joint compound demand and bucket packing.
///
/// This is a pure function suitable for LLM invocation.
///
/// # Arguments
///
/// * `input` - Area, compound type, and coat count
///
/// # Returns
///
/// * `Ok(MudResult)` - Gallon totals and purchase packing
/// * `Err(EstimateError)` - Negative area or a zero coat count
///
/// # Example
///
/// ```rust
/// use drywall_core::estimators::mud::{calculate, MudInput};
///
/// let result = calculate(&MudInput::default()).unwrap();
/// assert!((result.total_gallons - 60.0).abs() < 1e-9);
/// ```
pub fn calculate(input: &MudInput) -> EstimateResult<MudResult> {
    input.validate()?;

    let gallons_per_coat = input.area_sqft * input.mud_type.coverage_gal_per_sqft();
    let total_gallons = gallons_per_coat * input.coats as f64;

    // Fill with five-gallon buckets, top up the remainder in one-gallon units
    let five_gal_buckets = (total_gallons / BUCKET_GALLONS).floor() as u32;
    let remaining = total_gallons - five_gal_buckets as f64 * BUCKET_GALLONS;
    let one_gal_buckets = remaining.ceil() as u32;

    Ok(MudResult {
        mud_type: input.mud_type,
        gallons_per_coat,
        total_gallons,
        five_gal_buckets,
        one_gal_buckets,
    })
}
