//! # Screw Count Estimate
//!
//! Sizes the fastener purchase from area and stud spacing: screw count,
//! then pounds (200 screws/lb for 1-5/8" coarse-thread), then 5-lb boxes.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use drywall_core::estimators::screws::{calculate, ScrewsInput};
//! use drywall_core::materials::StudSpacing;
//!
//! let input = ScrewsInput {
//!     area_sqft: 400.0,
//!     stud_spacing: StudSpacing::TwentyFour,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.total_screws, 300);
//! println!("Buy {} box(es), {} lbs total", result.boxes, result.pounds);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{check_non_negative, EstimateResult};
use crate::materials::{StudSpacing, POUNDS_PER_BOX, SCREWS_PER_POUND};

/// Input parameters for the screw estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area_sqft": 400.0,
///   "stud_spacing": "16"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrewsInput {
    /// Total drywall area in square feet
    pub area_sqft: f64,

    /// On-center stud spacing, sets screws per square foot
    pub stud_spacing: StudSpacing,
}

impl Default for ScrewsInput {
    fn default() -> Self {
        ScrewsInput {
            area_sqft: 400.0,
            stud_spacing: StudSpacing::Sixteen,
        }
    }
}

impl ScrewsInput {
    /// Validate input parameters.
    pub fn validate(&self) -> EstimateResult<()> {
        check_non_negative("area_sqft", self.area_sqft)?;
        Ok(())
    }
}

/// Results from the screw estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "stud_spacing": "16",
///   "screws_per_sheet": 32,
///   "total_screws": 400,
///   "pounds": 2,
///   "boxes": 1
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrewsResult {
    /// Spacing the counts were based on
    pub stud_spacing: StudSpacing,

    /// Rule-of-thumb screws per 4x8 sheet at this spacing
    pub screws_per_sheet: u32,

    /// Total screws, rounded up
    pub total_screws: u32,

    /// Purchase weight in pounds (200 screws/lb, rounded up)
    pub pounds: u32,

    /// Five-pound boxes covering the weight (rounded up)
    pub boxes: u32,
}

/// Calculate screw demand and box packing.
///
/// This is a pure function suitable for LLM invocation.
///
/// # Arguments
///
/// * `input` - Area and stud spacing
///
/// # Returns
///
/// * `Ok(ScrewsResult)` - Counts, pounds, and boxes
/// * `Err(EstimateError)` - Structured error if the area is invalid
///
/// # Example
///
/// ```rust
/// use drywall_core::estimators::screws::{calculate, ScrewsInput};
///
/// let result = calculate(&ScrewsInput::default()).unwrap();
/// assert_eq!(result.boxes, 1);
/// ```
pub fn calculate(input: &ScrewsInput) -> EstimateResult<ScrewsResult> {
    input.validate()?;

    let total_screws = (input.area_sqft * input.stud_spacing.screws_per_sqft()).ceil() as u32;
    let pounds = total_screws.div_ceil(SCREWS_PER_POUND);
    let boxes = pounds.div_ceil(POUNDS_PER_BOX);

    Ok(ScrewsResult {
        stud_spacing: input.stud_spacing,
        screws_per_sheet: input.stud_spacing.screws_per_sheet(),
        total_screws,
        pounds,
        boxes,
    })
}
