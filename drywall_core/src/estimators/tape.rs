//! # Joint Tape Estimate
//!
//! Converts area into flat-joint tape footage, optionally adds corner and
//! perimeter tape from room geometry, and packs the footage into the stock
//! roll lengths (500 ft, 250 ft, 75 ft).
//!
//! The corner figure is a heuristic: four vertical corners plus the
//! ceiling-wall perimeter joint, not a precise geometric takeoff.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use drywall_core::estimators::tape::{calculate, TapeInput};
//!
//! let input = TapeInput {
//!     area_sqft: 400.0,
//!     corners: None,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.linear_feet, 120);
//! assert_eq!(result.rolls_250, 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{check_non_negative, EstimateResult};
use crate::materials::{ROLL_FT_250, ROLL_FT_500, ROLL_FT_75, TAPE_FT_PER_SQFT};

/// Room geometry for the corner tape heuristic.
///
/// Four vertical corners at ceiling height plus the ceiling-wall joint
/// around the perimeter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CornerLayout {
    /// Room length in feet
    pub length_ft: f64,

    /// Room width in feet
    pub width_ft: f64,

    /// Ceiling height in feet
    pub ceiling_height_ft: f64,
}

impl Default for CornerLayout {
    fn default() -> Self {
        CornerLayout {
            length_ft: 12.0,
            width_ft: 10.0,
            ceiling_height_ft: 8.0,
        }
    }
}

impl CornerLayout {
    /// Corner and perimeter tape: 4 x height + 2 x (length + width)
    pub fn corner_tape_ft(&self) -> f64 {
        4.0 * self.ceiling_height_ft + 2.0 * (self.length_ft + self.width_ft)
    }
}

/// Input parameters for the tape estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area_sqft": 400.0,
///   "corners": {
///     "length_ft": 12.0,
///     "width_ft": 10.0,
///     "ceiling_height_ft": 8.0
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TapeInput {
    /// Total drywall area in square feet
    pub area_sqft: f64,

    /// Room geometry for corner tape; `None` estimates flat joints only
    pub corners: Option<CornerLayout>,
}

impl Default for TapeInput {
    fn default() -> Self {
        TapeInput {
            area_sqft: 400.0,
            corners: Some(CornerLayout::default()),
        }
    }
}

impl TapeInput {
    /// Validate input parameters.
    pub fn validate(&self) -> EstimateResult<()> {
        check_non_negative("area_sqft", self.area_sqft)?;
        if let Some(corners) = &self.corners {
            check_non_negative("length_ft", corners.length_ft)?;
            check_non_negative("width_ft", corners.width_ft)?;
            check_non_negative("ceiling_height_ft", corners.ceiling_height_ft)?;
        }
        Ok(())
    }
}

/// Results from the tape estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "flat_tape_ft": 120.0,
///   "corner_tape_ft": 76.0,
///   "linear_feet": 196,
///   "rolls_500": 0,
///   "rolls_250": 1,
///   "rolls_75": 0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TapeResult {
    /// Flat-joint footage (area x 0.3 ft/sq ft)
    pub flat_tape_ft: f64,

    /// Corner and perimeter footage; zero when corners were skipped
    pub corner_tape_ft: f64,

    /// Total footage rounded up to whole feet
    pub linear_feet: u32,

    /// 500 ft contractor rolls (floor)
    pub rolls_500: u32,

    /// 250 ft rolls covering a remainder over 75 ft
    pub rolls_250: u32,

    /// One 75 ft roll for a small remainder
    pub rolls_75: u32,
}

/// Calculate tape footage and roll packing.
///
/// This is a pure function suitable for LLM invocation.
///
/// # Arguments
///
/// * `input` - Area, plus room geometry when corners are taped
///
/// # Returns
///
/// * `Ok(TapeResult)` - Footage breakdown and rolls to buy
/// * `Err(EstimateError)` - Structured error if inputs are invalid
///
/// # Example
///
/// ```rust
/// use drywall_core::estimators::tape::{calculate, TapeInput};
///
/// let result = calculate(&TapeInput::default()).unwrap();
/// assert_eq!(result.linear_feet, 196);
/// ```
pub fn calculate(input: &TapeInput) -> EstimateResult<TapeResult> {
    input.validate()?;

    let flat_tape_ft = input.area_sqft * TAPE_FT_PER_SQFT;
    let corner_tape_ft = input
        .corners
        .as_ref()
        .map(CornerLayout::corner_tape_ft)
        .unwrap_or(0.0);
    let linear_feet = (flat_tape_ft + corner_tape_ft).ceil() as u32;

    // Fill with 500 ft rolls, then cover the remainder with the cheapest
    // tier that fits: over 75 ft takes 250 ft rolls, anything smaller takes
    // a single 75 ft roll
    let rolls_500 = linear_feet / ROLL_FT_500;
    let remaining = linear_feet - rolls_500 * ROLL_FT_500;
    let (rolls_250, rolls_75) = if remaining > ROLL_FT_75 {
        (remaining.div_ceil(ROLL_FT_250), 0)
    } else if remaining > 0 {
        (0, 1)
    } else {
        (0, 0)
    };

    Ok(TapeResult {
        flat_tape_ft,
        corner_tape_ft,
        linear_feet,
        rolls_500,
        rolls_250,
        rolls_75,
    })
}
