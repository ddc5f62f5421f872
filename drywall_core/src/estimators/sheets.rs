//! # Area and Sheet Count Estimate
//!
//! Converts room geometry into net board area and whole-sheet purchase
//! counts, with a waste buffer for cutting loss.
//!
//! ## Assumptions
//!
//! - Rectangular room; walls are the full perimeter at ceiling height
//! - Standard openings deduct fixed averages (door 21 sq ft, window 15 sq ft)
//! - Openings deduct from wall area only, clamped at zero
//! - Wall and ceiling sheet counts round up independently: crews buy whole
//!   sheets per surface, so the per-surface counts can sum past the combined
//!   total
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use drywall_core::estimators::sheets::{calculate, SheetsInput};
//! use drywall_core::materials::{SheetSize, StudSpacing};
//!
//! let input = SheetsInput {
//!     length_ft: 12.0,
//!     width_ft: 10.0,
//!     ceiling_height_ft: 8.0,
//!     include_walls: true,
//!     include_ceiling: true,
//!     doors: 2,
//!     windows: 1,
//!     other_openings_sqft: 0.0,
//!     sheet_size: SheetSize::FourByEight,
//!     waste_percent: 10,
//!     stud_spacing: StudSpacing::Sixteen,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.sheets_needed, 15);
//! println!("Net wall area: {:.0} sq ft", result.net_wall_area_sqft);
//! println!("Buy {} sheets of {}", result.sheets_needed, result.sheet_size);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{check_non_negative, EstimateResult};
use crate::materials::{MudType, SheetSize, StudSpacing, DOOR_SQFT, TAPE_FT_PER_SQFT, WINDOW_SQFT};

/// Coats assumed by the mud-gallons preview; the mud estimator takes the
/// real coat count
const PREVIEW_COATS: f64 = 3.0;

/// Input parameters for the sheet count estimate.
///
/// All lengths are in feet, areas in square feet.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_ft": 12.0,
///   "width_ft": 10.0,
///   "ceiling_height_ft": 8.0,
///   "include_walls": true,
///   "include_ceiling": true,
///   "doors": 2,
///   "windows": 1,
///   "other_openings_sqft": 0.0,
///   "sheet_size": "4x8",
///   "waste_percent": 10,
///   "stud_spacing": "16"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsInput {
    /// Room length in feet
    pub length_ft: f64,

    /// Room width in feet
    pub width_ft: f64,

    /// Ceiling height in feet
    pub ceiling_height_ft: f64,

    /// Board the walls
    pub include_walls: bool,

    /// Board the ceiling
    pub include_ceiling: bool,

    /// Number of standard doors (21 sq ft deducted each)
    pub doors: u32,

    /// Number of standard windows (15 sq ft deducted each)
    pub windows: u32,

    /// Additional opening area in square feet (archways, pass-throughs)
    pub other_openings_sqft: f64,

    /// Sheet size to purchase
    pub sheet_size: SheetSize,

    /// Cutting-waste buffer as a whole percentage (10 = +10%)
    pub waste_percent: u32,

    /// On-center stud spacing, drives the screw-count preview
    pub stud_spacing: StudSpacing,
}

impl Default for SheetsInput {
    /// The calculator form's initial values: a 12x10 room with an 8 ft
    /// ceiling, two doors, one window, 4x8 sheets, 10% waste.
    fn default() -> Self {
        SheetsInput {
            length_ft: 12.0,
            width_ft: 10.0,
            ceiling_height_ft: 8.0,
            include_walls: true,
            include_ceiling: true,
            doors: 2,
            windows: 1,
            other_openings_sqft: 0.0,
            sheet_size: SheetSize::FourByEight,
            waste_percent: 10,
            stud_spacing: StudSpacing::Sixteen,
        }
    }
}

impl SheetsInput {
    /// Validate input parameters.
    ///
    /// Zero dimensions are allowed (they produce a degenerate zero-area
    /// estimate); negative or non-finite values fail fast.
    pub fn validate(&self) -> EstimateResult<()> {
        check_non_negative("length_ft", self.length_ft)?;
        check_non_negative("width_ft", self.width_ft)?;
        check_non_negative("ceiling_height_ft", self.ceiling_height_ft)?;
        check_non_negative("other_openings_sqft", self.other_openings_sqft)?;
        Ok(())
    }

    /// Gross wall area before opening deductions: perimeter x height,
    /// or 0 when walls are excluded
    pub fn gross_wall_area_sqft(&self) -> f64 {
        if self.include_walls {
            2.0 * (self.length_ft + self.width_ft) * self.ceiling_height_ft
        } else {
            0.0
        }
    }

    /// Ceiling area: length x width, or 0 when the ceiling is excluded
    pub fn ceiling_area_sqft(&self) -> f64 {
        if self.include_ceiling {
            self.length_ft * self.width_ft
        } else {
            0.0
        }
    }

    /// Total opening deduction: doors and windows at their standard
    /// averages plus any explicit extra area
    pub fn opening_area_sqft(&self) -> f64 {
        self.doors as f64 * DOOR_SQFT + self.windows as f64 * WINDOW_SQFT + self.other_openings_sqft
    }

    /// Waste buffer as a multiplier (10% -> 1.10)
    pub fn waste_multiplier(&self) -> f64 {
        1.0 + self.waste_percent as f64 / 100.0
    }
}

/// Results from the sheet count estimate.
///
/// Areas are exact square footages; the host rounds for display. Counts are
/// whole purchase units.
///
/// ## JSON Example
///
/// ```json
/// {
///   "gross_wall_area_sqft": 352.0,
///   "opening_area_sqft": 57.0,
///   "net_wall_area_sqft": 295.0,
///   "ceiling_area_sqft": 120.0,
///   "total_area_sqft": 415.0,
///   "total_with_waste_sqft": 456.5,
///   "sheet_size": "4x8",
///   "sheets_needed": 15,
///   "wall_sheets": 11,
///   "ceiling_sheets": 5,
///   "est_mud_gallons": 63,
///   "est_tape_linear_ft": 125,
///   "est_screws": 415
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsResult {
    // === Area Breakdown ===
    /// Wall area before opening deductions (sq ft)
    pub gross_wall_area_sqft: f64,

    /// Opening area deducted from the walls (sq ft)
    pub opening_area_sqft: f64,

    /// Wall area after deductions, clamped at zero (sq ft)
    pub net_wall_area_sqft: f64,

    /// Ceiling area (sq ft)
    pub ceiling_area_sqft: f64,

    /// Net wall + ceiling area before the waste buffer (sq ft)
    ///
    /// This is the figure downstream estimators take as their area input.
    pub total_area_sqft: f64,

    /// Total area including the waste buffer (sq ft)
    pub total_with_waste_sqft: f64,

    // === Purchase Counts ===
    /// Sheet size the counts are based on
    pub sheet_size: SheetSize,

    /// Whole sheets for the combined area with waste
    pub sheets_needed: u32,

    /// Whole sheets for the walls alone (with waste)
    pub wall_sheets: u32,

    /// Whole sheets for the ceiling alone (with waste)
    ///
    /// `wall_sheets + ceiling_sheets` may exceed `sheets_needed`: each
    /// surface rounds up to whole sheets on its own.
    pub ceiling_sheets: u32,

    // === Companion Material Previews ===
    /// Mud gallons at three coats of all-purpose compound (preview; the mud
    /// estimator takes the real type and coat count)
    pub est_mud_gallons: u32,

    /// Flat-joint tape footage preview
    pub est_tape_linear_ft: u32,

    /// Screw count preview at the selected stud spacing
    pub est_screws: u32,
}

/// Calculate net board area and sheet purchase counts.
///
/// This is a pure function suitable for LLM invocation.
///
/// # Arguments
///
/// * `input` - Room geometry, openings, sheet size, and waste buffer
///
/// # Returns
///
/// * `Ok(SheetsResult)` - Area breakdown, sheet counts, material previews
/// * `Err(EstimateError)` - Structured error if inputs are invalid
///
/// # Example
///
/// ```rust
/// use drywall_core::estimators::sheets::{calculate, SheetsInput};
///
/// let result = calculate(&SheetsInput::default()).unwrap();
/// assert_eq!(result.sheets_needed, 15);
/// ```
pub fn calculate(input: &SheetsInput) -> EstimateResult<SheetsResult> {
    input.validate()?;

    let gross_wall_area_sqft = input.gross_wall_area_sqft();
    let ceiling_area_sqft = input.ceiling_area_sqft();
    let opening_area_sqft = input.opening_area_sqft();

    // Openings come out of the walls only; heavy glazing can't go negative
    let net_wall_area_sqft = (gross_wall_area_sqft - opening_area_sqft).max(0.0);
    let total_area_sqft = net_wall_area_sqft + ceiling_area_sqft;

    let multiplier = input.waste_multiplier();
    let total_with_waste_sqft = total_area_sqft * multiplier;

    // Whole-sheet purchase counts; per-surface counts round up independently
    let sheet_area = input.sheet_size.area_sqft();
    let sheets_needed = (total_with_waste_sqft / sheet_area).ceil() as u32;
    let wall_sheets = (net_wall_area_sqft * multiplier / sheet_area).ceil() as u32;
    let ceiling_sheets = (ceiling_area_sqft * multiplier / sheet_area).ceil() as u32;

    // Companion material previews use the pre-waste area
    let est_mud_gallons =
        (total_area_sqft * MudType::AllPurpose.coverage_gal_per_sqft() * PREVIEW_COATS).ceil() as u32;
    let est_tape_linear_ft = (total_area_sqft * TAPE_FT_PER_SQFT).ceil() as u32;
    let est_screws = (total_area_sqft * input.stud_spacing.screws_per_sqft()).ceil() as u32;

    Ok(SheetsResult {
        gross_wall_area_sqft,
        opening_area_sqft,
        net_wall_area_sqft,
        ceiling_area_sqft,
        total_area_sqft,
        total_with_waste_sqft,
        sheet_size: input.sheet_size,
        sheets_needed,
        wall_sheets,
        ceiling_sheets,
        est_mud_gallons,
        est_tape_linear_ft,
        est_screws,
    })
}
