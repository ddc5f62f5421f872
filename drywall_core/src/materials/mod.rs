//! # Materials Catalog
//!
//! The stocked-product constants every estimator draws on: sheet sizes,
//! joint compound coverage, fastener density, and tape roll lengths.
//!
//! All catalog enums are closed: the supported products are fixed, lookups
//! are exhaustive `match` arms, and host-supplied string keys go through
//! `from_key` constructors that fall back to the documented default product
//! rather than failing.
//!
//! ## Example
//!
//! ```rust
//! use drywall_core::materials::{MudType, SheetSize, StudSpacing};
//!
//! let sheet = SheetSize::FourByTwelve;
//! assert_eq!(sheet.area_sqft(), 48.0);
//!
//! // Host form values map straight onto the catalog
//! assert_eq!(MudType::from_key("topping"), MudType::Topping);
//! assert_eq!(StudSpacing::from_key("24").screws_per_sqft(), 0.75);
//! ```

pub mod fasteners;
pub mod joint_compound;
pub mod sheet_sizes;
pub mod tape;

// Re-export catalog types
pub use fasteners::{StudSpacing, POUNDS_PER_BOX, SCREWS_PER_POUND};
pub use joint_compound::{MudType, BUCKET_GALLONS};
pub use sheet_sizes::SheetSize;
pub use tape::{ROLL_FT_250, ROLL_FT_500, ROLL_FT_75, TAPE_FT_PER_SQFT};

/// Average square footage deducted per standard door opening
pub const DOOR_SQFT: f64 = 21.0;

/// Average square footage deducted per standard window opening
pub const WINDOW_SQFT: f64 = 15.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_constants() {
        // One door plus one window is a 36 sq ft deduction
        assert_eq!(DOOR_SQFT + WINDOW_SQFT, 36.0);
    }
}
