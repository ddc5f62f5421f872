//! Joint Tape
//!
//! Flat-joint tape demand factor and the retail roll lengths used for
//! purchase packing.
//!
//! The 0.3 ft/sqft factor is an installer rule of thumb for flat seams on
//! standard sheet layouts; corner runs are estimated separately from room
//! geometry (see `estimators::tape`).

/// Linear feet of tape per square foot of board, flat joints only
pub const TAPE_FT_PER_SQFT: f64 = 0.3;

/// Standard bulk roll length (feet)
pub const ROLL_FT_500: u32 = 500;

/// Mid-size roll length (feet)
pub const ROLL_FT_250: u32 = 250;

/// Small roll length (feet)
pub const ROLL_FT_75: u32 = 75;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_ladder_is_ordered() {
        assert!(ROLL_FT_75 < ROLL_FT_250);
        assert!(ROLL_FT_250 < ROLL_FT_500);
    }
}
