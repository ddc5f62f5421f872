//! # Estimate Session
//!
//! A small carry-over record a host keeps between estimator calls, so the
//! area computed by the sheet estimator can feed the cost, mud, screw, and
//! tape estimators without retyping.
//!
//! The core itself stays stateless: estimators never read or write a
//! session. Hosts resolve an area through [`EstimateSession::resolve_area`]
//! and pass the plain number in.
//!
//! ## Example
//!
//! ```rust
//! use drywall_core::estimators::sheets::{calculate, SheetsInput};
//! use drywall_core::session::EstimateSession;
//!
//! let mut session = EstimateSession::new();
//! let sheets = calculate(&SheetsInput::default()).unwrap();
//! session.record_sheets(&sheets);
//!
//! // Later prompts fall back to the carried area
//! assert_eq!(session.resolve_area(None), 415.0);
//! // An explicit positive entry always wins
//! assert_eq!(session.resolve_area(Some(500.0)), 500.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::estimators::SheetsResult;

/// Fallback area when nothing has been entered or carried over
pub const DEFAULT_AREA_SQFT: f64 = 400.0;

/// Carry-over state between estimator calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimateSession {
    /// Net area from the last sheet estimate (pre-waste sq ft)
    pub last_total_area_sqft: Option<f64>,

    /// Sheet count from the last sheet estimate
    pub last_sheet_count: Option<u32>,
}

impl EstimateSession {
    /// Create an empty session.
    pub fn new() -> Self {
        EstimateSession::default()
    }

    /// Carry a sheet estimate's area and count forward.
    ///
    /// Downstream estimators take the pre-waste total; the waste buffer is
    /// a purchasing concern, not extra surface to mud or tape.
    pub fn record_sheets(&mut self, result: &SheetsResult) {
        self.last_total_area_sqft = Some(result.total_area_sqft);
        self.last_sheet_count = Some(result.sheets_needed);
    }

    /// Resolve the area a downstream estimator should use.
    ///
    /// An explicit positive entry wins; otherwise the carried area from the
    /// last sheet estimate; otherwise [`DEFAULT_AREA_SQFT`]. Zero and
    /// negative values count as "not entered" at both stages, mirroring a
    /// blank field: a degenerate zero-area sheet estimate carries no usable
    /// area, so later prompts fall back to the default.
    pub fn resolve_area(&self, explicit: Option<f64>) -> f64 {
        if let Some(area) = explicit {
            if area > 0.0 {
                return area;
            }
        }
        self.last_total_area_sqft
            .filter(|area| *area > 0.0)
            .unwrap_or(DEFAULT_AREA_SQFT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::sheets::{calculate, SheetsInput};

    #[test]
    fn test_empty_session_uses_default() {
        let session = EstimateSession::new();
        assert_eq!(session.resolve_area(None), DEFAULT_AREA_SQFT);
    }

    #[test]
    fn test_explicit_area_wins() {
        let mut session = EstimateSession::new();
        session.last_total_area_sqft = Some(415.0);
        assert_eq!(session.resolve_area(Some(500.0)), 500.0);
    }

    #[test]
    fn test_non_positive_entry_falls_back() {
        let mut session = EstimateSession::new();
        assert_eq!(session.resolve_area(Some(0.0)), DEFAULT_AREA_SQFT);
        assert_eq!(session.resolve_area(Some(-20.0)), DEFAULT_AREA_SQFT);

        session.last_total_area_sqft = Some(415.0);
        assert_eq!(session.resolve_area(Some(0.0)), 415.0);
    }

    #[test]
    fn test_record_sheets_carries_pre_waste_area() {
        let mut session = EstimateSession::new();
        let result = calculate(&SheetsInput::default()).unwrap();
        session.record_sheets(&result);

        // 415 carried, not the 456.5 with-waste figure
        assert_eq!(session.resolve_area(None), 415.0);
        assert_eq!(session.last_sheet_count, Some(15));
    }

    #[test]
    fn test_carried_zero_area_falls_back_to_default() {
        let zero_room = SheetsInput {
            length_ft: 0.0,
            width_ft: 0.0,
            ceiling_height_ft: 0.0,
            doors: 0,
            windows: 0,
            ..SheetsInput::default()
        };
        let mut session = EstimateSession::new();
        session.record_sheets(&calculate(&zero_room).unwrap());
        assert_eq!(session.last_total_area_sqft, Some(0.0));

        // A degenerate estimate carries no usable area; downstream
        // estimators get the default instead of a zero-area error
        assert_eq!(session.resolve_area(None), DEFAULT_AREA_SQFT);
        assert_eq!(session.resolve_area(Some(0.0)), DEFAULT_AREA_SQFT);
        assert_eq!(session.resolve_area(Some(500.0)), 500.0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut session = EstimateSession::new();
        session.last_total_area_sqft = Some(415.0);
        session.last_sheet_count = Some(15);

        let json = serde_json::to_string(&session).unwrap();
        let roundtrip: EstimateSession = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.last_total_area_sqft, Some(415.0));
        assert_eq!(roundtrip.last_sheet_count, Some(15));
    }
}
