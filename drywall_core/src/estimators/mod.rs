//! # Drywall Estimators
//!
//! This module contains all estimate types. Each estimator follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Estimate results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, EstimateError>` - Pure estimate function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Estimators
//!
//! - [`sheets`] - Room area and sheet count
//! - [`cost`] - Material and labor cost ranges
//! - [`mud`] - Joint compound gallons and bucket packing
//! - [`screws`] - Screw count, pounds, and boxes
//! - [`tape`] - Tape footage and roll packing

pub mod cost;
pub mod mud;
pub mod screws;
pub mod sheets;
pub mod tape;

use serde::{Deserialize, Serialize};

use crate::errors::EstimateResult;

// Re-export commonly used types
pub use cost::{CostInput, CostResult};
pub use mud::{MudInput, MudResult};
pub use screws::{ScrewsInput, ScrewsResult};
pub use sheets::{SheetsInput, SheetsResult};
pub use tape::{CornerLayout, TapeInput, TapeResult};

/// Enum wrapper for all estimate inputs.
///
/// This allows routing heterogeneous estimate requests through a single
/// entry point while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EstimateRequest {
    /// Room area and sheet count
    Sheets(SheetsInput),
    /// Material and labor cost ranges
    Cost(CostInput),
    /// Joint compound gallons and buckets
    Mud(MudInput),
    /// Screw count and box packing
    Screws(ScrewsInput),
    /// Tape footage and roll packing
    Tape(TapeInput),
}

impl EstimateRequest {
    /// Get the estimate type as a string
    pub fn kind(&self) -> &'static str {
        match self {
            EstimateRequest::Sheets(_) => "Sheets",
            EstimateRequest::Cost(_) => "Cost",
            EstimateRequest::Mud(_) => "Mud",
            EstimateRequest::Screws(_) => "Screws",
            EstimateRequest::Tape(_) => "Tape",
        }
    }

    /// Run the wrapped estimator and wrap its result.
    pub fn run(&self) -> EstimateResult<EstimateOutput> {
        match self {
            EstimateRequest::Sheets(input) => sheets::calculate(input).map(EstimateOutput::Sheets),
            EstimateRequest::Cost(input) => cost::calculate(input).map(EstimateOutput::Cost),
            EstimateRequest::Mud(input) => mud::calculate(input).map(EstimateOutput::Mud),
            EstimateRequest::Screws(input) => screws::calculate(input).map(EstimateOutput::Screws),
            EstimateRequest::Tape(input) => tape::calculate(input).map(EstimateOutput::Tape),
        }
    }
}

/// Enum wrapper for all estimate results, mirroring [`EstimateRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EstimateOutput {
    /// Room area and sheet count
    Sheets(SheetsResult),
    /// Material and labor cost ranges
    Cost(CostResult),
    /// Joint compound gallons and buckets
    Mud(MudResult),
    /// Screw count and box packing
    Screws(ScrewsResult),
    /// Tape footage and roll packing
    Tape(TapeResult),
}

impl EstimateOutput {
    /// Get the estimate type as a string
    pub fn kind(&self) -> &'static str {
        match self {
            EstimateOutput::Sheets(_) => "Sheets",
            EstimateOutput::Cost(_) => "Cost",
            EstimateOutput::Mud(_) => "Mud",
            EstimateOutput::Screws(_) => "Screws",
            EstimateOutput::Tape(_) => "Tape",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_dispatch() {
        let request = EstimateRequest::Screws(ScrewsInput::default());
        assert_eq!(request.kind(), "Screws");

        let output = request.run().unwrap();
        assert_eq!(output.kind(), "Screws");
        match output {
            EstimateOutput::Screws(result) => assert_eq!(result.total_screws, 400),
            other => panic!("wrong output variant: {}", other.kind()),
        }
    }

    #[test]
    fn test_request_errors_pass_through() {
        let request = EstimateRequest::Cost(CostInput {
            area_sqft: 0.0,
            ..CostInput::default()
        });
        let result = request.run();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().error_code(), "DIVISION_BY_ZERO");
    }

    #[test]
    fn test_tagged_serialization() {
        let request = EstimateRequest::Mud(MudInput::default());
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"type\":\"Mud\""));

        let roundtrip: EstimateRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.kind(), "Mud");
    }

    #[test]
    fn test_all_kinds_run() {
        let requests = [
            EstimateRequest::Sheets(SheetsInput::default()),
            EstimateRequest::Cost(CostInput::default()),
            EstimateRequest::Mud(MudInput::default()),
            EstimateRequest::Screws(ScrewsInput::default()),
            EstimateRequest::Tape(TapeInput::default()),
        ];
        for request in requests {
            let output = request.run().unwrap();
            assert_eq!(output.kind(), request.kind());
        }
    }
}
