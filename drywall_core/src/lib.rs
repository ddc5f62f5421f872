//! # drywall_core - Drywall Material and Cost Estimation Engine
//!
//! `drywall_core` is the computational heart of Sheetwise, providing drywall
//! material takeoffs and cost estimates with a clean, LLM-friendly API. All
//! inputs and outputs are JSON-serializable, making it ideal for integration
//! with AI assistants via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Well-Documented**: Every type and function has examples
//!
//! ## Quick Start
//!
//! ```rust
//! use drywall_core::estimators::sheets::{calculate, SheetsInput};
//!
//! // Size a 12x10 room with an 8 ft ceiling
//! let result = calculate(&SheetsInput::default()).unwrap();
//! assert_eq!(result.sheets_needed, 15);
//!
//! // Serialize for storage or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`estimators`] - All estimate types (sheets, cost, mud, screws, tape)
//! - [`materials`] - Sheet sizes, compound types, fasteners, tape stock
//! - [`cost_rates`] - Low/high price ranges and labor tiers
//! - [`session`] - Carry-over state for multi-step hosts
//! - [`errors`] - Structured error types

pub mod cost_rates;
pub mod errors;
pub mod estimators;
pub mod materials;
pub mod session;

// Re-export commonly used types at crate root for convenience
pub use errors::{EstimateError, EstimateResult};
pub use estimators::{EstimateOutput, EstimateRequest};
pub use session::EstimateSession;
