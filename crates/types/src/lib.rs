//! # dsg-types
//!
//! Shared record shapes for the discharge summary generator.
//!
//! This crate defines the wire and storage shapes of a discharge summary,
//! the fixed clinical value sets (gender, admission unit, discharge
//! condition), and the input validation that both the HTTP layer and any
//! other front end apply before a record may be created.
//!
//! **No API or storage concerns**: HTTP status mapping belongs in
//! `dsg-api-rest`, persistence in `dsg-core`.

pub mod summary;
pub mod validation;

pub use summary::{
    AdmissionUnit, DischargeCondition, DischargeInput, DischargeSummary, Gender,
    NewDischargeSummary,
};
pub use validation::FieldError;
