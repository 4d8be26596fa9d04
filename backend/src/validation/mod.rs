//! Input validation for request payloads.
//!
//! Simple payload rules go through the `validator` derive; the leave form has
//! its own cross-field rules in [`leave`].

pub mod leave;
pub mod rules;

pub use leave::{
    validate_leave_application, FieldErrors, LeaveApplication, LeaveField, ValidationResult,
};
pub use validator::Validate;
