//! Guard Module
//!
//! Validation guardrail chạy TRƯỚC rule engine.
//! Rule engine không bao giờ tự kiểm tra range.
//!
//! ## Structure
//! - `types`: Violation, ValidationReport
//! - `validate`: Range/presence checks

pub mod types;
pub mod validate;

pub use types::{ValidationReport, Violation};
pub use validate::{validate, ValidationGuard};
