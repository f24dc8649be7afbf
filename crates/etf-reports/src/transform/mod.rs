//! Row validation and transformation into [`FundRecord`](crate::models::FundRecord)s.

mod coerce;
mod validator;

pub use coerce::{coerce_number, coerce_or};
pub use validator::{
    FundRowValidator, RejectReason, ValidationReport, ValidatorConfig,
    DEFAULT_NOT_APPLICABLE_MARKER,
};
