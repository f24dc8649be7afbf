//! Report fetching.
//!
//! This module contains:
//! - The `ReportFetcher` trait the live tier drives across candidate periods
//! - `HttpReportFetcher`, the reqwest implementation used in production
//!
//! A fetcher answers one question per call: here are the bytes, or this
//! period's file is not there (absent or unreachable). Deciding which period
//! to try next is the acquisition module's job, not the fetcher's.

mod http;
mod traits;

pub use http::{HttpReportFetcher, DEFAULT_REQUEST_TIMEOUT};
pub use traits::ReportFetcher;
