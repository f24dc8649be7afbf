//! Calendar arithmetic for candidate publication months.

use chrono::Datelike;

use crate::models::CandidatePeriod;

/// The calendar month `months_back` months before the first day of `today`'s month.
///
/// Pure and infallible for any `months_back`, including across year boundaries.
pub fn period_months_back<D: Datelike>(today: &D, months_back: u32) -> CandidatePeriod {
    // Months since year 0, with January = 0
    let current = i64::from(today.year()) * 12 + i64::from(today.month0());
    let target = current - i64::from(months_back);

    let year = target.div_euclid(12) as i32;
    let month = target.rem_euclid(12) as u32 + 1;

    CandidatePeriod::new(year, month)
}
