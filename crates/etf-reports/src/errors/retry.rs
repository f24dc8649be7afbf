/// Classification for how the acquisition pipeline reacts to an error.
///
/// # Behavior Summary
///
/// | Class | Try an older period? | Falls through to the cache tier? |
/// |-------|----------------------|----------------------------------|
/// | `NextPeriod` | Yes | Only once every candidate is exhausted |
/// | `Never` | No | Yes, immediately |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// The report for this period is absent or could not be reached.
    ///
    /// Expected while the publisher has not released the month yet.
    /// The live tier moves on to the next older candidate period.
    NextPeriod,

    /// Terminal for this acquisition attempt.
    ///
    /// Structural defects (missing sheet, undecodable workbook) and cache
    /// failures. Retrying an older period won't help; the ladder moves to
    /// the next tier.
    Never,
}
