//! Built-in dataset served when no report and no snapshot are available.

use crate::models::{FundRecord, Performance};

/// The built-in record set. Never empty; every record is valid.
pub fn builtin_records() -> Vec<FundRecord> {
    vec![
        FundRecord::new(
            "VAS",
            "Vanguard Australian Shares Index ETF",
            Performance::new(2.1, 15.3, 8.9),
            0.10,
            12500.0,
        ),
        FundRecord::new(
            "IOZ",
            "iShares Core S&P/ASX 200 ETF",
            Performance::new(2.0, 14.9, 8.6),
            0.05,
            5600.0,
        ),
        FundRecord::new(
            "VGS",
            "Vanguard MSCI Index International Shares ETF",
            Performance::new(1.4, 22.7, 12.8),
            0.18,
            9800.0,
        ),
        FundRecord::new(
            "A200",
            "Betashares Australia 200 ETF",
            Performance::new(2.1, 15.1, 8.8),
            0.04,
            5200.0,
        ),
        FundRecord::new(
            "NDQ",
            "Betashares Nasdaq 100 ETF",
            Performance::new(0.9, 28.4, 19.6),
            0.48,
            4700.0,
        ),
    ]
}
