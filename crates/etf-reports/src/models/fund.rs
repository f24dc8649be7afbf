use serde::{Deserialize, Serialize};

/// Total returns by horizon, in percent.
///
/// Absent or unparseable source cells are stored as `0.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    /// One month total return
    #[serde(rename = "1M")]
    pub one_month: f64,

    /// One year total return
    #[serde(rename = "1Y")]
    pub one_year: f64,

    /// Five year total return (annualized)
    #[serde(rename = "5Y")]
    pub five_year: f64,
}

impl Performance {
    pub fn new(one_month: f64, one_year: f64, five_year: f64) -> Self {
        Self {
            one_month,
            one_year,
            five_year,
        }
    }
}

/// One fund row of canonical output.
///
/// Every record handed out by the pipeline has a non-blank `name` and
/// `aum > 0`; the validator is the only producer for live data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FundRecord {
    /// Exchange ticker (may be empty when the source omitted it)
    pub symbol: String,

    /// Fund display name
    pub name: String,

    /// Returns by horizon
    pub performance: Performance,

    /// Management expense ratio, percent per annum
    pub mer: f64,

    /// Funds under management, in millions
    pub aum: f64,
}

impl FundRecord {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        performance: Performance,
        mer: f64,
        aum: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            performance,
            mer,
            aum,
        }
    }

    /// Whether this record satisfies the row-acceptance invariant.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.aum > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_horizon_keys() {
        let record = FundRecord::new(
            "VAS",
            "Vanguard Australian Shares Index ETF",
            Performance::new(2.1, 15.3, 8.7),
            0.1,
            12500.0,
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["symbol"], "VAS");
        assert_eq!(json["performance"]["1M"], 2.1);
        assert_eq!(json["performance"]["1Y"], 15.3);
        assert_eq!(json["performance"]["5Y"], 8.7);
        assert_eq!(json["mer"], 0.1);
        assert_eq!(json["aum"], 12500.0);
    }

    #[test]
    fn test_is_valid() {
        let mut record =
            FundRecord::new("IOZ", "iShares Core", Performance::default(), 0.09, 4200.0);
        assert!(record.is_valid());

        record.aum = 0.0;
        assert!(!record.is_valid());

        record.aum = 1.0;
        record.name = "   ".to_string();
        assert!(!record.is_valid());
    }
}
