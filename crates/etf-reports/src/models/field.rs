use std::fmt::{Display, Formatter};

/// Canonical columns extracted from the fund sheet.
///
/// Every other column in the sheet is dropped during normalization.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum FundField {
    Ticker,
    Name,
    ManagementFee,
    FundsUnderManagement,
    Return1M,
    Return1Y,
    Return5Y,
}

impl FundField {
    pub const ALL: [FundField; 7] = [
        Self::Ticker,
        Self::Name,
        Self::ManagementFee,
        Self::FundsUnderManagement,
        Self::Return1M,
        Self::Return1Y,
        Self::Return5Y,
    ];

    /// Canonical lowercase key, spelled the way the ASX report heads the column.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ticker => "asx code",
            Self::Name => "fund name",
            Self::ManagementFee => "mer (% p.a) ##",
            Self::FundsUnderManagement => "fum ($m)#",
            Self::Return1M => "1 month total return",
            Self::Return1Y => "1 year total return",
            Self::Return5Y => "5 year total return (ann.)",
        }
    }
}

impl Display for FundField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
