//! Fund row validation.
//!
//! Gates every normalized row before it becomes a [`FundRecord`]:
//! - Name gate: the fund name must be present, textual and non-blank
//! - AUM gate: funds under management must not be the "not applicable"
//!   marker, must coerce to a number, and must be strictly positive
//!
//! Only these two gates filter rows. Returns and the management fee default
//! to `0.0` when absent or unparseable.

use std::fmt::{Display, Formatter};

use log::debug;

use crate::models::{CellValue, FundField, FundRecord, Performance};
use crate::parser::NormalizedRow;

use super::coerce::{coerce_number, coerce_or};

/// Default textual marker for funds that do not report AUM.
pub const DEFAULT_NOT_APPLICABLE_MARKER: &str = "n/a";

/// Why a row was dropped.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RejectReason {
    /// Name cell absent, not text, or blank.
    MissingName,
    /// AUM cell is the "not applicable" marker.
    NotApplicableAum,
    /// AUM cell is absent or does not coerce to a number.
    UnparseableAum,
    /// AUM coerced to zero or a negative number.
    NonPositiveAum,
}

impl Display for RejectReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::MissingName => "missing name",
            Self::NotApplicableAum => "AUM not applicable",
            Self::UnparseableAum => "AUM not numeric",
            Self::NonPositiveAum => "AUM not positive",
        };
        f.write_str(label)
    }
}

/// Validator configuration.
#[derive(Clone, Debug)]
pub struct ValidatorConfig {
    /// AUM text that marks a fund as not reporting (compared trimmed, lowercase).
    pub not_applicable_marker: String,
    /// Value used for absent or unparseable returns and fees.
    pub missing_value: f64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            not_applicable_marker: DEFAULT_NOT_APPLICABLE_MARKER.to_string(),
            missing_value: 0.0,
        }
    }
}

/// Counts from one batch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    pub accepted: usize,
    pub rejected: Vec<(usize, RejectReason)>,
}

impl ValidationReport {
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    pub fn count(&self, reason: RejectReason) -> usize {
        self.rejected.iter().filter(|(_, r)| *r == reason).count()
    }

    /// Summary for logging.
    pub fn summary(&self) -> String {
        let reasons = [
            RejectReason::MissingName,
            RejectReason::NotApplicableAum,
            RejectReason::UnparseableAum,
            RejectReason::NonPositiveAum,
        ];
        let dropped: Vec<String> = reasons
            .iter()
            .filter_map(|r| match self.count(*r) {
                0 => None,
                n => Some(format!("{} {}", n, r)),
            })
            .collect();

        if dropped.is_empty() {
            format!("{} accepted", self.accepted)
        } else {
            format!("{} accepted, dropped: {}", self.accepted, dropped.join(", "))
        }
    }
}

/// Fund row validator and transformer.
#[derive(Clone, Debug, Default)]
pub struct FundRowValidator {
    config: ValidatorConfig,
}

impl FundRowValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate one row and build its record.
    pub fn validate(&self, row: &NormalizedRow) -> Result<FundRecord, RejectReason> {
        let name = self.check_name(row)?;
        let aum = self.check_aum(row)?;

        let symbol = row
            .get(FundField::Ticker)
            .filter(|c| !c.is_empty())
            .map(|c| c.to_string())
            .unwrap_or_default();

        let missing = self.config.missing_value;
        let performance = Performance::new(
            coerce_or(row.get(FundField::Return1M), missing),
            coerce_or(row.get(FundField::Return1Y), missing),
            coerce_or(row.get(FundField::Return5Y), missing),
        );
        let mer = coerce_or(row.get(FundField::ManagementFee), missing);

        Ok(FundRecord::new(symbol, name, performance, mer, aum))
    }

    /// Validate all rows in order.
    ///
    /// Returns the accepted records, in input order, and a report of rejections.
    pub fn validate_batch(&self, rows: &[NormalizedRow]) -> (Vec<FundRecord>, ValidationReport) {
        let mut records = Vec::with_capacity(rows.len());
        let mut report = ValidationReport::default();

        for (idx, row) in rows.iter().enumerate() {
            match self.validate(row) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    debug!("Dropping row {}: {}", idx, reason);
                    report.rejected.push((idx, reason));
                }
            }
        }

        report.accepted = records.len();
        (records, report)
    }

    fn check_name<'a>(&self, row: &'a NormalizedRow) -> Result<&'a str, RejectReason> {
        match row.get(FundField::Name).and_then(CellValue::as_text) {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => Err(RejectReason::MissingName),
        }
    }

    fn check_aum(&self, row: &NormalizedRow) -> Result<f64, RejectReason> {
        let cell = row
            .get(FundField::FundsUnderManagement)
            .ok_or(RejectReason::UnparseableAum)?;

        if let CellValue::Text(text) = cell {
            let marker = self.config.not_applicable_marker.trim().to_lowercase();
            if text.trim().to_lowercase() == marker {
                return Err(RejectReason::NotApplicableAum);
            }
        }

        match coerce_number(cell) {
            Some(aum) if aum > 0.0 => Ok(aum),
            Some(_) => Err(RejectReason::NonPositiveAum),
            None => Err(RejectReason::UnparseableAum),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn text(s: &str) -> CellValue {
        CellValue::text(s)
    }

    fn row(cells: Vec<(FundField, CellValue)>) -> NormalizedRow {
        cells.into_iter().collect()
    }

    fn vas_row() -> NormalizedRow {
        row(vec![
            (FundField::Ticker, text("VAS")),
            (FundField::Name, text("Vanguard Australian Shares Index ETF")),
            (FundField::ManagementFee, text("0.10")),
            (FundField::FundsUnderManagement, text("12500")),
            (FundField::Return1M, text("2.1")),
            (FundField::Return1Y, text("15.3")),
            (FundField::Return5Y, text("8.7")),
        ])
    }

    #[test]
    fn test_vas_row_transformed() {
        let record = FundRowValidator::new().validate(&vas_row()).unwrap();

        assert_eq!(
            record,
            FundRecord::new(
                "VAS",
                "Vanguard Australian Shares Index ETF",
                Performance::new(2.1, 15.3, 8.7),
                0.1,
                12500.0,
            )
        );
    }

    #[test]
    fn test_not_applicable_aum_rejected_in_any_case() {
        let validator = FundRowValidator::new();
        for marker in ["n/a", "N/A", "  n/A  ", "\tN/a\n"] {
            let mut r = vas_row();
            r.insert(FundField::FundsUnderManagement, text(marker));
            assert_eq!(validator.validate(&r), Err(RejectReason::NotApplicableAum));
        }
    }

    #[test]
    fn test_zero_and_negative_aum_rejected() {
        let validator = FundRowValidator::new();

        let mut r = vas_row();
        r.insert(FundField::FundsUnderManagement, text("0"));
        assert_eq!(validator.validate(&r), Err(RejectReason::NonPositiveAum));

        r.insert(FundField::FundsUnderManagement, CellValue::Number(-5.0));
        assert_eq!(validator.validate(&r), Err(RejectReason::NonPositiveAum));
    }

    #[test]
    fn test_missing_or_garbage_aum_rejected() {
        let validator = FundRowValidator::new();

        let mut r = vas_row();
        r.insert(FundField::FundsUnderManagement, text("pending"));
        assert_eq!(validator.validate(&r), Err(RejectReason::UnparseableAum));

        r.insert(FundField::FundsUnderManagement, CellValue::Empty);
        assert_eq!(validator.validate(&r), Err(RejectReason::UnparseableAum));

        let r = row(vec![(FundField::Name, text("No AUM column"))]);
        assert_eq!(validator.validate(&r), Err(RejectReason::UnparseableAum));
    }

    #[test]
    fn test_name_gate() {
        let validator = FundRowValidator::new();

        let mut r = vas_row();
        r.insert(FundField::Name, text("   "));
        assert_eq!(validator.validate(&r), Err(RejectReason::MissingName));

        r.insert(FundField::Name, CellValue::Number(42.0));
        assert_eq!(validator.validate(&r), Err(RejectReason::MissingName));

        let r = row(vec![(FundField::FundsUnderManagement, CellValue::Number(10.0))]);
        assert_eq!(validator.validate(&r), Err(RejectReason::MissingName));
    }

    #[test]
    fn test_name_gate_runs_before_aum_gate() {
        let r = row(vec![(FundField::FundsUnderManagement, text("n/a"))]);
        assert_eq!(
            FundRowValidator::new().validate(&r),
            Err(RejectReason::MissingName)
        );
    }

    #[test]
    fn test_missing_returns_default_to_zero() {
        let r = row(vec![
            (FundField::Name, text("Minimal Fund")),
            (FundField::FundsUnderManagement, CellValue::Number(1.5)),
            (FundField::Return1Y, text("--")),
        ]);

        let record = FundRowValidator::new().validate(&r).unwrap();

        assert_eq!(record.symbol, "");
        assert_eq!(record.performance, Performance::default());
        assert_eq!(record.mer, 0.0);
        assert_eq!(record.aum, 1.5);
    }

    #[test]
    fn test_numeric_ticker_rendered_without_fraction() {
        let mut r = vas_row();
        r.insert(FundField::Ticker, CellValue::Number(123.0));

        let record = FundRowValidator::new().validate(&r).unwrap();
        assert_eq!(record.symbol, "123");
    }

    #[test]
    fn test_batch_keeps_order_and_reports() {
        let validator = FundRowValidator::new();
        let mut na = vas_row();
        na.insert(FundField::FundsUnderManagement, text("n/a"));
        let mut zero = vas_row();
        zero.insert(FundField::Return1M, text("0"));
        zero.insert(FundField::Return1Y, text("0"));
        zero.insert(FundField::Return5Y, text("0"));
        zero.insert(FundField::Ticker, text("ZRO"));

        let (records, report) = validator.validate_batch(&[vas_row(), na, zero]);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].symbol, "VAS");
        assert_eq!(records[1].symbol, "ZRO");
        assert_eq!(records[1].performance, Performance::default());
        assert_eq!(report.accepted, 2);
        assert_eq!(report.rejected, vec![(1, RejectReason::NotApplicableAum)]);
        assert_eq!(report.summary(), "2 accepted, dropped: 1 AUM not applicable");
    }

    #[test]
    fn test_custom_marker() {
        let validator = FundRowValidator::with_config(ValidatorConfig {
            not_applicable_marker: "na".to_string(),
            ..Default::default()
        });

        let mut r = vas_row();
        r.insert(FundField::FundsUnderManagement, text(" NA "));
        assert_eq!(validator.validate(&r), Err(RejectReason::NotApplicableAum));

        r.insert(FundField::FundsUnderManagement, text("n/a"));
        assert_eq!(validator.validate(&r), Err(RejectReason::UnparseableAum));
    }

    fn arb_cell() -> impl Strategy<Value = CellValue> {
        prop_oneof![
            Just(CellValue::Empty),
            any::<bool>().prop_map(CellValue::Bool),
            (-1.0e6f64..1.0e6).prop_map(CellValue::Number),
            "[ a-zA-Z0-9/.,%-]{0,12}".prop_map(CellValue::Text),
            Just(CellValue::text("n/a")),
            Just(CellValue::text(" N/A ")),
            Just(CellValue::text("0")),
        ]
    }

    fn arb_row() -> impl Strategy<Value = NormalizedRow> {
        proptest::collection::vec((0usize..7, arb_cell()), 0..10).prop_map(|cells| {
            cells
                .into_iter()
                .map(|(idx, cell)| (FundField::ALL[idx], cell))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_accepted_records_have_name_and_positive_aum(
            rows in proptest::collection::vec(arb_row(), 0..20)
        ) {
            let (records, report) = FundRowValidator::new().validate_batch(&rows);

            prop_assert_eq!(records.len() + report.rejected_count(), rows.len());
            for record in &records {
                prop_assert!(!record.name.trim().is_empty());
                prop_assert!(record.aum > 0.0);
                prop_assert!(record.mer.is_finite());
                prop_assert!(record.performance.one_month.is_finite());
                prop_assert!(record.performance.one_year.is_finite());
                prop_assert!(record.performance.five_year.is_finite());
            }
        }
    }
}
