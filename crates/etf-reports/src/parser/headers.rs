//! Header normalization onto canonical fund fields.

use std::collections::HashMap;

use crate::models::{CellValue, FundField};

use super::sheet::RawRow;

/// Accepted header spellings per field, in normalized form.
const DEFAULT_ALIASES: &[(&str, FundField)] = &[
    // ASX Investment Products report
    ("asx code", FundField::Ticker),
    ("fund name", FundField::Name),
    ("mer (% p.a) ##", FundField::ManagementFee),
    ("fum ($m)#", FundField::FundsUnderManagement),
    ("1 month total return", FundField::Return1M),
    ("1 year total return", FundField::Return1Y),
    ("5 year total return (ann.)", FundField::Return5Y),
    // Plain spellings
    ("etf name", FundField::Name),
    ("management fee", FundField::ManagementFee),
    ("funds under management", FundField::FundsUnderManagement),
    ("1 month return", FundField::Return1M),
    ("1 year return", FundField::Return1Y),
    ("5 year return", FundField::Return5Y),
];

/// Collapse line breaks and whitespace runs to single spaces, trim, lowercase.
pub fn normalize_header(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// A row keyed by canonical field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedRow {
    cells: HashMap<FundField, CellValue>,
}

impl NormalizedRow {
    pub fn get(&self, field: FundField) -> Option<&CellValue> {
        self.cells.get(&field)
    }

    pub fn insert(&mut self, field: FundField, value: CellValue) {
        self.cells.insert(field, value);
    }

    pub fn fields(&self) -> impl Iterator<Item = FundField> + '_ {
        self.cells.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(FundField, CellValue)> for NormalizedRow {
    fn from_iter<I: IntoIterator<Item = (FundField, CellValue)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Whitelist of normalized header spellings.
///
/// Headers are matched exactly after [`normalize_header`]; anything else
/// (extra columns, footnote-only cells) is dropped.
#[derive(Clone, Debug)]
pub struct HeaderWhitelist {
    aliases: HashMap<String, FundField>,
}

impl Default for HeaderWhitelist {
    fn default() -> Self {
        Self::from_aliases(
            DEFAULT_ALIASES
                .iter()
                .map(|(alias, field)| (alias.to_string(), *field)),
        )
    }
}

impl HeaderWhitelist {
    /// Build a whitelist; aliases are normalized on the way in.
    pub fn from_aliases<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = (S, FundField)>,
        S: AsRef<str>,
    {
        Self {
            aliases: aliases
                .into_iter()
                .map(|(alias, field)| (normalize_header(alias.as_ref()), field))
                .collect(),
        }
    }

    /// Only the canonical key of each field.
    pub fn canonical() -> Self {
        Self::from_aliases(FundField::ALL.iter().map(|f| (f.as_str(), *f)))
    }

    /// Accept one more spelling for `field`.
    pub fn with_alias(mut self, alias: &str, field: FundField) -> Self {
        self.aliases.insert(normalize_header(alias), field);
        self
    }

    pub fn lookup(&self, raw_header: &str) -> Option<FundField> {
        self.aliases.get(&normalize_header(raw_header)).copied()
    }

    /// Keep whitelisted columns, keyed by field. The first column wins when
    /// two headers map to the same field.
    pub fn normalize_row(&self, row: &RawRow) -> NormalizedRow {
        let mut normalized = NormalizedRow::default();
        for (header, value) in row.iter() {
            if let Some(field) = self.lookup(header) {
                normalized
                    .cells
                    .entry(field)
                    .or_insert_with(|| value.clone());
            }
        }
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FundRecord, Performance};
    use crate::transform::FundRowValidator;
    use proptest::prelude::*;

    fn text(s: &str) -> CellValue {
        CellValue::text(s)
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  FUM\r\n($m)#  "), "fum ($m)#");
        assert_eq!(normalize_header("MER\n\n(% p.a)   ##"), "mer (% p.a) ##");
        assert_eq!(
            normalize_header("5 Year Total Return\t(ann.)"),
            "5 year total return (ann.)"
        );
        assert_eq!(normalize_header(""), "");
    }

    #[test]
    fn test_asx_headers_map_to_fields() {
        let whitelist = HeaderWhitelist::default();
        assert_eq!(whitelist.lookup("ASX Code"), Some(FundField::Ticker));
        assert_eq!(whitelist.lookup("Fund Name"), Some(FundField::Name));
        assert_eq!(whitelist.lookup("MER\n(% p.a) ##"), Some(FundField::ManagementFee));
        assert_eq!(whitelist.lookup("FUM ($m)#"), Some(FundField::FundsUnderManagement));
        assert_eq!(
            whitelist.lookup("5 Year Total Return (ann.)"),
            Some(FundField::Return5Y)
        );
    }

    #[test]
    fn test_unknown_headers_dropped() {
        let whitelist = HeaderWhitelist::default();
        let row: RawRow = vec![
            ("ASX Code", CellValue::text("VAS")),
            ("Issuer", CellValue::text("Vanguard")),
            ("Notes ^", CellValue::text("see footnote")),
        ]
        .into_iter()
        .collect();

        let normalized = whitelist.normalize_row(&row);

        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized.get(FundField::Ticker), Some(&CellValue::text("VAS")));
    }

    #[test]
    fn test_plain_spellings_map_to_same_fields() {
        let whitelist = HeaderWhitelist::default();
        assert_eq!(whitelist.lookup("ETF Name"), Some(FundField::Name));
        assert_eq!(whitelist.lookup("Management Fee"), Some(FundField::ManagementFee));
        assert_eq!(
            whitelist.lookup("Funds Under Management"),
            Some(FundField::FundsUnderManagement)
        );
        assert_eq!(whitelist.lookup("1 Year Return"), Some(FundField::Return1Y));
    }

    #[test]
    fn test_canonical_whitelist_rejects_aliases() {
        let whitelist = HeaderWhitelist::canonical();
        assert_eq!(whitelist.lookup("ASX CODE"), Some(FundField::Ticker));
        assert_eq!(whitelist.lookup("ETF Name"), None);

        let whitelist = whitelist.with_alias("Ticker", FundField::Ticker);
        assert_eq!(whitelist.lookup(" ticker "), Some(FundField::Ticker));
    }

    #[test]
    fn test_first_matching_column_wins() {
        let whitelist = HeaderWhitelist::default();
        let row: RawRow = vec![
            ("Fund Name", CellValue::text("First")),
            ("ETF Name", CellValue::text("Second")),
        ]
        .into_iter()
        .collect();

        let normalized = whitelist.normalize_row(&row);
        assert_eq!(normalized.get(FundField::Name), Some(&CellValue::text("First")));
    }

    #[test]
    fn test_plain_spelled_row_becomes_record() {
        let row: RawRow = vec![
            ("ASX Code", text("VAS")),
            ("ETF Name", text("Vanguard Australian Shares Index ETF")),
            ("1 Month Return", text("2.1")),
            ("1 Year Return", text("15.3")),
            ("5 Year Return", text("8.7")),
            ("Management Fee", text("0.10")),
            ("Funds Under Management", text("12500")),
        ]
        .into_iter()
        .collect();

        let normalized = HeaderWhitelist::default().normalize_row(&row);
        assert_eq!(normalized.len(), 7);

        let record = FundRowValidator::new().validate(&normalized).unwrap();
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

    /// Re-spell a header with random case and whitespace between words.
    fn respell(words: &[&str], upper: &[bool], gaps: &[usize]) -> String {
        let separators = [" ", "  ", "\n", "\r\n", "\t", " \n "];
        let mut out = String::from(separators[gaps[0] % separators.len()]);
        for (i, word) in words.iter().enumerate() {
            if upper[i % upper.len()] {
                out.push_str(&word.to_uppercase());
            } else {
                out.push_str(word);
            }
            out.push_str(separators[gaps[(i + 1) % gaps.len()] % separators.len()]);
        }
        out
    }

    proptest! {
        #[test]
        fn prop_case_and_whitespace_variants_share_a_key(
            field_idx in 0usize..7,
            upper in proptest::collection::vec(any::<bool>(), 1..8),
            gaps in proptest::collection::vec(0usize..6, 1..8),
        ) {
            let field = FundField::ALL[field_idx];
            let words: Vec<&str> = field.as_str().split(' ').collect();
            let variant = respell(&words, &upper, &gaps);

            prop_assert_eq!(normalize_header(&variant), field.as_str());
            prop_assert_eq!(HeaderWhitelist::default().lookup(&variant), Some(field));
        }
    }
}
