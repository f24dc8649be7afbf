//! Header-keyed row extraction.

use crate::models::CellValue;

use super::workbook::Sheet;

/// Default number of title/metadata rows above the header row in the fund sheet.
pub const DEFAULT_HEADER_SKIP_ROWS: usize = 9;

/// One data row keyed by the header text exactly as it appeared in the sheet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawRow {
    cells: Vec<(String, CellValue)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell. A header that is already present keeps its first value.
    pub fn insert(&mut self, header: impl Into<String>, value: CellValue) {
        let header = header.into();
        if self.get(&header).is_none() {
            self.cells.push((header, value));
        }
    }

    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(h, v)| (h.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<H: Into<String>> FromIterator<(H, CellValue)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (H, CellValue)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (header, value) in iter {
            row.insert(header, value);
        }
        row
    }
}

/// Rows below the header row, keyed by header text.
///
/// The first `skip_rows` rows are title rows; the next row is the header.
/// Columns with a blank header are dropped and rows with no content are skipped.
pub fn extract_rows(sheet: &Sheet, skip_rows: usize) -> Vec<RawRow> {
    let mut rows = sheet.rows.iter().skip(skip_rows);

    let Some(header) = rows.next() else {
        return Vec::new();
    };

    let columns: Vec<(usize, String)> = header
        .iter()
        .enumerate()
        .filter_map(|(idx, cell)| {
            let text = cell.to_string();
            if text.trim().is_empty() {
                None
            } else {
                Some((idx, text))
            }
        })
        .collect();

    rows.filter(|cells| cells.iter().any(|c| !c.is_empty()))
        .map(|cells| {
            columns
                .iter()
                .map(|(idx, name)| {
                    let value = cells.get(*idx).cloned().unwrap_or_default();
                    (name.clone(), value)
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::text(s)
    }

    fn sheet_with_title_rows(skip: usize, body: Vec<Vec<CellValue>>) -> Sheet {
        let mut rows = vec![vec![text("ASX Investment Products Report")]];
        rows.resize(skip, Vec::new());
        rows.extend(body);
        Sheet::new("Spotlight ETP List", rows)
    }

    #[test]
    fn test_skips_title_rows_and_keys_by_header() {
        let sheet = sheet_with_title_rows(
            DEFAULT_HEADER_SKIP_ROWS,
            vec![
                vec![text("ASX Code"), text("Fund Name"), text("FUM ($m)#")],
                vec![text("VAS"), text("Vanguard Australian Shares"), CellValue::Number(12500.0)],
            ],
        );

        let rows = extract_rows(&sheet, DEFAULT_HEADER_SKIP_ROWS);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("ASX Code"), Some(&text("VAS")));
        assert_eq!(rows[0].get("FUM ($m)#"), Some(&CellValue::Number(12500.0)));
    }

    #[test]
    fn test_blank_rows_and_blank_headers_dropped() {
        let sheet = sheet_with_title_rows(
            2,
            vec![
                vec![text("ASX Code"), CellValue::Empty, text("Fund Name")],
                vec![CellValue::Empty, CellValue::Empty, text("  ")],
                vec![text("IOZ"), text("stray"), text("iShares Core")],
            ],
        );

        let rows = extract_rows(&sheet, 2);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0].get("Fund Name"), Some(&text("iShares Core")));
    }

    #[test]
    fn test_short_rows_padded_with_empty() {
        let sheet = sheet_with_title_rows(
            0,
            vec![
                vec![text("ASX Code"), text("Fund Name"), text("1 Month Total Return")],
                vec![text("A200")],
            ],
        );

        let rows = extract_rows(&sheet, 0);
        assert_eq!(rows[0].get("1 Month Total Return"), Some(&CellValue::Empty));
    }

    #[test]
    fn test_duplicate_header_keeps_first_column() {
        let row: RawRow = vec![("Code", text("first")), ("Code", text("second"))]
            .into_iter()
            .collect();
        assert_eq!(row.get("Code"), Some(&text("first")));
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn test_sheet_shorter_than_skip() {
        let sheet = Sheet::new("Spotlight ETP List", vec![vec![text("title")]]);
        assert!(extract_rows(&sheet, DEFAULT_HEADER_SKIP_ROWS).is_empty());
    }
}
