//! Spreadsheet decoding.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use log::debug;

use crate::errors::EtfDataError;
use crate::models::CellValue;

/// One decoded sheet.
///
/// `rows` are anchored at cell A1: `rows[0]` is spreadsheet row 1 and
/// `rows[r][0]` is column A, even when the used range starts further in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}

/// A decoded workbook: its sheets in workbook order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// The sheet whose trimmed name equals `label`, ignoring case.
    pub fn sheet(&self, label: &str) -> Result<&Sheet, EtfDataError> {
        let wanted = label.trim().to_lowercase();
        self.sheets
            .iter()
            .find(|s| s.name.trim().to_lowercase() == wanted)
            .ok_or_else(|| EtfDataError::SheetNotFound {
                sheet: label.to_string(),
            })
    }
}

/// Turns raw report bytes into a [`Workbook`].
pub trait SpreadsheetDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<Workbook, EtfDataError>;
}

/// Decoder for xlsx (and xls/xlsb/ods, detected from content) using calamine.
#[derive(Clone, Copy, Debug, Default)]
pub struct CalamineDecoder;

impl SpreadsheetDecoder for CalamineDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Workbook, EtfDataError> {
        let mut workbook =
            open_workbook_auto_from_rs(Cursor::new(bytes.to_vec())).map_err(|e| {
                EtfDataError::Decode {
                    message: e.to_string(),
                }
            })?;

        let names = workbook.sheet_names();
        debug!("Decoded workbook with sheets {:?}", names);

        let mut sheets = Vec::with_capacity(names.len());
        for name in names {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| EtfDataError::Decode {
                    message: format!("sheet '{}': {}", name, e),
                })?;
            sheets.push(Sheet::new(name, anchored_rows(&range)));
        }

        Ok(Workbook::new(sheets))
    }
}

/// Re-anchor a used range at A1.
fn anchored_rows(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<Vec<CellValue>> = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut cells = vec![CellValue::Empty; start_col as usize];
        cells.extend(row.iter().map(cell_value));
        rows.push(cells);
    }
    rows
}

fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
        Data::Empty => CellValue::Empty,
    }
}
