//! Numeric coercion of spreadsheet cells.

use crate::models::CellValue;

/// Coerce a cell to a finite number.
///
/// Text is trimmed, thousands separators are removed and the longest leading
/// decimal literal is parsed, so `"12.5%"` reads as `12.5` and `"12,500"` as
/// `12500`. Anything else (empty cells, booleans, text without a leading
/// number, non-finite values) yields `None`.
pub fn coerce_number(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Number(n) if n.is_finite() => Some(*n),
        CellValue::Text(s) => parse_leading_number(s),
        _ => None,
    }
}

/// Coerce with a fallback for absent or unparseable cells.
pub fn coerce_or(cell: Option<&CellValue>, default: f64) -> f64 {
    cell.and_then(coerce_number).unwrap_or(default)
}

fn parse_leading_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    let end = leading_literal_len(cleaned.as_bytes());
    if end == 0 {
        return None;
    }
    cleaned[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Length of the leading `[+-]?(digits[.digits]|.digits)([eE][+-]?digits)?` literal.
fn leading_literal_len(bytes: &[u8]) -> usize {
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i = 1;
    }

    let int_end = digits_from(i);
    let mut end = int_end;
    let mut has_digits = int_end > i;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_end = digits_from(end + 1);
        if frac_end > end + 1 || has_digits {
            has_digits = has_digits || frac_end > end + 1;
            end = frac_end;
        }
    }

    if !has_digits {
        return 0;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    end
}
