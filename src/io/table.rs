//! Tabular input: CSV files and spreadsheet workbooks.
//!
//! Both backends produce the same in-memory [`Table`]: a sheet name, a header
//! row, and numeric cells (`None` where a cell is empty or non-numeric). A CSV
//! file is treated as a workbook with exactly one sheet named after the file
//! stem, so sheet/column selection behaves identically for both formats.

use std::fs::File;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use log::info;

use crate::domain::{SampleSet, Selector};
use crate::error::AppError;

/// One sheet loaded into memory.
#[derive(Debug, Clone)]
pub struct Table {
    pub sheet_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<f64>>>,
}

/// Extensions routed to the workbook reader; everything else is read as CSV.
const WORKBOOK_EXTS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Load one sheet from `path`, dispatching on the file extension.
pub fn load_table(path: &Path, sheet: &Selector) -> Result<Table, AppError> {
    if is_workbook(path) {
        load_workbook_table(path, sheet)
    } else {
        load_csv_table(path, sheet)
    }
}

/// Load a table and project two of its columns into a [`SampleSet`].
pub fn load_samples(
    path: &Path,
    sheet: &Selector,
    xcol: &Selector,
    ycol: &Selector,
    dropna: bool,
) -> Result<SampleSet, AppError> {
    let table = load_table(path, sheet)?;
    extract_samples(&table, xcol, ycol, dropna)
}

/// List the sheet names in `path` (a CSV has exactly one, the file stem).
pub fn sheet_names(path: &Path) -> Result<Vec<String>, AppError> {
    if is_workbook(path) {
        let workbook = open_workbook_auto(path).map_err(|e| {
            AppError::load(format!("Failed to open workbook '{}': {e}", path.display()))
        })?;
        Ok(workbook.sheet_names().to_owned())
    } else {
        File::open(path).map_err(|e| {
            AppError::load(format!("Failed to open CSV '{}': {e}", path.display()))
        })?;
        Ok(vec![file_stem(path)])
    }
}

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| WORKBOOK_EXTS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn load_csv_table(path: &Path, sheet: &Selector) -> Result<Table, AppError> {
    let sheet_name = validate_csv_sheet(path, sheet)?;

    let file = File::open(path).map_err(|e| {
        AppError::load(format!("Failed to open CSV '{}': {e}", path.display()))
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::load(format!("Failed to read CSV headers: {e}")))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record =
            result.map_err(|e| AppError::load(format!("Failed to read CSV record: {e}")))?;
        rows.push(
            (0..headers.len())
                .map(|i| record.get(i).and_then(parse_cell))
                .collect(),
        );
    }

    Ok(Table {
        sheet_name,
        headers,
        rows,
    })
}

/// A CSV file acts as a single-sheet workbook named after the file stem.
fn validate_csv_sheet(path: &Path, sheet: &Selector) -> Result<String, AppError> {
    let stem = file_stem(path);
    match sheet {
        Selector::Index(0) => Ok(stem),
        Selector::Index(idx) => Err(AppError::load(format!(
            "Sheet index {idx} is out of range; a CSV file has exactly 1 sheet."
        ))),
        Selector::Name(name) if *name == stem => Ok(stem),
        Selector::Name(name) => Err(AppError::load(format!(
            "Sheet '{name}' not found. Available sheets: {stem}."
        ))),
    }
}

fn load_workbook_table(path: &Path, sheet: &Selector) -> Result<Table, AppError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        AppError::load(format!("Failed to open workbook '{}': {e}", path.display()))
    })?;

    let names = workbook.sheet_names().to_owned();
    let sheet_name = match sheet {
        Selector::Index(idx) => names.get(*idx).cloned().ok_or_else(|| {
            AppError::load(format!(
                "Sheet index {idx} is out of range; workbook has {} sheet(s).",
                names.len()
            ))
        })?,
        Selector::Name(name) => {
            if names.iter().any(|n| n == name) {
                name.clone()
            } else {
                return Err(AppError::load(format!(
                    "Sheet '{name}' not found. Available sheets: {}.",
                    names.join(", ")
                )));
            }
        }
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| AppError::load(format!("Failed to read sheet '{sheet_name}': {e}")))?;

    let mut row_iter = range.rows();
    let headers: Vec<String> = match row_iter.next() {
        Some(row) => row.iter().map(cell_to_header).collect(),
        None => Vec::new(),
    };

    let rows: Vec<Vec<Option<f64>>> = row_iter
        .map(|row| (0..headers.len()).map(|i| row.get(i).and_then(cell_to_f64)).collect())
        .collect();

    Ok(Table {
        sheet_name,
        headers,
        rows,
    })
}

fn cell_to_header(cell: &Data) -> String {
    match cell {
        Data::String(s) => normalize_header(s),
        Data::Empty => String::new(),
        other => normalize_header(&other.to_string()),
    }
}

fn cell_to_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Int(i) => Some(*i as f64),
        Data::Float(f) => Some(*f),
        Data::String(s) => parse_cell(s),
        // Dates fit as their spreadsheet serial numbers.
        Data::DateTime(dt) => Some(dt.as_f64()),
        _ => None,
    }
}

fn normalize_header(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header (e.g. "﻿x"). If we don't strip it, name-based column
    // selection will incorrectly report the column as missing.
    name.trim().trim_start_matches('\u{feff}').to_string()
}

fn parse_cell(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Project the x/y columns of `table` into a fit-ready sample.
///
/// With `dropna`, rows where either cell is empty or non-numeric are removed
/// and counted; without it they pass through as NaN.
pub fn extract_samples(
    table: &Table,
    xcol: &Selector,
    ycol: &Selector,
    dropna: bool,
) -> Result<SampleSet, AppError> {
    let xi = resolve_column(table, xcol)?;
    let yi = resolve_column(table, ycol)?;

    let rows_read = table.rows.len();
    let mut rows_dropped = 0usize;
    let mut x = Vec::new();
    let mut y = Vec::new();

    for row in &table.rows {
        let xv = row.get(xi).copied().flatten();
        let yv = row.get(yi).copied().flatten();
        if dropna && (missing(xv) || missing(yv)) {
            rows_dropped += 1;
            continue;
        }
        x.push(xv.unwrap_or(f64::NAN));
        y.push(yv.unwrap_or(f64::NAN));
    }

    if x.is_empty() {
        return Err(AppError::data(format!(
            "No usable rows in sheet '{}' (read {rows_read}, dropped {rows_dropped}).",
            table.sheet_name
        )));
    }

    if rows_dropped > 0 {
        info!("dropped {rows_dropped} row(s) with missing values");
    }

    Ok(SampleSet {
        x,
        y,
        sheet_name: table.sheet_name.clone(),
        x_name: table.headers[xi].clone(),
        y_name: table.headers[yi].clone(),
        rows_read,
        rows_dropped,
    })
}

fn resolve_column(table: &Table, sel: &Selector) -> Result<usize, AppError> {
    match sel {
        Selector::Index(idx) => {
            if *idx < table.headers.len() {
                Ok(*idx)
            } else {
                Err(AppError::column(format!(
                    "Column index {idx} is out of range; sheet '{}' has {} column(s).",
                    table.sheet_name,
                    table.headers.len()
                )))
            }
        }
        Selector::Name(name) => {
            table.headers.iter().position(|h| h == name).ok_or_else(|| {
                AppError::column(format!(
                    "Column '{name}' not found. Available columns: {}.",
                    available_columns(&table.headers)
                ))
            })
        }
    }
}

fn available_columns(headers: &[String]) -> String {
    if headers.is_empty() {
        "(none)".to_string()
    } else {
        headers.join(", ")
    }
}

fn missing(v: Option<f64>) -> bool {
    match v {
        None => true,
        Some(v) => v.is_nan(),
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write as _;

    fn csv_file(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn index_and_name_selectors_agree() {
        let f = csv_file("x,y\n1,2\n2,4\n3,6\n");

        let by_name = load_samples(
            f.path(),
            &Selector::Index(0),
            &Selector::Name("x".to_string()),
            &Selector::Name("y".to_string()),
            false,
        )
        .unwrap();
        let by_index = load_samples(
            f.path(),
            &Selector::Index(0),
            &Selector::Index(0),
            &Selector::Index(1),
            false,
        )
        .unwrap();

        assert_eq!(by_name.x, by_index.x);
        assert_eq!(by_name.y, by_index.y);
        assert_eq!(by_name.x_name, "x");
        assert_eq!(by_name.y_name, "y");
    }

    #[test]
    fn dropna_skips_and_counts_incomplete_rows() {
        let f = csv_file("x,y\n1,2\n,3\n2,abc\n3,6\n");

        let cleaned = load_samples(
            f.path(),
            &Selector::Index(0),
            &Selector::Name("x".to_string()),
            &Selector::Name("y".to_string()),
            true,
        )
        .unwrap();
        assert_eq!(cleaned.x, vec![1.0, 3.0]);
        assert_eq!(cleaned.y, vec![2.0, 6.0]);
        assert_eq!(cleaned.rows_read, 4);
        assert_eq!(cleaned.rows_dropped, 2);

        let raw = load_samples(
            f.path(),
            &Selector::Index(0),
            &Selector::Name("x".to_string()),
            &Selector::Name("y".to_string()),
            false,
        )
        .unwrap();
        assert_eq!(raw.len(), 4);
        assert!(raw.x[1].is_nan());
        assert!(raw.y[2].is_nan());
        assert_eq!(raw.rows_dropped, 0);
    }

    #[test]
    fn unknown_column_lists_available_names() {
        let f = csv_file("time,value\n1,2\n");

        let err = load_samples(
            f.path(),
            &Selector::Index(0),
            &Selector::Name("z".to_string()),
            &Selector::Name("value".to_string()),
            false,
        )
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ColumnResolution);
        let msg = err.to_string();
        assert!(msg.contains("'z'"), "message: {msg}");
        assert!(msg.contains("time, value"), "message: {msg}");
    }

    #[test]
    fn column_index_out_of_range_is_reported() {
        let f = csv_file("x,y\n1,2\n");

        let err = load_samples(
            f.path(),
            &Selector::Index(0),
            &Selector::Index(5),
            &Selector::Index(1),
            false,
        )
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ColumnResolution);
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn csv_sheet_is_named_after_the_file_stem() {
        let f = csv_file("x,y\n1,2\n");
        let stem = f
            .path()
            .file_stem()
            .unwrap()
            .to_string_lossy()
            .into_owned();

        let table = load_table(f.path(), &Selector::Name(stem.clone())).unwrap();
        assert_eq!(table.sheet_name, stem);

        let err = load_table(f.path(), &Selector::Name("other".to_string())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Load);
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn csv_has_exactly_one_sheet() {
        let f = csv_file("x,y\n1,2\n");

        let err = load_table(f.path(), &Selector::Index(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Load);
        assert!(err.to_string().contains("exactly 1 sheet"));
    }

    #[test]
    fn headers_only_file_has_no_usable_rows() {
        let f = csv_file("x,y\n");

        let err = load_samples(
            f.path(),
            &Selector::Index(0),
            &Selector::Name("x".to_string()),
            &Selector::Name("y".to_string()),
            false,
        )
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Data);
        assert!(err.to_string().contains("No usable rows"));
    }

    #[test]
    fn bom_is_stripped_from_the_first_header() {
        let f = csv_file("\u{feff}x,y\n1,2\n");

        let sample = load_samples(
            f.path(),
            &Selector::Index(0),
            &Selector::Name("x".to_string()),
            &Selector::Name("y".to_string()),
            false,
        )
        .unwrap();
        assert_eq!(sample.x, vec![1.0]);
    }
}
