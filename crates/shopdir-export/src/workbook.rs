//! Spreadsheet serialization of a page batch.
//!
//! One workbook per list page: a single sheet named `Shops_Page_<n>` with the
//! seven record columns as the header row and one row per record, written to
//! `shops_page_<n>.xlsx` in the output directory. Re-exporting a page number
//! overwrites the prior file, so row counts never accumulate across runs.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Workbook, XlsxError};

use shopdir_core::record::{ShopRecord, COLUMNS};

use crate::error::ExportError;

/// Sheet name for list page `page`.
#[must_use]
pub fn sheet_name(page: u32) -> String {
    format!("Shops_Page_{page}")
}

/// File name for list page `page`.
#[must_use]
pub fn workbook_file_name(page: u32) -> String {
    format!("shops_page_{page}.xlsx")
}

/// Writes `records` as the workbook for list page `page` under `out_dir`,
/// returning the path written.
///
/// The caller is expected to skip empty batches; the zero-record guard lives
/// in the crawl driver, so a page with no records never reaches this function.
///
/// # Errors
///
/// Returns [`ExportError::Write`] if the sheet cannot be assembled or the
/// file cannot be saved. There is no retry; the policy for a failed export
/// belongs to the caller.
pub fn save_page_workbook(
    records: &[ShopRecord],
    page: u32,
    out_dir: &Path,
) -> Result<PathBuf, ExportError> {
    let path = out_dir.join(workbook_file_name(page));
    let wrap = |source: XlsxError| ExportError::Write {
        path: path.clone(),
        source,
    };

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name(page)).map_err(wrap)?;

    for (col, title) in (0u16..).zip(COLUMNS.iter()) {
        sheet.write_string(0, col, *title).map_err(wrap)?;
    }
    for (row, record) in (1u32..).zip(records.iter()) {
        for (col, value) in (0u16..).zip(record.fields().iter()) {
            sheet.write_string(row, col, *value).map_err(wrap)?;
        }
    }

    workbook.save(&path).map_err(wrap)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn sample_record(name: &str) -> ShopRecord {
        let mut record = ShopRecord::placeholder();
        record.name = name.to_owned();
        record
    }

    fn temp_out_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "shopdir-export-{tag}-{pid}",
            pid = std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temp out dir");
        dir
    }

    #[test]
    fn names_follow_the_page_number() {
        assert_eq!(sheet_name(415), "Shops_Page_415");
        assert_eq!(workbook_file_name(415), "shops_page_415.xlsx");
    }

    #[test]
    fn writes_a_workbook_file_for_a_batch() {
        let out_dir = temp_out_dir("write");
        let batch = vec![sample_record("Shop A"), sample_record("Shop B")];

        let path = save_page_workbook(&batch, 7, &out_dir).expect("export should succeed");

        assert_eq!(path, out_dir.join("shops_page_7.xlsx"));
        let metadata = fs::metadata(&path).expect("workbook file should exist");
        assert!(metadata.len() > 0, "workbook file should not be empty");

        fs::remove_dir_all(&out_dir).ok();
    }

    #[test]
    fn re_export_overwrites_the_prior_file() {
        let out_dir = temp_out_dir("overwrite");

        let first = vec![
            sample_record("Shop A"),
            sample_record("Shop B"),
            sample_record("Shop C"),
        ];
        save_page_workbook(&first, 9, &out_dir).expect("first export should succeed");

        let second = vec![sample_record("Shop D")];
        let path = save_page_workbook(&second, 9, &out_dir).expect("re-export should succeed");

        // Still exactly one file for the page, not an accumulated pair.
        let entries: Vec<_> = fs::read_dir(&out_dir)
            .expect("out dir should be readable")
            .filter_map(Result::ok)
            .collect();
        assert_eq!(entries.len(), 1, "expected a single workbook per page");
        assert_eq!(entries[0].path(), path);

        fs::remove_dir_all(&out_dir).ok();
    }

    #[test]
    fn write_failure_surfaces_as_an_export_error() {
        let missing = Path::new("/nonexistent-shopdir-out-dir");
        let batch = vec![sample_record("Shop A")];

        let err = save_page_workbook(&batch, 3, missing).unwrap_err();
        let ExportError::Write { path, .. } = err;
        assert_eq!(path, missing.join("shops_page_3.xlsx"));
    }
}
