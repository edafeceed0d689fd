pub mod error;
pub mod workbook;

pub use error::ExportError;
pub use workbook::{save_page_workbook, sheet_name, workbook_file_name};
