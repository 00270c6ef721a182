//! Export of calculations for spreadsheets and reports.
//!
//! Only CSV is supported. Delivering the file (download, print) is left to the
//! caller; the HTTP API serves it as an attachment.

mod csv_record;

pub use csv_record::{
    CSV_DELIMITER, EXPORT_FILE_NAME, EXPORTED_MONTHS, ExportRecord, to_csv_row, to_csv_string,
    write_csv,
};
