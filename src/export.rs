//! CSV export of the rate-record batch
//!
//! Writes `forex,value,date` plus one row per record, overwriting any
//! existing file at the destination without confirmation.

use crate::error::Result;
use crate::rates::RateRecord;
use std::path::{Path, PathBuf};

/// File name of the exported batch
pub const OUTPUT_FILENAME: &str = "ecb_rates.csv";

/// Default destination: the user's download directory, falling back to the
/// home directory, then the current directory.
pub fn default_output_path() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(OUTPUT_FILENAME)
}

/// Serialize the batch to CSV at `path`.
///
/// The header row comes from the `RateRecord` field names; the writer is
/// dropped on every exit path, so the file handle never outlives the call.
pub fn export_to_csv(records: &[RateRecord], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    log::info!("wrote {} row(s) to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_batch() -> Vec<RateRecord> {
        vec![
            RateRecord::identity("2024-01-15"),
            RateRecord::new("USD", 1.095, "2024-01-15"),
        ]
    }

    #[test]
    fn test_export_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILENAME);

        export_to_csv(&sample_batch(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "forex,value,date\nEUR/EUR,1.0,2024-01-15\nEUR/USD,1.095,2024-01-15\n"
        );
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILENAME);
        fs::write(&path, "stale contents that are longer than the new file\n").unwrap();

        let batch = vec![RateRecord::identity("2024-01-15")];
        export_to_csv(&batch, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "forex,value,date\nEUR/EUR,1.0,2024-01-15\n");
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join(OUTPUT_FILENAME);

        let result = export_to_csv(&sample_batch(), &path);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_output_path_filename() {
        let path = default_output_path();
        assert_eq!(path.file_name().unwrap(), OUTPUT_FILENAME);
    }
}
