// CSV table service
// The schedule tables persist only through these files

mod export;
mod import;

pub use import::ImportError;

use crate::models::schedule::ScheduleRow;
use anyhow::Result;
use std::path::Path;

/// Fixed column contract shared by import and export.
pub const HEADER: [&str; 5] = ["activity", "days", "start", "end", "color"];

/// UTF-8 byte-order mark: tolerated on import, always written on export
/// so spreadsheet tools open the file with the right encoding.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

pub struct CsvTableService;

impl CsvTableService {
    pub fn new() -> Self {
        Self
    }

    /// Parse a whole table from a file. On any failure the caller's
    /// current table must stay untouched; this returns without side
    /// effects either way.
    pub fn import_from_path(&self, path: &Path) -> Result<Vec<ScheduleRow>, ImportError> {
        let bytes = std::fs::read(path)?;
        self.import_from_bytes(&bytes)
    }

    pub fn import_from_bytes(&self, bytes: &[u8]) -> Result<Vec<ScheduleRow>, ImportError> {
        import::from_bytes(bytes)
    }

    /// Serialize a table to CSV bytes, BOM first.
    pub fn export_to_bytes(&self, rows: &[ScheduleRow]) -> Result<Vec<u8>> {
        export::to_bytes(rows)
    }

    pub fn export_to_path(&self, rows: &[ScheduleRow], path: &Path) -> Result<()> {
        let bytes = self.export_to_bytes(rows)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Default for CsvTableService {
    fn default() -> Self {
        Self::new()
    }
}
