use super::{HEADER, UTF8_BOM};
use crate::models::schedule::ScheduleRow;
use thiserror::Error;

/// Import failures. The UI collapses all of these into one generic
/// format-error notice; the variants exist for the log line.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unexpected header, wanted `activity,days,start,end,color`")]
    Header,
}

pub(super) fn from_bytes(bytes: &[u8]) -> Result<Vec<ScheduleRow>, ImportError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::Reader::from_reader(bytes);

    let headers = reader.headers()?;
    let header_matches = headers.len() == HEADER.len()
        && headers
            .iter()
            .zip(HEADER)
            .all(|(got, want)| got.trim().eq_ignore_ascii_case(want));
    if !header_matches {
        return Err(ImportError::Header);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(ScheduleRow {
            activity: field(&record, 0),
            days: field(&record, 1),
            start: field(&record, 2),
            end: field(&record, 3),
            color: field(&record, 4),
        });
    }

    Ok(rows)
}

fn field(record: &csv::StringRecord, index: usize) -> String {
    record.get(index).unwrap_or_default().to_string()
}
