use super::{HEADER, UTF8_BOM};
use crate::models::schedule::ScheduleRow;
use anyhow::{Context, Result};

pub(super) fn to_bytes(rows: &[ScheduleRow]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::from(UTF8_BOM));

    writer.write_record(HEADER).context("writing CSV header")?;
    for row in rows {
        writer
            .write_record([&row.activity, &row.days, &row.start, &row.end, &row.color])
            .context("writing CSV row")?;
    }

    let bytes = writer.into_inner().context("flushing CSV output")?;
    Ok(bytes)
}
