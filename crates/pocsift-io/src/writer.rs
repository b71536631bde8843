use crate::error::{Result, TableError};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use pocsift_core::OutputContactRow;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const OUTPUT_COLUMNS: [&str; 9] = [
    "name",
    "email",
    "phone number",
    "state",
    "city",
    "agency",
    "opportunity_count",
    "associated_departments",
    "contract_types",
];

/// Renders the directory in memory first so a failed run never leaves a
/// partial file behind.
pub fn write_contacts(path: &Path, rows: &[OutputContactRow]) -> Result<()> {
    let data = render_contacts(rows)?;
    fs::write(path, data).map_err(|source| TableError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = rows.len(), "output table written");
    Ok(())
}

pub fn render_contacts(rows: &[OutputContactRow]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|err| TableError::Io(err.into_error()))
}
