use crate::error::{Result, TableError};
use csv::{ReaderBuilder, StringRecord, Trim};
use pocsift_core::{MissingValues, RawContactRow};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub const REQUIRED_COLUMNS: [&str; 8] = [
    "sub_tier",
    "title",
    "primary_contact_full_name",
    "primary_contact_email",
    "primary_contact_phone",
    "State",
    "City",
    "agency",
];

pub const SECONDARY_COLUMNS: [&str; 3] = [
    "secondary_contact_full_name",
    "secondary_contact_email",
    "secondary_contact_phone",
];

/// Reads the whole opportunity table into memory.
pub fn read_contact_rows(path: &Path, missing: &MissingValues) -> Result<Vec<RawContactRow>> {
    let file = File::open(path).map_err(|source| TableError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = parse_contact_rows(file, missing)?;
    debug!(path = %path.display(), rows = rows.len(), "input table read");
    Ok(rows)
}

/// Parses a quoted CSV table. Quotes may be doubled or backslash-escaped.
pub fn parse_contact_rows<R: Read>(input: R, missing: &MissingValues) -> Result<Vec<RawContactRow>> {
    let mut reader = ReaderBuilder::new()
        .escape(Some(b'\\'))
        .trim(Trim::Headers)
        .from_reader(input);

    let columns = ColumnMap::resolve(reader.headers()?)?;
    if columns.secondary_name.is_none() {
        debug!("no secondary contact columns; reading primary contacts only");
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(columns.row(&record, missing));
    }
    Ok(rows)
}

struct ColumnMap {
    sub_tier: usize,
    title: usize,
    primary_name: usize,
    primary_email: usize,
    primary_phone: usize,
    state: usize,
    city: usize,
    agency: usize,
    secondary_name: Option<usize>,
    secondary_email: Option<usize>,
    secondary_phone: Option<usize>,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|header| header == name);
        let require = |name: &'static str| find(name).ok_or(TableError::MissingColumn(name));

        let [sub_tier, title, primary_name, primary_email, primary_phone, state, city, agency] =
            REQUIRED_COLUMNS;
        let [secondary_name, secondary_email, secondary_phone] = SECONDARY_COLUMNS;

        Ok(Self {
            sub_tier: require(sub_tier)?,
            title: require(title)?,
            primary_name: require(primary_name)?,
            primary_email: require(primary_email)?,
            primary_phone: require(primary_phone)?,
            state: require(state)?,
            city: require(city)?,
            agency: require(agency)?,
            secondary_name: find(secondary_name),
            secondary_email: find(secondary_email),
            secondary_phone: find(secondary_phone),
        })
    }

    fn row(&self, record: &StringRecord, missing: &MissingValues) -> RawContactRow {
        let cell = |index: usize| record.get(index).and_then(|raw| missing.normalize(raw));
        let optional = |index: Option<usize>| index.and_then(&cell);

        RawContactRow {
            sub_tier: cell(self.sub_tier),
            title: cell(self.title),
            primary_contact_full_name: cell(self.primary_name),
            primary_contact_email: cell(self.primary_email),
            primary_contact_phone: cell(self.primary_phone),
            state: cell(self.state),
            city: cell(self.city),
            agency: cell(self.agency),
            secondary_contact_full_name: optional(self.secondary_name),
            secondary_contact_email: optional(self.secondary_email),
            secondary_contact_phone: optional(self.secondary_phone),
        }
    }
}
