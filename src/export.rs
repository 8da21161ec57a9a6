use std::path::{Path, PathBuf};

use csv::Writer;

use crate::{error::Error, types::TrackRecord};

/// Serializes records to a CSV file at `path`.
///
/// The header row is derived from the record's serde renames (`Song Name`,
/// `Artist`, `Album`, `Duration (min)`, `Popularity`), followed by one data
/// row per record with no index column. Fields containing commas or quotes
/// get standard CSV quoting.
pub fn write_csv(path: &Path, records: &[TrackRecord]) -> Result<(), Error> {
    let mut writer = Writer::from_path(path)?;

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Turns the user's save-prompt input into a destination path, appending the
/// default `.csv` extension when none was given.
pub fn default_csv_path(input: &str) -> PathBuf {
    let mut path = PathBuf::from(input.trim());
    if path.extension().is_none() {
        path.set_extension("csv");
    }
    path
}
