//! Persisted record format shared by configurations and results.
//!
//! Records are plain JSON objects keyed by field name. There is no version or
//! type tag: a reader assumes the writer used the same field set, so renaming
//! a field breaks every record written before the rename.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::errors::{LfError, LfResult};

/// Substring identifying record files during collection.
pub const RECORD_MARKER: &str = "pck";

/// File name the sampler writes a configuration to.
pub const DEFINITION_FILE: &str = "definition.pck";

/// File name the simulator writes its result to.
pub const PERFORMANCE_FILE: &str = "performance.pck";

/// Load and decode a record.
///
/// Missing files surface as [`LfError::Io`]; anything that opens but does not
/// decode into `T` is a [`LfError::RecordParse`].
pub fn read_record<T: DeserializeOwned>(path: &Path) -> LfResult<T> {
    let file = File::open(path)?;
    let value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| LfError::parse(path, e))?;
    debug!("Loaded record {}", path.display());
    Ok(value)
}

/// Encode `value` to `path`, truncating whatever was there.
///
/// No existence check, no temporary file, no backup: the last writer wins.
pub fn write_record<T: Serialize>(path: &Path, value: &T) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// Whether `file_name` carries the record marker.
pub fn is_record_name(file_name: &str, marker: &str) -> bool {
    file_name.contains(marker)
}
