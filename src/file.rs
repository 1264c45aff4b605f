// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::{info, warn};

use crate::config::{ExportFormat, ExportOptions};
use crate::csv::{parse_records, write_records};
use crate::data::ConferenceRecord;
use crate::error::Result;

/// Write all records to `export.out_path` in `export.format`.
/// Parent directories are created; an existing file is overwritten.
/// Returns the path written to.
pub fn export_records(export: &ExportOptions, records: &[ConferenceRecord]) -> Result<PathBuf> {
    let path = export.out_path().to_path_buf();

    if !export.extension_matches() {
        warn!(path = %path.display(), format = %export.format, "file extension does not match output format");
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut out = BufWriter::new(File::create(&path)?); // truncate/overwrite
    match export.format {
        ExportFormat::Csv => write_records(&mut out, records)?,
        ExportFormat::Json => serde_json::to_writer(&mut out, records)?,
    }
    out.flush()?;

    info!(path = %path.display(), rows = records.len(), "export written");
    Ok(path)
}

/// Read a previously exported file back.
pub fn load_records(path: &Path, format: ExportFormat) -> Result<Vec<ConferenceRecord>> {
    let text = fs::read_to_string(path)?;
    let records = match format {
        ExportFormat::Csv => parse_records(&text),
        ExportFormat::Json => serde_json::from_str(&text)?,
    };
    Ok(records)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
