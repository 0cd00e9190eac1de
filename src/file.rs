// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::data::FuelSnapshot;
use crate::error::SnapshotError;

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> SnapshotError {
    move |source| SnapshotError::Io { path: path.to_path_buf(), source }
}

/// Pretty JSON, two-space indent, non-ASCII kept as-is.
pub fn to_json(snapshot: &FuelSnapshot) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Write the snapshot to `path`, replacing any previous file.
///
/// The JSON goes to a sibling temp file first and is renamed into place,
/// so a failure part-way leaves the old snapshot untouched.
/// Returns the number of bytes written.
pub fn write_snapshot(path: &Path, snapshot: &FuelSnapshot) -> Result<u64, SnapshotError> {
    info!(path = %path.display(), "Saving snapshot");

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let json = to_json(snapshot)?;
    let tmp = temp_sibling(path);

    let written = (|| -> std::io::Result<()> {
        let mut out = BufWriter::new(File::create(&tmp)?);
        out.write_all(json.as_bytes())?;
        out.write_all(b"\n")?;
        out.into_inner().map_err(|e| e.into_error())?.sync_all()?;
        fs::rename(&tmp, path)
    })();

    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(io_err(path)(e));
    }

    let size = fs::metadata(path).map_err(io_err(path))?.len();
    info!(path = %path.display(), bytes = size, "Saved snapshot");
    Ok(size)
}

pub fn read_snapshot(path: &Path) -> Result<FuelSnapshot, SnapshotError> {
    let text = fs::read_to_string(path).map_err(io_err(path))?;
    Ok(serde_json::from_str(&text)?)
}

/// Create the directory (and parents) if missing.
pub fn ensure_directory(dir: &Path) -> Result<(), SnapshotError> {
    fs::create_dir_all(dir).map_err(io_err(dir))
}

/// `prices.json` → `.prices.json.tmp` in the same directory (same filesystem for rename).
fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "snapshot".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}
