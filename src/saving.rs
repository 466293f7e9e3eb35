use log::{info, warn};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::{TimetableError, TimetableResult};
use crate::timetable::Timetable;

/// Writes the whole timetable as JSON, replacing `path`.
///
/// The data goes to a temporary file beside the target which is then renamed
/// over it, so an interrupted save leaves the previous file intact.
pub fn save_timetable(timetable: &Timetable, path: &Path) -> TimetableResult<()> {
    let io_err = |source: std::io::Error| TimetableError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(io_err)?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        serde_json::to_writer(&mut writer, timetable)
            .map_err(|e| io_err(std::io::Error::other(e)))?;
        writer.flush().map_err(io_err)?;
    }
    // Keep the mode of the file being replaced; the temp file starts as 0600.
    if let Ok(meta) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(meta.permissions())
            .map_err(io_err)?;
    }
    temp.persist(path).map_err(|e| io_err(e.error))?;

    info!("saved {} batches to {}", timetable.batches.len(), path.display());
    Ok(())
}

/// Where an unparseable data file is moved before the default takes its place.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

/// Reads a timetable, falling back to the built-in default when the file is
/// missing or cannot be parsed.
///
/// A file that exists but does not parse is renamed to [`backup_path`] first,
/// so the next save cannot overwrite the only copy.
pub fn load_timetable(path: &Path) -> Timetable {
    match read_timetable(path) {
        Ok(timetable) => {
            info!(
                "loaded {} batches from {}",
                timetable.batches.len(),
                path.display()
            );
            timetable
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("{} not found, starting from the default timetable", path.display());
            Timetable::default_schedule()
        }
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            let backup = backup_path(path);
            match fs::rename(path, &backup) {
                Ok(()) => warn!(
                    "{} is not a valid timetable ({}), moved it to {} and starting from the default timetable",
                    path.display(),
                    e,
                    backup.display()
                ),
                Err(rename_err) => warn!(
                    "{} is not a valid timetable ({}) and could not be moved aside ({}), starting from the default timetable",
                    path.display(),
                    e,
                    rename_err
                ),
            }
            Timetable::default_schedule()
        }
        Err(e) => {
            warn!(
                "could not read {} ({}), starting from the default timetable",
                path.display(),
                e
            );
            Timetable::default_schedule()
        }
    }
}

/// Strict variant of [`load_timetable`] that reports why a file was rejected.
pub fn read_timetable(path: &Path) -> std::io::Result<Timetable> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let timetable: Timetable = serde_json::from_reader(reader)
        .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;

    Ok(timetable)
}
