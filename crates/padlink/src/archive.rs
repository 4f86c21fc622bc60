//! Downloadable archive export.
//!
//! Packs a project's files into a zip container for the download flow.
//! Entries are stored uncompressed in map order, so the same project
//! always produces the same archive.

use std::io::{self, Cursor, Write};
use std::path::Path;

use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::project::Project;

/// Archive construction failures.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Container-level failure from the zip writer.
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Underlying file-system error.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Build the archive for `project` in memory.
///
/// An empty project yields a valid, empty archive.
pub fn archive_bytes(project: &Project) -> Result<Vec<u8>, ArchiveError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for (name, content) in project.iter() {
        zip.start_file(name, options)?;
        zip.write_all(content.as_bytes())?;
    }

    Ok(zip.finish()?.into_inner())
}

/// Write the archive for `project` to `path`.
pub fn write_archive(project: &Project, path: &Path) -> Result<(), ArchiveError> {
    let bytes = archive_bytes(project)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
