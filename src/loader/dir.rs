use std::fmt::Debug;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, instrument, trace};

use crate::error::{LoadError, Result};
use crate::loader::{fanout, read_file, FileEntry};

/// Loads every regular file in `dir` into memory, all reads in flight at
/// once.
///
/// Listing happens up front, so a listing failure reports before any read
/// starts. Entries that are not regular files (subdirectories, sockets, ...)
/// are skipped. Result order follows completion order and carries no
/// meaning.
#[instrument(level = "trace")]
pub async fn load_dir<P>(dir: P) -> Result<Vec<FileEntry>>
where
    P: AsRef<Path> + Debug,
{
    let files = list_regular_files(dir.as_ref()).await?;
    debug!(file_count = files.len(), "Listed directory");

    fanout::run_all(files.into_iter().map(|path| async move {
        let payload = read_file(&path).await?;
        Ok(FileEntry {
            file: path,
            payload,
        })
    }))
    .await
}

/// Lists `dir` and keeps the entries whose metadata says regular file.
///
/// Metadata follows symlinks, so a link to a regular file counts as one and
/// a dangling link fails the listing.
async fn list_regular_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|source| LoadError::list(dir, source))?;

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|source| LoadError::list(dir, source))?
    {
        let path = entry.path();
        let metadata = fs::metadata(&path)
            .await
            .map_err(|source| LoadError::stat(&path, source))?;
        if metadata.is_file() {
            files.push(path);
        } else {
            trace!(?path, "Skipping non-file entry");
        }
    }

    Ok(files)
}
