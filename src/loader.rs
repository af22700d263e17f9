use std::path::PathBuf;

use bytes::Bytes;

pub use chunked::{read_file, read_file_with_chunk_size, DEFAULT_CHUNK_SIZE};
pub use dir::load_dir;
pub use fanout::run_all;

mod chunked;
mod dir;
mod fanout;

/// One successfully loaded file: its path and full contents.
///
/// The payload is reference-counted, so cloning an entry does not copy the
/// file contents.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub file: PathBuf,
    pub payload: Bytes,
}
