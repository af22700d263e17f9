pub use cli::{Cli, Command};
pub use error::{LoadError, Result};
pub use loader::{load_dir, read_file, read_file_with_chunk_size, run_all};
pub use loader::{FileEntry, DEFAULT_CHUNK_SIZE};

mod cli;
mod error;
mod loader;
#[cfg(test)]
mod test_utils;
