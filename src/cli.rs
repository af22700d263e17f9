use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::loader::DEFAULT_CHUNK_SIZE;

const DEFAULT_CHUNK: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CHUNK_SIZE) {
    Some(size) => size,
    None => panic!("default chunk size is zero"),
};

#[derive(Parser)]
#[command(version, about)]
/// Loads files into memory with parallel reads and reports what arrived.
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load every regular file in a directory, all reads in flight at once.
    Dir { path: PathBuf },
    /// Read one file in fixed-size chunks.
    File {
        path: PathBuf,
        /// Bytes requested per read.
        #[arg(long, default_value_t = DEFAULT_CHUNK)]
        chunk_size: NonZeroUsize,
    },
}
