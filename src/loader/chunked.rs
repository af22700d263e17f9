use std::fmt::Debug;
use std::io;
use std::path::Path;

use bytes::{Bytes, BytesMut};
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, instrument, trace};

use crate::error::{LoadError, Result};

/// Bytes requested per read.
pub const DEFAULT_CHUNK_SIZE: usize = 40 * 1024;

/// Reads the whole file at `path` in chunks of [`DEFAULT_CHUNK_SIZE`] bytes.
#[instrument(level = "trace")]
pub async fn read_file<P>(path: P) -> Result<Bytes>
where
    P: AsRef<Path> + Debug,
{
    read_file_with_chunk_size(path, DEFAULT_CHUNK_SIZE).await
}

/// Reads the whole file at `path` in chunks of at most `chunk_size` bytes.
///
/// The handle closes on drop, on the error path as well as on success.
#[instrument(level = "trace")]
pub async fn read_file_with_chunk_size<P>(path: P, chunk_size: usize) -> Result<Bytes>
where
    P: AsRef<Path> + Debug,
{
    let path = path.as_ref();
    let mut file = File::open(path)
        .await
        .map_err(|source| LoadError::open(path, source))?;

    let data = read_chunks(&mut file, chunk_size)
        .await
        .map_err(|source| LoadError::read(path, source))?;

    debug!(len = data.len(), "Read file");
    Ok(data)
}

/// Drains `reader` into one buffer, one read of at most `chunk_size` bytes
/// at a time.
///
/// Each read is issued only after the previous one completed. A short read
/// appends whatever arrived and keeps going; only a zero-byte read ends the
/// loop. The first read error wins and no further read is issued.
async fn read_chunks<R>(reader: &mut R, chunk_size: usize) -> io::Result<Bytes>
where
    R: AsyncRead + Unpin,
{
    assert!(chunk_size > 0, "chunk_size must be non-zero");

    let mut chunks: Vec<Bytes> = Vec::new();
    loop {
        let mut buffer = BytesMut::zeroed(chunk_size);
        let bytes_read = reader.read(&mut buffer).await?;
        if bytes_read == 0 {
            break;
        }
        buffer.truncate(bytes_read);
        trace!(bytes_read, chunk_index = chunks.len(), "Read chunk");
        chunks.push(buffer.freeze());
    }

    Ok(merge_chunks(&chunks))
}

/// Concatenates chunks in read order. A single chunk is handed back without
/// copying its payload.
fn merge_chunks(chunks: &[Bytes]) -> Bytes {
    match chunks {
        [] => Bytes::new(),
        [single] => single.clone(),
        many => {
            let total = many.iter().map(Bytes::len).sum();
            let mut merged = BytesMut::with_capacity(total);
            for chunk in many {
                merged.extend_from_slice(chunk);
            }
            merged.freeze()
        }
    }
}
