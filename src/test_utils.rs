use std::collections::VecDeque;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use tempfile::TempDir;
use tokio::io::{AsyncRead, ReadBuf};
use tracing_subscriber::EnvFilter;

pub struct TestContext;

impl TestContext {
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        TestContext {}
    }
}

/// Creates a temporary directory holding the given files.
pub fn dir_with_files(files: &[(&str, &[u8])]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for (name, contents) in files {
        std::fs::write(dir.path().join(name), contents).expect("Failed to write fixture file");
    }
    dir
}

/// An `AsyncRead` replaying a script of read outcomes, then reporting end of
/// stream. Counts the reads issued so tests can assert on the exact read
/// sequence.
pub struct ScriptedReader {
    script: VecDeque<io::Result<Vec<u8>>>,
    reads: usize,
}

impl ScriptedReader {
    pub fn new(script: impl IntoIterator<Item = io::Result<Vec<u8>>>) -> Self {
        ScriptedReader {
            script: script.into_iter().collect(),
            reads: 0,
        }
    }

    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl AsyncRead for ScriptedReader {
    fn poll_read(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        self.reads += 1;
        match self.script.pop_front() {
            Some(Ok(chunk)) => {
                let len = chunk.len().min(buf.remaining());
                buf.put_slice(&chunk[..len]);
                Poll::Ready(Ok(()))
            }
            Some(Err(error)) => Poll::Ready(Err(error)),
            None => Poll::Ready(Ok(())),
        }
    }
}
