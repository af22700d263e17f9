use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dirload::{load_dir, read_file_with_chunk_size, Cli, Command, LoadError};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {
        Command::Dir { path } => match load_dir(&path).await {
            Ok(entries) => {
                println!("Loaded {} files from {}", entries.len(), path.display());
                for entry in &entries {
                    println!("{} ({} bytes)", entry.file.display(), entry.payload.len());
                }
                ExitCode::SUCCESS
            }
            Err(error) => {
                eprintln!("Failed to load directory: {}", render(&error));
                ExitCode::FAILURE
            }
        },
        Command::File { path, chunk_size } => {
            match read_file_with_chunk_size(&path, chunk_size.get()).await {
                Ok(data) => {
                    println!("Read {} ({} bytes)", path.display(), data.len());
                    ExitCode::SUCCESS
                }
                Err(error) => {
                    eprintln!("Failed to read file: {}", render(&error));
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// Flattens the error and its source chain into one line.
fn render(error: &LoadError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
