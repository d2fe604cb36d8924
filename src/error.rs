use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Input file not found at '{}'", .0.display())]
    InputNotFound(PathBuf),
    #[error("Output file '{}' already exists. Use -f or --force to overwrite.", .0.display())]
    OutputExists(PathBuf),
    #[error("IO Error")]
    Io(#[from] std::io::Error),
}
