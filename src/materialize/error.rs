use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaterializeError {
    #[error("Failed to create {}: {source}", path.display())]
    FilesystemFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to create unsafe path: {0}")]
    UnsafePath(String),
}
