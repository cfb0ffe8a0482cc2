//! Error types shared by the walker, classifier and composer

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    /// A directory listing could not be read. Fatal for the run.
    #[error("Couldn't list dir {path:?}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The walker failed on a single entry; the entry is skipped.
    #[error("Failure walking the tree: {0}")]
    Traversal(#[from] ignore::Error),

    #[error("{path:?} was not found among the entries of {parent:?}")]
    UnknownPosition { path: PathBuf, parent: PathBuf },

    #[error("{path:?} is not inside the traversal root {root:?}")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("error writing output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;
