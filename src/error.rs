use thiserror::Error;

#[derive(Error, Debug)]
pub enum StashlyError {
    /// The repository cannot be opened or queried at all. Fatal: the
    /// session refuses to start.
    #[error("repository unavailable: {0}")]
    BackendUnavailable(String),

    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A single backend operation failed. Recoverable: reported in the
    /// status bar, session state stays at the pre-operation snapshot.
    #[error("{0}")]
    Backend(String),

    /// Bad operator input or config value. No backend call is attempted.
    #[error("{0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, StashlyError>;
