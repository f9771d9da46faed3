use thiserror::Error;

/// Failures raised while resolving the counterpart of the active file.
#[derive(Error, Debug)]
pub enum FindError {
    /// The active file was not among the files the index returned.
    #[error("file not found: {path}")]
    NotFound { path: String },

    /// The index returned files but none of them qualified as a counterpart.
    #[error("no matches for {path}")]
    NoMatch { path: String },
}

impl FindError {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn no_match(path: impl Into<String>) -> Self {
        Self::NoMatch { path: path.into() }
    }
}
