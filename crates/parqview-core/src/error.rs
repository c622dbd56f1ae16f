use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeekError {
    InvalidDirection(String),
    LoadFailure { path: PathBuf, reason: String },
    MalformedInput { path: PathBuf, reason: String },
    Io { path: PathBuf, reason: String },
}

impl PeekError {
    pub fn load_failure(path: &Path, reason: impl fmt::Display) -> Self {
        Self::LoadFailure { path: path.to_path_buf(), reason: reason.to_string() }
    }

    pub fn malformed(path: &Path, reason: impl fmt::Display) -> Self {
        Self::MalformedInput { path: path.to_path_buf(), reason: reason.to_string() }
    }

    pub fn io(path: &Path, err: &std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), reason: err.to_string() }
    }
}

impl fmt::Display for PeekError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDirection(raw) => write!(f, "Invalid direction: {raw}"),
            Self::LoadFailure { path, reason } => write!(f, "Failed to load {}: {reason}", path.display()),
            Self::MalformedInput { path, reason } => write!(f, "Malformed input {}: {reason}", path.display()),
            Self::Io { path, reason } => write!(f, "Cannot read {}: {reason}", path.display()),
        }
    }
}

impl std::error::Error for PeekError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_path_and_reason() {
        let err = PeekError::load_failure(Path::new("/tmp/a.parquet"), "no such file");
        let text = err.to_string();
        assert!(text.contains("/tmp/a.parquet"));
        assert!(text.contains("no such file"));
    }

    #[test]
    fn invalid_direction_names_the_vector() {
        assert_eq!(PeekError::InvalidDirection("(1, 1)".into()).to_string(), "Invalid direction: (1, 1)");
    }
}
