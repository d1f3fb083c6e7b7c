use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Problems reading a descriptor file from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

/// Failures raised while generating or writing source. Arguments are
/// checked at the call that receives them; nothing is deferred until an
/// enclosing block is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    InvalidArgument {
        problem: String,
        details: String,
    },
    Filesystem {
        problem: String,
        details: String,
        filename: PathBuf,
    },
}

impl GenerationError {
    pub fn invalid(problem: impl Into<String>, details: impl Into<String>) -> GenerationError {
        GenerationError::InvalidArgument {
            problem: problem.into(),
            details: details.into(),
        }
    }

    pub fn filesystem(problem: &str, error: &std::io::Error, filename: &Path) -> GenerationError {
        GenerationError::Filesystem {
            problem: problem.to_string(),
            details: error.to_string(),
            filename: filename.to_path_buf(),
        }
    }

    pub fn problem(&self) -> &str {
        match self {
            GenerationError::InvalidArgument { problem, .. } => problem,
            GenerationError::Filesystem { problem, .. } => problem,
        }
    }

    pub fn details(&self) -> &str {
        match self {
            GenerationError::InvalidArgument { details, .. } => details,
            GenerationError::Filesystem { details, .. } => details,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, GenerationError::InvalidArgument { .. })
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::InvalidArgument { problem, details } => {
                write!(f, "{}: {}", problem, details)
            }
            GenerationError::Filesystem {
                problem,
                details,
                filename,
            } => write!(f, "{} {}: {}", problem, filename.display(), details),
        }
    }
}

impl std::error::Error for GenerationError {}
