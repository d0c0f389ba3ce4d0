use std::path::PathBuf;
use thiserror::Error;

/// How a failure is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Critical,
}

/// Missing or unusable user input. The action is aborted before any tool runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Please select an images folder.")]
    NoFolderSelected,
    #[error("Please provide paths for FFmpeg and FFplay.")]
    MissingToolPaths,
    #[error("No images found in the selected folder.")]
    NoImages { folder: PathBuf },
    #[error("No video found. Please generate a video first.")]
    NoVideo { path: PathBuf },
    #[error("Please provide the path to FFplay.")]
    MissingPlayerPath,
}

/// Failures from the filesystem or an external executable.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Failed to read folder {}: {source}", .path.display())]
    ReadFolder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write frame list {}: {source}", .path.display())]
    WriteScript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to start {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{tool} exited with {status}: {stderr}")]
    Failed {
        tool: String,
        status: String,
        stderr: String,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Tool(#[from] ToolError),
}

impl AppError {
    pub fn severity(&self) -> Severity {
        match self {
            AppError::Validation(_) => Severity::Warning,
            AppError::Tool(_) => Severity::Critical,
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
