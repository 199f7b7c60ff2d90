use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Every way a run can end early. The entry point maps each kind to an exit code.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Path does not exist: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Invalid value: {0}")]
    InvalidValue(String),
    #[error("Interrupted by user.")]
    Interrupted,
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl AuditError {
    /// A user interrupt is a graceful stop, not a failure.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AuditError::Interrupted => ExitCode::SUCCESS,
            AuditError::NotFound(_) | AuditError::InvalidValue(_) | AuditError::Unexpected(_) => {
                ExitCode::FAILURE
            }
        }
    }

    /// Classifies an I/O failure on `path`.
    pub fn from_io(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => AuditError::NotFound(path),
            std::io::ErrorKind::Interrupted => AuditError::Interrupted,
            _ => AuditError::Unexpected(
                anyhow::Error::new(err).context(format!("Failed to inspect {}", path.display())),
            ),
        }
    }

    pub fn log(&self) {
        match self {
            AuditError::Interrupted => log::info!("{}", self),
            AuditError::NotFound(_) | AuditError::InvalidValue(_) => log::error!("{}", self),
            AuditError::Unexpected(err) => log::error!("Unexpected error: {:?}", err),
        }
    }
}
