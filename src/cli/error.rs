//! CLI-level errors (wraps tree errors)

use thiserror::Error;

use crate::errors::TreeError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Config { .. } => crate::exitcode::CONFIG,
            CliError::Tree(e) => match e {
                TreeError::Io(_) => crate::exitcode::IOERR,
                _ => crate::exitcode::SOFTWARE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_config_error_when_mapping_then_uses_config_exit_code() {
        let err = CliError::Config {
            message: "bad".into(),
        };
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
        assert_eq!(err.to_string(), "config error: bad");
    }

    #[test]
    fn given_tree_error_when_mapping_then_uses_software_exit_code() {
        let err = CliError::from(TreeError::RootAlreadySet);
        assert_eq!(err.exit_code(), crate::exitcode::SOFTWARE);
    }
}
