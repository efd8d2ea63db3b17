use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of every [`Error`].
///
/// Callers abort startup on any of these; the kind only tells them what
/// went wrong, not whether it is recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A file could not be read, created or written.
    Io,
    /// A directive command failed, timed out, or could not be started.
    Directive,
    /// The document does not decode into (or encode from) a configuration.
    Format,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("The sub process exited with {}: {}", .status, .stderr)]
    SubProcessExit { status: String, stderr: String },

    #[error("Error with sub process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("Command did not finish within {:?}", .timeout)]
    DeadlineExceeded { timeout: Duration },

    #[error("Deadline already elapsed before the command could start")]
    DeadlineElapsed,

    #[error("Directive command `{}` failed: {}", .command, .source)]
    Directive {
        command: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("Malformed configuration document: {}", .0)]
    Format(serde_yaml::Error),

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(std::io::Error),
}

impl Error {
    pub fn directive_error(command: String, source: Error) -> Self {
        Self::Directive {
            command,
            source: Box::new(source),
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } | Self::Stdio(_) => ErrorKind::Io,
            Self::Yaml { .. } | Self::Format(_) => ErrorKind::Format,
            Self::Directive { .. }
            | Self::SubProcess(_)
            | Self::SubProcessExit { .. }
            | Self::DeadlineExceeded { .. }
            | Self::DeadlineElapsed => ErrorKind::Directive,
        }
    }

    /// The command string of a failed directive, if this is one.
    pub fn directive_command(&self) -> Option<&str> {
        match self {
            Self::Directive { command, .. } => Some(command),
            _ => None,
        }
    }
}
