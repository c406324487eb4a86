//! Error types for running external commands.

use thiserror::Error;

/// Structured error types for command execution.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CmdError {
    /// The executable could not be found
    #[error("Command not found: {command}")]
    MissingCommand { command: String },

    /// The command ran and exited with a non-zero code
    #[error(
        "The command `{command}` failed with exit code {exit_code}\n\
         ------------- stdout -------------\n\
         {stdout}\
         ------------- stderr -------------\n\
         {stderr}"
    )]
    Shell {
        command: String,
        exit_code: i32,
        stdout: String,
        stderr: String,
    },

    /// Spawning the process or handling its pipes or files failed
    #[error("Command I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CmdError {
    /// Check if the executable was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, CmdError::MissingCommand { .. })
    }

    /// Get the exit code if the command ran and failed
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CmdError::Shell { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }

    /// The executable name of a failed command
    pub fn executable(&self) -> Option<&str> {
        match self {
            CmdError::Shell { command, .. } | CmdError::MissingCommand { command } => {
                command.split_whitespace().next()
            }
            CmdError::Io(_) => None,
        }
    }
}

impl From<CmdError> for crate::Error {
    fn from(err: CmdError) -> Self {
        crate::Error::Cmd(err)
    }
}
