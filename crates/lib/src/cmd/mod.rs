//! Running external commands and staging bytes in temporary files.

use std::{
    io::{self, Write},
    process::{Command, Stdio},
    thread,
};

use tempfile::NamedTempFile;
use tracing::debug;

pub mod errors;

pub use errors::CmdError;

/// Runs `cmd` (program followed by its arguments) and returns its stdout.
///
/// When `stdin` is given it is written to the child's standard input on a
/// separate thread, so large inputs cannot block on a full output pipe.
///
/// # Errors
///
/// - [`CmdError::MissingCommand`] if `cmd` is empty or the program does not
///   exist
/// - [`CmdError::Shell`] if the program exits with a non-zero code
/// - [`CmdError::Io`] for any other spawn or pipe failure
///
/// ```no_run
/// # use genery::cmd::runcmd;
/// let out = runcmd(&["echo", "hello"], None)?;
/// assert_eq!(out, b"hello\n");
/// # Ok::<(), genery::cmd::CmdError>(())
/// ```
pub fn runcmd<S: AsRef<str>>(cmd: &[S], stdin: Option<&[u8]>) -> Result<Vec<u8>, CmdError> {
    let parts: Vec<&str> = cmd.iter().map(|part| part.as_ref()).collect();
    let command_line = parts.join(" ");
    let Some((program, args)) = parts.split_first() else {
        return Err(CmdError::MissingCommand {
            command: command_line,
        });
    };

    debug!(command = %command_line, "Running command");
    let mut child = Command::new(program)
        .args(args)
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => CmdError::MissingCommand {
                command: program.to_string(),
            },
            _ => CmdError::Io(err),
        })?;

    let writer = match (stdin, child.stdin.take()) {
        (Some(input), Some(mut pipe)) => {
            let input = input.to_vec();
            Some(thread::spawn(move || pipe.write_all(&input)))
        }
        _ => None,
    };

    let output = child.wait_with_output()?;
    if let Some(writer) = writer {
        match writer.join() {
            Ok(Ok(())) => {}
            // The child may exit without reading all of its input
            Ok(Err(err)) if err.kind() == io::ErrorKind::BrokenPipe => {}
            Ok(Err(err)) => return Err(CmdError::Io(err)),
            Err(_) => return Err(io::Error::other("stdin writer panicked").into()),
        }
    }

    if !output.status.success() {
        let exit_code = output.status.code().unwrap_or(-1);
        debug!(command = %command_line, exit_code, "Command failed");
        return Err(CmdError::Shell {
            command: command_line,
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(output.stdout)
}

/// Writes `bytes` to a new temporary file.
///
/// The file is deleted when the returned handle is dropped; use
/// [`NamedTempFile::path`] to hand it to code that expects a file name.
pub fn as_file(bytes: &[u8]) -> Result<NamedTempFile, CmdError> {
    let mut file = NamedTempFile::new()?;
    file.write_all(bytes)?;
    file.flush()?;
    debug!(path = %file.path().display(), size = bytes.len(), "Wrote temporary file");
    Ok(file)
}
