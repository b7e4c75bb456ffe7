//! Git command runner for diffspell.
//!
//! Git's stdout is handed to a consumer while the process is still running,
//! so a large diff never has to be buffered in full. Stderr is drained on a
//! helper thread and only used for the failure message.

use crate::error::{Result, SpellError};
use std::io::{BufReader, Read};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use tracing::debug;

/// Run a git command and stream its stdout through `consume`.
///
/// The process is always awaited. A non-zero exit is reported as
/// `SpellError::DiffSource` even when `consume` already succeeded; an error
/// from `consume` wins over the exit status, and the process is killed so it
/// does not block on a full pipe.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
/// * `consume` - Reader callback, typically the diff parser
pub fn stream_git<P, T, F>(cwd: P, args: &[&str], consume: F) -> Result<T>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufReader<std::process::ChildStdout>) -> Result<T>,
{
    let cwd = cwd.as_ref();
    debug!(cwd = %cwd.display(), args = ?args, "git: spawning");

    let mut child = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            SpellError::DiffSource(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let stderr_pump = child.stderr.take().map(|mut stderr| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = stderr.read_to_end(&mut buf);
            String::from_utf8_lossy(&buf).trim().to_string()
        })
    });

    let Some(stdout) = child.stdout.take() else {
        let _ = child.kill();
        let _ = child.wait();
        return Err(SpellError::DiffSource(
            "git stdout was not captured".to_string(),
        ));
    };
    let mut reader = BufReader::new(stdout);

    let consumed = consume(&mut reader);
    drop(reader);

    if consumed.is_err() {
        let _ = child.kill();
    }

    let status = child.wait().map_err(|e| {
        SpellError::DiffSource(format!(
            "failed to wait for git {}: {}",
            args.first().unwrap_or(&""),
            e
        ))
    })?;
    let stderr = stderr_pump
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default();

    let value = consumed?;
    debug!(status = %status, "git: exited");

    if status.success() {
        Ok(value)
    } else {
        let exit_code = status.code().unwrap_or(-1);
        Err(SpellError::DiffSource(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            stderr
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::create_test_repo;
    use std::io::BufRead;

    fn count_lines(reader: &mut BufReader<std::process::ChildStdout>) -> Result<usize> {
        Ok(reader.lines().count())
    }

    #[test]
    fn test_stream_git_success() {
        let temp_dir = create_test_repo();
        let lines = stream_git(temp_dir.path(), &["log", "--oneline"], count_lines).unwrap();
        assert_eq!(lines, 1);
    }

    #[test]
    fn test_stream_git_failure_returns_diff_source_error() {
        let temp_dir = create_test_repo();
        let err = stream_git(
            temp_dir.path(),
            &["diff", "no-such-ref...HEAD"],
            count_lines,
        )
        .unwrap_err();

        assert!(matches!(err, SpellError::DiffSource(_)));
        assert!(err.to_string().contains("exit code"));
    }

    #[test]
    fn test_stream_git_consumer_error_wins() {
        let temp_dir = create_test_repo();
        let err = stream_git(temp_dir.path(), &["log"], |_| -> Result<()> {
            Err(SpellError::MalformedInput("boom".to_string()))
        })
        .unwrap_err();

        assert!(matches!(err, SpellError::MalformedInput(_)));
    }

    #[test]
    fn test_stream_git_missing_directory_is_diff_source_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");
        let err = stream_git(&missing, &["status"], count_lines).unwrap_err();
        assert!(matches!(err, SpellError::DiffSource(_)));
    }
}
