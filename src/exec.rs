// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Child process invocation for the external Slurm tools.
//!
//! Two variants: capture everything the tool writes to stdout, or inherit
//! the current process's streams and just wait. Both run the tool with an
//! explicit argument vector — arguments never pass through a shell.

use std::io;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use log::debug;

use crate::error::Error;

/// Poll interval while waiting for a stream-inheriting child to exit.
const WAIT_POLL: Duration = Duration::from_millis(100);

/// Run the tool and return its captured stdout.
///
/// A missing binary, a spawn failure and a non-zero exit status each map to
/// a distinct error kind; stderr is carried along on failure.
pub fn run_capture(program: &str, args: &[String]) -> Result<String, Error> {
    debug!("running {} {:?}", program, args);

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| spawn_error(program, e))?;

    if !output.status.success() {
        return Err(Error::ToolFailed {
            program: program.to_string(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run the tool with inherited stdout/stderr and block until it exits, or
/// until `timeout` elapses, in which case the child is killed.
pub fn run_inherit(
    program: &str,
    args: &[String],
    timeout: Option<Duration>,
) -> Result<(), Error> {
    debug!("running {} {:?} (inherited streams)", program, args);

    let mut child = Command::new(program)
        .args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| spawn_error(program, e))?;

    let deadline = timeout.map(|t| Instant::now() + t);

    let status = loop {
        match child.try_wait().map_err(|e| spawn_error(program, e))? {
            Some(status) => break status,
            None => {
                if let Some(deadline) = deadline {
                    if Instant::now() >= deadline {
                        // Best effort: the child may have exited in between.
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(Error::Timeout {
                            program: program.to_string(),
                            secs: timeout.unwrap_or_default().as_secs(),
                        });
                    }
                }
                thread::sleep(WAIT_POLL);
            }
        }
    };

    if !status.success() {
        return Err(Error::ToolFailed {
            program: program.to_string(),
            code: status.code(),
            stderr: String::new(),
        });
    }

    Ok(())
}

fn spawn_error(program: &str, e: io::Error) -> Error {
    if e.kind() == io::ErrorKind::NotFound {
        Error::ToolNotFound {
            program: program.to_string(),
        }
    } else {
        Error::Spawn {
            program: program.to_string(),
            source: e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_capture_returns_stdout() {
        init_logging();
        let out = run_capture("echo", &["hello".to_string()]).unwrap();
        assert_eq!(out.trim(), "hello");
    }

    #[test]
    fn test_missing_tool_is_distinct_error() {
        let err = run_capture("definitely-not-a-slurm-tool", &[]).unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { .. }));
    }

    #[test]
    fn test_nonzero_exit_carries_status() {
        let err = run_capture("false", &[]).unwrap_err();
        match err {
            Error::ToolFailed { code, .. } => assert_eq!(code, Some(1)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_inherit_waits_for_exit() {
        run_inherit("true", &[], None).unwrap();
    }

    #[test]
    fn test_inherit_times_out() {
        let err = run_inherit(
            "sleep",
            &["5".to_string()],
            Some(Duration::from_millis(200)),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Timeout { .. }));
    }
}
