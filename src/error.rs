// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Error taxonomy for builders, invocation and output parsing.

use std::io;

/// Errors reported by builders, the process invoker and the table parsers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two different members of a mutually exclusive option group were set.
    #[error("{attempted} is mutually exclusive with already-set {existing}")]
    Conflict {
        attempted: &'static str,
        existing: &'static str,
    },

    /// A value does not fit the option's contract.
    #[error("invalid value for {option}: {reason}")]
    InvalidValue {
        option: &'static str,
        reason: String,
    },

    /// The external binary was not found on PATH.
    #[error("{program} not found on PATH")]
    ToolNotFound { program: String },

    /// Spawning the external binary failed for a reason other than lookup.
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The external binary ran but exited non-zero (or was killed by signal,
    /// in which case `code` is `None`).
    #[error("{program} exited with status {code:?}: {stderr}")]
    ToolFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The external binary did not exit within the allowed wait time.
    #[error("{program} did not exit within {secs} s")]
    Timeout { program: String, secs: u64 },

    /// A line of external tool output could not be parsed.
    #[error("cannot parse line {line} ({reason}): {content:?}")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message_names_both_options() {
        let err = Error::Conflict {
            attempted: "--hint",
            existing: "-B/--extra-node-info",
        };
        let msg = err.to_string();
        assert!(msg.contains("--hint"));
        assert!(msg.contains("-B/--extra-node-info"));
    }

    #[test]
    fn test_parse_message_carries_line_number() {
        let err = Error::Parse {
            line: 3,
            content: "garbage".to_string(),
            reason: "wrong field count".to_string(),
        };
        assert!(err.to_string().contains("line 3"));
    }
}
