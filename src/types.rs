// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Shared value types: unit newtypes, the Slurm duration grammar, job size
//! ranges and the bracket-aware node list splitter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A duration expressed in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minute(pub u32);

/// A duration expressed in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Second(pub u32);

/// A CPU frequency in kilohertz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KiloHertz(pub u32);

/// A memory or disk size in megabytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Megabyte(pub u32);

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Second {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for KiloHertz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Megabyte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A duration in the Slurm `days-hours:minutes:seconds` grammar.
///
/// The textual form is variable width: one to three colon-separated
/// components, optionally preceded by a `days-` prefix. With three
/// components they are read as `hours:minutes:seconds`, with two as
/// `minutes:seconds`, with one as bare `seconds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlurmDuration {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl SlurmDuration {
    pub fn new(days: u32, hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days as u64 * 86_400
            + self.hours as u64 * 3_600
            + self.minutes as u64 * 60
            + self.seconds as u64
    }
}

impl FromStr for SlurmDuration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| Error::InvalidValue {
            option: "duration",
            reason: format!("{reason}: {s:?}"),
        };

        let (days, rest) = match s.split_once('-') {
            Some((d, rest)) => (
                d.parse::<u32>().map_err(|_| invalid("bad day count"))?,
                rest,
            ),
            None => (0, s),
        };

        let parts: Vec<&str> = rest.split(':').collect();
        let mut nums = Vec::with_capacity(parts.len());
        for p in &parts {
            nums.push(p.parse::<u32>().map_err(|_| invalid("bad component"))?);
        }

        let (hours, minutes, seconds) = match nums.as_slice() {
            [h, m, sec] => (*h, *m, *sec),
            [m, sec] => (0, *m, *sec),
            [sec] => (0, 0, *sec),
            _ => return Err(invalid("expected 1 to 3 colon-separated components")),
        };

        Ok(Self {
            days,
            hours,
            minutes,
            seconds,
        })
    }
}

impl fmt::Display for SlurmDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days > 0 {
            write!(
                f,
                "{}-{:02}:{:02}:{:02}",
                self.days, self.hours, self.minutes, self.seconds
            )
        } else if self.hours > 0 {
            write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
        } else if self.minutes > 0 {
            write!(f, "{:02}:{:02}", self.minutes, self.seconds)
        } else {
            write!(f, "{}", self.seconds)
        }
    }
}

/// A job size range in the Slurm `start-end` grammar.
///
/// `max == None` represents the literal `infinite` upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSize {
    pub min: u32,
    pub max: Option<u32>,
}

impl FromStr for JobSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| Error::InvalidValue {
            option: "job size",
            reason: format!("{reason}: {s:?}"),
        };

        match s.split_once('-') {
            Some((min, max)) => {
                let min = min.parse().map_err(|_| invalid("bad lower bound"))?;
                let max = if max == "infinite" {
                    None
                } else {
                    Some(max.parse().map_err(|_| invalid("bad upper bound"))?)
                };
                Ok(Self { min, max })
            }
            None => {
                let n = s.parse().map_err(|_| invalid("bad node count"))?;
                Ok(Self {
                    min: n,
                    max: Some(n),
                })
            }
        }
    }
}

impl fmt::Display for JobSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}-{}", self.min, max),
            None => write!(f, "{}-infinite", self.min),
        }
    }
}

/// A job array index specification: a single index or an inclusive interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayIndex {
    Single(u32),
    Range(u32, u32),
}

impl From<u32> for ArrayIndex {
    fn from(i: u32) -> Self {
        ArrayIndex::Single(i)
    }
}

impl From<std::ops::RangeInclusive<u32>> for ArrayIndex {
    fn from(r: std::ops::RangeInclusive<u32>) -> Self {
        ArrayIndex::Range(*r.start(), *r.end())
    }
}

impl fmt::Display for ArrayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayIndex::Single(i) => write!(f, "{i}"),
            ArrayIndex::Range(a, b) => write!(f, "{a}-{b}"),
        }
    }
}

/// One field of a typed `-O`/`--Format` output specification.
///
/// Serialized as `Name:[.]size[suffix]` — a leading dot before the size
/// requests right justification.
#[derive(Debug, Clone)]
pub struct FormatSpec<F> {
    pub field: F,
    pub size: u32,
    pub right_justified: bool,
    pub suffix: String,
}

impl<F> FormatSpec<F> {
    pub fn new(field: F) -> Self {
        Self {
            field,
            size: 20,
            right_justified: false,
            suffix: String::new(),
        }
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn right_justified(mut self) -> Self {
        self.right_justified = true;
        self
    }

    pub fn suffix(mut self, suffix: &str) -> Self {
        self.suffix = suffix.to_string();
        self
    }
}

impl<F: fmt::Display> fmt::Display for FormatSpec<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let justified = if self.right_justified { "." } else { "" };
        write!(f, "{}:{}{}{}", self.field, justified, self.size, self.suffix)
    }
}

/// Split a comma-separated node list without splitting inside bracketed
/// range expressions: `node[01-04],login1` yields two tokens.
pub fn split_node_list(s: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();

    for c in s.chars() {
        match c {
            '[' => {
                depth += 1;
                current.push(c);
            }
            ']' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ',' if depth == 0 => out.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    out.push(current);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_round_trip() {
        let d: SlurmDuration = "2-03:04:05".parse().unwrap();
        assert_eq!(d, SlurmDuration::new(2, 3, 4, 5));
        assert_eq!(d.to_string(), "2-03:04:05");
    }

    #[test]
    fn test_duration_short_forms() {
        assert_eq!("30".parse::<SlurmDuration>().unwrap(), SlurmDuration::new(0, 0, 0, 30));
        assert_eq!("04:05".parse::<SlurmDuration>().unwrap(), SlurmDuration::new(0, 0, 4, 5));
        assert_eq!(
            "1-00:00:00".parse::<SlurmDuration>().unwrap(),
            SlurmDuration::new(1, 0, 0, 0)
        );
    }

    #[test]
    fn test_duration_total_seconds() {
        let d: SlurmDuration = "1-00:00:00".parse().unwrap();
        assert_eq!(d.total_seconds(), 86_400);
    }

    #[test]
    fn test_duration_rejects_garbage() {
        assert!("abc".parse::<SlurmDuration>().is_err());
        assert!("1:2:3:4".parse::<SlurmDuration>().is_err());
    }

    #[test]
    fn test_job_size_range() {
        let js: JobSize = "1-10".parse().unwrap();
        assert_eq!(js, JobSize { min: 1, max: Some(10) });
        assert_eq!(js.to_string(), "1-10");
    }

    #[test]
    fn test_job_size_infinite() {
        let js: JobSize = "3-infinite".parse().unwrap();
        assert_eq!(js.min, 3);
        assert_eq!(js.max, None);
        assert_eq!(js.to_string(), "3-infinite");
    }

    #[test]
    fn test_job_size_single_value() {
        let js: JobSize = "5".parse().unwrap();
        assert_eq!(js, JobSize { min: 5, max: Some(5) });
    }

    #[test]
    fn test_split_node_list_keeps_brackets_together() {
        assert_eq!(
            split_node_list("node[01-04],login1,gpu[1,3]"),
            vec!["node[01-04]", "login1", "gpu[1,3]"]
        );
    }

    #[test]
    fn test_split_node_list_single_entry() {
        assert_eq!(split_node_list("node[1-2]"), vec!["node[1-2]"]);
    }

    #[test]
    fn test_format_spec_display() {
        struct F;
        impl std::fmt::Display for F {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "Account")
            }
        }
        assert_eq!(FormatSpec::new(F).size(10).right_justified().to_string(), "Account:.10");
        assert_eq!(FormatSpec::new(F).to_string(), "Account:20");
    }
}
