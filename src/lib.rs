// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Typed builders for the Slurm command line tools.
//!
//! Architecture:
//! - One option model per external tool (`Sbatch`, `Sinfo`, `Squeue`),
//!   populated through a fluent builder and serialized into an ordered
//!   argument vector
//! - A small process invoker that runs the tool with that vector and
//!   captures stdout (or inherits the streams and waits)
//! - Table parsers that turn the `sinfo` long listings into typed
//!   `Partition` and `Node` records
//!
//! ```no_run
//! use slurm_wrap::sbatch::SbatchBuilder;
//!
//! fn submit() -> Result<u32, slurm_wrap::Error> {
//!     let mut job = SbatchBuilder::new();
//!     job.job_name("preprocess")
//!         .partition("batch")
//!         .nodes(4)
//!         .script(std::path::Path::new("job.sh"));
//!     job.submit()
//! }
//! ```
//!
//! Configuration mistakes (conflicting options, bad value shapes) surface
//! at the builder call, before any process is spawned; tool and parse
//! failures surface as distinct [`Error`] kinds.

pub mod error;
pub mod exec;
pub mod sbatch;
pub mod sinfo;
pub mod squeue;
pub mod types;

pub use error::Error;
pub use types::{ArrayIndex, FormatSpec, JobSize, KiloHertz, Megabyte, Minute, Second, SlurmDuration};
