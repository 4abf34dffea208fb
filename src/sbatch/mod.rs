// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Typed interface to the `sbatch` batch submission tool.
//!
//! `SbatchBuilder` accumulates options into an `Sbatch` record, which
//! serializes to an ordered argument vector. `submit()` runs the tool and
//! parses the acknowledged job id.

pub mod builder;
pub mod types;

pub use builder::{DependencyBuilder, SbatchBuilder};
pub use types::{
    AcctgFreq, CpuBinding, CpuFreq, Exclusive, FrequencyPolicy, Hint, Job, MailType, MemorySpec,
    OpenMode, Propagate, Sbatch,
};
