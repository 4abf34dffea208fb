// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Typed interface to the `squeue` job queue query tool.

pub mod builder;
pub mod types;

pub use builder::SqueueBuilder;
pub use types::{JobStateCode, Squeue, SqueueField};
