// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Typed interface to the `sinfo` node and partition query tool.
//!
//! `SinfoBuilder` covers the full flag surface; `partitions()` and `nodes()`
//! are shortcuts for the two long listings this crate knows how to parse.

pub mod builder;
pub mod parser;
pub mod types;

use anyhow::{Context, Result};

pub use builder::SinfoBuilder;
pub use parser::{parse_nodes, parse_partitions, Node, Partition};
pub use types::{NodeState, Sinfo, SinfoField};

/// Query the partition table (`sinfo -l`) and parse it into records.
pub fn partitions() -> Result<Vec<Partition>> {
    let mut builder = SinfoBuilder::new();
    builder.long();
    let output = builder.run().context("failed to query partitions")?;
    parse_partitions(&output).context("failed to parse partition listing")
}

/// Query the node table (`sinfo -Nel`) and parse it into records.
pub fn nodes() -> Result<Vec<Node>> {
    let mut builder = SinfoBuilder::new();
    builder.node_oriented().exact().long();
    let output = builder.run().context("failed to query nodes")?;
    parse_nodes(&output).context("failed to parse node listing")
}
