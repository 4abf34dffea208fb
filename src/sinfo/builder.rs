// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Fluent configuration surface for `sinfo`.

use std::time::Duration;

use log::warn;

use super::types::{NodeState, Sinfo, SinfoField};
use crate::error::Error;
use crate::exec;
use crate::types::{FormatSpec, Second};

/// Name of the external node/partition query tool.
const SINFO: &str = "sinfo";

/// Builder for one `sinfo` invocation.
#[derive(Debug, Default)]
pub struct SinfoBuilder {
    sinfo: Sinfo,
}

impl SinfoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The populated option model.
    pub fn model(&self) -> &Sinfo {
        &self.sinfo
    }

    /// Serialize the accumulated options into an argument vector.
    pub fn to_args(&self) -> Vec<String> {
        self.sinfo.to_args()
    }

    /// Display information about all partitions, including hidden ones and
    /// those unavailable to the user's group.
    pub fn all(&mut self) -> &mut Self {
        self.sinfo.all = true;
        self
    }

    /// Only report state information for non-responding (dead) nodes.
    pub fn dead(&mut self) -> &mut Self {
        self.sinfo.dead = true;
        self
    }

    /// Do not group node information on multiple nodes unless their
    /// configurations are identical.
    pub fn exact(&mut self) -> &mut Self {
        self.sinfo.exact = true;
        self
    }

    /// Show all partitions from the federation if a member of one.
    pub fn federation(&mut self) -> &mut Self {
        if self.sinfo.local {
            warn!("`federation` is overridden by `local`");
        }
        self.sinfo.federation = true;
        self
    }

    /// Do not print a header on the output.
    pub fn no_header(&mut self) -> &mut Self {
        self.sinfo.no_header = true;
        self
    }

    /// Print the state on a periodic basis, sleeping this long between
    /// reports.
    pub fn iterate(&mut self, interval: Second) -> &mut Self {
        self.sinfo.iterate = Some(interval);
        self
    }

    /// Show only partitions local to this cluster; overrides `federation`.
    pub fn local(&mut self) -> &mut Self {
        if self.sinfo.federation {
            warn!("`local` overrides `federation`");
        }
        self.sinfo.local = true;
        self
    }

    /// Print more detailed information. Ignored when a format is specified.
    pub fn long(&mut self) -> &mut Self {
        if self.has_format() {
            warn!("`long` is ignored because a format is specified");
        } else {
            self.sinfo.long = true;
        }
        self
    }

    /// Cluster to issue commands to; `all` queries every cluster.
    /// Repeated calls accumulate. Implicitly local.
    pub fn clusters(&mut self, name: &str) -> &mut Self {
        self.sinfo.clusters.push(name.to_string());
        self
    }

    /// Limit the query to the given node (name or range expression such as
    /// `"linux[00-17]"`). Repeated calls accumulate.
    pub fn nodes(&mut self, name: &str) -> &mut Self {
        self.sinfo.nodes.push(name.to_string());
        self
    }

    /// Don't convert units from their original type (e.g. 2048M stays M).
    pub fn dont_convert(&mut self) -> &mut Self {
        self.sinfo.dont_convert = true;
        self
    }

    /// Print one line per node and partition instead of the default
    /// partition-oriented format. Ignored when a format is specified.
    pub fn node_oriented(&mut self) -> &mut Self {
        if self.has_format() {
            warn!("`node_oriented` is ignored because a format is specified");
        } else {
            self.sinfo.node_oriented = true;
        }
        self
    }

    /// Raw `%`-style output format string (`-o`). Takes precedence over
    /// typed format fields.
    pub fn format(&mut self, fmt: &str) -> &mut Self {
        self.sinfo.format_raw = Some(fmt.to_string());
        self
    }

    /// Append a typed output field (`-O`). Repeated calls accumulate.
    pub fn format_field(&mut self, spec: FormatSpec<SinfoField>) -> &mut Self {
        self.sinfo.format_fields.push(spec);
        self
    }

    /// Limit the report to the given partition. Repeated calls accumulate.
    pub fn partition(&mut self, name: &str) -> &mut Self {
        self.sinfo.partitions.push(name.to_string());
        self
    }

    /// Only report state information for responding nodes.
    pub fn responding(&mut self) -> &mut Self {
        self.sinfo.responding = true;
        self
    }

    /// List the reasons nodes are in the down, drained, fail or failing
    /// state.
    pub fn list_reasons(&mut self) -> &mut Self {
        self.sinfo.list_reasons = true;
        self
    }

    /// List only a partition state summary with no node state details.
    /// Ignored when a format is specified.
    pub fn summarize(&mut self) -> &mut Self {
        if self.has_format() {
            warn!("`summarize` is ignored because a format is specified");
        } else {
            self.sinfo.summarize = true;
        }
        self
    }

    /// Report records in this order; the same field specification as the
    /// output format, fields comma-separated, each optionally preceded by
    /// `+`/`-` for ascending/descending.
    pub fn sort(&mut self, order: &str) -> &mut Self {
        self.sinfo.sort = Some(order.to_string());
        self
    }

    /// List only nodes in the given state. Repeated calls accumulate.
    pub fn state(&mut self, state: NodeState) -> &mut Self {
        self.sinfo.states.push(state);
        self
    }

    /// Only display information about reservations.
    pub fn reservation(&mut self) -> &mut Self {
        self.sinfo.reservation = true;
        self
    }

    /// Detailed event logging through program execution.
    pub fn verbose(&mut self) -> &mut Self {
        self.sinfo.verbose = true;
        self
    }

    /// Print version information and exit.
    pub fn version(&mut self) -> &mut Self {
        self.sinfo.version = true;
        self
    }

    /// Run the tool and return its captured stdout.
    pub fn run(&self) -> Result<String, Error> {
        exec::run_capture(SINFO, &self.sinfo.to_args())
    }

    /// Run the tool with inherited streams, waiting up to `timeout` for it
    /// to exit. Useful with `iterate`, which makes the tool loop.
    pub fn watch(&self, timeout: Option<Duration>) -> Result<(), Error> {
        exec::run_inherit(SINFO, &self.sinfo.to_args(), timeout)
    }

    fn has_format(&self) -> bool {
        self.sinfo.format_raw.is_some() || !self.sinfo.format_fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_listing_args() {
        let mut b = SinfoBuilder::new();
        b.long();
        assert_eq!(b.to_args(), vec!["-l"]);
    }

    #[test]
    fn test_node_listing_args() {
        let mut b = SinfoBuilder::new();
        b.node_oriented().exact().long();
        assert_eq!(b.to_args(), vec!["-e", "-l", "-N"]);
    }

    #[test]
    fn test_long_ignored_when_format_set() {
        let mut b = SinfoBuilder::new();
        b.format("%#P %.5a").long();
        assert_eq!(b.to_args(), vec!["-o", "%#P %.5a"]);
    }

    #[test]
    fn test_cluster_and_partition_lists() {
        let mut b = SinfoBuilder::new();
        b.clusters("alpha").clusters("beta").partition("debug");
        assert_eq!(b.to_args(), vec!["-M", "alpha,beta", "-p", "debug"]);
    }

    #[test]
    fn test_iterate_interval() {
        let mut b = SinfoBuilder::new();
        b.iterate(Second(10));
        assert_eq!(b.to_args(), vec!["-i", "10"]);
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let mut b = SinfoBuilder::new();
        b.all().dead().state(NodeState::Down);
        assert_eq!(b.to_args(), b.to_args());
    }
}
