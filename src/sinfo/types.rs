// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Option model, node state catalog and format field catalog for `sinfo`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::{FormatSpec, Second};

/// Node states reported and filtered by `sinfo -t`.
///
/// The catalog mirrors the tool's documented state names verbatim; both the
/// abbreviated and long spellings are distinct entries, as the tool treats
/// them as distinct filter tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeState {
    Alloc,
    Allocated,
    Cloud,
    Comp,
    Completing,
    Down,
    /// Matches nodes in DRAINING or DRAINED states.
    Drain,
    Drained,
    Draining,
    Fail,
    Future,
    Futr,
    Idle,
    Maint,
    Mix,
    Mixed,
    NoRespond,
    Npc,
    Perfctrs,
    Planned,
    PowerDown,
    PoweringDown,
    PoweredDown,
    PoweringUp,
    RebootIssued,
    RebootRequested,
    Resv,
    Reserved,
    Unk,
    Unknown,
}

impl NodeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeState::Alloc => "alloc",
            NodeState::Allocated => "allocated",
            NodeState::Cloud => "cloud",
            NodeState::Comp => "comp",
            NodeState::Completing => "completing",
            NodeState::Down => "down",
            NodeState::Drain => "drain",
            NodeState::Drained => "drained",
            NodeState::Draining => "draining",
            NodeState::Fail => "fail",
            NodeState::Future => "future",
            NodeState::Futr => "futr",
            NodeState::Idle => "idle",
            NodeState::Maint => "maint",
            NodeState::Mix => "mix",
            NodeState::Mixed => "mixed",
            NodeState::NoRespond => "no_respond",
            NodeState::Npc => "npc",
            NodeState::Perfctrs => "perfctrs",
            NodeState::Planned => "planned",
            NodeState::PowerDown => "power_down",
            NodeState::PoweringDown => "powering_down",
            NodeState::PoweredDown => "powered_down",
            NodeState::PoweringUp => "powering_up",
            NodeState::RebootIssued => "reboot_issued",
            NodeState::RebootRequested => "reboot_requested",
            NodeState::Resv => "resv",
            NodeState::Reserved => "reserved",
            NodeState::Unk => "unk",
            NodeState::Unknown => "unknown",
        }
    }

    const ALL: &'static [NodeState] = &[
        NodeState::Alloc,
        NodeState::Allocated,
        NodeState::Cloud,
        NodeState::Comp,
        NodeState::Completing,
        NodeState::Down,
        NodeState::Drain,
        NodeState::Drained,
        NodeState::Draining,
        NodeState::Fail,
        NodeState::Future,
        NodeState::Futr,
        NodeState::Idle,
        NodeState::Maint,
        NodeState::Mix,
        NodeState::Mixed,
        NodeState::NoRespond,
        NodeState::Npc,
        NodeState::Perfctrs,
        NodeState::Planned,
        NodeState::PowerDown,
        NodeState::PoweringDown,
        NodeState::PoweredDown,
        NodeState::PoweringUp,
        NodeState::RebootIssued,
        NodeState::RebootRequested,
        NodeState::Resv,
        NodeState::Reserved,
        NodeState::Unk,
        NodeState::Unknown,
    ];
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeState {
    type Err = Error;

    /// Comparison is case insensitive, matching the tool's state filters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeState::ALL
            .iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| Error::InvalidValue {
                option: "node state",
                reason: format!("unknown state {s:?}"),
            })
    }
}

/// Typed field names for the `-O/--Format` long output specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SinfoField {
    /// All fields available for this data type, bar-separated.
    All,
    /// Amount of allocated memory on a node.
    AllocMem,
    /// Allowed allocating nodes.
    AllocNodes,
    /// State/availability of a partition.
    Available,
    /// Cluster name when running in a federation.
    Cluster,
    Comment,
    /// Number of cores per socket.
    Cores,
    /// Number of CPUs per node.
    CPUs,
    /// CPU load of a node.
    CPUsLoad,
    /// CPUs by state, "allocated/idle/other/total".
    CPUsState,
    /// Default time for any job, "days-hours:minutes:seconds".
    DefaultTime,
    /// Temporary disk space per node in megabytes.
    Disk,
    Extra,
    /// Features available on the nodes.
    Features,
    /// Features currently active on the nodes.
    FeaturesAct,
    /// Free memory of a node.
    FreeMem,
    /// Generic resources associated with the nodes.
    Gres,
    /// Generic resources currently in use on the nodes.
    GresUsed,
    /// Groups which may use the nodes.
    Groups,
    /// Max CPUs per node available to jobs in the partition.
    MaxCPUsPerNode,
    /// Memory per node in megabytes.
    Memory,
    /// Node communication addresses.
    NodeAddr,
    /// Nodes by state, "allocated/idle".
    NodeAI,
    /// Nodes by state, "allocated/idle/other/total".
    NodeAIOT,
    /// Node hostnames.
    NodeHost,
    /// Node names.
    NodeList,
    /// Number of nodes.
    Nodes,
    /// Whether jobs may oversubscribe compute resources.
    OverSubscribe,
    /// Partition name, "*" appended to the default partition.
    Partition,
    /// Partition name, without the default marker.
    PartitionName,
    /// Node TCP port.
    Port,
    PreemptMode,
    /// Partition factor used by the multifactor priority plugin.
    PriorityJobFactor,
    /// Partition scheduling tier priority.
    PriorityTier,
    /// Reason a node is unavailable.
    Reason,
    /// Whether only user root may initiate jobs.
    Root,
    /// Maximum job size in nodes.
    Size,
    /// Extended processor information, sockets:cores:threads per node.
    SocketCoreThread,
    /// Number of sockets per node.
    Sockets,
    /// Node state, compact form.
    StateCompact,
    /// Node state, extended form.
    StateLong,
    /// Node state including all flags, e.g. "idle+cloud+power".
    StateComplete,
    /// Number of threads per core.
    Threads,
    /// Maximum time for any job, "days-hours:minutes:seconds".
    Time,
    /// Timestamp of the reason a node is unavailable.
    TimeStamp,
    /// User who set the reason a node is unavailable.
    User,
    /// User name and uid of who set the reason a node is unavailable.
    UserLong,
    /// Version of the running slurmd daemon.
    Version,
    /// Scheduling weight of the nodes.
    Weight,
}

impl SinfoField {
    pub fn name(&self) -> &'static str {
        match self {
            SinfoField::All => "All",
            SinfoField::AllocMem => "AllocMem",
            SinfoField::AllocNodes => "AllocNodes",
            SinfoField::Available => "Available",
            SinfoField::Cluster => "Cluster",
            SinfoField::Comment => "Comment",
            SinfoField::Cores => "Cores",
            SinfoField::CPUs => "CPUs",
            SinfoField::CPUsLoad => "CPUsLoad",
            SinfoField::CPUsState => "CPUsState",
            SinfoField::DefaultTime => "DefaultTime",
            SinfoField::Disk => "Disk",
            SinfoField::Extra => "Extra",
            SinfoField::Features => "Features",
            SinfoField::FeaturesAct => "features_act",
            SinfoField::FreeMem => "FreeMem",
            SinfoField::Gres => "Gres",
            SinfoField::GresUsed => "GresUsed",
            SinfoField::Groups => "Groups",
            SinfoField::MaxCPUsPerNode => "MaxCPUsPerNode",
            SinfoField::Memory => "Memory",
            SinfoField::NodeAddr => "NodeAddr",
            SinfoField::NodeAI => "NodeAI",
            SinfoField::NodeAIOT => "NodeAIOT",
            SinfoField::NodeHost => "NodeHost",
            SinfoField::NodeList => "NodeList",
            SinfoField::Nodes => "Nodes",
            SinfoField::OverSubscribe => "OverSubscribe",
            SinfoField::Partition => "Partition",
            SinfoField::PartitionName => "PartitionName",
            SinfoField::Port => "Port",
            SinfoField::PreemptMode => "PreemptMode",
            SinfoField::PriorityJobFactor => "PriorityJobFactor",
            SinfoField::PriorityTier => "PriorityTier",
            SinfoField::Reason => "Reason",
            SinfoField::Root => "Root",
            SinfoField::Size => "Size",
            SinfoField::SocketCoreThread => "SocketCoreThread",
            SinfoField::Sockets => "Sockets",
            SinfoField::StateCompact => "StateCompact",
            SinfoField::StateLong => "StateLong",
            SinfoField::StateComplete => "StateComplete",
            SinfoField::Threads => "Threads",
            SinfoField::Time => "Time",
            SinfoField::TimeStamp => "TimeStamp",
            SinfoField::User => "User",
            SinfoField::UserLong => "UserLong",
            SinfoField::Version => "Version",
            SinfoField::Weight => "Weight",
        }
    }
}

impl fmt::Display for SinfoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Option model for one `sinfo` invocation.
#[derive(Debug, Clone, Default)]
pub struct Sinfo {
    pub(crate) all: bool,
    pub(crate) dead: bool,
    pub(crate) exact: bool,
    pub(crate) federation: bool,
    pub(crate) no_header: bool,
    pub(crate) iterate: Option<Second>,
    pub(crate) local: bool,
    pub(crate) long: bool,
    pub(crate) clusters: Vec<String>,
    pub(crate) nodes: Vec<String>,
    pub(crate) dont_convert: bool,
    pub(crate) node_oriented: bool,
    pub(crate) format_raw: Option<String>,
    pub(crate) format_fields: Vec<FormatSpec<SinfoField>>,
    pub(crate) partitions: Vec<String>,
    pub(crate) responding: bool,
    pub(crate) list_reasons: bool,
    pub(crate) summarize: bool,
    pub(crate) sort: Option<String>,
    pub(crate) states: Vec<NodeState>,
    pub(crate) reservation: bool,
    pub(crate) verbose: bool,
    pub(crate) version: bool,
}

impl Sinfo {
    /// Serialize the populated options into an ordered argument vector.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if self.all {
            args.push("-a".to_string());
        }
        if self.dead {
            args.push("-d".to_string());
        }
        if self.exact {
            args.push("-e".to_string());
        }
        if self.federation {
            args.push("--federation".to_string());
        }
        if self.no_header {
            args.push("-h".to_string());
        }
        if let Some(secs) = self.iterate {
            args.push("-i".to_string());
            args.push(secs.to_string());
        }
        if self.local {
            args.push("--local".to_string());
        }
        if self.long {
            args.push("-l".to_string());
        }
        if !self.clusters.is_empty() {
            args.push("-M".to_string());
            args.push(self.clusters.join(","));
        }
        if !self.nodes.is_empty() {
            args.push("-n".to_string());
            args.push(self.nodes.join(","));
        }
        if self.dont_convert {
            args.push("--noconvert".to_string());
        }
        if self.node_oriented {
            args.push("-N".to_string());
        }
        if let Some(raw) = &self.format_raw {
            args.push("-o".to_string());
            args.push(raw.clone());
        } else if !self.format_fields.is_empty() {
            args.push("-O".to_string());
            args.push(
                self.format_fields
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }
        if !self.partitions.is_empty() {
            args.push("-p".to_string());
            args.push(self.partitions.join(","));
        }
        if self.responding {
            args.push("-r".to_string());
        }
        if self.list_reasons {
            args.push("-R".to_string());
        }
        if self.summarize {
            args.push("-s".to_string());
        }
        if let Some(order) = &self.sort {
            args.push("-S".to_string());
            args.push(order.clone());
        }
        if !self.states.is_empty() {
            args.push("-t".to_string());
            args.push(
                self.states
                    .iter()
                    .map(|s| s.as_str().to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }
        if self.reservation {
            args.push("-T".to_string());
        }
        if self.verbose {
            args.push("-v".to_string());
        }
        if self.version {
            args.push("-V".to_string());
        }

        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_model_serializes_to_nothing() {
        assert!(Sinfo::default().to_args().is_empty());
    }

    #[test]
    fn test_state_filter_serialization() {
        let sinfo = Sinfo {
            states: vec![NodeState::Alloc, NodeState::PowerDown],
            ..Default::default()
        };
        assert_eq!(sinfo.to_args(), vec!["-t", "alloc,power_down"]);
    }

    #[test]
    fn test_node_state_round_trip() {
        for s in ["idle", "drain", "reboot_issued", "mix"] {
            assert_eq!(s.parse::<NodeState>().unwrap().as_str(), s);
        }
    }

    #[test]
    fn test_node_state_is_case_insensitive() {
        assert_eq!("IDLE".parse::<NodeState>().unwrap(), NodeState::Idle);
        assert_eq!("Drained".parse::<NodeState>().unwrap(), NodeState::Drained);
    }

    #[test]
    fn test_unknown_node_state_is_rejected() {
        assert!("bogus".parse::<NodeState>().is_err());
    }

    #[test]
    fn test_raw_format_takes_the_short_flag() {
        let sinfo = Sinfo {
            format_raw: Some("%#P %.5a".to_string()),
            ..Default::default()
        };
        assert_eq!(sinfo.to_args(), vec!["-o", "%#P %.5a"]);
    }

    #[test]
    fn test_typed_format_takes_the_long_flag() {
        let sinfo = Sinfo {
            format_fields: vec![
                FormatSpec::new(SinfoField::Partition).size(10),
                FormatSpec::new(SinfoField::StateLong).size(11).right_justified(),
            ],
            ..Default::default()
        };
        assert_eq!(sinfo.to_args(), vec!["-O", "Partition:10,StateLong:.11"]);
    }
}
