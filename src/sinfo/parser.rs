// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Parsers for the `sinfo -l` partition listing and the `sinfo -Nel` node
//! listing.
//!
//! Both listings start with two header lines (a timestamp and the column
//! titles) followed by one whitespace-delimited record per line. A
//! malformed data line fails the whole parse; partial cluster state is
//! worse than no answer.

use serde::{Deserialize, Serialize};

use super::types::NodeState;
use crate::error::Error;
use crate::types::{split_node_list, JobSize, Megabyte, SlurmDuration};

/// Header lines preceding the data rows in both long listings.
const HEADER_LINES: usize = 2;

/// One row of the `sinfo -l` partition listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    pub name: String,
    /// Whether this is the cluster's default partition (trailing `*` in the
    /// listing, stripped from `name`).
    pub default: bool,
    /// `true` for `up`, `false` for `down`.
    pub availability: bool,
    /// Maximum job run time; `None` when the listing reports `infinite`.
    pub time_limit: Option<SlurmDuration>,
    pub job_size: JobSize,
    /// Whether only user root may initiate jobs.
    pub root: bool,
    pub oversubscribe: bool,
    pub groups: String,
    pub nodes: u32,
    pub state: NodeState,
    pub node_list: Vec<String>,
}

/// One row of the `sinfo -Nel` node listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub nodes: u32,
    pub partition: String,
    pub state: NodeState,
    pub cpus: u32,
    /// Socket:core:thread layout as reported, e.g. `2:8:2`.
    pub socket_core_thread: String,
    pub memory: Megabyte,
    pub tmp_disk: u32,
    pub weight: u32,
    pub avail_features: String,
    pub reason: String,
}

/// Parse the output of `sinfo -l` into partition records.
pub fn parse_partitions(output: &str) -> Result<Vec<Partition>, Error> {
    data_lines(output)
        .map(|(line_no, raw)| parse_partition_line(line_no, raw))
        .collect()
}

/// Parse the output of `sinfo -Nel` into node records.
pub fn parse_nodes(output: &str) -> Result<Vec<Node>, Error> {
    data_lines(output)
        .map(|(line_no, raw)| parse_node_line(line_no, raw))
        .collect()
}

/// Iterate over the data lines with their 1-based line numbers, skipping the
/// fixed header and any blank trailing lines.
fn data_lines(output: &str) -> impl Iterator<Item = (usize, &str)> {
    output
        .lines()
        .enumerate()
        .skip(HEADER_LINES)
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| (i + 1, l))
}

fn parse_partition_line(line_no: usize, raw: &str) -> Result<Partition, Error> {
    let err = |reason: String| Error::Parse {
        line: line_no,
        content: raw.to_string(),
        reason,
    };

    let fields: Vec<&str> = raw.split_whitespace().collect();
    if fields.len() != 10 {
        return Err(err(format!("expected 10 fields, got {}", fields.len())));
    }

    let (name, default) = strip_marker(fields[0]);
    let availability = fields[1] == "up";
    let time_limit = if fields[2] == "infinite" {
        None
    } else {
        Some(
            fields[2]
                .parse::<SlurmDuration>()
                .map_err(|_| err(format!("bad time limit {:?}", fields[2])))?,
        )
    };
    let job_size = fields[3]
        .parse::<JobSize>()
        .map_err(|_| err(format!("bad job size {:?}", fields[3])))?;
    let root = fields[4].eq_ignore_ascii_case("yes");
    let oversubscribe = fields[5].eq_ignore_ascii_case("yes");
    let nodes = fields[7]
        .parse()
        .map_err(|_| err(format!("bad node count {:?}", fields[7])))?;
    let (state, _) = strip_marker(fields[8]);
    let state = state
        .parse::<NodeState>()
        .map_err(|_| err(format!("unknown state {:?}", fields[8])))?;

    Ok(Partition {
        name: name.to_string(),
        default,
        availability,
        time_limit,
        job_size,
        root,
        oversubscribe,
        groups: fields[6].to_string(),
        nodes,
        state,
        node_list: split_node_list(fields[9]),
    })
}

fn parse_node_line(line_no: usize, raw: &str) -> Result<Node, Error> {
    let err = |reason: String| Error::Parse {
        line: line_no,
        content: raw.to_string(),
        reason,
    };

    let fields: Vec<&str> = raw.split_whitespace().collect();
    if fields.len() < 11 {
        return Err(err(format!("expected 11 fields, got {}", fields.len())));
    }

    let nodes = fields[1]
        .parse()
        .map_err(|_| err(format!("bad node count {:?}", fields[1])))?;
    let (state, _) = strip_marker(fields[3]);
    let state = state
        .parse::<NodeState>()
        .map_err(|_| err(format!("unknown state {:?}", fields[3])))?;
    let cpus = fields[4]
        .parse()
        .map_err(|_| err(format!("bad cpu count {:?}", fields[4])))?;
    let memory = Megabyte(
        fields[6]
            .parse()
            .map_err(|_| err(format!("bad memory size {:?}", fields[6])))?,
    );
    let tmp_disk = fields[7]
        .parse()
        .map_err(|_| err(format!("bad tmp disk size {:?}", fields[7])))?;
    let weight = fields[8]
        .parse()
        .map_err(|_| err(format!("bad weight {:?}", fields[8])))?;

    Ok(Node {
        name: fields[0].to_string(),
        nodes,
        partition: fields[2].to_string(),
        state,
        cpus,
        socket_core_thread: fields[5].to_string(),
        memory,
        tmp_disk,
        weight,
        avail_features: fields[9].to_string(),
        // The reason column may contain spaces; everything after the
        // features column belongs to it.
        reason: fields[10..].join(" "),
    })
}

/// Strip the trailing `*` marker (default partition, current state) if
/// present, reporting whether it was there.
fn strip_marker(field: &str) -> (&str, bool) {
    match field.strip_suffix('*') {
        Some(stripped) => (stripped, true),
        None => (field, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARTITION_LISTING: &str = "\
Fri Jul 17 12:34:56 2026
PARTITION AVAIL  TIMELIMIT   JOB_SIZE ROOT OVERSUBS     GROUPS  NODES       STATE NODELIST
debug* up 1-00:00:00 1-10 no no all 2 idle node[1-2]
";

    const NODE_LISTING: &str = "\
Fri Jul 17 12:34:56 2026
NODELIST   NODES PARTITION       STATE CPUS    S:C:T MEMORY TMP_DISK WEIGHT AVAIL_FE REASON
node1 1 debug* idle 16 2:8:1 64000 0 1 (null) none
node2 1 debug* drained* 16 2:8:1 64000 0 1 (null) not responding
";

    #[test]
    fn test_partition_listing_scenario() {
        let partitions = parse_partitions(PARTITION_LISTING).unwrap();
        assert_eq!(partitions.len(), 1);

        let p = &partitions[0];
        assert_eq!(p.name, "debug");
        assert!(p.default);
        assert!(p.availability);
        assert_eq!(p.time_limit.unwrap().total_seconds(), 86_400);
        assert_eq!(p.job_size, JobSize { min: 1, max: Some(10) });
        assert!(!p.root);
        assert!(!p.oversubscribe);
        assert_eq!(p.groups, "all");
        assert_eq!(p.nodes, 2);
        assert_eq!(p.state, NodeState::Idle);
        assert_eq!(p.node_list, vec!["node[1-2]"]);
    }

    #[test]
    fn test_infinite_time_limit() {
        let listing = "\
header
header
main up infinite 1-infinite no yes all 64 alloc node[01-64]
";
        let partitions = parse_partitions(listing).unwrap();
        assert_eq!(partitions[0].time_limit, None);
        assert_eq!(partitions[0].job_size.max, None);
    }

    #[test]
    fn test_node_listing() {
        let nodes = parse_nodes(NODE_LISTING).unwrap();
        assert_eq!(nodes.len(), 2);

        assert_eq!(nodes[0].name, "node1");
        assert_eq!(nodes[0].state, NodeState::Idle);
        assert_eq!(nodes[0].memory, Megabyte(64_000));
        assert_eq!(nodes[0].socket_core_thread, "2:8:1");
        assert_eq!(nodes[0].reason, "none");

        // Trailing state marker is stripped, multi-word reason survives.
        assert_eq!(nodes[1].state, NodeState::Drained);
        assert_eq!(nodes[1].reason, "not responding");
    }

    #[test]
    fn test_malformed_line_fails_whole_parse() {
        let listing = "\
header
header
debug* up 1-00:00:00
";
        let err = parse_partitions(listing).unwrap_err();
        match err {
            Error::Parse { line, reason, .. } => {
                assert_eq!(line, 3);
                assert!(reason.contains("expected 10 fields"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_state_fails_whole_parse() {
        let listing = "\
header
header
debug up 1:00:00 1-2 no no all 2 sideways node1
";
        assert!(matches!(
            parse_partitions(listing).unwrap_err(),
            Error::Parse { .. }
        ));
    }

    #[test]
    fn test_records_serialize_to_json() {
        let partitions = parse_partitions(PARTITION_LISTING).unwrap();
        let json = serde_json::to_string(&partitions).unwrap();
        assert!(json.contains("\"name\":\"debug\""));
        assert!(json.contains("\"default\":true"));
    }
}
