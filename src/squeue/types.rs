// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Option model, job state catalog and format field catalog for `squeue`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::{FormatSpec, Second};

/// Job states as reported by the queue (`squeue -t` filters and the State
/// output columns). Both the extended and the compact spelling parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStateCode {
    /// Terminated due to launch failure, typically a hardware failure.
    BootFail,
    /// Explicitly cancelled by the user or administrator.
    Cancelled,
    /// Terminated all processes on all nodes with an exit code of zero.
    Completed,
    /// Resources allocated, waiting for them to become ready for use.
    Configuring,
    /// In the process of completing; some processes may still be active.
    Completing,
    /// Terminated on deadline.
    Deadline,
    /// Terminated with non-zero exit code or other failure condition.
    Failed,
    /// Terminated due to failure of one or more allocated nodes.
    NodeFail,
    /// Experienced an out of memory error.
    OutOfMemory,
    /// Awaiting resource allocation.
    Pending,
    /// Terminated due to preemption.
    Preempted,
    /// Currently has an allocation.
    Running,
    /// Held after its requested reservation was deleted.
    ResvDelHold,
    /// Being requeued by a federation.
    RequeueFed,
    /// Held job being requeued.
    RequeueHold,
    /// Completing job being requeued.
    Requeued,
    /// About to change size.
    Resizing,
    /// Sibling removed from cluster because another cluster started the job.
    Revoked,
    /// Being signaled.
    Signaling,
    /// Requeued in a special state, typically from EpilogSlurmctld.
    SpecialExit,
    /// Staging out files.
    StageOut,
    /// Stopped with SIGSTOP; CPUs retained.
    Stopped,
    /// Suspended; CPUs released for other jobs.
    Suspended,
    /// Terminated upon reaching its time limit.
    Timeout,
}

impl JobStateCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStateCode::BootFail => "BOOT_FAIL",
            JobStateCode::Cancelled => "CANCELLED",
            JobStateCode::Completed => "COMPLETED",
            JobStateCode::Configuring => "CONFIGURING",
            JobStateCode::Completing => "COMPLETING",
            JobStateCode::Deadline => "DEADLINE",
            JobStateCode::Failed => "FAILED",
            JobStateCode::NodeFail => "NODE_FAIL",
            JobStateCode::OutOfMemory => "OUT_OF_MEMORY",
            JobStateCode::Pending => "PENDING",
            JobStateCode::Preempted => "PREEMPTED",
            JobStateCode::Running => "RUNNING",
            JobStateCode::ResvDelHold => "RESV_DEL_HOLD",
            JobStateCode::RequeueFed => "REQUEUE_FED",
            JobStateCode::RequeueHold => "REQUEUE_HOLD",
            JobStateCode::Requeued => "REQUEUED",
            JobStateCode::Resizing => "RESIZING",
            JobStateCode::Revoked => "REVOKED",
            JobStateCode::Signaling => "SIGNALING",
            JobStateCode::SpecialExit => "SPECIAL_EXIT",
            JobStateCode::StageOut => "STAGE_OUT",
            JobStateCode::Stopped => "STOPPED",
            JobStateCode::Suspended => "SUSPENDED",
            JobStateCode::Timeout => "TIMEOUT",
        }
    }

    /// Whether the job has reached a terminal state.
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            JobStateCode::BootFail
                | JobStateCode::Cancelled
                | JobStateCode::Completed
                | JobStateCode::Deadline
                | JobStateCode::Failed
                | JobStateCode::NodeFail
                | JobStateCode::OutOfMemory
                | JobStateCode::Preempted
                | JobStateCode::Timeout
        )
    }
}

impl fmt::Display for JobStateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStateCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let state = match s.to_uppercase().as_str() {
            "BOOT_FAIL" | "BF" => JobStateCode::BootFail,
            "CANCELLED" | "CA" => JobStateCode::Cancelled,
            "COMPLETED" | "CD" => JobStateCode::Completed,
            "CONFIGURING" | "CF" => JobStateCode::Configuring,
            "COMPLETING" | "CG" => JobStateCode::Completing,
            "DEADLINE" | "DL" => JobStateCode::Deadline,
            "FAILED" | "F" => JobStateCode::Failed,
            "NODE_FAIL" | "NF" => JobStateCode::NodeFail,
            "OUT_OF_MEMORY" | "OOM" => JobStateCode::OutOfMemory,
            "PENDING" | "PD" => JobStateCode::Pending,
            "PREEMPTED" | "PR" => JobStateCode::Preempted,
            "RUNNING" | "R" => JobStateCode::Running,
            "RESV_DEL_HOLD" | "RD" => JobStateCode::ResvDelHold,
            "REQUEUE_FED" | "RF" => JobStateCode::RequeueFed,
            "REQUEUE_HOLD" | "RH" => JobStateCode::RequeueHold,
            "REQUEUED" | "RQ" => JobStateCode::Requeued,
            "RESIZING" | "RS" => JobStateCode::Resizing,
            "REVOKED" | "RV" => JobStateCode::Revoked,
            "SIGNALING" | "SI" => JobStateCode::Signaling,
            "SPECIAL_EXIT" | "SE" => JobStateCode::SpecialExit,
            "STAGE_OUT" | "SO" => JobStateCode::StageOut,
            "STOPPED" | "ST" => JobStateCode::Stopped,
            "SUSPENDED" | "S" => JobStateCode::Suspended,
            "TIMEOUT" | "TO" => JobStateCode::Timeout,
            other => {
                return Err(Error::InvalidValue {
                    option: "job state",
                    reason: format!("unknown state {other:?}"),
                })
            }
        };
        Ok(state)
    }
}

/// Typed field names for the `-O/--Format` long output specification.
///
/// The emitted names follow the tool's documented spellings, including the
/// handful of lowercase and hyphenated ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SqueueField {
    Account,
    AccrueTime,
    AdminComment,
    AllocNodes,
    AllocSID,
    ArrayJobID,
    ArrayTaskID,
    AssocID,
    BatchFlag,
    BatchHost,
    BoardsPerNode,
    BurstBuffer,
    BurstBufferState,
    Cluster,
    ClusterFeature,
    Command,
    Comment,
    Contiguous,
    Container,
    Cores,
    CoreSpec,
    CPUFreq,
    CpusPerTask,
    CpusPerTres,
    Deadline,
    DelayBoot,
    Dependency,
    DerivedEC,
    EligibleTime,
    EndTime,
    ExitCode,
    Feature,
    GroupID,
    GroupName,
    HetJobID,
    HetJobIDSet,
    HetJobOffset,
    JobArrayID,
    JobID,
    LastSchedEval,
    Licenses,
    MaxCPUs,
    MaxNodes,
    MCSLabel,
    MemPerTres,
    MinCpus,
    MinMemory,
    MinTime,
    MinTmpDisk,
    Name,
    Network,
    Nice,
    NodeList,
    Nodes,
    NTPerBoard,
    NTPerCore,
    NTPerNode,
    NTPerSocket,
    NumCPUs,
    NumNodes,
    NumTasks,
    Origin,
    OriginRaw,
    OverSubscribe,
    Partition,
    PreemptTime,
    PendingTime,
    Priority,
    PriorityLong,
    Profile,
    QOS,
    Reason,
    ReasonList,
    Reboot,
    ReqNodes,
    ReqSwitch,
    Requeue,
    Reservation,
    ResizeTime,
    RestartCnt,
    ResvPort,
    SchedNodes,
    SCT,
    SelectJobInfo,
    SiblingsActive,
    SiblingsActiveRaw,
    SiblingsViable,
    SiblingsViableRaw,
    Sockets,
    SPerBoard,
    StartTime,
    State,
    StateCompact,
    Stderr,
    Stdin,
    Stdout,
    StepID,
    StepName,
    StepState,
    SubmitTime,
    SystemComment,
    Threads,
    TimeLeft,
    TimeLimit,
    TimeUsed,
    TresAlloc,
    TresBind,
    TresFreq,
    TresPerJob,
    TresPerNode,
    TresPerSocket,
    TresPerStep,
    TresPerTask,
    UserID,
    UserName,
    Wait4Switch,
    WCKey,
    WorkDir,
}

impl SqueueField {
    pub fn name(&self) -> &'static str {
        match self {
            SqueueField::Account => "Account",
            SqueueField::AccrueTime => "AccrueTime",
            SqueueField::AdminComment => "admin_comment",
            SqueueField::AllocNodes => "AllocNodes",
            SqueueField::AllocSID => "AllocSID",
            SqueueField::ArrayJobID => "ArrayJobID",
            SqueueField::ArrayTaskID => "ArrayTaskID",
            SqueueField::AssocID => "AssocID",
            SqueueField::BatchFlag => "BatchFlag",
            SqueueField::BatchHost => "BatchHost",
            SqueueField::BoardsPerNode => "BoardsPerNode",
            SqueueField::BurstBuffer => "BurstBuffer",
            SqueueField::BurstBufferState => "BurstBufferState",
            SqueueField::Cluster => "Cluster",
            SqueueField::ClusterFeature => "ClusterFeature",
            SqueueField::Command => "Command",
            SqueueField::Comment => "Comment",
            SqueueField::Contiguous => "Contiguous",
            SqueueField::Container => "Container",
            SqueueField::Cores => "Cores",
            SqueueField::CoreSpec => "CoreSpec",
            SqueueField::CPUFreq => "CPUFreq",
            SqueueField::CpusPerTask => "cpus-per-task",
            SqueueField::CpusPerTres => "cpus-per-tres",
            SqueueField::Deadline => "Deadline",
            SqueueField::DelayBoot => "DelayBoot",
            SqueueField::Dependency => "Dependency",
            SqueueField::DerivedEC => "DerivedEC",
            SqueueField::EligibleTime => "EligibleTime",
            SqueueField::EndTime => "EndTime",
            SqueueField::ExitCode => "exit_code",
            SqueueField::Feature => "Feature",
            SqueueField::GroupID => "GroupID",
            SqueueField::GroupName => "GroupName",
            SqueueField::HetJobID => "HetJobID",
            SqueueField::HetJobIDSet => "HetJobIDSet",
            SqueueField::HetJobOffset => "HetJobOffset",
            SqueueField::JobArrayID => "JobArrayID",
            SqueueField::JobID => "JobID",
            SqueueField::LastSchedEval => "LastSchedEval",
            SqueueField::Licenses => "Licenses",
            SqueueField::MaxCPUs => "MaxCPUs",
            SqueueField::MaxNodes => "MaxNodes",
            SqueueField::MCSLabel => "MCSLabel",
            SqueueField::MemPerTres => "mem-per-tres",
            SqueueField::MinCpus => "MinCpus",
            SqueueField::MinMemory => "MinMemory",
            SqueueField::MinTime => "MinTime",
            SqueueField::MinTmpDisk => "MinTmpDisk",
            SqueueField::Name => "Name",
            SqueueField::Network => "Network",
            SqueueField::Nice => "Nice",
            SqueueField::NodeList => "NodeList",
            SqueueField::Nodes => "Nodes",
            SqueueField::NTPerBoard => "NTPerBoard",
            SqueueField::NTPerCore => "NTPerCore",
            SqueueField::NTPerNode => "NTPerNode",
            SqueueField::NTPerSocket => "NTPerSocket",
            SqueueField::NumCPUs => "NumCPUs",
            SqueueField::NumNodes => "NumNodes",
            SqueueField::NumTasks => "NumTasks",
            SqueueField::Origin => "Origin",
            SqueueField::OriginRaw => "OriginRaw",
            SqueueField::OverSubscribe => "OverSubscribe",
            SqueueField::Partition => "Partition",
            SqueueField::PreemptTime => "PreemptTime",
            SqueueField::PendingTime => "PendingTime",
            SqueueField::Priority => "Priority",
            SqueueField::PriorityLong => "PriorityLong",
            SqueueField::Profile => "Profile",
            SqueueField::QOS => "QOS",
            SqueueField::Reason => "Reason",
            SqueueField::ReasonList => "ReasonList",
            SqueueField::Reboot => "Reboot",
            SqueueField::ReqNodes => "ReqNodes",
            SqueueField::ReqSwitch => "ReqSwitch",
            SqueueField::Requeue => "Requeue",
            SqueueField::Reservation => "Reservation",
            SqueueField::ResizeTime => "ResizeTime",
            SqueueField::RestartCnt => "RestartCnt",
            SqueueField::ResvPort => "ResvPort",
            SqueueField::SchedNodes => "SchedNodes",
            SqueueField::SCT => "SCT",
            SqueueField::SelectJobInfo => "SelectJobInfo",
            SqueueField::SiblingsActive => "SiblingsActive",
            SqueueField::SiblingsActiveRaw => "SiblingsActiveRaw",
            SqueueField::SiblingsViable => "SiblingsViable",
            SqueueField::SiblingsViableRaw => "SiblingsViableRaw",
            SqueueField::Sockets => "Sockets",
            SqueueField::SPerBoard => "SPerBoard",
            SqueueField::StartTime => "StartTime",
            SqueueField::State => "State",
            SqueueField::StateCompact => "StateCompact",
            SqueueField::Stderr => "STDERR",
            SqueueField::Stdin => "STDIN",
            SqueueField::Stdout => "STDOUT",
            SqueueField::StepID => "StepID",
            SqueueField::StepName => "StepName",
            SqueueField::StepState => "StepState",
            SqueueField::SubmitTime => "SubmitTime",
            SqueueField::SystemComment => "system_comment",
            SqueueField::Threads => "Threads",
            SqueueField::TimeLeft => "TimeLeft",
            SqueueField::TimeLimit => "TimeLimit",
            SqueueField::TimeUsed => "TimeUsed",
            SqueueField::TresAlloc => "tres-alloc",
            SqueueField::TresBind => "tres-bind",
            SqueueField::TresFreq => "tres-freq",
            SqueueField::TresPerJob => "tres-per-job",
            SqueueField::TresPerNode => "tres-per-node",
            SqueueField::TresPerSocket => "tres-per-socket",
            SqueueField::TresPerStep => "tres-per-step",
            SqueueField::TresPerTask => "tres-per-task",
            SqueueField::UserID => "UserID",
            SqueueField::UserName => "UserName",
            SqueueField::Wait4Switch => "Wait4Switch",
            SqueueField::WCKey => "WCKey",
            SqueueField::WorkDir => "WorkDir",
        }
    }
}

impl fmt::Display for SqueueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Option model for one `squeue` invocation.
#[derive(Debug, Clone, Default)]
pub struct Squeue {
    pub(crate) accounts: Vec<String>,
    pub(crate) all: bool,
    pub(crate) array: bool,
    pub(crate) array_unique: bool,
    pub(crate) federation: bool,
    pub(crate) no_header: bool,
    pub(crate) hide: bool,
    pub(crate) iterate: Option<Second>,
    pub(crate) jobs: Vec<u32>,
    pub(crate) local: bool,
    pub(crate) long: bool,
    pub(crate) licenses: Vec<String>,
    pub(crate) clusters: Vec<String>,
    pub(crate) names: Vec<String>,
    pub(crate) dont_convert: bool,
    pub(crate) format_raw: Option<String>,
    pub(crate) format_fields: Vec<FormatSpec<SqueueField>>,
    pub(crate) partitions: Vec<String>,
    pub(crate) priority: bool,
    pub(crate) qos: Vec<String>,
    pub(crate) reservation: Option<String>,
    pub(crate) steps: Vec<String>,
    pub(crate) sibling: bool,
    pub(crate) sort: Option<String>,
    pub(crate) start: bool,
    pub(crate) states: Vec<JobStateCode>,
    pub(crate) users: Vec<String>,
    pub(crate) verbose: bool,
    pub(crate) version: bool,
    pub(crate) nodelist: Option<String>,
}

impl Squeue {
    /// Serialize the populated options into an ordered argument vector.
    ///
    /// `-j` and `-s` take their value with no separating space — the tool
    /// requires `-j1008`, not `-j 1008`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if !self.accounts.is_empty() {
            args.push("-A".to_string());
            args.push(self.accounts.join(","));
        }
        if self.all {
            args.push("-a".to_string());
        }
        if self.array {
            args.push("-r".to_string());
        }
        if self.array_unique {
            args.push("--array-unique".to_string());
        }
        if self.federation {
            args.push("--federation".to_string());
        }
        if self.no_header {
            args.push("-h".to_string());
        }
        if self.hide {
            args.push("--hide".to_string());
        }
        if let Some(secs) = self.iterate {
            args.push("-i".to_string());
            args.push(secs.to_string());
        }
        if !self.jobs.is_empty() {
            let joined = self
                .jobs
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            args.push(format!("-j{joined}"));
        }
        if self.local {
            args.push("--local".to_string());
        }
        if self.long {
            args.push("-l".to_string());
        }
        if !self.licenses.is_empty() {
            args.push("-L".to_string());
            args.push(self.licenses.join(","));
        }
        if !self.clusters.is_empty() {
            args.push("-M".to_string());
            args.push(self.clusters.join(","));
        }
        if !self.names.is_empty() {
            args.push("-n".to_string());
            args.push(self.names.join(","));
        }
        if self.dont_convert {
            args.push("--noconvert".to_string());
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
        if self.priority {
            args.push("-P".to_string());
        }
        if !self.qos.is_empty() {
            args.push("-q".to_string());
            args.push(self.qos.join(","));
        }
        if let Some(reservation) = &self.reservation {
            args.push("-R".to_string());
            args.push(reservation.clone());
        }
        if !self.steps.is_empty() {
            args.push(format!("-s{}", self.steps.join(",")));
        }
        if self.sibling {
            args.push("--sibling".to_string());
        }
        if let Some(order) = &self.sort {
            args.push("-S".to_string());
            args.push(order.clone());
        }
        if self.start {
            args.push("--start".to_string());
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
        if !self.users.is_empty() {
            args.push("-u".to_string());
            args.push(self.users.join(","));
        }
        if self.verbose {
            args.push("-v".to_string());
        }
        if self.version {
            args.push("-V".to_string());
        }
        if let Some(nodelist) = &self.nodelist {
            args.push("-w".to_string());
            args.push(nodelist.clone());
        }

        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_model_serializes_to_nothing() {
        assert!(Squeue::default().to_args().is_empty());
    }

    #[test]
    fn test_jobs_flag_has_no_separating_space() {
        let squeue = Squeue {
            jobs: vec![3_684_390, 3_684_391],
            ..Default::default()
        };
        assert_eq!(squeue.to_args(), vec!["-j3684390,3684391"]);
    }

    #[test]
    fn test_steps_flag_has_no_separating_space() {
        let squeue = Squeue {
            steps: vec!["3684390.1".to_string()],
            ..Default::default()
        };
        assert_eq!(squeue.to_args(), vec!["-s3684390.1"]);
    }

    #[test]
    fn test_state_filter_uses_extended_names() {
        let squeue = Squeue {
            states: vec![JobStateCode::Pending, JobStateCode::NodeFail],
            ..Default::default()
        };
        assert_eq!(squeue.to_args(), vec!["-t", "PENDING,NODE_FAIL"]);
    }

    #[test]
    fn test_job_state_compact_forms_parse() {
        assert_eq!("PD".parse::<JobStateCode>().unwrap(), JobStateCode::Pending);
        assert_eq!("R".parse::<JobStateCode>().unwrap(), JobStateCode::Running);
        assert_eq!("OOM".parse::<JobStateCode>().unwrap(), JobStateCode::OutOfMemory);
        assert_eq!("cg".parse::<JobStateCode>().unwrap(), JobStateCode::Completing);
    }

    #[test]
    fn test_job_state_round_trip() {
        for s in ["BOOT_FAIL", "RESV_DEL_HOLD", "SPECIAL_EXIT", "TIMEOUT"] {
            assert_eq!(s.parse::<JobStateCode>().unwrap().as_str(), s);
        }
    }

    #[test]
    fn test_unknown_job_state_is_rejected() {
        assert!("DANCING".parse::<JobStateCode>().is_err());
    }

    #[test]
    fn test_is_finished() {
        assert!(JobStateCode::Completed.is_finished());
        assert!(JobStateCode::OutOfMemory.is_finished());
        assert!(!JobStateCode::Running.is_finished());
        assert!(!JobStateCode::Pending.is_finished());
    }

    #[test]
    fn test_irregular_field_spellings() {
        assert_eq!(SqueueField::AdminComment.name(), "admin_comment");
        assert_eq!(SqueueField::CpusPerTask.name(), "cpus-per-task");
        assert_eq!(SqueueField::ExitCode.name(), "exit_code");
        assert_eq!(SqueueField::Stderr.name(), "STDERR");
        assert_eq!(SqueueField::TresPerNode.name(), "tres-per-node");
    }

    #[test]
    fn test_typed_format_serialization() {
        let squeue = Squeue {
            format_fields: vec![
                FormatSpec::new(SqueueField::JobID).size(6).right_justified(),
                FormatSpec::new(SqueueField::Priority),
            ],
            ..Default::default()
        };
        assert_eq!(squeue.to_args(), vec!["-O", "JobID:.6,Priority:20"]);
    }
}
