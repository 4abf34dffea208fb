// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Option model and argument serialization for `sbatch`.

use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::types::{ArrayIndex, KiloHertz, Megabyte, Minute, Second, SlurmDuration};

/// Timestamp format accepted by `--begin` and `--deadline`.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A dependency reference to an existing job, optionally carrying a wait
/// time in minutes from that job's start or cancellation (only honored by
/// the plain `after` dependency kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub id: u32,
    pub time: Option<Minute>,
}

impl Job {
    pub fn new(id: u32) -> Self {
        Self { id, time: None }
    }

    pub fn with_time(id: u32, time: Minute) -> Self {
        Self {
            id,
            time: Some(time),
        }
    }
}

/// Accounting and profiling sampling intervals (`--acctg-freq`).
///
/// The task sampling interval defaults to 30 seconds; all other intervals
/// default to 0, which disables sampling of that type. A task interval of 0
/// is rejected at the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcctgFreq {
    /// Task sampling interval for the jobacct_gather plugins.
    Task(Second),
    /// Energy profiling interval for the acct_gather_energy plugin.
    Energy(Second),
    /// Infiniband profiling interval for the acct_gather_interconnect plugin.
    Network(Second),
    /// Filesystem profiling interval for the acct_gather_filesystem plugin.
    Filesystem(Second),
}

impl fmt::Display for AcctgFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcctgFreq::Task(s) => write!(f, "task={s}"),
            AcctgFreq::Energy(s) => write!(f, "energy={s}"),
            AcctgFreq::Network(s) => write!(f, "network={s}"),
            AcctgFreq::Filesystem(s) => write!(f, "filesystem={s}"),
        }
    }
}

/// Governor policies accepted by `--cpu-freq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrequencyPolicy {
    Low,
    Medium,
    High,
    Highm1,
    Conservative,
    OnDemand,
    Performance,
    PowerSave,
}

impl fmt::Display for FrequencyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FrequencyPolicy::Low => "low",
            FrequencyPolicy::Medium => "medium",
            FrequencyPolicy::High => "high",
            FrequencyPolicy::Highm1 => "highm1",
            FrequencyPolicy::Conservative => "Conservative",
            FrequencyPolicy::OnDemand => "OnDemand",
            FrequencyPolicy::Performance => "Performance",
            FrequencyPolicy::PowerSave => "PowerSave",
        };
        f.write_str(s)
    }
}

/// Argument to `--cpu-freq`: a fixed frequency or a governor policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuFreq {
    Frequency(KiloHertz),
    Policy(FrequencyPolicy),
}

impl From<KiloHertz> for CpuFreq {
    fn from(khz: KiloHertz) -> Self {
        CpuFreq::Frequency(khz)
    }
}

impl From<FrequencyPolicy> for CpuFreq {
    fn from(policy: FrequencyPolicy) -> Self {
        CpuFreq::Policy(policy)
    }
}

impl fmt::Display for CpuFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuFreq::Frequency(khz) => write!(f, "{khz}"),
            CpuFreq::Policy(p) => write!(f, "{p}"),
        }
    }
}

/// Node sharing behavior (`--exclusive`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Exclusive {
    /// No sharing with other running jobs (the bare `--exclusive` form).
    OtherRunningJobs,
    /// Share only with jobs of the same user.
    User,
    /// Share only with jobs of the same MCS security class.
    Mcs,
}

/// Scheduler hints (`--hint`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hint {
    ComputeBound,
    MemoryBound,
    Multithread,
    Nomultithread,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Hint::ComputeBound => "compute_bound",
            Hint::MemoryBound => "memory_bound",
            Hint::Multithread => "multithread",
            Hint::Nomultithread => "nomultithread",
        };
        f.write_str(s)
    }
}

/// Mail notification events (`--mail-type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MailType {
    None,
    Begin,
    End,
    Fail,
    Requeue,
    All,
    InvalidDepend,
    StageOut,
    TimeLimit,
    TimeLimit90,
    TimeLimit80,
    TimeLimit50,
    ArrayTasks,
}

impl fmt::Display for MailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MailType::None => "NONE",
            MailType::Begin => "BEGIN",
            MailType::End => "END",
            MailType::Fail => "FAIL",
            MailType::Requeue => "REQUEUE",
            MailType::All => "ALL",
            MailType::InvalidDepend => "INVALID_DEPEND",
            MailType::StageOut => "STAGE_OUT",
            MailType::TimeLimit => "TIME_LIMIT",
            MailType::TimeLimit90 => "TIME_LIMIT_90",
            MailType::TimeLimit80 => "TIME_LIMIT_80",
            MailType::TimeLimit50 => "TIME_LIMIT_50",
            MailType::ArrayTasks => "ARRAY_TASKS",
        };
        f.write_str(s)
    }
}

/// Resource limits propagated to the compute nodes (`--propagate`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Propagate {
    All,
    None,
    As,
    Core,
    Cpu,
    Data,
    Fsize,
    Memlock,
    Nofile,
    Nproc,
    Rss,
    Stack,
}

impl fmt::Display for Propagate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Propagate::All => "ALL",
            Propagate::None => "NONE",
            Propagate::As => "AS",
            Propagate::Core => "CORE",
            Propagate::Cpu => "CPU",
            Propagate::Data => "DATA",
            Propagate::Fsize => "FSIZE",
            Propagate::Memlock => "MEMLOCK",
            Propagate::Nofile => "NOFILE",
            Propagate::Nproc => "NPROC",
            Propagate::Rss => "RSS",
            Propagate::Stack => "STACK",
        };
        f.write_str(s)
    }
}

/// Mode for opening stdout/stderr files (`--open-mode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpenMode {
    Append,
    Truncate,
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenMode::Append => f.write_str("append"),
            OpenMode::Truncate => f.write_str("truncate"),
        }
    }
}

/// The mutually exclusive CPU binding group.
///
/// `-B/--extra-node-info`, `--hint`, `--threads-per-core` and
/// `--ntasks-per-core` all constrain how tasks map onto sockets, cores and
/// threads; sbatch accepts at most one of them. Holding the active member
/// as a single variant makes the exclusivity structural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CpuBinding {
    /// Restrict node selection to nodes with at least the given number of
    /// sockets, cores per socket and threads per core (`-B S[:C[:T]]`).
    ExtraNodeInfo {
        sockets: u32,
        cores: Option<u32>,
        threads: Option<u32>,
    },
    Hint(Hint),
    ThreadsPerCore(u32),
    NtasksPerCore(u32),
}

impl CpuBinding {
    pub(crate) fn option_name(&self) -> &'static str {
        match self {
            CpuBinding::ExtraNodeInfo { .. } => "-B/--extra-node-info",
            CpuBinding::Hint(_) => "--hint",
            CpuBinding::ThreadsPerCore(_) => "--threads-per-core",
            CpuBinding::NtasksPerCore(_) => "--ntasks-per-core",
        }
    }
}

/// The mutually exclusive memory request group: `--mem`, `--mem-per-cpu`
/// and `--mem-per-gpu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemorySpec {
    PerNode(Megabyte),
    PerCpu(Megabyte),
    PerGpu(Megabyte),
}

impl MemorySpec {
    pub(crate) fn option_name(&self) -> &'static str {
        match self {
            MemorySpec::PerNode(_) => "--mem",
            MemorySpec::PerCpu(_) => "--mem-per-cpu",
            MemorySpec::PerGpu(_) => "--mem-per-gpu",
        }
    }
}

/// Accumulated `-d/--dependency` state. Each kind collects job references;
/// the serializer joins them into one comma-separated expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Dependency {
    pub(crate) after: Vec<Job>,
    pub(crate) after_any: Vec<u32>,
    pub(crate) after_burst_buffer: Vec<u32>,
    pub(crate) after_corr: Vec<u32>,
    pub(crate) after_not_ok: Vec<u32>,
    pub(crate) after_ok: Vec<u32>,
    pub(crate) expand: Option<u32>,
    pub(crate) singleton: bool,
}

impl Dependency {
    pub(crate) fn is_empty(&self) -> bool {
        self.after.is_empty()
            && self.after_any.is_empty()
            && self.after_burst_buffer.is_empty()
            && self.after_corr.is_empty()
            && self.after_not_ok.is_empty()
            && self.after_ok.is_empty()
            && self.expand.is_none()
            && !self.singleton
    }

    /// Render the dependency expression, kinds in fixed order.
    pub(crate) fn to_expr(&self) -> String {
        let mut parts = Vec::new();

        if !self.after.is_empty() {
            let mut expr = String::from("after");
            for job in &self.after {
                expr.push_str(&format!(":{}", job.id));
                if let Some(time) = job.time {
                    expr.push_str(&format!("+{time}"));
                }
            }
            parts.push(expr);
        }
        for (kind, ids) in [
            ("afterany", &self.after_any),
            ("afterburstbuffer", &self.after_burst_buffer),
            ("aftercorr", &self.after_corr),
            ("afternotok", &self.after_not_ok),
            ("afterok", &self.after_ok),
        ] {
            if !ids.is_empty() {
                let joined = ids
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(":");
                parts.push(format!("{kind}:{joined}"));
            }
        }
        if let Some(id) = self.expand {
            parts.push(format!("expand:{id}"));
        }
        if self.singleton {
            parts.push("singleton".to_string());
        }

        parts.join(",")
    }
}

/// Option model for one `sbatch` invocation.
///
/// Every optional field is `Option` or an empty collection when unset, so a
/// legitimate zero or false value is always distinguishable from "not set".
#[derive(Debug, Clone, Default)]
pub struct Sbatch {
    pub(crate) array: Vec<ArrayIndex>,
    pub(crate) account: Option<String>,
    pub(crate) acctg_freq: Vec<AcctgFreq>,
    pub(crate) cpu_binding: Option<CpuBinding>,
    pub(crate) batch: Option<String>,
    pub(crate) bb: Option<String>,
    pub(crate) bbf: Option<String>,
    pub(crate) begin: Option<NaiveDateTime>,
    pub(crate) cluster_constraint: Option<String>,
    pub(crate) comment: Option<String>,
    pub(crate) constraint: Option<String>,
    pub(crate) container: Option<PathBuf>,
    pub(crate) contiguous: bool,
    pub(crate) cores_per_socket: Option<u32>,
    pub(crate) cpu_freq: Option<CpuFreq>,
    pub(crate) cpus_per_gpu: Option<u32>,
    pub(crate) cpus_per_task: Option<u32>,
    pub(crate) deadline: Option<NaiveDateTime>,
    pub(crate) delay_boot: Option<Minute>,
    pub(crate) dependency: Dependency,
    pub(crate) chdir: Option<PathBuf>,
    pub(crate) error: Option<PathBuf>,
    pub(crate) exclusive: Option<Exclusive>,
    pub(crate) export: Vec<String>,
    pub(crate) export_file: Option<String>,
    pub(crate) node_file: Option<PathBuf>,
    pub(crate) get_user_env: Option<String>,
    pub(crate) gid: Option<String>,
    pub(crate) gpus: Vec<String>,
    pub(crate) gpu_bind: Option<String>,
    pub(crate) hold: bool,
    pub(crate) input: Option<PathBuf>,
    pub(crate) job_name: Option<String>,
    pub(crate) licenses: Vec<String>,
    pub(crate) mail_type: Vec<MailType>,
    pub(crate) mail_user: Option<String>,
    pub(crate) memory: Option<MemorySpec>,
    pub(crate) mincpus: Option<u32>,
    pub(crate) nice: Option<i32>,
    pub(crate) no_requeue: bool,
    pub(crate) nodelist: Vec<String>,
    pub(crate) nodes: Option<(u32, Option<u32>)>,
    pub(crate) ntasks: Option<u32>,
    pub(crate) ntasks_per_node: Option<u32>,
    pub(crate) open_mode: Option<OpenMode>,
    pub(crate) output: Option<PathBuf>,
    pub(crate) oversubscribe: bool,
    pub(crate) partition: Option<String>,
    pub(crate) priority: Option<u32>,
    pub(crate) propagate: Vec<Propagate>,
    pub(crate) qos: Option<String>,
    pub(crate) quiet: bool,
    pub(crate) requeue: bool,
    pub(crate) reservation: Option<String>,
    pub(crate) time: Option<SlurmDuration>,
    pub(crate) time_min: Option<SlurmDuration>,
    pub(crate) tmp: Option<Megabyte>,
    pub(crate) uid: Option<String>,
    pub(crate) wait: bool,
    pub(crate) wckey: Option<String>,
    pub(crate) wrap: Option<String>,
    pub(crate) script: Option<PathBuf>,
}

impl Sbatch {
    /// Serialize the populated options into an ordered argument vector.
    ///
    /// The emission order is fixed (the order of the flag catalog below);
    /// only set options appear. The batch script path, if any, is always the
    /// final, positional token.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if !self.array.is_empty() {
            args.push(format!("-a={}", join_display(&self.array, ",")));
        }
        if let Some(v) = &self.account {
            args.push(format!("-A={v}"));
        }
        if !self.acctg_freq.is_empty() {
            args.push(format!("--acctg-freq={}", join_display(&self.acctg_freq, ",")));
        }
        match &self.cpu_binding {
            Some(CpuBinding::ExtraNodeInfo {
                sockets,
                cores,
                threads,
            }) => {
                let mut spec = sockets.to_string();
                if let Some(c) = cores {
                    spec.push_str(&format!(":{c}"));
                }
                if let Some(t) = threads {
                    spec.push_str(&format!(":{t}"));
                }
                args.push(format!("-B={spec}"));
            }
            Some(CpuBinding::Hint(h)) => args.push(format!("--hint={h}")),
            Some(CpuBinding::ThreadsPerCore(n)) => args.push(format!("--threads-per-core={n}")),
            Some(CpuBinding::NtasksPerCore(n)) => args.push(format!("--ntasks-per-core={n}")),
            None => {}
        }
        if let Some(v) = &self.batch {
            args.push(format!("--batch={v}"));
        }
        if let Some(v) = &self.bb {
            args.push(format!("--bb={v}"));
        }
        if let Some(v) = &self.bbf {
            args.push(format!("--bbf={v}"));
        }
        if let Some(v) = &self.begin {
            args.push(format!("-b={}", v.format(TIMESTAMP_FORMAT)));
        }
        if let Some(v) = &self.cluster_constraint {
            args.push(format!("--cluster-constraint={v}"));
        }
        if let Some(v) = &self.comment {
            args.push(format!("--comment={v}"));
        }
        if let Some(v) = &self.constraint {
            args.push(format!("-C={v}"));
        }
        if let Some(v) = &self.container {
            args.push(format!("--container={}", v.display()));
        }
        if self.contiguous {
            args.push("--contiguous".to_string());
        }
        if let Some(n) = self.cores_per_socket {
            args.push(format!("--cores-per-socket={n}"));
        }
        if let Some(v) = &self.cpu_freq {
            args.push(format!("--cpu-freq={v}"));
        }
        if let Some(n) = self.cpus_per_gpu {
            args.push(format!("--cpus-per-gpu={n}"));
        }
        if let Some(n) = self.cpus_per_task {
            args.push(format!("-c={n}"));
        }
        if let Some(v) = &self.deadline {
            args.push(format!("--deadline={}", v.format(TIMESTAMP_FORMAT)));
        }
        if let Some(m) = self.delay_boot {
            args.push(format!("--delay-boot={m}"));
        }
        if !self.dependency.is_empty() {
            args.push(format!("-d={}", self.dependency.to_expr()));
        }
        if let Some(v) = &self.chdir {
            args.push(format!("-D={}", v.display()));
        }
        if let Some(v) = &self.error {
            args.push(format!("-e={}", v.display()));
        }
        match self.exclusive {
            Some(Exclusive::OtherRunningJobs) => args.push("--exclusive".to_string()),
            Some(Exclusive::User) => args.push("--exclusive=user".to_string()),
            Some(Exclusive::Mcs) => args.push("--exclusive=mcs".to_string()),
            None => {}
        }
        if !self.export.is_empty() {
            args.push(format!("--export={}", self.export.join(",")));
        }
        if let Some(v) = &self.export_file {
            args.push(format!("--export-file={v}"));
        }
        if let Some(v) = &self.node_file {
            args.push(format!("-F={}", v.display()));
        }
        if let Some(v) = &self.get_user_env {
            if v.is_empty() {
                args.push("--get-user-env".to_string());
            } else {
                args.push(format!("--get-user-env={v}"));
            }
        }
        if let Some(v) = &self.gid {
            args.push(format!("--gid={v}"));
        }
        if !self.gpus.is_empty() {
            args.push(format!("-G={}", self.gpus.join(",")));
        }
        if let Some(v) = &self.gpu_bind {
            args.push(format!("--gpu-bind={v}"));
        }
        if self.hold {
            args.push("-H".to_string());
        }
        if let Some(v) = &self.input {
            args.push(format!("-i={}", v.display()));
        }
        if let Some(v) = &self.job_name {
            args.push(format!("-J={v}"));
        }
        if !self.licenses.is_empty() {
            args.push(format!("-L={}", self.licenses.join(",")));
        }
        if !self.mail_type.is_empty() {
            args.push(format!("--mail-type={}", join_display(&self.mail_type, ",")));
        }
        if let Some(v) = &self.mail_user {
            args.push(format!("--mail-user={v}"));
        }
        match self.memory {
            Some(MemorySpec::PerNode(mb)) => args.push(format!("--mem={mb}")),
            Some(MemorySpec::PerCpu(mb)) => args.push(format!("--mem-per-cpu={mb}")),
            Some(MemorySpec::PerGpu(mb)) => args.push(format!("--mem-per-gpu={mb}")),
            None => {}
        }
        if let Some(n) = self.mincpus {
            args.push(format!("--mincpus={n}"));
        }
        if let Some(n) = self.nice {
            args.push(format!("--nice={n}"));
        }
        if self.no_requeue {
            args.push("--no-requeue".to_string());
        }
        if !self.nodelist.is_empty() {
            args.push(format!("-w={}", self.nodelist.join(",")));
        }
        if let Some((min, max)) = self.nodes {
            args.push("-N".to_string());
            match max {
                Some(max) if max != min => args.push(format!("{min}-{max}")),
                _ => args.push(min.to_string()),
            }
        }
        if let Some(n) = self.ntasks {
            args.push(format!("-n={n}"));
        }
        if let Some(n) = self.ntasks_per_node {
            args.push(format!("--ntasks-per-node={n}"));
        }
        if let Some(m) = self.open_mode {
            args.push(format!("--open-mode={m}"));
        }
        if let Some(v) = &self.output {
            args.push(format!("-o={}", v.display()));
        }
        if self.oversubscribe {
            args.push("-s".to_string());
        }
        if let Some(v) = &self.partition {
            args.push(format!("-p={v}"));
        }
        if let Some(n) = self.priority {
            args.push(format!("--priority={n}"));
        }
        if !self.propagate.is_empty() {
            args.push(format!("--propagate={}", join_display(&self.propagate, ",")));
        }
        if let Some(v) = &self.qos {
            args.push(format!("-q={v}"));
        }
        if self.quiet {
            args.push("-Q".to_string());
        }
        if self.requeue {
            args.push("--requeue".to_string());
        }
        if let Some(v) = &self.reservation {
            args.push(format!("--reservation={v}"));
        }
        if let Some(d) = &self.time {
            args.push(format!("-t={d}"));
        }
        if let Some(d) = &self.time_min {
            args.push(format!("--time-min={d}"));
        }
        if let Some(mb) = self.tmp {
            args.push(format!("--tmp={mb}"));
        }
        if let Some(v) = &self.uid {
            args.push(format!("--uid={v}"));
        }
        if self.wait {
            args.push("-W".to_string());
        }
        if let Some(v) = &self.wckey {
            args.push(format!("--wckey={v}"));
        }
        if let Some(v) = &self.wrap {
            args.push(format!("--wrap={v}"));
        }
        if let Some(v) = &self.script {
            args.push(v.display().to_string());
        }

        args
    }
}

fn join_display<T: fmt::Display>(items: &[T], sep: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_model_serializes_to_nothing() {
        assert!(Sbatch::default().to_args().is_empty());
    }

    #[test]
    fn test_dependency_expr_kind_order() {
        let dep = Dependency {
            after_ok: vec![42],
            after_any: vec![7, 8],
            singleton: true,
            ..Default::default()
        };
        assert_eq!(dep.to_expr(), "afterany:7:8,afterok:42,singleton");
    }

    #[test]
    fn test_dependency_after_with_wait_time() {
        let dep = Dependency {
            after: vec![Job::with_time(12, Minute(5)), Job::new(13)],
            ..Default::default()
        };
        assert_eq!(dep.to_expr(), "after:12+5:13");
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let sbatch = Sbatch {
            job_name: Some("demo".to_string()),
            nice: Some(0),
            hold: true,
            ..Default::default()
        };
        assert_eq!(sbatch.to_args(), sbatch.to_args());
    }

    #[test]
    fn test_zero_nice_is_emitted() {
        let sbatch = Sbatch {
            nice: Some(0),
            ..Default::default()
        };
        assert_eq!(sbatch.to_args(), vec!["--nice=0"]);
    }

    #[test]
    fn test_unset_counts_never_appear() {
        let sbatch = Sbatch {
            job_name: Some("x".to_string()),
            ..Default::default()
        };
        let args = sbatch.to_args();
        assert!(args.iter().all(|a| !a.contains("-c=") && !a.starts_with("-N")));
    }

    #[test]
    fn test_node_range_formats() {
        let mut sbatch = Sbatch {
            nodes: Some((4, None)),
            ..Default::default()
        };
        assert_eq!(sbatch.to_args(), vec!["-N", "4"]);

        sbatch.nodes = Some((2, Some(4)));
        assert_eq!(sbatch.to_args(), vec!["-N", "2-4"]);
    }

    #[test]
    fn test_mail_type_catalog_spelling() {
        assert_eq!(MailType::TimeLimit90.to_string(), "TIME_LIMIT_90");
        assert_eq!(MailType::InvalidDepend.to_string(), "INVALID_DEPEND");
        assert_eq!(MailType::ArrayTasks.to_string(), "ARRAY_TASKS");
    }

    #[test]
    fn test_propagate_catalog_spelling() {
        assert_eq!(Propagate::Memlock.to_string(), "MEMLOCK");
        assert_eq!(Propagate::Fsize.to_string(), "FSIZE");
    }
}
