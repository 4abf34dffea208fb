// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Fluent configuration surface for `sbatch`.

use std::path::Path;

use chrono::NaiveDateTime;

use super::types::{
    AcctgFreq, CpuBinding, CpuFreq, Dependency, Exclusive, FrequencyPolicy, Hint, Job, MailType,
    MemorySpec, OpenMode, Propagate, Sbatch,
};
use crate::error::Error;
use crate::exec;
use crate::types::{ArrayIndex, Megabyte, Minute, SlurmDuration};

/// Name of the external batch submission tool.
const SBATCH: &str = "sbatch";

/// Builder for one `sbatch` invocation.
///
/// Setters that can violate an option contract (mutually exclusive groups,
/// value shapes) return `Result`; everything else chains directly.
#[derive(Debug, Default)]
pub struct SbatchBuilder {
    sbatch: Sbatch,
}

impl SbatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The populated option model.
    pub fn model(&self) -> &Sbatch {
        &self.sbatch
    }

    /// Serialize the accumulated options into an argument vector.
    pub fn to_args(&self) -> Vec<String> {
        self.sbatch.to_args()
    }

    /// Submit a job array; the index specification is a single index or an
    /// inclusive interval, repeated calls accumulate.
    pub fn array(&mut self, index: impl Into<ArrayIndex>) -> &mut Self {
        self.sbatch.array.push(index.into());
        self
    }

    /// Charge resources used by this job to the specified account.
    pub fn account(&mut self, account: &str) -> &mut Self {
        self.sbatch.account = Some(account.to_string());
        self
    }

    /// Define a job accounting/profiling sampling interval. A task sampling
    /// interval of zero is rejected: accounting cannot be turned off for the
    /// task data type.
    pub fn acctg_freq(&mut self, freq: AcctgFreq) -> Result<&mut Self, Error> {
        if let AcctgFreq::Task(interval) = freq {
            if interval.0 == 0 {
                return Err(Error::InvalidValue {
                    option: "--acctg-freq",
                    reason: "task sampling interval must be non-zero".to_string(),
                });
            }
        }
        self.sbatch.acctg_freq.push(freq);
        Ok(self)
    }

    /// Restrict node selection to nodes with at least the given number of
    /// sockets, cores per socket and threads per core.
    ///
    /// Member of the CPU binding group, mutually exclusive with `hint`,
    /// `threads_per_core` and `ntasks_per_core`.
    pub fn extra_node_info(
        &mut self,
        sockets: u32,
        cores: Option<u32>,
        threads: Option<u32>,
    ) -> Result<&mut Self, Error> {
        self.set_cpu_binding(CpuBinding::ExtraNodeInfo {
            sockets,
            cores,
            threads,
        })
    }

    /// Bind tasks according to application hints. Member of the CPU binding
    /// group.
    pub fn hint(&mut self, hint: Hint) -> Result<&mut Self, Error> {
        self.set_cpu_binding(CpuBinding::Hint(hint))
    }

    /// Restrict node selection to nodes with at least the given number of
    /// threads per core. Member of the CPU binding group.
    pub fn threads_per_core(&mut self, threads: u32) -> Result<&mut Self, Error> {
        self.set_cpu_binding(CpuBinding::ThreadsPerCore(threads))
    }

    /// Request the maximum number of tasks per core. Member of the CPU
    /// binding group.
    pub fn ntasks_per_core(&mut self, ntasks: u32) -> Result<&mut Self, Error> {
        self.set_cpu_binding(CpuBinding::NtasksPerCore(ntasks))
    }

    /// Nodes features required by the batch script itself; must be a subset
    /// of the job's `constraint`. Supports `&` and `|` operators.
    pub fn batch(&mut self, features: &str) -> &mut Self {
        self.sbatch.batch = Some(features.to_string());
        self
    }

    /// Burst buffer specification; the form is system dependent.
    pub fn bb(&mut self, spec: &str) -> &mut Self {
        self.sbatch.bb = Some(spec.to_string());
        self
    }

    /// Path of a file containing a burst buffer specification.
    pub fn bbf(&mut self, path: &str) -> &mut Self {
        self.sbatch.bbf = Some(path.to_string());
        self
    }

    /// Defer the allocation of the job until the specified time.
    pub fn begin(&mut self, at: NaiveDateTime) -> &mut Self {
        self.sbatch.begin = Some(at);
        self
    }

    /// Features a federated cluster must have to receive a sibling job.
    /// A leading `!` requests clusters with none of the features.
    pub fn cluster_constraint(&mut self, features: &str) -> &mut Self {
        self.sbatch.cluster_constraint = Some(features.to_string());
        self
    }

    /// An arbitrary comment.
    pub fn comment(&mut self, comment: &str) -> &mut Self {
        self.sbatch.comment = Some(comment.to_string());
        self
    }

    /// Node features required by the job. Multiple constraints may be
    /// combined with AND (`&`), OR (`|`), matching OR (`[...|...]`),
    /// resource counts (`name*count`) and parenthesised groups.
    pub fn constraint(&mut self, constraint: &str) -> &mut Self {
        self.sbatch.constraint = Some(constraint.to_string());
        self
    }

    /// Path to an OCI container bundle.
    pub fn container(&mut self, path: &Path) -> &mut Self {
        self.sbatch.container = Some(path.to_path_buf());
        self
    }

    /// Require the allocated nodes to form a contiguous set.
    pub fn contiguous(&mut self) -> &mut Self {
        self.sbatch.contiguous = true;
        self
    }

    /// Restrict node selection to nodes with at least this number of cores
    /// per socket.
    pub fn cores_per_socket(&mut self, cores: u32) -> &mut Self {
        self.sbatch.cores_per_socket = Some(cores);
        self
    }

    /// Request that job steps run at the given frequency (kHz) or under the
    /// given governor policy.
    pub fn cpu_freq(&mut self, freq: impl Into<CpuFreq>) -> &mut Self {
        self.sbatch.cpu_freq = Some(freq.into());
        self
    }

    /// Number of processors required per allocated GPU.
    pub fn cpus_per_gpu(&mut self, cpus: u32) -> &mut Self {
        self.sbatch.cpus_per_gpu = Some(cpus);
        self
    }

    /// Number of processors required per task; without it the controller
    /// allocates one processor per task.
    pub fn cpus_per_task(&mut self, cpus: u32) -> &mut Self {
        self.sbatch.cpus_per_task = Some(cpus);
        self
    }

    /// Remove the job if no ending is possible before this deadline.
    pub fn deadline(&mut self, at: NaiveDateTime) -> &mut Self {
        self.sbatch.deadline = Some(at);
        self
    }

    /// Do not reboot nodes to satisfy this job's feature specification if
    /// the job has been eligible for less than this period.
    pub fn delay_boot(&mut self, minutes: Minute) -> &mut Self {
        self.sbatch.delay_boot = Some(minutes);
        self
    }

    /// Defer the start of this job until the configured dependencies are
    /// satisfied.
    ///
    /// ```no_run
    /// use slurm_wrap::sbatch::SbatchBuilder;
    ///
    /// let mut b = SbatchBuilder::new();
    /// b.dependency(|d| {
    ///     d.after_ok([42]);
    ///     d.singleton();
    /// });
    /// ```
    pub fn dependency(&mut self, f: impl FnOnce(&mut DependencyBuilder)) -> &mut Self {
        let mut builder = DependencyBuilder {
            dep: &mut self.sbatch.dependency,
        };
        f(&mut builder);
        self
    }

    /// Working directory of the batch script; passed to the tool, not
    /// applied to the submitting process.
    pub fn chdir(&mut self, dir: &Path) -> &mut Self {
        self.sbatch.chdir = Some(dir.to_path_buf());
        self
    }

    /// Connect the script's standard error to this file pattern.
    pub fn error(&mut self, path: &Path) -> &mut Self {
        self.sbatch.error = Some(path.to_path_buf());
        self
    }

    /// Do not share allocated nodes with other running jobs (or share only
    /// within the same user / MCS class).
    pub fn exclusive(&mut self, with: Exclusive) -> &mut Self {
        self.sbatch.exclusive = Some(with);
        self
    }

    /// Identify which environment variables are propagated to the launched
    /// application, e.g. `"ALL"`, `"NONE"`, `"EDITOR"` or `"ARG1=test"`.
    /// Repeated calls accumulate.
    pub fn export(&mut self, var: &str) -> &mut Self {
        self.sbatch.export.push(var.to_string());
        self
    }

    /// Export environment variables from a file (or from a numeric file
    /// descriptor between 3 and OPEN_MAX).
    pub fn export_file(&mut self, file: &str) -> &mut Self {
        self.sbatch.export_file = Some(file.to_string());
        self
    }

    /// Like `nodelist`, but the node names come from a file; duplicates in
    /// the file are ignored by the tool.
    pub fn node_file(&mut self, file: &Path) -> &mut Self {
        self.sbatch.node_file = Some(file.to_path_buf());
        self
    }

    /// Retrieve the login environment of the user specified via `uid`.
    /// The argument encodes an optional timeout and `su` mode, e.g. `"10L"`;
    /// pass an empty string for the bare flag.
    pub fn get_user_env(&mut self, timeout_mode: &str) -> &mut Self {
        self.sbatch.get_user_env = Some(timeout_mode.to_string());
        self
    }

    /// Submit the job with this group's access permissions (name or id;
    /// effective only when run as root).
    pub fn gid(&mut self, group: &str) -> &mut Self {
        self.sbatch.gid = Some(group.to_string());
        self
    }

    /// Total number of GPUs required, with optional type, e.g. `"volta:3"`.
    /// Repeated calls accumulate.
    pub fn gpus(&mut self, type_number: &str) -> &mut Self {
        self.sbatch.gpus.push(type_number.to_string());
        self
    }

    /// Bind tasks to specific GPUs, e.g. `"closest"` or `"map_gpu:0,1"`.
    pub fn gpu_bind(&mut self, bind: &str) -> &mut Self {
        self.sbatch.gpu_bind = Some(bind.to_string());
        self
    }

    /// Submit the job in a held state (zero priority).
    pub fn hold(&mut self) -> &mut Self {
        self.sbatch.hold = true;
        self
    }

    /// Connect the script's standard input to this file pattern.
    pub fn input(&mut self, path: &Path) -> &mut Self {
        self.sbatch.input = Some(path.to_path_buf());
        self
    }

    /// Name for the job allocation; defaults to the script name.
    pub fn job_name(&mut self, name: &str) -> &mut Self {
        self.sbatch.job_name = Some(name.to_string());
        self
    }

    /// A license consumed by the job, e.g. `"matlab:2"`. Repeated calls
    /// accumulate.
    pub fn licenses(&mut self, license: &str) -> &mut Self {
        self.sbatch.licenses.push(license.to_string());
        self
    }

    /// Notify by mail when the given event occurs. Repeated calls
    /// accumulate.
    pub fn mail_type(&mut self, event: MailType) -> &mut Self {
        self.sbatch.mail_type.push(event);
        self
    }

    /// User to receive email notification of state changes.
    pub fn mail_user(&mut self, user: &str) -> &mut Self {
        self.sbatch.mail_user = Some(user.to_string());
        self
    }

    /// Real memory required per node. Member of the memory group, mutually
    /// exclusive with `mem_per_cpu` and `mem_per_gpu`.
    pub fn mem(&mut self, size: Megabyte) -> Result<&mut Self, Error> {
        self.set_memory(MemorySpec::PerNode(size))
    }

    /// Minimum memory required per allocated CPU. Member of the memory
    /// group.
    pub fn mem_per_cpu(&mut self, size: Megabyte) -> Result<&mut Self, Error> {
        self.set_memory(MemorySpec::PerCpu(size))
    }

    /// Minimum memory required per allocated GPU. Member of the memory
    /// group.
    pub fn mem_per_gpu(&mut self, size: Megabyte) -> Result<&mut Self, Error> {
        self.set_memory(MemorySpec::PerGpu(size))
    }

    /// Minimum number of logical CPUs per node.
    pub fn mincpus(&mut self, cpus: u32) -> &mut Self {
        self.sbatch.mincpus = Some(cpus);
        self
    }

    /// Run the job with an adjusted scheduling priority. Zero is a legal
    /// adjustment and is emitted as such.
    pub fn nice(&mut self, adjustment: i32) -> &mut Self {
        self.sbatch.nice = Some(adjustment);
        self
    }

    /// Never requeue the job after a node failure or preemption.
    pub fn no_requeue(&mut self) -> &mut Self {
        self.sbatch.no_requeue = true;
        self
    }

    /// Request a specific node by name (or a range expression such as
    /// `"node[01-04]"`). Repeated calls accumulate; duplicate names are
    /// dropped, matching the tool's own dedup semantics for node lists.
    pub fn nodelist(&mut self, node: &str) -> &mut Self {
        if !self.sbatch.nodelist.iter().any(|n| n == node) {
            self.sbatch.nodelist.push(node.to_string());
        }
        self
    }

    /// Number of nodes to allocate.
    pub fn nodes(&mut self, count: u32) -> &mut Self {
        self.sbatch.nodes = Some((count, None));
        self
    }

    /// Minimum and maximum number of nodes to allocate.
    pub fn nodes_range(&mut self, min: u32, max: u32) -> &mut Self {
        self.sbatch.nodes = Some((min, Some(max)));
        self
    }

    /// Maximum number of tasks the job will launch.
    pub fn ntasks(&mut self, tasks: u32) -> &mut Self {
        self.sbatch.ntasks = Some(tasks);
        self
    }

    /// Number of tasks to invoke on each node.
    pub fn ntasks_per_node(&mut self, tasks: u32) -> &mut Self {
        self.sbatch.ntasks_per_node = Some(tasks);
        self
    }

    /// Open stdout/stderr files in append or truncate mode.
    pub fn open_mode(&mut self, mode: OpenMode) -> &mut Self {
        self.sbatch.open_mode = Some(mode);
        self
    }

    /// Connect the script's standard output to this file pattern.
    pub fn output(&mut self, path: &Path) -> &mut Self {
        self.sbatch.output = Some(path.to_path_buf());
        self
    }

    /// Allow the allocation to be oversubscribed with other running jobs.
    pub fn oversubscribe(&mut self) -> &mut Self {
        self.sbatch.oversubscribe = true;
        self
    }

    /// Partition to submit the job to.
    pub fn partition(&mut self, partition: &str) -> &mut Self {
        self.sbatch.partition = Some(partition.to_string());
        self
    }

    /// Request a specific job priority (operators and administrators only).
    pub fn priority(&mut self, priority: u32) -> &mut Self {
        self.sbatch.priority = Some(priority);
        self
    }

    /// Propagate the given resource limit to the compute nodes. Repeated
    /// calls accumulate.
    pub fn propagate(&mut self, limit: Propagate) -> &mut Self {
        self.sbatch.propagate.push(limit);
        self
    }

    /// Quality of service for the job.
    pub fn qos(&mut self, qos: &str) -> &mut Self {
        self.sbatch.qos = Some(qos.to_string());
        self
    }

    /// Only report errors, not the usual informational messages.
    pub fn quiet(&mut self) -> &mut Self {
        self.sbatch.quiet = true;
        self
    }

    /// Requeue the job after a node failure or preemption.
    pub fn requeue(&mut self) -> &mut Self {
        self.sbatch.requeue = true;
        self
    }

    /// Allocate resources from the named reservation.
    pub fn reservation(&mut self, name: &str) -> &mut Self {
        self.sbatch.reservation = Some(name.to_string());
        self
    }

    /// Limit on the total run time of the job allocation.
    pub fn time(&mut self, limit: SlurmDuration) -> &mut Self {
        self.sbatch.time = Some(limit);
        self
    }

    /// Minimum acceptable time limit; allows the controller to lower the
    /// limit down to this value to start the job earlier.
    pub fn time_min(&mut self, limit: SlurmDuration) -> &mut Self {
        self.sbatch.time_min = Some(limit);
        self
    }

    /// Minimum temporary disk space per node.
    pub fn tmp(&mut self, size: Megabyte) -> &mut Self {
        self.sbatch.tmp = Some(size);
        self
    }

    /// Attempt to submit as this user (name or id; root only).
    pub fn uid(&mut self, user: &str) -> &mut Self {
        self.sbatch.uid = Some(user.to_string());
        self
    }

    /// Do not exit until the submitted job terminates.
    pub fn wait(&mut self) -> &mut Self {
        self.sbatch.wait = true;
        self
    }

    /// Workload characterization key.
    pub fn wckey(&mut self, key: &str) -> &mut Self {
        self.sbatch.wckey = Some(key.to_string());
        self
    }

    /// Wrap the given command string in a simple "sh" script instead of
    /// submitting a script file.
    pub fn wrap(&mut self, command: &str) -> &mut Self {
        self.sbatch.wrap = Some(command.to_string());
        self
    }

    /// Path of the batch script to submit (the final, positional argument).
    pub fn script(&mut self, path: &Path) -> &mut Self {
        self.sbatch.script = Some(path.to_path_buf());
        self
    }

    /// Serialize and submit, returning the id the tool acknowledged.
    pub fn submit(&self) -> Result<u32, Error> {
        let stdout = exec::run_capture(SBATCH, &self.sbatch.to_args())?;
        parse_submit_ack(&stdout)
    }

    fn set_cpu_binding(&mut self, value: CpuBinding) -> Result<&mut Self, Error> {
        if let Some(existing) = &self.sbatch.cpu_binding {
            if std::mem::discriminant(existing) != std::mem::discriminant(&value) {
                return Err(Error::Conflict {
                    attempted: value.option_name(),
                    existing: existing.option_name(),
                });
            }
        }
        self.sbatch.cpu_binding = Some(value);
        Ok(self)
    }

    fn set_memory(&mut self, value: MemorySpec) -> Result<&mut Self, Error> {
        if let Some(existing) = &self.sbatch.memory {
            if std::mem::discriminant(existing) != std::mem::discriminant(&value) {
                return Err(Error::Conflict {
                    attempted: value.option_name(),
                    existing: existing.option_name(),
                });
            }
        }
        self.sbatch.memory = Some(value);
        Ok(self)
    }
}

/// Builder for the `-d/--dependency` expression.
pub struct DependencyBuilder<'a> {
    dep: &'a mut Dependency,
}

impl DependencyBuilder<'_> {
    /// Begin after the given jobs start or are cancelled; a job's optional
    /// wait time delays this further by that many minutes.
    pub fn after(&mut self, jobs: impl IntoIterator<Item = Job>) -> &mut Self {
        self.dep.after.extend(jobs);
        self
    }

    /// Begin after the given jobs have terminated.
    pub fn after_any(&mut self, ids: impl IntoIterator<Item = u32>) -> &mut Self {
        self.dep.after_any.extend(ids);
        self
    }

    /// Begin after the given jobs have terminated and their burst buffer
    /// stage-out has completed.
    pub fn after_burst_buffer(&mut self, ids: impl IntoIterator<Item = u32>) -> &mut Self {
        self.dep.after_burst_buffer.extend(ids);
        self
    }

    /// Array tasks begin after the corresponding task in the given jobs
    /// completed successfully.
    pub fn after_corr(&mut self, ids: impl IntoIterator<Item = u32>) -> &mut Self {
        self.dep.after_corr.extend(ids);
        self
    }

    /// Begin after the given jobs have terminated in a failed state.
    pub fn after_not_ok(&mut self, ids: impl IntoIterator<Item = u32>) -> &mut Self {
        self.dep.after_not_ok.extend(ids);
        self
    }

    /// Begin after the given jobs completed successfully (exit code zero).
    pub fn after_ok(&mut self, ids: impl IntoIterator<Item = u32>) -> &mut Self {
        self.dep.after_ok.extend(ids);
        self
    }

    /// Resources allocated to this job expand the given job, which must
    /// share its QOS and partition.
    pub fn expand(&mut self, id: u32) -> &mut Self {
        self.dep.expand = Some(id);
        self
    }

    /// Begin only after any previously launched job with the same name and
    /// user has terminated.
    pub fn singleton(&mut self) -> &mut Self {
        self.dep.singleton = true;
        self
    }
}

/// Parse the "Submitted batch job N" acknowledgement line.
fn parse_submit_ack(stdout: &str) -> Result<u32, Error> {
    let unexpected = |reason: &str| Error::Parse {
        line: 1,
        content: stdout.trim().to_string(),
        reason: reason.to_string(),
    };

    let line = stdout
        .lines()
        .find(|l| l.starts_with("Submitted batch job"))
        .ok_or_else(|| unexpected("missing submission acknowledgement"))?;

    line.split_whitespace()
        .nth(3)
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| unexpected("acknowledgement carries no job id"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Second;

    #[test]
    fn test_name_partition_nodes_scenario() {
        let mut b = SbatchBuilder::new();
        b.job_name("foo").partition("batch").nodes(4);
        assert_eq!(b.to_args(), vec!["-J=foo", "-N", "4", "-p=batch"]);
    }

    #[test]
    fn test_dependency_scenario() {
        let mut b = SbatchBuilder::new();
        b.dependency(|d| {
            d.after_ok([42]);
            d.singleton();
        });
        assert_eq!(b.to_args(), vec!["-d=afterok:42,singleton"]);
    }

    #[test]
    fn test_cpu_binding_conflict() {
        let mut b = SbatchBuilder::new();
        b.extra_node_info(2, Some(4), None).unwrap();
        let err = b.hint(Hint::Nomultithread).unwrap_err();
        match err {
            Error::Conflict {
                attempted,
                existing,
            } => {
                assert_eq!(attempted, "--hint");
                assert_eq!(existing, "-B/--extra-node-info");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_same_group_member_twice_is_allowed() {
        let mut b = SbatchBuilder::new();
        b.threads_per_core(1).unwrap();
        b.threads_per_core(2).unwrap();
        assert_eq!(b.to_args(), vec!["--threads-per-core=2"]);
    }

    #[test]
    fn test_memory_group_conflict() {
        let mut b = SbatchBuilder::new();
        b.mem(Megabyte(32_000)).unwrap();
        assert!(b.mem_per_cpu(Megabyte(2_000)).is_err());
    }

    #[test]
    fn test_zero_task_sampling_interval_rejected() {
        let mut b = SbatchBuilder::new();
        let err = b.acctg_freq(AcctgFreq::Task(Second(0))).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { option: "--acctg-freq", .. }));
    }

    #[test]
    fn test_acctg_freq_serialization() {
        let mut b = SbatchBuilder::new();
        b.acctg_freq(AcctgFreq::Task(Second(30))).unwrap();
        b.acctg_freq(AcctgFreq::Energy(Second(60))).unwrap();
        assert_eq!(b.to_args(), vec!["--acctg-freq=task=30,energy=60"]);
    }

    #[test]
    fn test_array_spec_serialization() {
        let mut b = SbatchBuilder::new();
        b.array(0..=15);
        assert_eq!(b.to_args(), vec!["-a=0-15"]);

        let mut b = SbatchBuilder::new();
        b.array(0).array(6).array(16..=32);
        assert_eq!(b.to_args(), vec!["-a=0,6,16-32"]);
    }

    #[test]
    fn test_nodelist_dedup() {
        let mut b = SbatchBuilder::new();
        b.nodelist("node1").nodelist("node2").nodelist("node1");
        assert_eq!(b.to_args(), vec!["-w=node1,node2"]);
    }

    #[test]
    fn test_export_accumulates_without_dedup() {
        let mut b = SbatchBuilder::new();
        b.export("ALL").export("EDITOR=/bin/emacs").export("ALL");
        assert_eq!(b.to_args(), vec!["--export=ALL,EDITOR=/bin/emacs,ALL"]);
    }

    #[test]
    fn test_presence_only_flags() {
        let mut b = SbatchBuilder::new();
        b.hold().quiet().wait();
        assert_eq!(b.to_args(), vec!["-H", "-Q", "-W"]);
    }

    #[test]
    fn test_begin_timestamp_format() {
        let at = NaiveDateTime::parse_from_str("2010-01-20T12:34:00", "%Y-%m-%dT%H:%M:%S").unwrap();
        let mut b = SbatchBuilder::new();
        b.begin(at);
        assert_eq!(b.to_args(), vec!["-b=2010-01-20T12:34:00"]);
    }

    #[test]
    fn test_exclusive_forms() {
        let mut b = SbatchBuilder::new();
        b.exclusive(Exclusive::OtherRunningJobs);
        assert_eq!(b.to_args(), vec!["--exclusive"]);

        let mut b = SbatchBuilder::new();
        b.exclusive(Exclusive::Mcs);
        assert_eq!(b.to_args(), vec!["--exclusive=mcs"]);
    }

    #[test]
    fn test_time_limit_serialization() {
        let mut b = SbatchBuilder::new();
        b.time("1-00:00:00".parse().unwrap());
        assert_eq!(b.to_args(), vec!["-t=1-00:00:00"]);
    }

    #[test]
    fn test_full_flag_surface_golden_output() {
        let mut b = SbatchBuilder::new();
        b.account("proj")
            .batch("haswell|broadwell")
            .bb("pool=2TB")
            .bbf("bb.conf")
            .cluster_constraint("!gpu")
            .comment("nightly run")
            .constraint("intel&gpu")
            .container(Path::new("/opt/bundle"))
            .contiguous()
            .cores_per_socket(8)
            .cpu_freq(FrequencyPolicy::Performance)
            .cpus_per_gpu(4)
            .cpus_per_task(3)
            .delay_boot(Minute(10))
            .chdir(Path::new("/scratch"))
            .error(Path::new("err-%j.log"))
            .export_file("env.txt")
            .node_file(Path::new("nodes.txt"))
            .get_user_env("10L")
            .gid("staff")
            .gpus("volta:3")
            .gpu_bind("closest")
            .input(Path::new("stdin.txt"))
            .licenses("matlab:2")
            .mail_type(MailType::End)
            .mail_user("ops@example.org")
            .mincpus(2)
            .no_requeue()
            .ntasks(12)
            .ntasks_per_node(3)
            .open_mode(OpenMode::Append)
            .output(Path::new("out-%j.log"))
            .oversubscribe()
            .priority(10)
            .propagate(Propagate::Core)
            .qos("high")
            .reservation("maint")
            .time_min("30:00".parse().unwrap())
            .tmp(Megabyte(10_000))
            .uid("alice")
            .wckey("key1")
            .wrap("echo hi");

        assert_eq!(
            b.to_args(),
            vec![
                "-A=proj",
                "--batch=haswell|broadwell",
                "--bb=pool=2TB",
                "--bbf=bb.conf",
                "--cluster-constraint=!gpu",
                "--comment=nightly run",
                "-C=intel&gpu",
                "--container=/opt/bundle",
                "--contiguous",
                "--cores-per-socket=8",
                "--cpu-freq=Performance",
                "--cpus-per-gpu=4",
                "-c=3",
                "--delay-boot=10",
                "-D=/scratch",
                "-e=err-%j.log",
                "--export-file=env.txt",
                "-F=nodes.txt",
                "--get-user-env=10L",
                "--gid=staff",
                "-G=volta:3",
                "--gpu-bind=closest",
                "-i=stdin.txt",
                "-L=matlab:2",
                "--mail-type=END",
                "--mail-user=ops@example.org",
                "--mincpus=2",
                "--no-requeue",
                "-n=12",
                "--ntasks-per-node=3",
                "--open-mode=append",
                "-o=out-%j.log",
                "-s",
                "--priority=10",
                "--propagate=CORE",
                "-q=high",
                "--reservation=maint",
                "--time-min=30:00",
                "--tmp=10000",
                "--uid=alice",
                "--wckey=key1",
                "--wrap=echo hi",
            ]
        );
    }

    #[test]
    fn test_parse_submit_ack() {
        assert_eq!(parse_submit_ack("Submitted batch job 4242\n").unwrap(), 4242);
    }

    #[test]
    fn test_parse_submit_ack_rejects_garbage() {
        assert!(parse_submit_ack("sbatch: error: invalid partition\n").is_err());
        assert!(parse_submit_ack("Submitted batch job nope\n").is_err());
    }
}
