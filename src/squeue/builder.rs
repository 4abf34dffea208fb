// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Fluent configuration surface for `squeue`.

use std::time::Duration;

use log::warn;

use super::types::{JobStateCode, Squeue, SqueueField};
use crate::error::Error;
use crate::exec;
use crate::types::{FormatSpec, Second};

/// Name of the external job queue query tool.
const SQUEUE: &str = "squeue";

/// Builder for one `squeue` invocation.
#[derive(Debug, Default)]
pub struct SqueueBuilder {
    squeue: Squeue,
}

impl SqueueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The populated option model.
    pub fn model(&self) -> &Squeue {
        &self.squeue
    }

    /// Serialize the accumulated options into an argument vector.
    pub fn to_args(&self) -> Vec<String> {
        self.squeue.to_args()
    }

    /// Limit the view to jobs charged to this account. Repeated calls
    /// accumulate.
    pub fn accounts(&mut self, account: &str) -> &mut Self {
        self.squeue.accounts.push(account.to_string());
        self
    }

    /// Display jobs and job steps in all partitions, including hidden and
    /// unavailable ones.
    pub fn all(&mut self) -> &mut Self {
        self.squeue.all = true;
        self
    }

    /// Display one job array element per line instead of the condensed
    /// pending-element notation.
    pub fn array(&mut self) -> &mut Self {
        self.squeue.array = true;
        self
    }

    /// Display one unique pending job array element per line.
    pub fn array_unique(&mut self) -> &mut Self {
        self.squeue.array_unique = true;
        self
    }

    /// Show jobs from the federation if a member of one.
    pub fn federation(&mut self) -> &mut Self {
        if self.squeue.local {
            warn!("`federation` is overridden by `local`");
        }
        self.squeue.federation = true;
        self
    }

    /// Do not print a header on the output.
    pub fn no_header(&mut self) -> &mut Self {
        self.squeue.no_header = true;
        self
    }

    /// Do not display jobs in hidden or unavailable partitions (the default
    /// behavior, made explicit).
    pub fn hide(&mut self) -> &mut Self {
        self.squeue.hide = true;
        self
    }

    /// Repeatedly gather and report at this interval.
    pub fn iterate(&mut self, interval: Second) -> &mut Self {
        self.squeue.iterate = Some(interval);
        self
    }

    /// Limit the view to these job ids. Repeated calls accumulate; jobs on
    /// hidden partitions are shown when explicitly listed.
    pub fn jobs(&mut self, ids: impl IntoIterator<Item = u32>) -> &mut Self {
        self.squeue.jobs.extend(ids);
        self
    }

    /// Show only jobs local to this cluster; overrides `federation`.
    pub fn local(&mut self) -> &mut Self {
        if self.squeue.federation {
            warn!("`local` overrides `federation`");
        }
        self.squeue.local = true;
        self
    }

    /// Report more of the available information for the selected jobs.
    pub fn long(&mut self) -> &mut Self {
        self.squeue.long = true;
        self
    }

    /// Limit the view to jobs requesting or using this license. Repeated
    /// calls accumulate.
    pub fn licenses(&mut self, license: &str) -> &mut Self {
        self.squeue.licenses.push(license.to_string());
        self
    }

    /// Cluster to issue commands to; `all` queries every cluster.
    /// Repeated calls accumulate. Implicitly local.
    pub fn clusters(&mut self, name: &str) -> &mut Self {
        self.squeue.clusters.push(name.to_string());
        self
    }

    /// Limit the view to jobs or steps with this name. Repeated calls
    /// accumulate.
    pub fn names(&mut self, name: &str) -> &mut Self {
        self.squeue.names.push(name.to_string());
        self
    }

    /// Don't convert units from their original type (e.g. 2048M stays M).
    pub fn dont_convert(&mut self) -> &mut Self {
        self.squeue.dont_convert = true;
        self
    }

    /// Raw `%`-style output format string (`-o`). Takes precedence over
    /// typed format fields.
    pub fn format(&mut self, fmt: &str) -> &mut Self {
        self.squeue.format_raw = Some(fmt.to_string());
        self
    }

    /// Append a typed output field (`-O`). Repeated calls accumulate.
    pub fn format_field(&mut self, spec: FormatSpec<SqueueField>) -> &mut Self {
        self.squeue.format_fields.push(spec);
        self
    }

    /// Limit the view to this partition. Repeated calls accumulate.
    pub fn partitions(&mut self, name: &str) -> &mut Self {
        self.squeue.partitions.push(name.to_string());
        self
    }

    /// For pending jobs submitted to multiple partitions, list the job once
    /// per partition and consider partition priority when sorting.
    pub fn priority(&mut self) -> &mut Self {
        self.squeue.priority = true;
        self
    }

    /// Limit the view to jobs with this quality of service. Repeated calls
    /// accumulate.
    pub fn qos(&mut self, qos: &str) -> &mut Self {
        self.squeue.qos.push(qos.to_string());
        self
    }

    /// Limit the view to jobs using this reservation.
    pub fn reservation(&mut self, name: &str) -> &mut Self {
        self.squeue.reservation = Some(name.to_string());
        self
    }

    /// View the given job step, format `"job_id[_array_id].step_id"`.
    /// Repeated calls accumulate.
    pub fn steps(&mut self, step: &str) -> &mut Self {
        self.squeue.steps.push(step.to_string());
        self
    }

    /// Show all sibling jobs on a federated cluster; implies `federation`.
    pub fn sibling(&mut self) -> &mut Self {
        self.squeue.sibling = true;
        self
    }

    /// Report records in this order; the same field specification as the
    /// output format, fields comma-separated, each optionally preceded by
    /// `+`/`-` for ascending/descending.
    pub fn sort(&mut self, order: &str) -> &mut Self {
        self.squeue.sort = Some(order.to_string());
        self
    }

    /// Report the expected start time and resources of pending jobs in
    /// order of increasing start time.
    pub fn start(&mut self) -> &mut Self {
        self.squeue.start = true;
        self
    }

    /// Limit the view to jobs in this state. Repeated calls accumulate.
    pub fn state(&mut self, state: JobStateCode) -> &mut Self {
        self.squeue.states.push(state);
        self
    }

    /// Limit the view to jobs of this user (name or id). Repeated calls
    /// accumulate.
    pub fn users(&mut self, user: &str) -> &mut Self {
        self.squeue.users.push(user.to_string());
        self
    }

    /// Report details of the tool's actions.
    pub fn verbose(&mut self) -> &mut Self {
        self.squeue.verbose = true;
        self
    }

    /// Print version information and exit.
    pub fn version(&mut self) -> &mut Self {
        self.squeue.version = true;
        self
    }

    /// Report only jobs allocated to this node or list of nodes.
    pub fn nodelist(&mut self, nodes: &str) -> &mut Self {
        self.squeue.nodelist = Some(nodes.to_string());
        self
    }

    /// Run the tool and return its captured stdout.
    pub fn run(&self) -> Result<String, Error> {
        exec::run_capture(SQUEUE, &self.squeue.to_args())
    }

    /// Run the tool with inherited streams, waiting up to `timeout` for it
    /// to exit. Useful with `iterate`, which makes the tool loop.
    pub fn watch(&self, timeout: Option<Duration>) -> Result<(), Error> {
        exec::run_inherit(SQUEUE, &self.squeue.to_args(), timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_state_format_args() {
        let mut b = SqueueBuilder::new();
        b.partitions("intel")
            .state(JobStateCode::Pending)
            .format("%.6i %p");
        assert_eq!(b.to_args(), vec!["-o", "%.6i %p", "-p", "intel", "-t", "PENDING"]);
    }

    #[test]
    fn test_jobs_range() {
        let mut b = SqueueBuilder::new();
        b.jobs(3_684_390..=3_684_392);
        assert_eq!(b.to_args(), vec!["-j3684390,3684391,3684392"]);
    }

    #[test]
    fn test_user_and_account_filters() {
        let mut b = SqueueBuilder::new();
        b.users("alice").users("bob").accounts("physics");
        assert_eq!(b.to_args(), vec!["-A", "physics", "-u", "alice,bob"]);
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let mut b = SqueueBuilder::new();
        b.all().long().state(JobStateCode::Running);
        assert_eq!(b.to_args(), b.to_args());
    }
}
