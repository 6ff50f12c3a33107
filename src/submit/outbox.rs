//! In-memory submission target
//!
//! Holds submissions for the account service to pick up. Nothing is sent over
//! the network or written to disk.

use super::traits::SubmissionTarget;
use crate::state::Submission;
use anyhow::Result;

/// Queues submissions in memory
#[derive(Debug, Default)]
pub struct Outbox {
    pending: Vec<Submission>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submissions handed over so far, oldest first
    pub fn pending(&self) -> &[Submission] {
        &self.pending
    }
}

impl SubmissionTarget for Outbox {
    fn submit(&mut self, submission: Submission) -> Result<()> {
        // Values may hold passwords; only names are logged
        tracing::info!(
            form = submission.form.label(),
            fields = ?submission.field_names(),
            "queued submission"
        );
        self.pending.push(submission);
        Ok(())
    }
}
