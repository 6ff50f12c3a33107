//! Trait abstraction for the submission target to enable mocking in tests

use crate::state::Submission;
use anyhow::Result;

/// Receives a form submission once client-side checks pass.
///
/// Stands in for the page's native form post; authentication and account
/// creation happen on the other side of this seam.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionTarget {
    /// Hand over a validated submission
    fn submit(&mut self, submission: Submission) -> Result<()>;
}
