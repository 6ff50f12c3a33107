//! Hand-off point for validated form submissions

mod outbox;
mod traits;

pub use outbox::Outbox;
pub use traits::SubmissionTarget;

#[cfg(test)]
pub use traits::MockSubmissionTarget;
