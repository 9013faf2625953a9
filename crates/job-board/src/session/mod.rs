//! Visitor session: role selection, job applications, and recruiter-managed postings.

pub mod domain;
pub mod draft;
pub mod memory;
pub mod repository;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Capabilities, Role, User};
pub use draft::{DraftError, JobDraft};
pub use memory::{InMemoryApplicationRepository, InMemoryManagedJobRepository};
pub use repository::{ApplicationRepository, ManagedJobRepository, RepositoryError};
pub use service::{AppliedJob, JobBoardSession, SessionError, MANAGED_ID_PREFIX};
