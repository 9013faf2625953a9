use crate::listings::{Job, JobApplication};

/// Storage seam for submitted applications.
pub trait ApplicationRepository: Send + Sync {
    /// Store a new application. A second application by the same user to the same job
    /// must fail with [`RepositoryError::Conflict`] in the same critical section as the
    /// write.
    fn insert(&self, application: JobApplication) -> Result<JobApplication, RepositoryError>;
    fn for_user(&self, user_id: &str) -> Result<Vec<JobApplication>, RepositoryError>;
}

/// Storage seam for recruiter-managed postings, newest first.
pub trait ManagedJobRepository: Send + Sync {
    fn insert_front(&self, job: Job) -> Result<Job, RepositoryError>;
    fn replace(&self, job: Job) -> Result<(), RepositoryError>;
    fn remove(&self, job_id: &str) -> Result<Job, RepositoryError>;
    fn fetch(&self, job_id: &str) -> Result<Option<Job>, RepositoryError>;
    fn list(&self) -> Result<Vec<Job>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
