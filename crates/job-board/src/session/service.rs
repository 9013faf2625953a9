use std::sync::{Arc, RwLock};

use serde::Serialize;
use tracing::info;

use super::domain::{Capabilities, Role, User};
use super::draft::{DraftError, JobDraft};
use super::repository::{ApplicationRepository, ManagedJobRepository, RepositoryError};
use crate::listings::normalizer::{generate_id, now_timestamp};
use crate::listings::{
    ApplicationStatus, BoardView, FilterCriteria, Job, JobApplication, JobCatalog, SortKey,
};

/// Prefix that keeps recruiter-created ids apart from feed ids.
pub const MANAGED_ID_PREFIX: &str = "managed-";

/// Session controller owning the signed-in user, applications, and managed postings.
///
/// The listing engines only ever see the combined job collection this type hands them.
pub struct JobBoardSession<A, M> {
    catalog: Arc<JobCatalog>,
    applications: Arc<A>,
    managed: Arc<M>,
    user: RwLock<Option<User>>,
}

/// An application joined with the job it targets.
#[derive(Debug, Clone, Serialize)]
pub struct AppliedJob {
    pub application: JobApplication,
    pub job: Job,
}

impl<A, M> JobBoardSession<A, M>
where
    A: ApplicationRepository + 'static,
    M: ManagedJobRepository + 'static,
{
    pub fn new(catalog: Arc<JobCatalog>, applications: Arc<A>, managed: Arc<M>) -> Self {
        Self {
            catalog,
            applications,
            managed,
            user: RwLock::new(None),
        }
    }

    /// Sign in without any credential check.
    ///
    /// The user id is derived from the lowercased email so a returning visitor sees the
    /// applications made earlier in the session; the name is the email's local part.
    pub fn sign_in(&self, email: &str, role: Role) -> Result<User, SessionError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(SessionError::MissingEmail);
        }

        let name = email.split('@').next().unwrap_or(email).to_string();
        let user = User {
            id: format!("user-{}", email.to_lowercase()),
            name,
            email: email.to_string(),
            role,
        };

        info!(user_id = %user.id, role = %role, "user signed in");
        *self.user.write().expect("session lock poisoned") = Some(user.clone());
        Ok(user)
    }

    pub fn sign_out(&self) -> Option<User> {
        let previous = self.user.write().expect("session lock poisoned").take();
        if let Some(user) = &previous {
            info!(user_id = %user.id, "user signed out");
        }
        previous
    }

    pub fn current_user(&self) -> Option<User> {
        self.user.read().expect("session lock poisoned").clone()
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::for_user(self.current_user().as_ref())
    }

    /// Feed jobs followed by managed jobs (newest managed posting first).
    pub fn all_jobs(&self) -> Result<Vec<Job>, SessionError> {
        let mut jobs = self.catalog.jobs().to_vec();
        jobs.extend(self.managed.list()?);
        Ok(jobs)
    }

    pub fn view(
        &self,
        criteria: &FilterCriteria,
        sort: SortKey,
    ) -> Result<BoardView, SessionError> {
        let jobs = self.all_jobs()?;
        Ok(BoardView::build(&jobs, criteria, sort))
    }

    pub fn job(&self, job_id: &str) -> Result<Job, SessionError> {
        if let Some(job) = self.catalog.find(job_id) {
            return Ok(job.clone());
        }
        self.managed
            .fetch(job_id)?
            .ok_or_else(|| SessionError::UnknownJob(job_id.to_string()))
    }

    pub fn apply(&self, job_id: &str) -> Result<JobApplication, SessionError> {
        let user = self.require_role(Role::Jobseeker)?;
        self.job(job_id)?;

        // The repository rejects a repeated (user, job) pair atomically with the insert.
        let application = JobApplication {
            id: generate_id(),
            job_id: job_id.to_string(),
            user_id: user.id.clone(),
            applied_date: now_timestamp(),
            status: ApplicationStatus::Pending,
        };
        let stored = self
            .applications
            .insert(application)
            .map_err(|err| match err {
                RepositoryError::Conflict => SessionError::AlreadyApplied(job_id.to_string()),
                other => SessionError::Repository(other),
            })?;
        info!(application_id = %stored.id, job_id, user_id = %user.id, "application submitted");
        Ok(stored)
    }

    /// Whether the signed-in user has applied to `job_id`; always false when anonymous.
    pub fn has_applied(&self, job_id: &str) -> Result<bool, SessionError> {
        match self.current_user() {
            Some(user) => self.applied_by(&user, job_id),
            None => Ok(false),
        }
    }

    /// Applications of the signed-in user whose jobs still exist, in submission order.
    pub fn applied_jobs(&self) -> Result<Vec<AppliedJob>, SessionError> {
        let user = self.current_user().ok_or(SessionError::NotSignedIn)?;
        let jobs = self.all_jobs()?;

        Ok(self
            .applications
            .for_user(&user.id)?
            .into_iter()
            .filter_map(|application| {
                jobs.iter()
                    .find(|job| job.id == application.job_id)
                    .cloned()
                    .map(|job| AppliedJob { application, job })
            })
            .collect())
    }

    pub fn managed_jobs(&self) -> Result<Vec<Job>, SessionError> {
        Ok(self.managed.list()?)
    }

    pub fn add_job(&self, draft: JobDraft) -> Result<Job, SessionError> {
        self.require_role(Role::Recruiter)?;
        let id = format!("{MANAGED_ID_PREFIX}{}", generate_id());
        let job = draft.into_job(id, now_timestamp())?;
        let stored = self.managed.insert_front(job)?;
        info!(job_id = %stored.id, "managed job posted");
        Ok(stored)
    }

    /// Replace the editable fields of a managed posting; id and posting date are kept.
    pub fn update_job(&self, job_id: &str, draft: JobDraft) -> Result<Job, SessionError> {
        self.require_role(Role::Recruiter)?;
        let existing = self
            .managed
            .fetch(job_id)?
            .ok_or_else(|| SessionError::UnknownJob(job_id.to_string()))?;

        let updated = draft.into_job(existing.id, existing.posted_date)?;
        self.managed.replace(updated.clone())?;
        info!(job_id, "managed job updated");
        Ok(updated)
    }

    pub fn delete_job(&self, job_id: &str) -> Result<Job, SessionError> {
        self.require_role(Role::Recruiter)?;
        let removed = self.managed.remove(job_id).map_err(|err| match err {
            RepositoryError::NotFound => SessionError::UnknownJob(job_id.to_string()),
            other => SessionError::Repository(other),
        })?;
        info!(job_id, "managed job deleted");
        Ok(removed)
    }

    fn require_role(&self, role: Role) -> Result<User, SessionError> {
        let user = self.current_user().ok_or(SessionError::NotSignedIn)?;
        if user.role != role {
            return Err(SessionError::Forbidden { required: role });
        }
        Ok(user)
    }

    fn applied_by(&self, user: &User, job_id: &str) -> Result<bool, SessionError> {
        Ok(self
            .applications
            .for_user(&user.id)?
            .iter()
            .any(|application| application.job_id == job_id))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("an email address is required to sign in")]
    MissingEmail,
    #[error("please sign in first")]
    NotSignedIn,
    #[error("only {required} accounts can do that")]
    Forbidden { required: Role },
    #[error("job {0} not found")]
    UnknownJob(String),
    #[error("already applied to job {0}")]
    AlreadyApplied(String),
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
