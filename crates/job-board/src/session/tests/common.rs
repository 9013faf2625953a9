use std::sync::Arc;

use crate::listings::{ExperienceLevel, Job, JobApplication, JobCatalog, JobType};
use crate::session::repository::{ApplicationRepository, RepositoryError};
use crate::session::{
    InMemoryApplicationRepository, InMemoryManagedJobRepository, JobBoardSession, JobDraft,
};

pub(super) type MemorySession =
    JobBoardSession<InMemoryApplicationRepository, InMemoryManagedJobRepository>;

pub(super) fn build_session() -> (
    MemorySession,
    Arc<InMemoryApplicationRepository>,
    Arc<InMemoryManagedJobRepository>,
) {
    let applications = Arc::new(InMemoryApplicationRepository::default());
    let managed = Arc::new(InMemoryManagedJobRepository::default());
    let session = JobBoardSession::new(
        Arc::new(JobCatalog::fallback_only()),
        applications.clone(),
        managed.clone(),
    );
    (session, applications, managed)
}

pub(super) fn draft() -> JobDraft {
    JobDraft {
        title: "Site Reliability Engineer".to_string(),
        company: "Northwind".to_string(),
        location: "Seattle, WA".to_string(),
        job_type: JobType::Remote,
        experience_level: ExperienceLevel::SeniorLevel,
        salary_min: 150_000,
        salary_max: 190_000,
        description: "Keep production healthy.".to_string(),
        requirements: "On-call experience\n\n  Linux internals  \n".to_string(),
        benefits: "Home office budget\nLearning stipend".to_string(),
        skills: "Rust, Terraform, , Prometheus".to_string(),
        apply_url: None,
    }
}

pub(super) fn ids(jobs: &[Job]) -> Vec<&str> {
    jobs.iter().map(|job| job.id.as_str()).collect()
}

pub(super) struct UnavailableApplications;

impl ApplicationRepository for UnavailableApplications {
    fn insert(&self, _application: JobApplication) -> Result<JobApplication, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn for_user(&self, _user_id: &str) -> Result<Vec<JobApplication>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}
