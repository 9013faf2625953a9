use super::repository::{ApplicationRepository, ManagedJobRepository, RepositoryError};
use crate::listings::{Job, JobApplication};
use std::sync::{Arc, Mutex};

/// Session-lifetime application store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryApplicationRepository {
    records: Arc<Mutex<Vec<JobApplication>>>,
}

impl ApplicationRepository for InMemoryApplicationRepository {
    fn insert(&self, application: JobApplication) -> Result<JobApplication, RepositoryError> {
        let mut guard = self.records.lock().expect("application mutex poisoned");
        let duplicate = guard.iter().any(|existing| {
            existing.id == application.id
                || (existing.user_id == application.user_id
                    && existing.job_id == application.job_id)
        });
        if duplicate {
            return Err(RepositoryError::Conflict);
        }
        guard.push(application.clone());
        Ok(application)
    }

    fn for_user(&self, user_id: &str) -> Result<Vec<JobApplication>, RepositoryError> {
        let guard = self.records.lock().expect("application mutex poisoned");
        Ok(guard
            .iter()
            .filter(|application| application.user_id == user_id)
            .cloned()
            .collect())
    }
}

/// Session-lifetime store for recruiter postings.
#[derive(Debug, Default, Clone)]
pub struct InMemoryManagedJobRepository {
    jobs: Arc<Mutex<Vec<Job>>>,
}

impl ManagedJobRepository for InMemoryManagedJobRepository {
    fn insert_front(&self, job: Job) -> Result<Job, RepositoryError> {
        let mut guard = self.jobs.lock().expect("managed job mutex poisoned");
        if guard.iter().any(|existing| existing.id == job.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(0, job.clone());
        Ok(job)
    }

    fn replace(&self, job: Job) -> Result<(), RepositoryError> {
        let mut guard = self.jobs.lock().expect("managed job mutex poisoned");
        match guard.iter_mut().find(|existing| existing.id == job.id) {
            Some(slot) => {
                *slot = job;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn remove(&self, job_id: &str) -> Result<Job, RepositoryError> {
        let mut guard = self.jobs.lock().expect("managed job mutex poisoned");
        let index = guard
            .iter()
            .position(|existing| existing.id == job_id)
            .ok_or(RepositoryError::NotFound)?;
        Ok(guard.remove(index))
    }

    fn fetch(&self, job_id: &str) -> Result<Option<Job>, RepositoryError> {
        let guard = self.jobs.lock().expect("managed job mutex poisoned");
        Ok(guard.iter().find(|job| job.id == job_id).cloned())
    }

    fn list(&self) -> Result<Vec<Job>, RepositoryError> {
        Ok(self.jobs.lock().expect("managed job mutex poisoned").clone())
    }
}
