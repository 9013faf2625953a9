use crate::listings::{ExperienceLevel, Job, JobType, Salary};
use serde::{Deserialize, Serialize};

/// Form input for a recruiter-managed posting.
///
/// Requirements and benefits are newline separated, skills comma separated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub job_type: JobType,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    pub salary_min: u64,
    pub salary_max: u64,
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub benefits: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub apply_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

impl JobDraft {
    pub fn validate(&self) -> Result<(), DraftError> {
        let required = [
            ("title", &self.title),
            ("company", &self.company),
            ("location", &self.location),
            ("description", &self.description),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DraftError::MissingField(field));
            }
        }
        Ok(())
    }

    pub(crate) fn into_job(self, id: String, posted_date: String) -> Result<Job, DraftError> {
        self.validate()?;
        Ok(Job {
            id,
            title: self.title,
            company: self.company,
            location: self.location,
            job_type: self.job_type,
            experience_level: self.experience_level,
            salary: Salary {
                min: self.salary_min,
                max: self.salary_max,
                currency: "$".to_string(),
                period: "per year".to_string(),
            },
            description: self.description,
            requirements: split_entries(&self.requirements, '\n'),
            benefits: split_entries(&self.benefits, '\n'),
            skills: split_entries(&self.skills, ','),
            posted_date,
            apply_url: self.apply_url.filter(|url| !url.trim().is_empty()),
        })
    }

    /// Draft pre-filled from an existing posting, as the edit form shows it.
    pub fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            job_type: job.job_type,
            experience_level: job.experience_level,
            salary_min: job.salary.min,
            salary_max: job.salary.max,
            description: job.description.clone(),
            requirements: job.requirements.join("\n"),
            benefits: job.benefits.join("\n"),
            skills: job.skills.join(", "),
            apply_url: job.apply_url.clone(),
        }
    }
}

fn split_entries(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
