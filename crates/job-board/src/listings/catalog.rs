use super::domain::{ExperienceLevel, Job, JobType, Salary};
use super::normalizer::{normalize, RawJobRecord};
use serde_json::Value;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read job feed: {0}")]
    Io(#[from] std::io::Error),
    #[error("job feed is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Jobs sourced from the external feed, followed by the built-in fallback listings.
#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    jobs: Vec<Job>,
}

impl JobCatalog {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let payload: Value = serde_json::from_reader(reader)?;
        Ok(Self::from_payload(payload))
    }

    pub fn from_payload(payload: Value) -> Self {
        let mut jobs: Vec<Job> = records_from_payload(payload)
            .iter()
            .map(normalize)
            .collect();
        let feed_count = jobs.len();
        jobs.extend(fallback_jobs());

        warn_on_duplicate_ids(&jobs);
        info!(
            feed_jobs = feed_count,
            total_jobs = jobs.len(),
            "job catalog loaded"
        );

        Self { jobs }
    }

    /// Catalog used when no feed is configured: the fallback listings alone.
    pub fn fallback_only() -> Self {
        Self {
            jobs: fallback_jobs(),
        }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn find(&self, job_id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == job_id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// Split a feed payload into records: an array yields its elements, an object carrying a
/// `jobs` array yields those, anything else is treated as a single record.
pub fn records_from_payload(payload: Value) -> Vec<RawJobRecord> {
    match payload {
        Value::Array(items) => items.into_iter().map(RawJobRecord::new).collect(),
        Value::Object(mut fields) => match fields.remove("jobs") {
            Some(Value::Array(items)) => items.into_iter().map(RawJobRecord::new).collect(),
            Some(other) => {
                fields.insert("jobs".to_string(), other);
                vec![RawJobRecord::new(Value::Object(fields))]
            }
            None => vec![RawJobRecord::new(Value::Object(fields))],
        },
        other => vec![RawJobRecord::new(other)],
    }
}

fn warn_on_duplicate_ids(jobs: &[Job]) {
    let mut seen = HashSet::with_capacity(jobs.len());
    for job in jobs {
        if !seen.insert(job.id.as_str()) {
            warn!(job_id = %job.id, "duplicate job id in catalog; lookups by id are ambiguous");
        }
    }
}

/// Listings appended after the feed so the board is never empty.
pub fn fallback_jobs() -> Vec<Job> {
    vec![
        Job {
            id: "mock-1".to_string(),
            title: "Senior Frontend Developer".to_string(),
            company: "TechCorp Inc.".to_string(),
            location: "San Francisco, CA".to_string(),
            job_type: JobType::FullTime,
            experience_level: ExperienceLevel::SeniorLevel,
            salary: usd_per_year(120_000, 180_000),
            description: "We're looking for a skilled Senior Frontend Developer to join our dynamic team. You'll be responsible for building cutting-edge web applications using modern technologies and best practices.".to_string(),
            requirements: strings(&[
                "5+ years of experience with React and modern JavaScript",
                "Strong knowledge of TypeScript and Next.js",
                "Experience with state management (Redux, Zustand)",
                "Familiarity with testing frameworks (Jest, Cypress)",
                "Understanding of web performance optimization",
            ]),
            benefits: strings(&[
                "Competitive salary and equity package",
                "Health, dental, and vision insurance",
                "Flexible work arrangements",
                "Professional development budget",
                "Unlimited PTO policy",
            ]),
            skills: strings(&["React", "TypeScript", "Next.js"]),
            posted_date: "2024-01-15T00:00:00Z".to_string(),
            apply_url: None,
        },
        Job {
            id: "mock-2".to_string(),
            title: "Product Manager".to_string(),
            company: "InnovateLabs".to_string(),
            location: "New York, NY".to_string(),
            job_type: JobType::FullTime,
            experience_level: ExperienceLevel::MidLevel,
            salary: usd_per_year(130_000, 200_000),
            description: "Join our product team to drive innovation and shape the future of our platform.".to_string(),
            requirements: strings(&[
                "3+ years of product management experience",
                "Strong analytical and problem-solving skills",
                "Experience with agile development",
            ]),
            benefits: strings(&[
                "Competitive salary",
                "Stock options",
                "Health insurance",
                "Flexible hours",
            ]),
            skills: strings(&["Strategy", "Analytics", "Leadership"]),
            posted_date: "2024-01-14T00:00:00Z".to_string(),
            apply_url: None,
        },
    ]
}

fn usd_per_year(min: u64, max: u64) -> Salary {
    Salary {
        min,
        max,
        currency: "$".to_string(),
        period: "per year".to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
