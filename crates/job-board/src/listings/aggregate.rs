use super::domain::{ExperienceLevel, Job, JobCounts, JobType};
use std::collections::BTreeMap;

/// Count jobs per job type, city, and experience level.
///
/// Every job type and experience level is present in the result, even at zero, so
/// filter options can show a `(0)` badge. Cities only appear once a job mentions them.
pub fn aggregate(jobs: &[Job]) -> JobCounts {
    let mut job_type_counts: BTreeMap<JobType, usize> = JobType::ordered()
        .into_iter()
        .map(|job_type| (job_type, 0))
        .collect();
    let mut experience_level_counts: BTreeMap<ExperienceLevel, usize> =
        ExperienceLevel::ordered()
            .into_iter()
            .map(|level| (level, 0))
            .collect();
    let mut location_counts: BTreeMap<String, usize> = BTreeMap::new();

    for job in jobs {
        *job_type_counts.entry(job.job_type).or_default() += 1;
        *experience_level_counts
            .entry(job.experience_level)
            .or_default() += 1;
        *location_counts
            .entry(city_of(&job.location).to_string())
            .or_default() += 1;
    }

    JobCounts {
        job_type_counts,
        location_counts,
        experience_level_counts,
    }
}

/// Portion of a location before its first comma, trimmed.
pub fn city_of(location: &str) -> &str {
    location.split(',').next().unwrap_or_default().trim()
}
