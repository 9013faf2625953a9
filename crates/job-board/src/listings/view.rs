use super::aggregate::aggregate;
use super::domain::{FilterCriteria, Job, JobCounts, SortKey};
use super::filter::filter_jobs;
use super::sort::sort_jobs;
use serde::Serialize;

/// Filtered, ordered listing plus sidebar counts for one criteria/sort selection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub jobs: Vec<Job>,
    pub counts: JobCounts,
    pub total: usize,
}

impl BoardView {
    /// Counts are taken over the whole collection, not the filtered result, so every
    /// option keeps showing how many jobs it would match.
    pub fn build(jobs: &[Job], criteria: &FilterCriteria, sort: SortKey) -> Self {
        let listed = sort_jobs(&filter_jobs(jobs, criteria), sort);
        Self {
            total: listed.len(),
            jobs: listed,
            counts: aggregate(jobs),
        }
    }
}
