use super::domain::{FilterCriteria, Job};

/// Return the jobs matching every dimension of `criteria`, in input order.
pub fn filter_jobs(jobs: &[Job], criteria: &FilterCriteria) -> Vec<Job> {
    let matcher = CriteriaMatcher::new(criteria);
    jobs.iter()
        .filter(|job| matcher.matches(job))
        .cloned()
        .collect()
}

/// Criteria with the case-insensitive operands lowered once up front.
struct CriteriaMatcher<'a> {
    criteria: &'a FilterCriteria,
    locations: Vec<String>,
    query: String,
}

impl<'a> CriteriaMatcher<'a> {
    fn new(criteria: &'a FilterCriteria) -> Self {
        Self {
            criteria,
            locations: criteria
                .locations
                .iter()
                .map(|location| location.to_lowercase())
                .collect(),
            query: criteria.search_query.to_lowercase(),
        }
    }

    fn matches(&self, job: &Job) -> bool {
        self.matches_job_type(job)
            && self.matches_location(job)
            && self.matches_experience(job)
            && self.matches_search(job)
    }

    fn matches_job_type(&self, job: &Job) -> bool {
        self.criteria.job_types.is_empty() || self.criteria.job_types.contains(&job.job_type)
    }

    fn matches_location(&self, job: &Job) -> bool {
        if self.locations.is_empty() {
            return true;
        }
        let location = job.location.to_lowercase();
        self.locations
            .iter()
            .any(|wanted| location.contains(wanted.as_str()))
    }

    fn matches_experience(&self, job: &Job) -> bool {
        self.criteria.experience_levels.is_empty()
            || self
                .criteria
                .experience_levels
                .contains(&job.experience_level)
    }

    fn matches_search(&self, job: &Job) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let query = self.query.as_str();
        job.title.to_lowercase().contains(query)
            || job.company.to_lowercase().contains(query)
            || job
                .skills
                .iter()
                .any(|skill| skill.to_lowercase().contains(query))
    }
}
