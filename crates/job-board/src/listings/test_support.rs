use super::domain::{ExperienceLevel, Job, JobType, Salary};

pub(crate) fn job(id: &str, title: &str) -> Job {
    Job {
        id: id.to_string(),
        title: title.to_string(),
        company: "Acme Corp".to_string(),
        location: "Chicago, IL".to_string(),
        job_type: JobType::FullTime,
        experience_level: ExperienceLevel::MidLevel,
        salary: Salary {
            min: 90_000,
            max: 110_000,
            currency: "$".to_string(),
            period: "per year".to_string(),
        },
        description: "Build things.".to_string(),
        requirements: vec!["2+ years of experience".to_string()],
        benefits: vec!["Health insurance".to_string()],
        skills: vec!["Rust".to_string()],
        posted_date: "2024-01-01T00:00:00Z".to_string(),
        apply_url: None,
    }
}
