use job_board::listings::{
    aggregate, filter_jobs, normalize, sort_jobs, ExperienceLevel, FilterCriteria, Job, JobType,
    RawJobRecord, SortKey,
};
use serde_json::json;

fn feed_job(id: &str, fields: serde_json::Value) -> Job {
    let mut record = fields;
    record["id"] = json!(id);
    normalize(&RawJobRecord::new(record))
}

fn sample_board() -> Vec<Job> {
    vec![
        feed_job(
            "remote-rust",
            json!({
                "job_title": "Rust Engineer",
                "company": "Ferrous Systems",
                "location": "Berlin, DE",
                "job_type": "Remote",
                "experience_level": "Senior Level",
                "salary_max": 150000,
                "skills": ["Rust", "Tokio"],
                "posted_date": "2024-01-20T00:00:00Z"
            }),
        ),
        feed_job(
            "frontend",
            json!({
                "job_title": "Frontend Developer",
                "company": "Pixel Co",
                "location": "San Francisco, CA",
                "job_type": "Full Time",
                "experience_level": "Entry Level",
                "salary_max": 100000,
                "skills": ["React", "CSS"],
                "posted_date": "2024-01-18T00:00:00Z"
            }),
        ),
        feed_job(
            "contract-data",
            json!({
                "job_title": "Data Analyst",
                "company": "Numbers LLC",
                "location": "New York, NY",
                "job_type": "Contract",
                "salary_max": 150000,
                "skills": ["SQL"],
                "posted_date": "2024-01-22T00:00:00Z"
            }),
        ),
    ]
}

fn ids(jobs: &[Job]) -> Vec<&str> {
    jobs.iter().map(|job| job.id.as_str()).collect()
}

fn is_ordered_subsequence(candidate: &[Job], source: &[Job]) -> bool {
    let mut remaining = source.iter();
    candidate
        .iter()
        .all(|job| remaining.any(|other| other.id == job.id))
}

#[test]
fn filtered_results_are_ordered_subsequences() {
    let jobs = sample_board();
    let criteria_set = vec![
        FilterCriteria::default(),
        FilterCriteria {
            job_types: vec![JobType::Remote, JobType::Contract],
            ..FilterCriteria::default()
        },
        FilterCriteria {
            locations: vec!["san".to_string(), "york".to_string()],
            search_query: "a".to_string(),
            ..FilterCriteria::default()
        },
        FilterCriteria {
            experience_levels: vec![ExperienceLevel::MidLevel],
            ..FilterCriteria::default()
        },
    ];

    for criteria in criteria_set {
        let filtered = filter_jobs(&jobs, &criteria);
        assert!(is_ordered_subsequence(&filtered, &jobs), "{criteria:?}");
    }
}

#[test]
fn empty_criteria_is_identity() {
    let jobs = sample_board();
    let criteria = FilterCriteria {
        job_types: Vec::new(),
        locations: Vec::new(),
        experience_levels: Vec::new(),
        search_query: String::new(),
    };
    assert!(criteria.is_empty());
    assert_eq!(filter_jobs(&jobs, &criteria), jobs);
}

#[test]
fn remote_filter_returns_the_single_remote_job() {
    let jobs = sample_board();
    let criteria = FilterCriteria {
        job_types: vec![JobType::Remote],
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter_jobs(&jobs, &criteria)), vec!["remote-rust"]);
}

#[test]
fn search_matches_skills_regardless_of_case() {
    let jobs = sample_board();
    let criteria = FilterCriteria {
        search_query: "react".to_string(),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter_jobs(&jobs, &criteria)), vec!["frontend"]);
}

#[test]
fn salary_ties_keep_input_order() {
    let jobs = sample_board();
    let sorted = sort_jobs(&jobs, SortKey::Salary);
    assert_eq!(ids(&sorted), vec!["remote-rust", "contract-data", "frontend"]);
}

#[test]
fn date_sort_lists_newest_first() {
    let jobs = sample_board();
    assert_eq!(
        ids(&sort_jobs(&jobs, SortKey::Date)),
        vec!["contract-data", "remote-rust", "frontend"]
    );
}

#[test]
fn title_sort_is_idempotent() {
    let jobs = sample_board();
    let once = sort_jobs(&jobs, SortKey::Title);
    assert_eq!(sort_jobs(&once, SortKey::Title), once);
    assert_eq!(ids(&once), vec!["contract-data", "frontend", "remote-rust"]);
}

#[test]
fn engines_leave_inputs_untouched() {
    let jobs = sample_board();
    let snapshot = jobs.clone();
    let _ = filter_jobs(&jobs, &FilterCriteria {
        search_query: "rust".to_string(),
        ..FilterCriteria::default()
    });
    let _ = sort_jobs(&jobs, SortKey::Salary);
    let _ = aggregate(&jobs);
    assert_eq!(jobs, snapshot);
}

#[test]
fn aggregation_totals_match_input_length() {
    let jobs = sample_board();
    let counts = aggregate(&jobs);
    assert_eq!(counts.job_type_counts.values().sum::<usize>(), jobs.len());
    assert_eq!(
        counts.experience_level_counts.values().sum::<usize>(),
        jobs.len()
    );
    assert_eq!(counts.experience_level_counts[&ExperienceLevel::MidLevel], 1);
    assert_eq!(counts.location_counts["San Francisco"], 1);
    assert_eq!(counts.location_counts["New York"], 1);
    assert_eq!(counts.location_counts["Berlin"], 1);
}

#[test]
fn aggregation_ignores_input_order() {
    let jobs = sample_board();
    let mut reversed = jobs.clone();
    reversed.reverse();
    assert_eq!(aggregate(&jobs), aggregate(&reversed));
}
