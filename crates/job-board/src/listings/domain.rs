use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[default]
    #[serde(rename = "Full Time")]
    FullTime,
    #[serde(rename = "Part Time")]
    PartTime,
    #[serde(rename = "Contract")]
    Contract,
    #[serde(rename = "Remote")]
    Remote,
}

impl JobType {
    pub const fn ordered() -> [Self; 4] {
        [Self::FullTime, Self::PartTime, Self::Contract, Self::Remote]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full Time",
            Self::PartTime => "Part Time",
            Self::Contract => "Contract",
            Self::Remote => "Remote",
        }
    }

    /// Matches the display label exactly; feed and form values use the same spelling.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|job_type| job_type.label() == value)
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Entry Level")]
    EntryLevel,
    #[default]
    #[serde(rename = "Mid Level")]
    MidLevel,
    #[serde(rename = "Senior Level")]
    SeniorLevel,
}

impl ExperienceLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::EntryLevel, Self::MidLevel, Self::SeniorLevel]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EntryLevel => "Entry Level",
            Self::MidLevel => "Mid Level",
            Self::SeniorLevel => "Senior Level",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|level| level.label() == value)
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Advertised pay band. `min <= max` is expected but never enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salary {
    pub min: u64,
    pub max: u64,
    pub currency: String,
    pub period: String,
}

/// Canonical job listing shared by the feed, managed postings, and every engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub experience_level: ExperienceLevel,
    pub salary: Salary,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub skills: Vec<String>,
    pub posted_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_url: Option<String>,
}

impl Job {
    /// Parsed `postedDate`, or `None` when the stored string is not a recognizable timestamp.
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.posted_date)
    }
}

pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

/// Application submitted by a job seeker. `job_id` references a [`Job`] without owning it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: String,
    pub job_id: String,
    pub user_id: String,
    pub applied_date: String,
    pub status: ApplicationStatus,
}

/// Four-dimensional filter input. An empty dimension places no constraint on the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub job_types: Vec<JobType>,
    pub locations: Vec<String>,
    pub experience_levels: Vec<ExperienceLevel>,
    pub search_query: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.job_types.is_empty()
            && self.locations.is_empty()
            && self.experience_levels.is_empty()
            && self.search_query.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Date,
    Salary,
    Title,
}

impl SortKey {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Salary => "salary",
            Self::Title => "title",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "date" => Some(Self::Date),
            "salary" => Some(Self::Salary),
            "title" => Some(Self::Title),
            _ => None,
        }
    }
}

/// Per-category counts rendered next to each filter option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCounts {
    pub job_type_counts: BTreeMap<JobType, usize>,
    pub location_counts: BTreeMap<String, usize>,
    pub experience_level_counts: BTreeMap<ExperienceLevel, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_labels_round_trip_through_parse() {
        for job_type in JobType::ordered() {
            assert_eq!(JobType::parse(job_type.label()), Some(job_type));
        }
        for level in ExperienceLevel::ordered() {
            assert_eq!(ExperienceLevel::parse(level.label()), Some(level));
        }
        assert_eq!(JobType::parse("full time"), None);
        assert_eq!(SortKey::parse(" Salary "), Some(SortKey::Salary));
        assert_eq!(SortKey::parse("relevance"), None);
    }

    #[test]
    fn job_serializes_with_feed_field_names() {
        let job = Job {
            id: "mock-9".to_string(),
            title: "Data Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Austin, TX".to_string(),
            job_type: JobType::PartTime,
            experience_level: ExperienceLevel::EntryLevel,
            salary: Salary {
                min: 50_000,
                max: 70_000,
                currency: "$".to_string(),
                period: "per year".to_string(),
            },
            description: String::new(),
            requirements: Vec::new(),
            benefits: Vec::new(),
            skills: vec!["SQL".to_string()],
            posted_date: "2024-01-10T00:00:00Z".to_string(),
            apply_url: None,
        };

        let value = serde_json::to_value(&job).expect("serialize job");
        assert_eq!(value["jobType"], "Part Time");
        assert_eq!(value["experienceLevel"], "Entry Level");
        assert_eq!(value["postedDate"], "2024-01-10T00:00:00Z");
        assert!(value.get("applyUrl").is_none());
    }

    #[test]
    fn timestamps_accept_rfc3339_naive_and_date_only() {
        assert!(parse_timestamp("2024-01-15T00:00:00Z").is_some());
        assert!(parse_timestamp("2024-01-15T08:30:00.250").is_some());
        assert_eq!(
            parse_timestamp("2024-01-15"),
            parse_timestamp("2024-01-15T00:00:00+00:00")
        );
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("   ").is_none());
    }
}
