use super::domain::{ExperienceLevel, Job, JobType, Salary};
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

const DEFAULT_TITLE: &str = "Software Engineer";
const DEFAULT_COMPANY: &str = "Tech Company";
const DEFAULT_LOCATION: &str = "San Francisco, CA";
const DEFAULT_SALARY_MIN: u64 = 80_000;
const DEFAULT_SALARY_MAX: u64 = 120_000;
const DEFAULT_CURRENCY: &str = "$";
const DEFAULT_PERIOD: &str = "per year";
const DEFAULT_DESCRIPTION: &str =
    "We are looking for a talented professional to join our dynamic team.";
const DEFAULT_REQUIREMENTS: &[&str] = &[
    "3+ years of experience",
    "Strong technical skills",
    "Team collaboration experience",
];
const DEFAULT_BENEFITS: &[&str] = &[
    "Competitive salary and equity package",
    "Health, dental, and vision insurance",
    "Flexible work arrangements",
    "Professional development budget",
];
const DEFAULT_SKILLS: &[&str] = &["JavaScript", "React", "Node.js"];

const GENERATED_ID_LEN: usize = 9;

/// Loosely-typed listing as delivered by the external feed.
///
/// Nothing about the payload is trusted: every field is validated and defaulted by
/// [`normalize`] before a [`Job`] leaves this module.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawJobRecord(Value);

impl RawJobRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    fn fields(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    fn text(&self, key: &str) -> Option<String> {
        self.fields()?
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    fn amount(&self, key: &str) -> Option<u64> {
        let value = self.fields()?.get(key)?;
        let amount = match value.as_u64() {
            Some(amount) => amount,
            None => {
                let float = value.as_f64()?;
                if !float.is_finite() || float < 0.0 {
                    return None;
                }
                float.round() as u64
            }
        };
        Some(amount).filter(|amount| *amount > 0)
    }

    fn list(&self, key: &str) -> Option<Vec<String>> {
        let entries: Vec<String> = self
            .fields()?
            .get(key)?
            .as_array()?
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect();
        Some(entries).filter(|entries| !entries.is_empty())
    }

    fn identifier(&self) -> Option<String> {
        match self.fields()?.get("id")? {
            Value::String(id) if !id.is_empty() => Some(id.clone()),
            Value::Number(id) if id.as_f64() != Some(0.0) => Some(id.to_string()),
            _ => None,
        }
    }
}

impl From<Value> for RawJobRecord {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

/// Map one feed record onto the canonical job shape. Never fails; absent or malformed
/// fields resolve to fixed defaults.
pub fn normalize(record: &RawJobRecord) -> Job {
    let job_type = record
        .text("job_type")
        .and_then(|label| JobType::parse(&label))
        .unwrap_or_default();
    let experience_level = record
        .text("experience_level")
        .and_then(|label| ExperienceLevel::parse(&label))
        .unwrap_or_default();

    Job {
        id: record.identifier().unwrap_or_else(generate_id),
        title: record
            .text("job_title")
            .or_else(|| record.text("title"))
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        company: record
            .text("company")
            .unwrap_or_else(|| DEFAULT_COMPANY.to_string()),
        location: record
            .text("location")
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        job_type,
        experience_level,
        salary: Salary {
            min: record.amount("salary_min").unwrap_or(DEFAULT_SALARY_MIN),
            max: record.amount("salary_max").unwrap_or(DEFAULT_SALARY_MAX),
            currency: DEFAULT_CURRENCY.to_string(),
            period: DEFAULT_PERIOD.to_string(),
        },
        description: record
            .text("description")
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        requirements: record
            .list("requirements")
            .unwrap_or_else(|| owned(DEFAULT_REQUIREMENTS)),
        benefits: record
            .list("benefits")
            .unwrap_or_else(|| owned(DEFAULT_BENEFITS)),
        skills: record
            .list("skills")
            .unwrap_or_else(|| owned(DEFAULT_SKILLS)),
        posted_date: record.text("posted_date").unwrap_or_else(now_timestamp),
        apply_url: record.text("apply_url"),
    }
}

/// Short random identifier; collisions are tolerated rather than prevented.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(GENERATED_ID_LEN)
        .collect()
}

pub(crate) fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
