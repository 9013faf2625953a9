use job_board::listings::{CatalogError, ExperienceLevel, JobCatalog, JobType, SortKey};
use job_board::session::{
    InMemoryApplicationRepository, InMemoryManagedJobRepository, JobBoardSession,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type BoardSession =
    JobBoardSession<InMemoryApplicationRepository, InMemoryManagedJobRepository>;

/// Load the feed when one is configured; otherwise serve the fallback listings alone.
pub(crate) fn load_catalog(feed: Option<&Path>) -> Result<JobCatalog, CatalogError> {
    match feed {
        Some(path) => JobCatalog::from_path(path),
        None => Ok(JobCatalog::fallback_only()),
    }
}

pub(crate) fn build_session(catalog: JobCatalog) -> BoardSession {
    JobBoardSession::new(
        Arc::new(catalog),
        Arc::new(InMemoryApplicationRepository::default()),
        Arc::new(InMemoryManagedJobRepository::default()),
    )
}

pub(crate) fn parse_job_type(raw: &str) -> Result<JobType, String> {
    JobType::parse(raw.trim()).ok_or_else(|| {
        format!(
            "unknown job type '{raw}' (expected one of: {})",
            JobType::ordered().map(JobType::label).join(", ")
        )
    })
}

pub(crate) fn parse_experience_level(raw: &str) -> Result<ExperienceLevel, String> {
    ExperienceLevel::parse(raw.trim()).ok_or_else(|| {
        format!(
            "unknown experience level '{raw}' (expected one of: {})",
            ExperienceLevel::ordered()
                .map(ExperienceLevel::label)
                .join(", ")
        )
    })
}

pub(crate) fn parse_sort_key(raw: &str) -> Result<SortKey, String> {
    SortKey::parse(raw.trim())
        .ok_or_else(|| format!("unknown sort key '{raw}' (expected date, salary, or title)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_parsers_accept_display_labels() {
        assert_eq!(parse_job_type("Part Time"), Ok(JobType::PartTime));
        assert_eq!(
            parse_experience_level(" Entry Level "),
            Ok(ExperienceLevel::EntryLevel)
        );
        assert_eq!(parse_sort_key("title"), Ok(SortKey::Title));
    }

    #[test]
    fn value_parsers_list_expected_labels() {
        let error = parse_job_type("Gig").expect_err("rejected");
        assert!(error.contains("Full Time, Part Time, Contract, Remote"));
        assert!(parse_sort_key("hot").is_err());
    }

    #[test]
    fn missing_feed_falls_back_to_builtin_listings() {
        let catalog = load_catalog(None).expect("fallback catalog");
        assert_eq!(catalog.len(), 2);
        assert!(load_catalog(Some(Path::new("./missing-feed.json"))).is_err());
    }
}
