//! Job listing core: normalization of feed records, filtering, ordering, and counts.

pub mod aggregate;
pub mod catalog;
pub mod domain;
pub mod filter;
pub mod format;
pub mod normalizer;
pub mod sort;
mod view;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregate::{aggregate, city_of};
pub use catalog::{fallback_jobs, records_from_payload, CatalogError, JobCatalog};
pub use domain::{
    ApplicationStatus, ExperienceLevel, FilterCriteria, Job, JobApplication, JobCounts, JobType,
    Salary, SortKey,
};
pub use filter::filter_jobs;
pub use format::{format_salary, skill_preview, time_ago};
pub use normalizer::{normalize, RawJobRecord};
pub use sort::{sort_jobs, sort_jobs_by};
pub use view::BoardView;
