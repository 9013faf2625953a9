use super::domain::{Job, SortKey};
use std::cmp::Reverse;
use tracing::warn;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Stable ordering of a copy of `jobs`.
///
/// * `Date`: most recently posted first. Unparsable `postedDate` values count as the
///   earliest possible date, so they trail every parsable one in input order.
/// * `Salary`: highest `salary.max` first.
/// * `Title`: ascending alphabetical order that ignores case and accents
///   ("Économiste" before "Zoologist"); the raw title breaks remaining ties.
pub fn sort_jobs(jobs: &[Job], key: SortKey) -> Vec<Job> {
    let mut sorted = jobs.to_vec();
    match key {
        SortKey::Date => sorted.sort_by_cached_key(|job| Reverse(job.posted_at())),
        SortKey::Salary => sorted.sort_by(|a, b| b.salary.max.cmp(&a.salary.max)),
        SortKey::Title => sorted.sort_by_cached_key(|job| title_key(&job.title)),
    }
    sorted
}

/// Sort by a key drawn from an external label; an unknown label leaves the order untouched.
pub fn sort_jobs_by(jobs: &[Job], key: &str) -> Vec<Job> {
    match SortKey::parse(key) {
        Some(key) => sort_jobs(jobs, key),
        None => {
            warn!(sort_key = key, "unknown sort key; keeping input order");
            jobs.to_vec()
        }
    }
}

/// Accent- and case-folded title, then the lowercased title, then the raw title.
fn title_key(title: &str) -> (String, String, String) {
    let folded = title
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();
    (folded, title.to_lowercase(), title.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::test_support::job;

    fn ids(jobs: &[Job]) -> Vec<&str> {
        jobs.iter().map(|job| job.id.as_str()).collect()
    }

    fn salaried(id: &str, max: u64) -> Job {
        let mut job = job(id, id);
        job.salary.max = max;
        job
    }

    fn posted(id: &str, posted_date: &str) -> Job {
        let mut job = job(id, id);
        job.posted_date = posted_date.to_string();
        job
    }

    #[test]
    fn salary_sort_is_descending_and_stable() {
        let jobs = vec![
            salaried("A", 100_000),
            salaried("B", 150_000),
            salaried("C", 150_000),
        ];
        assert_eq!(ids(&sort_jobs(&jobs, SortKey::Salary)), vec!["B", "C", "A"]);
        assert_eq!(ids(&jobs), vec!["A", "B", "C"]);
    }

    #[test]
    fn date_sort_puts_newest_first() {
        let jobs = vec![
            posted("old", "2023-12-01T00:00:00Z"),
            posted("new", "2024-01-15T00:00:00Z"),
            posted("mid", "2024-01-14"),
        ];
        assert_eq!(ids(&sort_jobs(&jobs, SortKey::Date)), vec!["new", "mid", "old"]);
    }

    #[test]
    fn unparsable_dates_sort_last_in_input_order() {
        let jobs = vec![
            posted("bad-1", "soon"),
            posted("ok", "2020-01-01T00:00:00Z"),
            posted("bad-2", ""),
        ];
        assert_eq!(
            ids(&sort_jobs(&jobs, SortKey::Date)),
            vec!["ok", "bad-1", "bad-2"]
        );
    }

    #[test]
    fn title_sort_ignores_case_and_is_idempotent() {
        let jobs = vec![
            job("1", "product manager"),
            job("2", "Backend Engineer"),
            job("3", "Android Developer"),
        ];
        let once = sort_jobs(&jobs, SortKey::Title);
        assert_eq!(ids(&once), vec!["3", "2", "1"]);
        assert_eq!(sort_jobs(&once, SortKey::Title), once);
    }

    #[test]
    fn title_sort_folds_accents() {
        let jobs = vec![
            job("z", "Zoologist"),
            job("e", "Économiste"),
            job("a", "analyste"),
            job("plain", "Economist"),
        ];
        assert_eq!(
            ids(&sort_jobs(&jobs, SortKey::Title)),
            vec!["a", "plain", "e", "z"]
        );
    }

    #[test]
    fn unknown_sort_label_returns_identity_copy() {
        let jobs = vec![salaried("A", 1), salaried("B", 2)];
        assert_eq!(sort_jobs_by(&jobs, "relevance"), jobs);
        assert_eq!(ids(&sort_jobs_by(&jobs, "salary")), vec!["B", "A"]);
    }
}
