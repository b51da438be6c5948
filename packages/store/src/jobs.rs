//! # Job listing fixtures and client-side filtering
//!
//! The job browser filters an in-memory list; nothing here touches the
//! network. [`JobFilter::apply`] is pure: it never reorders, and applying the
//! same filter to its own output changes nothing.

use std::collections::BTreeSet;

use crate::models::Job;

const FIXTURES: &str = include_str!("../fixtures/jobs.json");

/// The static job listings shown on the dashboard and admin jobs view.
pub fn fixtures() -> Vec<Job> {
    serde_json::from_str(FIXTURES).unwrap_or_default()
}

/// Search text plus the tag and company selections from the filter sidebar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobFilter {
    pub search: String,
    pub tags: BTreeSet<String>,
    pub companies: BTreeSet<String>,
}

impl JobFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.companies.insert(company.into());
        self
    }

    /// Add the tag if absent, remove it otherwise.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.tags.remove(tag) {
            self.tags.insert(tag.to_string());
        }
    }

    /// Add the company if absent, remove it otherwise.
    pub fn toggle_company(&mut self, company: &str) {
        if !self.companies.remove(company) {
            self.companies.insert(company.to_string());
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.tags.is_empty() && self.companies.is_empty()
    }

    /// Whether a single job passes every active criterion.
    pub fn matches(&self, job: &Job) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !job.matches_text(&needle) {
            return false;
        }
        if !self.tags.is_empty() && !job.tags.iter().any(|t| self.tags.contains(t)) {
            return false;
        }
        if !self.companies.is_empty() && !self.companies.contains(&job.company) {
            return false;
        }
        true
    }

    /// Jobs that pass the filter, in their original order.
    pub fn apply(&self, jobs: &[Job]) -> Vec<Job> {
        jobs.iter().filter(|j| self.matches(j)).cloned().collect()
    }
}

/// Every tag used by `jobs`, sorted and de-duplicated.
pub fn distinct_tags(jobs: &[Job]) -> Vec<String> {
    jobs.iter()
        .flat_map(|j| j.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Every company in `jobs`, sorted and de-duplicated.
pub fn distinct_companies(jobs: &[Job]) -> Vec<String> {
    jobs.iter()
        .map(|j| j.company.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_parse() {
        let jobs = fixtures();
        assert_eq!(jobs.len(), 8);
        assert!(jobs.iter().all(|j| !j.title.is_empty()));
        let ids: BTreeSet<u32> = jobs.iter().map(|j| j.id).collect();
        assert_eq!(ids.len(), jobs.len());
    }

    #[test]
    fn test_empty_filter_returns_full_set() {
        let jobs = fixtures();
        let filter = JobFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&jobs), jobs);

        // Whitespace-only search is still empty
        let filter = JobFilter::new().with_search("   ");
        assert_eq!(filter.apply(&jobs), jobs);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let jobs = fixtures();
        let found = JobFilter::new().with_search("FRONTEND").apply(&jobs);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Senior Frontend Engineer");

        // Matches location and tags too
        let remote = JobFilter::new().with_search("remote").apply(&jobs);
        assert!(remote.iter().all(|j| j.location == "Remote" || j.tags.contains(&"Remote".to_string())));
        assert_eq!(remote.len(), 3);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let jobs = fixtures();
        let filter = JobFilter::new()
            .with_search("engineer")
            .with_tag("Kubernetes")
            .with_tag("React");
        let once = filter.apply(&jobs);
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
        assert!(!once.is_empty());
    }

    #[test]
    fn test_tags_match_any_selected() {
        let jobs = fixtures();
        let found = JobFilter::new().with_tag("Go").with_tag("Swift").apply(&jobs);
        let titles: Vec<&str> = found.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Backend Developer", "Mobile Developer"]);
    }

    #[test]
    fn test_companies_and_tags_combine() {
        let jobs = fixtures();
        let found = JobFilter::new()
            .with_company("Northwind Labs")
            .with_tag("Kubernetes")
            .apply(&jobs);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "DevOps Engineer");
    }

    #[test]
    fn test_preserves_original_order() {
        let jobs = fixtures();
        let found = JobFilter::new().with_company("Acme Studio").apply(&jobs);
        let ids: Vec<u32> = found.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![3, 7]);
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut filter = JobFilter::new();
        filter.toggle_tag("Remote");
        assert!(filter.tags.contains("Remote"));
        filter.toggle_tag("Remote");
        assert!(filter.tags.is_empty());

        filter.toggle_company("Acme Studio");
        filter.search = "x".to_string();
        filter.clear();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_distinct_values_sorted() {
        let jobs = fixtures();
        let companies = distinct_companies(&jobs);
        assert_eq!(
            companies,
            vec!["Acme Studio", "Bluefin Systems", "Greenleaf Health", "Northwind Labs"]
        );
        let tags = distinct_tags(&jobs);
        assert!(tags.windows(2).all(|w| w[0] < w[1]));
        assert!(tags.contains(&"Python".to_string()));
    }

    #[test]
    fn test_initials() {
        let job = &fixtures()[0];
        assert_eq!(job.initials(), "NL");
    }
}
