use serde::Serialize;

use super::domain::{FilterCriteria, JobPosting};

/// Number of rows a listing page shows before the count label caps out.
pub const PAGE_SIZE: usize = 10;

/// Returns the postings admitted by `criteria`, in their original order.
///
/// Pure and infallible: the input is never touched and identical inputs always
/// produce identical output, so callers can recompute on every keystroke.
pub fn filter_jobs(postings: &[JobPosting], criteria: &FilterCriteria) -> Vec<JobPosting> {
    if criteria.is_unfiltered() {
        return postings.to_vec();
    }

    let needles = Needles::from(criteria);
    postings
        .iter()
        .filter(|posting| needles.admit(criteria, posting))
        .cloned()
        .collect()
}

impl FilterCriteria {
    /// True when every active predicate holds for `posting`.
    pub fn matches(&self, posting: &JobPosting) -> bool {
        Needles::from(self).admit(self, posting)
    }
}

/// Lowercased search terms, computed once per filter pass.
struct Needles {
    search: Option<String>,
    location: Option<String>,
}

impl From<&FilterCriteria> for Needles {
    fn from(criteria: &FilterCriteria) -> Self {
        let lower = |text: &str| (!text.is_empty()).then(|| text.to_lowercase());
        Self {
            search: lower(&criteria.search_text),
            location: lower(&criteria.location_text),
        }
    }
}

impl Needles {
    fn admit(&self, criteria: &FilterCriteria, posting: &JobPosting) -> bool {
        let search_ok = match &self.search {
            None => true,
            Some(needle) => {
                contains_folded(&posting.title, needle)
                    || contains_folded(&posting.company, needle)
                    || contains_folded(&posting.description, needle)
            }
        };

        let location_ok = match &self.location {
            None => true,
            Some(needle) => contains_folded(&posting.location, needle),
        };

        let category_ok = match &criteria.category {
            None => true,
            Some(expected) => posting.category.as_deref() == Some(expected.as_str()),
        };

        search_ok
            && location_ok
            && criteria.job_type.admits(posting.job_type)
            && criteria.date_posted.admits(&posting.posted_label)
            && category_ok
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Filter output plus the count labels shown above a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub headline: String,
    pub showing: String,
    pub total: usize,
    pub jobs: Vec<JobPosting>,
}

impl SearchResults {
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        let total = jobs.len();
        let noun = if total == 1 { "Job" } else { "Jobs" };
        Self {
            headline: format!("{total} {noun} Found"),
            showing: format!("Showing {} of {} results", total.min(PAGE_SIZE), total),
            total,
            jobs,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
