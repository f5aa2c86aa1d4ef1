mod parser;
mod sample;

use crate::board::domain::{FilterCriteria, JobPosting, PostingId};
use crate::board::filter::{filter_jobs, SearchResults};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnknownJobType { id: PostingId, value: String },
    DuplicateId(PostingId),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read job catalog: {}", err),
            CatalogError::Csv(err) => write!(f, "invalid job catalog CSV data: {}", err),
            CatalogError::UnknownJobType { id, value } => {
                write!(f, "posting {} has unknown job type '{}'", id, value)
            }
            CatalogError::DuplicateId(id) => {
                write!(f, "posting id {} appears more than once in the catalog", id)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Csv(err) => Some(err),
            CatalogError::UnknownJobType { .. } | CatalogError::DuplicateId(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Immutable posting set shared by every request.
///
/// Cloning is cheap; all clones point at the same postings.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    postings: Arc<[JobPosting]>,
}

impl JobCatalog {
    pub fn new(postings: Vec<JobPosting>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(postings.len());
        for posting in &postings {
            if !seen.insert(posting.id) {
                return Err(CatalogError::DuplicateId(posting.id));
            }
        }

        Ok(Self {
            postings: postings.into(),
        })
    }

    /// Built-in postings used when no catalog file is configured.
    pub fn sample() -> Self {
        Self {
            postings: sample::sample_postings().into(),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(file)?;
        debug!(path = %path.display(), postings = catalog.len(), "job catalog loaded");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let postings = parser::parse_postings(reader)?;
        Self::new(postings)
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn get(&self, id: PostingId) -> Option<&JobPosting> {
        self.postings.iter().find(|posting| posting.id == id)
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn search(&self, criteria: &FilterCriteria) -> SearchResults {
        SearchResults::new(filter_jobs(&self.postings, criteria))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::domain::JobType;
    use std::io::Cursor;

    const CSV: &str = "id,title,company,location,salary,job_type,posted,category,description,requirements\n\
        10,Backend Engineer,Ferrous Labs,Remote,\"$100,000 - $130,000\",Full-time,4 days ago,Development,Build services in Rust.,Rust;Tokio;SQL\n\
        11,Support Intern,Ferrous Labs,\"Denver, CO\",,Internship,2 weeks ago,,Help customers succeed.,\n";

    #[test]
    fn sample_catalog_has_unique_ids() {
        let catalog = JobCatalog::sample();
        assert_eq!(catalog.len(), 7);
        let rebuilt = JobCatalog::new(catalog.postings().to_vec());
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn csv_catalog_parses_rows() {
        let catalog = JobCatalog::from_reader(Cursor::new(CSV)).expect("catalog parses");
        assert_eq!(catalog.len(), 2);

        let engineer = catalog.get(PostingId(10)).expect("posting 10 present");
        assert_eq!(engineer.salary_range, "$100,000 - $130,000");
        assert_eq!(engineer.requirements, vec!["Rust", "Tokio", "SQL"]);
        assert_eq!(engineer.category.as_deref(), Some("Development"));

        let intern = catalog.get(PostingId(11)).expect("posting 11 present");
        assert_eq!(intern.job_type, JobType::Internship);
        assert_eq!(intern.category, None);
        assert!(intern.requirements.is_empty());
    }

    #[test]
    fn csv_rejects_unknown_job_type() {
        let csv = "id,title,company,location,salary,job_type,posted,category,description,requirements\n\
            1,Welder,Acme,Ohio,,full-time,1 day ago,,Weld things.,\n";

        match JobCatalog::from_reader(Cursor::new(csv)) {
            Err(CatalogError::UnknownJobType { id, value }) => {
                assert_eq!(id, PostingId(1));
                assert_eq!(value, "full-time");
            }
            other => panic!("expected unknown job type, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut postings = JobCatalog::sample().postings().to_vec();
        postings.push(postings[0].clone());

        match JobCatalog::new(postings) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, PostingId(1)),
            other => panic!("expected duplicate id, got {other:?}"),
        }
    }

    #[test]
    fn search_wraps_filter_output() {
        let catalog = JobCatalog::sample();
        let results = catalog.search(&FilterCriteria::default().category("Design"));
        assert_eq!(results.total, 1);
        assert_eq!(results.jobs[0].title, "Product Designer");
    }
}
