pub mod catalog;
pub mod domain;
pub mod filter;
pub mod seeker;

pub use catalog::{CatalogError, JobCatalog};
pub use domain::{
    CriteriaError, DatePostedBucket, FilterCriteria, JobPosting, JobType, JobTypeFilter, PostingId,
};
pub use filter::{filter_jobs, SearchResults, PAGE_SIZE};
