//! Job seeker actions layered over the read-only catalog: saving postings and
//! applying with a resume.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationId, ApplicationSubmission, ResumeAttachment, SaveOutcome, SeekerActionError,
    SeekerNotice,
};
pub use repository::{
    ApplicationRecord, ApplicationView, NoticeError, NoticePublisher, RepositoryError,
    SeekerRepository,
};
pub use router::{board_router, SearchQuery};
pub use service::{JobSeekerService, SeekerServiceError};
