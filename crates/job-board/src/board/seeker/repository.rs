use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ApplicationId, ResumeAttachment, SeekerNotice};
use crate::board::domain::PostingId;

/// Stored application plus the posting headline captured at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub application_id: ApplicationId,
    pub posting_id: PostingId,
    pub posting_title: String,
    pub applicant_name: String,
    pub resume: ResumeAttachment,
    pub submitted_at: DateTime<Utc>,
}

impl ApplicationRecord {
    pub fn view(&self) -> ApplicationView {
        ApplicationView {
            application_id: self.application_id.clone(),
            posting_id: self.posting_id,
            posting_title: self.posting_title.clone(),
            resume_file: self.resume.file_name.clone(),
            submitted_at: self.submitted_at,
        }
    }
}

/// Storage abstraction so the service can be exercised in isolation.
pub trait SeekerRepository: Send + Sync {
    fn insert_application(
        &self,
        record: ApplicationRecord,
    ) -> Result<ApplicationRecord, RepositoryError>;
    fn fetch_application(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<ApplicationRecord>, RepositoryError>;
    /// Flips the saved flag for `posting_id`, returning whether it is now saved.
    fn toggle_saved(&self, posting_id: PostingId) -> Result<bool, RepositoryError>;
    /// Saved posting ids in the order they were saved.
    fn saved(&self) -> Result<Vec<PostingId>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound confirmation hook (toast, e-mail, or log adapters).
pub trait NoticePublisher: Send + Sync {
    fn publish(&self, notice: SeekerNotice) -> Result<(), NoticeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NoticeError {
    #[error("notice transport unavailable: {0}")]
    Transport(String),
}

/// Public shape of an application returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationView {
    pub application_id: ApplicationId,
    pub posting_id: PostingId,
    pub posting_title: String,
    pub resume_file: String,
    pub submitted_at: DateTime<Utc>,
}
