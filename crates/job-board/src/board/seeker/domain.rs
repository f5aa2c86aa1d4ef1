use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board::domain::PostingId;

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Resume file attached to an application. Only the file name is retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeAttachment {
    pub file_name: String,
}

/// Seeker supplied payload for applying to a posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSubmission {
    pub posting_id: PostingId,
    pub applicant_name: String,
    #[serde(default)]
    pub resume: Option<ResumeAttachment>,
}

/// Result of toggling a posting on the saved list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveOutcome {
    Saved,
    Removed,
}

impl SaveOutcome {
    pub fn is_saved(self) -> bool {
        matches!(self, Self::Saved)
    }
}

/// Validation failures for seeker actions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeekerActionError {
    #[error("posting {0} is not in the catalog")]
    UnknownPosting(PostingId),
    #[error("please upload your resume first")]
    MissingResume,
    #[error("applicant name is required")]
    MissingApplicantName,
}

/// Confirmation emitted after a seeker action completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekerNotice {
    pub template: String,
    pub posting_id: PostingId,
    pub message: String,
    pub emitted_at: DateTime<Utc>,
}
