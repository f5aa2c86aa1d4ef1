use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::domain::{
    ApplicationId, ApplicationSubmission, SaveOutcome, SeekerActionError, SeekerNotice,
};
use super::repository::{
    ApplicationRecord, NoticePublisher, RepositoryError, SeekerRepository,
};
use crate::board::catalog::JobCatalog;
use crate::board::domain::{FilterCriteria, JobPosting, PostingId};
use crate::board::filter::SearchResults;

/// Service composing the read-only catalog with seeker storage and notices.
pub struct JobSeekerService<R, N> {
    catalog: JobCatalog,
    repository: Arc<R>,
    notices: Arc<N>,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

impl<R, N> JobSeekerService<R, N>
where
    R: SeekerRepository + 'static,
    N: NoticePublisher + 'static,
{
    pub fn new(catalog: JobCatalog, repository: Arc<R>, notices: Arc<N>) -> Self {
        Self {
            catalog,
            repository,
            notices,
        }
    }

    pub fn search(&self, criteria: &FilterCriteria) -> SearchResults {
        let results = self.catalog.search(criteria);
        debug!(
            matched = results.total,
            catalog = self.catalog.len(),
            "listing filter applied"
        );
        results
    }

    pub fn posting(&self, posting_id: PostingId) -> Result<&JobPosting, SeekerActionError> {
        self.catalog
            .get(posting_id)
            .ok_or(SeekerActionError::UnknownPosting(posting_id))
    }

    /// Save the posting if it is not saved yet, otherwise remove it.
    pub fn toggle_saved(&self, posting_id: PostingId) -> Result<SaveOutcome, SeekerServiceError> {
        self.posting(posting_id)?;

        let outcome = if self.repository.toggle_saved(posting_id)? {
            SaveOutcome::Saved
        } else {
            SaveOutcome::Removed
        };

        let (template, message) = match outcome {
            SaveOutcome::Saved => ("job_saved", "Job saved successfully!"),
            SaveOutcome::Removed => ("job_unsaved", "Job removed from saved jobs"),
        };
        self.notify(template, posting_id, message.to_string());

        Ok(outcome)
    }

    /// Saved postings in save order. Ids no longer in the catalog are skipped.
    pub fn saved_jobs(&self) -> Result<Vec<JobPosting>, SeekerServiceError> {
        let saved = self.repository.saved()?;
        Ok(saved
            .into_iter()
            .filter_map(|id| self.catalog.get(id).cloned())
            .collect())
    }

    /// Record an application for a catalog posting. A resume is mandatory.
    pub fn apply(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<ApplicationRecord, SeekerServiceError> {
        let ApplicationSubmission {
            posting_id,
            applicant_name,
            resume,
        } = submission;

        let posting = self.posting(posting_id)?;
        let resume = resume
            .filter(|attachment| !attachment.file_name.trim().is_empty())
            .ok_or(SeekerActionError::MissingResume)?;
        let applicant_name = applicant_name.trim().to_string();
        if applicant_name.is_empty() {
            return Err(SeekerActionError::MissingApplicantName.into());
        }

        let record = ApplicationRecord {
            application_id: next_application_id(),
            posting_id,
            posting_title: posting.title.clone(),
            applicant_name,
            resume,
            submitted_at: Utc::now(),
        };

        let stored = self.repository.insert_application(record)?;
        info!(
            application_id = %stored.application_id.0,
            posting_id = %posting_id,
            "application submitted"
        );
        self.notify(
            "application_submitted",
            posting_id,
            format!("Application submitted for {}!", stored.posting_title),
        );

        Ok(stored)
    }

    pub fn application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ApplicationRecord, SeekerServiceError> {
        let record = self
            .repository
            .fetch_application(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// The action is already stored when this runs, so a failed notice is only logged.
    fn notify(&self, template: &str, posting_id: PostingId, message: String) {
        let notice = SeekerNotice {
            template: template.to_string(),
            posting_id,
            message,
            emitted_at: Utc::now(),
        };
        if let Err(error) = self.notices.publish(notice) {
            warn!(template, posting_id = %posting_id, %error, "seeker notice not delivered");
        }
    }
}

/// Error raised by the seeker service.
#[derive(Debug, thiserror::Error)]
pub enum SeekerServiceError {
    #[error(transparent)]
    Action(#[from] SeekerActionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
