use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::board::catalog::JobCatalog;
use crate::board::domain::PostingId;
use crate::board::seeker::domain::{
    ApplicationId, ApplicationSubmission, ResumeAttachment, SeekerNotice,
};
use crate::board::seeker::repository::{
    ApplicationRecord, NoticeError, NoticePublisher, RepositoryError, SeekerRepository,
};
use crate::board::seeker::{board_router, JobSeekerService};

pub(super) fn submission(posting_id: u32) -> ApplicationSubmission {
    ApplicationSubmission {
        posting_id: PostingId(posting_id),
        applicant_name: "Jordan Rivera".to_string(),
        resume: Some(ResumeAttachment {
            file_name: "jordan-rivera.pdf".to_string(),
        }),
    }
}

pub(super) fn submission_without_resume(posting_id: u32) -> ApplicationSubmission {
    ApplicationSubmission {
        resume: None,
        ..submission(posting_id)
    }
}

pub(super) fn build_service() -> (
    JobSeekerService<MemoryRepository, MemoryNotices>,
    Arc<MemoryRepository>,
    Arc<MemoryNotices>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notices = Arc::new(MemoryNotices::default());
    let service = JobSeekerService::new(JobCatalog::sample(), repository.clone(), notices.clone());
    (service, repository, notices)
}

pub(super) fn router_with_service(
    service: JobSeekerService<MemoryRepository, MemoryNotices>,
) -> axum::Router {
    board_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    applications: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
    saved: Arc<Mutex<Vec<PostingId>>>,
}

impl SeekerRepository for MemoryRepository {
    fn insert_application(
        &self,
        record: ApplicationRecord,
    ) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.applications.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.application_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.application_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch_application(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.applications.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn toggle_saved(&self, posting_id: PostingId) -> Result<bool, RepositoryError> {
        let mut guard = self.saved.lock().expect("repository mutex poisoned");
        if let Some(index) = guard.iter().position(|id| *id == posting_id) {
            guard.remove(index);
            Ok(false)
        } else {
            guard.push(posting_id);
            Ok(true)
        }
    }

    fn saved(&self) -> Result<Vec<PostingId>, RepositoryError> {
        Ok(self.saved.lock().expect("repository mutex poisoned").clone())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotices {
    events: Arc<Mutex<Vec<SeekerNotice>>>,
}

impl MemoryNotices {
    pub(super) fn events(&self) -> Vec<SeekerNotice> {
        self.events.lock().expect("notice mutex poisoned").clone()
    }
}

impl NoticePublisher for MemoryNotices {
    fn publish(&self, notice: SeekerNotice) -> Result<(), NoticeError> {
        self.events
            .lock()
            .expect("notice mutex poisoned")
            .push(notice);
        Ok(())
    }
}

pub(super) struct OfflineNotices;

impl NoticePublisher for OfflineNotices {
    fn publish(&self, _notice: SeekerNotice) -> Result<(), NoticeError> {
        Err(NoticeError::Transport("toast channel closed".to_string()))
    }
}

pub(super) struct UnavailableRepository;

impl SeekerRepository for UnavailableRepository {
    fn insert_application(
        &self,
        _record: ApplicationRecord,
    ) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_application(
        &self,
        _id: &ApplicationId,
    ) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn toggle_saved(&self, _posting_id: PostingId) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn saved(&self) -> Result<Vec<PostingId>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
