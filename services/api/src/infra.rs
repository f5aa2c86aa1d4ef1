use job_board::board::seeker::{
    ApplicationId, ApplicationRecord, NoticeError, NoticePublisher, RepositoryError,
    SeekerNotice, SeekerRepository,
};
use job_board::board::{DatePostedBucket, JobCatalog, JobTypeFilter, PostingId};
use job_board::config::AppConfig;
use job_board::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySeekerRepository {
    applications: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
    saved: Arc<Mutex<Vec<PostingId>>>,
}

impl SeekerRepository for InMemorySeekerRepository {
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
        match guard.iter().position(|id| *id == posting_id) {
            Some(index) => {
                guard.remove(index);
                Ok(false)
            }
            None => {
                guard.push(posting_id);
                Ok(true)
            }
        }
    }

    fn saved(&self) -> Result<Vec<PostingId>, RepositoryError> {
        let guard = self.saved.lock().expect("repository mutex poisoned");
        Ok(guard.clone())
    }
}

/// Records notices and mirrors them to the log in place of a toast.
#[derive(Default, Clone)]
pub(crate) struct InMemoryNoticePublisher {
    events: Arc<Mutex<Vec<SeekerNotice>>>,
}

impl NoticePublisher for InMemoryNoticePublisher {
    fn publish(&self, notice: SeekerNotice) -> Result<(), NoticeError> {
        info!(template = %notice.template, posting_id = %notice.posting_id, "{}", notice.message);
        let mut guard = self.events.lock().expect("notice mutex poisoned");
        guard.push(notice);
        Ok(())
    }
}

impl InMemoryNoticePublisher {
    pub(crate) fn events(&self) -> Vec<SeekerNotice> {
        self.events.lock().expect("notice mutex poisoned").clone()
    }
}

/// Loads the environment config; a `--catalog` flag wins over `JOB_BOARD_CATALOG`.
pub(crate) fn load_config(catalog: Option<PathBuf>) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = catalog {
        config.catalog.path = Some(path);
    }
    Ok(config)
}

/// Seed the catalog from a CSV path when one is provided, otherwise the sample set.
pub(crate) fn load_catalog(path: Option<PathBuf>) -> Result<JobCatalog, AppError> {
    match path {
        Some(path) => JobCatalog::from_path(path).map_err(AppError::from),
        None => Ok(JobCatalog::sample()),
    }
}

pub(crate) fn parse_job_type(raw: &str) -> Result<JobTypeFilter, String> {
    raw.trim().parse().map_err(|err| format!("{err}"))
}

pub(crate) fn parse_date_bucket(raw: &str) -> Result<DatePostedBucket, String> {
    raw.trim().parse().map_err(|err| format!("{err}"))
}
