use metrics_exporter_prometheus::PrometheusHandle;
use screening::assessment::{
    LeadNotification, LeadNotifier, NotificationError, RepositoryError, SubmissionId,
    SubmissionRecord, SubmissionRepository,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySubmissionRepository {
    records: Arc<Mutex<HashMap<SubmissionId, SubmissionRecord>>>,
}

impl SubmissionRepository for InMemorySubmissionRepository {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.submission_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.submission_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<SubmissionRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| b.received_at.cmp(&a.received_at));
        records.truncate(limit);
        Ok(records)
    }
}

/// Stand-in for the CRM/e-mail adapter; records the leads it is handed so the
/// demo command can show what would have been synced.
#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadNotifier {
    leads: Arc<Mutex<Vec<LeadNotification>>>,
}

impl LeadNotifier for InMemoryLeadNotifier {
    fn publish(&self, lead: LeadNotification) -> Result<(), NotificationError> {
        let mut guard = self.leads.lock().expect("notifier mutex poisoned");
        guard.push(lead);
        Ok(())
    }
}

impl InMemoryLeadNotifier {
    pub(crate) fn leads(&self) -> Vec<LeadNotification> {
        self.leads.lock().expect("notifier mutex poisoned").clone()
    }
}
