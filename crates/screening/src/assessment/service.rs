use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::repository::{
    ContactDetails, LeadNotification, LeadNotifier, RepositoryError, SubmissionId,
    SubmissionRecord, SubmissionRepository,
};
use super::{AssessmentEngine, QuestionCatalog};

/// One submission as received from the questionnaire collaborator: identity
/// fields plus the raw answer map keyed by question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentIntake {
    pub contact: ContactDetails,
    pub answers: BTreeMap<String, String>,
}

/// Service composing the engine with the persistence and notification
/// boundaries.
pub struct ScreeningService<R, N> {
    engine: AssessmentEngine,
    repository: Arc<R>,
    notifier: Arc<N>,
}

static SUBMISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_submission_id() -> SubmissionId {
    let id = SUBMISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SubmissionId(format!("sub-{id:06}"))
}

impl<R, N> ScreeningService<R, N>
where
    R: SubmissionRepository + 'static,
    N: LeadNotifier + 'static,
{
    pub fn new(catalog: Arc<QuestionCatalog>, repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            engine: AssessmentEngine::new(catalog),
            repository,
            notifier,
        }
    }

    pub fn engine(&self) -> &AssessmentEngine {
        &self.engine
    }

    /// Evaluate and store a submission, then hand the lead to the notifier.
    /// A notifier failure is logged and never withholds the computed result
    /// from the caller.
    pub fn submit(
        &self,
        intake: AssessmentIntake,
    ) -> Result<SubmissionRecord, ScreeningServiceError> {
        let answered = intake.answers.iter().any(|(key, value)| {
            self.engine.catalog().lookup(key).is_some() && !value.trim().is_empty()
        });
        if !answered {
            return Err(ScreeningServiceError::EmptySubmission);
        }

        let result = self.engine.evaluate(&intake.answers);
        let record = SubmissionRecord {
            submission_id: next_submission_id(),
            contact: intake.contact,
            result,
            received_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;

        if let Err(error) = self.notifier.publish(LeadNotification::from_record(&stored)) {
            warn!(
                %error,
                submission_id = %stored.submission_id.0,
                "lead notification failed; submission result is unaffected"
            );
        }

        Ok(stored)
    }

    /// Fetch a stored submission for status or report lookups.
    pub fn get(&self, id: &SubmissionId) -> Result<SubmissionRecord, ScreeningServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Newest submissions first, for operator listings.
    pub fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, ScreeningServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

/// Error raised by the screening service. The engine itself never fails;
/// these cover intake validation and the persistence boundary.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningServiceError {
    #[error("at least one screening question must be answered")]
    EmptySubmission,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
