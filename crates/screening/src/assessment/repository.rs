use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::report::DomainBreakdownEntry;
use super::risk::RiskTier;
use super::AssessmentResult;

/// Identifier wrapper for stored screening submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

/// Identity fields collected alongside the questionnaire. Accepted and
/// carried through verbatim; validating them is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub age: u8,
    pub relationship: String,
}

/// Repository record pairing the contact details with the computed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub submission_id: SubmissionId,
    pub contact: ContactDetails,
    pub result: AssessmentResult,
    pub received_at: DateTime<Utc>,
}

impl SubmissionRecord {
    pub fn status_view(&self) -> SubmissionStatusView {
        SubmissionStatusView {
            submission_id: self.submission_id.clone(),
            overall_risk: self.result.overall_risk,
            risk_label: self.result.overall_risk.label(),
            flagged_domains: self
                .result
                .flagged_domains
                .iter()
                .map(|domain| domain.label())
                .collect(),
            message: self.result.message.clone(),
            received_at: self.received_at,
        }
    }
}

/// Sanitized representation of a stored submission for status lookups.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionStatusView {
    pub submission_id: SubmissionId,
    pub overall_risk: RiskTier,
    pub risk_label: &'static str,
    pub flagged_domains: Vec<&'static str>,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait SubmissionRepository: Send + Sync {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError>;
    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook for the asynchronous notification path (report e-mail, CRM
/// lead sync). Consumes the already-computed breakdown; implementations must
/// never re-run the scoring logic.
pub trait LeadNotifier: Send + Sync {
    fn publish(&self, lead: LeadNotification) -> Result<(), NotificationError>;
}

/// Payload handed to the notifier, shaped like the CRM lead the original
/// system pushed after each screening.
#[derive(Debug, Clone, Serialize)]
pub struct LeadNotification {
    pub submission_id: SubmissionId,
    pub contact_name: String,
    pub contact_email: String,
    pub risk_label: &'static str,
    pub flagged_domains: Vec<&'static str>,
    pub breakdown: Vec<DomainBreakdownEntry>,
}

impl LeadNotification {
    pub fn from_record(record: &SubmissionRecord) -> Self {
        Self {
            submission_id: record.submission_id.clone(),
            contact_name: record.contact.name.clone(),
            contact_email: record.contact.email.clone(),
            risk_label: record.result.overall_risk.label(),
            flagged_domains: record
                .result
                .flagged_domains
                .iter()
                .map(|domain| domain.label())
                .collect(),
            breakdown: record.result.domain_breakdown(),
        }
    }
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}
