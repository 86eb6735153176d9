//! Scoring and classification engine for the developmental screening
//! questionnaire, plus the service facade and collaborator boundaries that
//! surround it.
//!
//! The engine itself (normalize -> score -> classify -> compose) is a pure
//! computation over the immutable catalog: it performs no I/O, never fails,
//! and may be called concurrently without synchronization. Persistence,
//! notification, and rendering live behind the traits in [`repository`].

pub mod catalog;
pub mod narrative;
pub mod report;
pub mod repository;
pub mod responses;
pub mod risk;
pub mod router;
pub mod scoring;
pub mod service;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use catalog::{Direction, Domain, QuestionCatalog, QuestionSpec, MAX_DOMAIN_SCORE};
pub use report::{DomainBreakdownEntry, DomainStatus};
pub use repository::{
    ContactDetails, LeadNotification, LeadNotifier, NotificationError, RepositoryError,
    SubmissionId, SubmissionRecord, SubmissionRepository, SubmissionStatusView,
};
pub use risk::{threshold, RiskTier};
pub use router::screening_router;
pub use scoring::DomainScores;
pub use service::{AssessmentIntake, ScreeningService, ScreeningServiceError};

/// Complete outcome of one evaluation. Immutable once returned; persistence,
/// transmission, and rendering are collaborator concerns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub domain_scores: DomainScores,
    pub flagged_domains: Vec<Domain>,
    pub overall_risk: RiskTier,
    pub message: String,
    pub detailed_message: String,
    pub recommendations: Vec<String>,
}

/// Stateless evaluator binding the pipeline stages to an injected catalog.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    catalog: Arc<QuestionCatalog>,
}

impl AssessmentEngine {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Evaluate a raw answer map. Infallible: malformed answers degrade to
    /// "no signal" and unknown question keys are ignored.
    pub fn evaluate(&self, answers: &BTreeMap<String, String>) -> AssessmentResult {
        let responses = responses::normalize_answers(answers);
        let domain_scores = scoring::score_responses(&self.catalog, &responses);
        let classification = risk::classify(&domain_scores);
        let narrative = narrative::compose(&classification);

        AssessmentResult {
            domain_scores,
            flagged_domains: classification.flagged,
            overall_risk: classification.tier,
            message: narrative.message,
            detailed_message: narrative.detailed_message,
            recommendations: narrative.recommendations,
        }
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new(Arc::new(QuestionCatalog::standard()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_is_deterministic() {
        let engine = AssessmentEngine::default();
        let mut answers = BTreeMap::new();
        answers.insert("eye_contact".to_string(), "2".to_string());
        answers.insert("clumsy".to_string(), "4".to_string());

        let first = engine.evaluate(&answers);
        let second = engine.evaluate(&answers);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_submission_yields_low_risk_zero_scores() {
        let engine = AssessmentEngine::default();
        let result = engine.evaluate(&BTreeMap::new());

        for (_, score) in result.domain_scores.entries() {
            assert_eq!(score, 0);
        }
        assert!(result.flagged_domains.is_empty());
        assert_eq!(result.overall_risk, RiskTier::Low);
        assert_eq!(result.recommendations.len(), 4);
    }

    #[test]
    fn result_round_trips_through_json() {
        let engine = AssessmentEngine::default();
        let answers: BTreeMap<String, String> = engine
            .catalog()
            .questions_of(Domain::MotorSkills)
            .map(|question| (question.key.to_string(), "4".to_string()))
            .collect();

        let result = engine.evaluate(&answers);
        let json = serde_json::to_string(&result).expect("serialize result");
        let back: AssessmentResult = serde_json::from_str(&json).expect("deserialize result");
        assert_eq!(back, result);
        assert_eq!(back.flagged_domains, vec![Domain::MotorSkills]);
    }
}
