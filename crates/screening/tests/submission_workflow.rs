//! Integration scenarios for the submission workflow: intake validation,
//! persistence, lead notification, and the HTTP router, all driven through
//! the public service facade.

mod common {
    use std::collections::{BTreeMap, HashMap};
    use std::sync::{Arc, Mutex};

    use screening::assessment::{
        AssessmentIntake, ContactDetails, LeadNotification, LeadNotifier, NotificationError,
        QuestionCatalog, RepositoryError, ScreeningService, SubmissionId, SubmissionRecord,
        SubmissionRepository,
    };

    #[derive(Default)]
    pub struct InMemoryRepository {
        records: Mutex<HashMap<SubmissionId, SubmissionRecord>>,
    }

    impl SubmissionRepository for InMemoryRepository {
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

    #[derive(Default)]
    pub struct RecordingNotifier {
        leads: Mutex<Vec<LeadNotification>>,
    }

    impl LeadNotifier for RecordingNotifier {
        fn publish(&self, lead: LeadNotification) -> Result<(), NotificationError> {
            self.leads.lock().expect("notifier mutex poisoned").push(lead);
            Ok(())
        }
    }

    impl RecordingNotifier {
        pub fn leads(&self) -> Vec<LeadNotification> {
            self.leads.lock().expect("notifier mutex poisoned").clone()
        }
    }

    #[derive(Default)]
    pub struct FailingNotifier;

    impl LeadNotifier for FailingNotifier {
        fn publish(&self, _lead: LeadNotification) -> Result<(), NotificationError> {
            Err(NotificationError::Transport(
                "crm endpoint unreachable".to_string(),
            ))
        }
    }

    pub fn contact() -> ContactDetails {
        ContactDetails {
            name: "Jordan Avery".to_string(),
            email: "jordan.avery@example.com".to_string(),
            age: 6,
            relationship: "Parent".to_string(),
        }
    }

    pub fn intake(pairs: &[(&str, &str)]) -> AssessmentIntake {
        let answers: BTreeMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AssessmentIntake {
            contact: contact(),
            answers,
        }
    }

    pub fn build_service<N>(
        notifier: Arc<N>,
    ) -> (
        Arc<ScreeningService<InMemoryRepository, N>>,
        Arc<InMemoryRepository>,
    )
    where
        N: LeadNotifier + 'static,
    {
        let repository = Arc::new(InMemoryRepository::default());
        let service = Arc::new(ScreeningService::new(
            Arc::new(QuestionCatalog::standard()),
            repository.clone(),
            notifier,
        ));
        (service, repository)
    }
}

use std::sync::Arc;

use screening::assessment::{Domain, RiskTier, ScreeningServiceError, SubmissionId};

use common::{build_service, intake, FailingNotifier, RecordingNotifier};

#[test]
fn submit_stores_the_computed_result() {
    let notifier = Arc::new(RecordingNotifier::default());
    let (service, _repository) = build_service(notifier);

    let record = service
        .submit(intake(&[("eye_contact", "1"), ("forgetful", "4")]))
        .expect("submission succeeds");

    assert!(record.submission_id.0.starts_with("sub-"));
    assert_eq!(record.result.domain_scores.get(Domain::Behavioral), 4);
    assert_eq!(record.result.domain_scores.get(Domain::CognitiveAttention), 4);
    assert_eq!(record.result.overall_risk, RiskTier::Low);

    let fetched = service.get(&record.submission_id).expect("record stored");
    assert_eq!(fetched, record);
}

#[test]
fn submission_without_answers_is_rejected() {
    let notifier = Arc::new(RecordingNotifier::default());
    let (service, _repository) = build_service(notifier.clone());

    let blank = service.submit(intake(&[("eye_contact", "  "), ("unknown_key", "3")]));
    assert!(matches!(
        blank,
        Err(ScreeningServiceError::EmptySubmission)
    ));
    assert!(notifier.leads().is_empty());
}

#[test]
fn lead_notification_carries_the_breakdown() {
    let notifier = Arc::new(RecordingNotifier::default());
    let (service, _repository) = build_service(notifier.clone());

    let catalog = screening::assessment::QuestionCatalog::standard();
    let answers: Vec<(String, String)> = catalog
        .questions_of(Domain::LanguageAcademic)
        .map(|question| (question.key.to_string(), "4".to_string()))
        .collect();
    let pairs: Vec<(&str, &str)> = answers
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();

    let record = service.submit(intake(&pairs)).expect("submission succeeds");

    let leads = notifier.leads();
    assert_eq!(leads.len(), 1);
    let lead = &leads[0];
    assert_eq!(lead.submission_id, record.submission_id);
    assert_eq!(lead.contact_email, "jordan.avery@example.com");
    assert_eq!(lead.risk_label, "Moderate");
    assert_eq!(lead.flagged_domains, vec!["Language/Academic"]);

    let language_row = lead
        .breakdown
        .iter()
        .find(|entry| entry.domain == Domain::LanguageAcademic)
        .expect("language row present");
    assert_eq!(language_row.percentage, 100);
    assert_eq!(language_row.status_label, "flagged");
}

#[test]
fn notifier_failure_never_blocks_the_result() {
    let notifier = Arc::new(FailingNotifier);
    let (service, _repository) = build_service(notifier);

    let record = service
        .submit(intake(&[("clumsy", "3")]))
        .expect("submission succeeds despite notifier outage");
    assert_eq!(record.result.domain_scores.get(Domain::MotorSkills), 3);
}

#[test]
fn recent_lists_newest_submissions_first() {
    let notifier = Arc::new(RecordingNotifier::default());
    let (service, _repository) = build_service(notifier);

    let first = service
        .submit(intake(&[("clumsy", "1")]))
        .expect("submission succeeds");
    let second = service
        .submit(intake(&[("clumsy", "2")]))
        .expect("submission succeeds");

    let recent = service.recent(5).expect("recent listing succeeds");
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].submission_id, second.submission_id);
    assert_eq!(recent[1].submission_id, first.submission_id);

    let capped = service.recent(1).expect("recent listing succeeds");
    assert_eq!(capped.len(), 1);
    assert_eq!(capped[0].submission_id, second.submission_id);
}

#[test]
fn fetching_an_unknown_submission_reports_not_found() {
    let notifier = Arc::new(RecordingNotifier::default());
    let (service, _repository) = build_service(notifier);

    let missing = service.get(&SubmissionId("sub-999999".to_string()));
    assert!(matches!(
        missing,
        Err(ScreeningServiceError::Repository(
            screening::assessment::RepositoryError::NotFound
        ))
    ));
}

mod http {
    use super::common::{build_service, RecordingNotifier};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use screening::assessment::screening_router;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn build_router() -> axum::Router {
        let notifier = Arc::new(RecordingNotifier::default());
        let (service, _repository) = build_service(notifier);
        screening_router(service)
    }

    #[tokio::test]
    async fn post_screening_returns_the_full_result() {
        let router = build_router();
        let payload = json!({
            "name": "Jordan Avery",
            "email": "jordan.avery@example.com",
            "age": 6,
            "marital_status": "Parent",
            "eye_contact": "1",
            "seated_difficulty": "4",
            "clumsy": "2",
            "phonics_struggle": "3",
        });

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/screenings")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");

        assert_eq!(payload["success"], json!(true));
        assert_eq!(payload["overall_risk"], json!("Low"));
        assert_eq!(payload["domain_scores"]["Behavioral"], json!(4));
        assert_eq!(payload["domain_scores"]["Cognitive/Attention"], json!(4));
        assert_eq!(payload["domain_scores"]["Motor Skills"], json!(2));
        assert_eq!(payload["domain_scores"]["Language/Academic"], json!(3));
        assert!(payload["submission_id"]
            .as_str()
            .expect("id present")
            .starts_with("sub-"));
    }

    #[tokio::test]
    async fn post_without_answers_returns_bad_request() {
        let router = build_router();
        let payload = json!({
            "name": "Jordan Avery",
            "email": "jordan.avery@example.com",
            "age": 6,
            "relationship": "Parent",
        });

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/screenings")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn status_and_report_round_trip_through_the_router() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (service, _repository) = build_service(notifier);
        let record = service
            .submit(super::common::intake(&[("eye_contact", "1")]))
            .expect("submission succeeds");
        let router = screening_router(service);

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/v1/screenings/{}", record.submission_id.0))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let status: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(status["risk_label"], json!("Low"));

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!(
                        "/api/v1/screenings/{}/report",
                        record.submission_id.0
                    ))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let report: Value = serde_json::from_slice(&body).expect("json");
        let rows = report["breakdown"].as_array().expect("breakdown rows");
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0]["domain_label"], json!("Behavioral"));
        assert_eq!(rows[0]["max_score"], json!(24));
    }

    #[tokio::test]
    async fn recent_endpoint_lists_stored_submissions() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (service, _repository) = build_service(notifier);
        service
            .submit(super::common::intake(&[("eye_contact", "1")]))
            .expect("submission succeeds");
        let latest = service
            .submit(super::common::intake(&[("forgetful", "4")]))
            .expect("submission succeeds");
        let router = screening_router(service);

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/screenings?limit=1")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let entries: Value = serde_json::from_slice(&body).expect("json");
        let entries = entries.as_array().expect("entry list");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["submission_id"], json!(latest.submission_id.0));
        assert_eq!(entries[0]["risk_label"], json!("Low"));
    }

    #[tokio::test]
    async fn unknown_submission_returns_not_found() {
        let router = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/screenings/sub-999999")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn catalog_endpoint_lists_every_question() {
        let router = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/screenings/catalog")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let entries: Value = serde_json::from_slice(&body).expect("json");
        let entries = entries.as_array().expect("entry list");
        assert_eq!(entries.len(), 24);
        assert_eq!(entries[0]["key"], json!("eye_contact"));
        assert_eq!(entries[0]["domain_label"], json!("Behavioral"));
    }
}
