use super::common::*;

use crate::assessment::domain::AssessmentId;
use crate::assessment::repository::RepositoryError;
use crate::assessment::scoring::MaturityLevel;
use crate::assessment::service::{AssessmentServiceError, ValidationError};

#[test]
fn submit_scores_and_persists_the_record() {
    let (service, repository) = build_service();

    let record = service
        .submit(submission(vec![answer("q1", 5), answer("q2", 5)]))
        .expect("submission succeeds");

    assert_eq!(record.organization_name, "Acme Analytics");
    assert_eq!(record.outcome.overall_score, 100.0);
    assert_eq!(record.outcome.overall_maturity, MaturityLevel::Optimizing);

    let stored = repository
        .records
        .lock()
        .expect("repository mutex poisoned")
        .get(&record.id)
        .cloned()
        .expect("record stored");
    assert_eq!(stored.outcome.overall_score, 100.0);
    assert_eq!(stored.answers.len(), 2);
}

#[test]
fn submit_defaults_the_organization_name() {
    let (service, _) = build_service();

    let mut payload = submission(vec![answer("q1", 3)]);
    payload.organization_name = None;

    let record = service.submit(payload).expect("submission succeeds");
    assert_eq!(record.organization_name, "Anonymous");
}

#[test]
fn submit_rejects_out_of_range_scores_before_scoring() {
    let (service, repository) = build_service();

    let result = service.submit(submission(vec![answer("q1", 6)]));

    match result {
        Err(AssessmentServiceError::Validation(ValidationError::ScoreOutOfRange {
            question_id,
            score,
        })) => {
            assert_eq!(question_id, "q1");
            assert_eq!(score, 6);
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    assert!(repository
        .records
        .lock()
        .expect("repository mutex poisoned")
        .is_empty());
}

#[test]
fn submissions_receive_distinct_identifiers() {
    let (service, _) = build_service();

    let first = service
        .submit(submission(vec![answer("q1", 4)]))
        .expect("first submission");
    let second = service
        .submit(submission(vec![answer("q1", 4)]))
        .expect("second submission");

    assert_ne!(first.id, second.id);
}

#[test]
fn get_returns_not_found_for_unknown_ids() {
    let (service, _) = build_service();

    let result = service.get(&AssessmentId("missing".to_string()));

    match result {
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not-found error, got {other:?}"),
    }
}
