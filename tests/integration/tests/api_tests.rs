//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! The sentiment model is faked by a local HTTP server.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::{Duration, Utc};
use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, spawn_fake_model, TestServer,
};
use reqwest::StatusCode;

async fn start_server() -> TestServer {
    let model = spawn_fake_model(&[("bom dia", "POS"), ("ruim", "NEG")])
        .await
        .expect("Failed to start fake model");
    TestServer::start(&model).await.expect("Failed to start server")
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = start_server().await;
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();

    server.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = start_server().await;
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: ReadinessBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "ready");
    assert_eq!(body.checks.database, "healthy");

    server.cleanup().await.unwrap();
}

// ============================================================================
// Message Tests
// ============================================================================

#[tokio::test]
async fn test_list_messages() {
    if !check_test_env() {
        return;
    }

    let server = start_server().await;
    let sent_at = Utc::now() - Duration::minutes(3);
    let first = server.seed_message("bom dia", sent_at, None).await.unwrap();
    let second = server.seed_message("ruim", sent_at, Some("NEG")).await.unwrap();

    let response = server.get("/mensagens").await.unwrap();
    let rows: Vec<MessageRow> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, first);
    assert_eq!(rows[0].mensagem, "bom dia");
    assert_eq!(rows[0].sentimento, None);
    assert_eq!(rows[1].id, second);
    assert_eq!(rows[1].sentimento.as_deref(), Some("NEG"));
    assert_eq!(
        rows[1].data_envio.timestamp_micros(),
        sent_at.timestamp_micros()
    );

    server.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_get_message() {
    if !check_test_env() {
        return;
    }

    let server = start_server().await;
    let id = server.seed_message("ruim", Utc::now(), None).await.unwrap();

    let response = server.get(&format!("/mensagens/{id}")).await.unwrap();
    let row: MessageRow = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(row.mensagem, "ruim");

    let response = server.get(&format!("/mensagens/{}", id + 1000)).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "NOT_FOUND");

    server.cleanup().await.unwrap();
}

// ============================================================================
// Annotation Tests
// ============================================================================

#[tokio::test]
async fn test_worker_pass_labels_pending_messages() {
    if !check_test_env() {
        return;
    }

    let server = start_server().await;
    let now = Utc::now();
    let first = server.seed_message("bom dia", now, None).await.unwrap();
    let second = server.seed_message("ruim", now, None).await.unwrap();
    server.seed_message("tanto faz", now, Some("NEU")).await.unwrap();

    let worker = server.worker();
    let report = worker.run_once().await.unwrap();
    assert_eq!(report.examined, 2);
    let updated: Vec<i64> = report.updated.iter().map(|id| id.into_inner()).collect();
    assert_eq!(updated, vec![first, second]);

    // Nothing left to do
    let report = worker.run_once().await.unwrap();
    assert_eq!(report.examined, 0);
    assert!(report.updated.is_empty());

    let response = server.get("/mensagens").await.unwrap();
    let rows: Vec<MessageRow> = assert_json(response, StatusCode::OK).await.unwrap();
    let labels: Vec<Option<&str>> = rows.iter().map(|r| r.sentimento.as_deref()).collect();
    assert_eq!(labels, vec![Some("POS"), Some("NEG"), Some("NEU")]);

    let response = server.get("/sentiment/overall").await.unwrap();
    let overall: OverallBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(overall.get("pos"), Some(&1));
    assert_eq!(overall.get("neg"), Some(&1));
    assert_eq!(overall.get("neu"), Some(&1));

    server.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_worker_pass_with_unreachable_model_commits_nothing() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start("http://127.0.0.1:1/classify")
        .await
        .expect("Failed to start server");
    let id = server.seed_message("bom dia", Utc::now(), None).await.unwrap();

    assert!(server.worker().run_once().await.is_err());

    let response = server.get(&format!("/mensagens/{id}")).await.unwrap();
    let row: MessageRow = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(row.sentimento, None);

    server.cleanup().await.unwrap();
}

// ============================================================================
// Summary Tests
// ============================================================================

#[tokio::test]
async fn test_daily_summary_window() {
    if !check_test_env() {
        return;
    }

    let server = start_server().await;
    let now = Utc::now();
    server.seed_message("a", now - Duration::hours(1), Some("POS")).await.unwrap();
    server.seed_message("b", now - Duration::hours(1), Some("pos")).await.unwrap();
    server.seed_message("c", now - Duration::hours(1), Some("NEG")).await.unwrap();
    server.seed_message("d", now - Duration::hours(1), None).await.unwrap();
    server.seed_message("e", now - Duration::days(10), Some("POS")).await.unwrap();

    let response = server.get("/sentiment/daily").await.unwrap();
    let rows: Vec<DailyRow> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(rows.windows(2).all(|w| w[0].day < w[1].day));
    assert_eq!(rows.iter().map(|r| r.positive).sum::<i64>(), 2);
    assert_eq!(rows.iter().map(|r| r.negative).sum::<i64>(), 1);

    let response = server.get("/sentiment/daily?days=30").await.unwrap();
    let rows: Vec<DailyRow> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rows.iter().map(|r| r.positive).sum::<i64>(), 3);

    let response = server.get("/sentiment/daily?days=0").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");

    server.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_hourly_summary_window() {
    if !check_test_env() {
        return;
    }

    let server = start_server().await;
    let now = Utc::now();
    server.seed_message("a", now - Duration::minutes(30), Some("POS")).await.unwrap();
    server.seed_message("b", now - Duration::hours(2), Some("NEU")).await.unwrap();
    server.seed_message("c", now - Duration::hours(30), Some("NEG")).await.unwrap();

    let response = server.get("/sentiment/hourly").await.unwrap();
    let rows: Vec<HourlyRow> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(rows.windows(2).all(|w| w[0].hour < w[1].hour));
    assert_eq!(rows.iter().map(|r| r.positive).sum::<i64>(), 1);
    assert_eq!(rows.iter().map(|r| r.neutral).sum::<i64>(), 1);
    assert_eq!(rows.iter().map(|r| r.negative).sum::<i64>(), 0);

    let response = server.get("/sentiment/hourly?hours=48").await.unwrap();
    let rows: Vec<HourlyRow> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rows.iter().map(|r| r.negative).sum::<i64>(), 1);

    server.cleanup().await.unwrap();
}
