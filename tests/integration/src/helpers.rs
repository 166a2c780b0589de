//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers inside a private database
//! schema, a fake sentiment model, making HTTP requests and seeding rows.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use reqwest::{Client, Response, StatusCode};
use sentiment_api::{create_app, create_service_context, AppState};
use sentiment_common::AppConfig;
use sentiment_db::{ensure_schema, PgPool};
use sentiment_service::{AnnotationWorker, ServiceContext};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Counter for unique schema names
static SCHEMA_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Test server instance that manages lifecycle
///
/// Every server owns a fresh schema, so tests see only their own rows.
pub struct TestServer {
    pub base_url: String,
    pub client: Client,
    pub pool: PgPool,
    pub ctx: ServiceContext,
    pub config: AppConfig,
    admin: PgPool,
    schema: String,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server whose classifier is `classifier_url`
    pub async fn start(classifier_url: &str) -> Result<Self> {
        let mut config = test_config()?;
        config.classifier.url = classifier_url.to_string();

        let database_url = std::env::var("DATABASE_URL")?;
        let schema = format!(
            "sentiment_e2e_{}_{}",
            std::process::id(),
            SCHEMA_COUNTER.fetch_add(1, Ordering::SeqCst)
        );

        let admin = PgPool::connect(&database_url).await?;
        sqlx::raw_sql(&format!("CREATE SCHEMA {schema}"))
            .execute(&admin)
            .await?;

        let set_path = format!("SET search_path TO {schema}");
        let pool = PgPoolOptions::new()
            .max_connections(4)
            .after_connect(move |conn, _meta| {
                let sql = set_path.clone();
                Box::pin(async move {
                    sqlx::Executor::execute(conn, sql.as_str()).await?;
                    Ok(())
                })
            })
            .connect(&database_url)
            .await?;
        ensure_schema(&pool).await?;

        let ctx = create_service_context(&pool, &config)?;
        let app = create_app(AppState::new(ctx.clone(), pool.clone(), config.clone()));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            base_url: format!("http://{addr}"),
            client,
            pool,
            ctx,
            config,
            admin,
            schema,
            handle,
        })
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Worker wired to this server's repositories and classifier
    pub fn worker(&self) -> AnnotationWorker {
        AnnotationWorker::new(
            self.ctx.message_repo_handle(),
            self.ctx.classifier(),
            self.config.worker.clone(),
        )
    }

    /// Insert a message row and return its id
    pub async fn seed_message(
        &self,
        text: &str,
        sent_at: DateTime<Utc>,
        sentiment: Option<&str>,
    ) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO mensagens (mensagem, data_envio, sentimento) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(text)
        .bind(sent_at)
        .bind(sentiment)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Drop the private schema
    pub async fn cleanup(self) -> Result<()> {
        self.handle.abort();
        self.pool.close().await;
        sqlx::raw_sql(&format!("DROP SCHEMA IF EXISTS {} CASCADE", self.schema))
            .execute(&self.admin)
            .await?;
        Ok(())
    }
}

/// Create a test configuration
///
/// The background worker is disabled; tests drive passes explicitly.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;
    config.worker.enabled = false;
    config.database.ensure_schema = true;

    Ok(config)
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Serve a sentiment model that labels known texts and answers "NEU" otherwise
///
/// Returns the classify endpoint URL.
pub async fn spawn_fake_model(labels: &[(&str, &str)]) -> Result<String> {
    let labels: Arc<HashMap<String, String>> = Arc::new(
        labels
            .iter()
            .map(|(text, label)| ((*text).to_string(), (*label).to_string()))
            .collect(),
    );

    let app = Router::new()
        .route("/classify", post(fake_model))
        .with_state(labels);

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    Ok(format!("http://{addr}/classify"))
}

async fn fake_model(
    State(labels): State<Arc<HashMap<String, String>>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let text = body["inputs"].as_str().unwrap_or_default();
    let label = labels.get(text).map_or("NEU", String::as_str);
    Json(json!([[
        {"label": label, "score": 0.91},
        {"label": "NEU", "score": 0.05},
    ]]))
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
