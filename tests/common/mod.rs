use std::net::SocketAddr;
use std::sync::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use formulario::config::Config;
use formulario::db::SubmissionStore;
use formulario::error::AppError;
use formulario::models::{StoredSubmission, Submission};

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Post a JSON body to the form endpoint, return (body, status).
    pub async fn submit(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/form"))
            .json(data)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

/// In-process store that can be switched offline. Documents go through the
/// same BSON conversion the MongoDB driver applies, so it rejects whatever
/// the real store would.
#[allow(dead_code)]
pub struct MemoryStore {
    submissions: Mutex<Vec<StoredSubmission>>,
    available: AtomicBool,
}

#[allow(dead_code)]
impl MemoryStore {
    pub fn new() -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn submissions(&self) -> Vec<StoredSubmission> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn insert(&self, submission: Submission) -> Result<StoredSubmission, AppError> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable("memory store is offline".to_string()));
        }

        mongodb::bson::to_document(&submission)
            .map_err(|e| AppError::InvalidField(format!("not representable as BSON: {e}")))?;

        let mut submissions = self.submissions.lock().unwrap();
        let id = submission.id.unwrap_or_else(ObjectId::new);
        if submissions.iter().any(|s| s.id == id) {
            return Err(AppError::Internal(format!("duplicate _id {id}")));
        }

        let stored = submission.into_stored(id);
        submissions.push(stored.clone());
        Ok(stored)
    }
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        public_url: "http://localhost:0".to_string(),
        log_level: "warn".to_string(),
        ..Config::default()
    }
}

/// Spawn the router on a random port backed by the given store.
pub async fn spawn_with_store(config: Config, store: Arc<dyn SubmissionStore>) -> TestApp {
    let app = formulario::build_app(&config, store);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
    }
}

/// Spawn a test app backed by a fresh in-memory store.
#[allow(dead_code)]
pub async fn spawn_app() -> (TestApp, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let app = spawn_with_store(test_config(), store.clone()).await;
    (app, store)
}
