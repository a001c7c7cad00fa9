//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use feed_api::{create_app, AppState};
use feed_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, GoogleOAuthConfig,
    RateLimitConfig, ServerConfig, StorageConfig,
};
use feed_core::{DomainError, IdentityProvider, OAuthProfile, RepoResult};
use feed_db::MemoryStore;
use feed_service::ServiceContextBuilder;
use feed_storage::{LocalFileStorage, LocalStorageConfig};
use reqwest::{header, multipart, redirect, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Authorization code the fake provider accepts
pub const VALID_CODE: &str = "valid-code";

/// Where the callback sends the browser
pub const FRONTEND_URL: &str = "http://localhost:5173/";

/// Google stand-in: one accepted code, one fixed profile
pub struct FakeGoogle {
    pub profile: OAuthProfile,
}

#[async_trait]
impl IdentityProvider for FakeGoogle {
    fn authorization_url(&self) -> String {
        "https://accounts.example.com/o/oauth2/auth?response_type=code&client_id=test".to_string()
    }

    async fn fetch_profile(&self, code: &str) -> RepoResult<OAuthProfile> {
        if code == VALID_CODE {
            Ok(self.profile.clone())
        } else {
            Err(DomainError::OAuthFailed)
        }
    }
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: MemoryStore,
    _uploads: TempDir,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        Self::start_with_profile(OAuthProfile {
            email: "google@example.com".to_string(),
            name: Some("구글유저".to_string()),
            picture: Some("https://example.com/google.png".to_string()),
        })
        .await
    }

    /// Start a test server whose fake provider answers with `profile`
    pub async fn start_with_profile(profile: OAuthProfile) -> Result<Self> {
        let uploads = TempDir::new()?;
        let config = test_config(&uploads);

        let store = MemoryStore::new();
        let storage = LocalFileStorage::new(&LocalStorageConfig::from(&config.storage)).await?;

        let service_context = ServiceContextBuilder::new()
            .member_repo(Arc::new(store.member_repository()))
            .feed_repo(Arc::new(store.feed_repository()))
            .feed_like_repo(Arc::new(store.feed_like_repository()))
            .file_storage(Arc::new(storage))
            .identity_provider(Arc::new(FakeGoogle { profile }))
            .build()?;

        let app = create_app(AppState::new(service_context, config))?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Redirects are asserted on, not followed
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self {
            addr,
            client,
            store,
            _uploads: uploads,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request carrying the session cookie
    pub async fn get_as(&self, path: &str, member_id: i64) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .header(header::COOKIE, format!("member_id={member_id}; role=member"))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request without a body
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        Ok(self.client.post(self.url(path)).send().await?)
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.put(self.url(path)).json(body).send().await?)
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.patch(self.url(path)).json(body).send().await?)
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        Ok(self.client.delete(self.url(path)).send().await?)
    }

    /// Upload bytes as the multipart `file` field
    pub async fn upload(&self, bytes: Vec<u8>, file_name: &str) -> Result<Response> {
        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);
        Ok(self
            .client
            .post(self.url("/file/upload-file"))
            .multipart(form)
            .send()
            .await?)
    }
}

/// Configuration for an in-process server: generous rate limit, uploads in `uploads`
pub fn test_config(uploads: &TempDir) -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "pet-feed-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 0,
            run_migrations: false,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 1000,
        },
        cors: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        storage: StorageConfig {
            base_dir: uploads.path().to_string_lossy().into_owned(),
            max_file_size_mb: 5,
        },
        google: GoogleOAuthConfig {
            client_id: "test-client".to_string(),
            client_secret: "test-secret".to_string(),
            redirect_uri: "http://localhost:8080/oauth/google/callback".to_string(),
            auth_url: "https://accounts.example.com/o/oauth2/auth".to_string(),
            token_url: "https://accounts.example.com/token".to_string(),
            userinfo_url: "https://accounts.example.com/userinfo".to_string(),
            frontend_url: FRONTEND_URL.to_string(),
        },
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status only
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert an error status and return the `error` message
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    body["error"]
        .as_str()
        .map(ToString::to_string)
        .ok_or_else(|| anyhow::anyhow!("No error field in {body}"))
}
