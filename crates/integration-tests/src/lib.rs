//! Integration tests for the contacts dashboard.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p contacts-dashboard-integration-tests
//! ```
//!
//! No external services are needed: [`FakeHolded`] serves the contacts
//! endpoint on an ephemeral local port, and [`spawn_dashboard`] runs the real
//! dashboard router against it.
//!
//! # Test Categories
//!
//! - `holded_client` - HTTP client behaviour against the fake API
//! - `dashboard_end_to_end` - Pages and JSON API through real HTTP

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use contacts_dashboard::config::HoldedConfig;
use contacts_dashboard::holded::HoldedClient;
use contacts_dashboard::routes;
use contacts_dashboard::state::AppState;
use secrecy::SecretString;
use serde_json::Value;
use url::Url;

/// API key the fake accepts.
pub const TEST_API_KEY: &str = "3f9a1c7e0b2d4e6f8a1b3c5d7e9f0a2b";

/// Canned answer of the fake contacts endpoint.
#[derive(Debug, Clone)]
pub enum FakeResponse {
    /// 200 with the given JSON body.
    Json(Value),
    /// 200 with a raw, possibly invalid, body.
    Raw(String),
    /// Error status with a text body and optional `Retry-After` header.
    Status {
        status: StatusCode,
        body: String,
        retry_after: Option<u64>,
    },
}

#[derive(Debug)]
struct FakeState {
    response: FakeResponse,
    received_keys: Mutex<Vec<Option<String>>>,
}

/// Fake Holded API serving `GET /contacts`.
///
/// Requests without the expected `key` header get `401`, like the real API.
#[derive(Debug)]
pub struct FakeHolded {
    addr: SocketAddr,
    state: Arc<FakeState>,
}

impl FakeHolded {
    /// Start the fake on an ephemeral port.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start(response: FakeResponse) -> Self {
        let state = Arc::new(FakeState {
            response,
            received_keys: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/contacts", get(fake_contacts))
            .with_state(state.clone());

        let addr = serve(app).await;
        Self { addr, state }
    }

    /// Base URL to configure the client with.
    ///
    /// # Panics
    ///
    /// Panics if the address does not form a valid URL.
    #[must_use]
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}", self.addr)).expect("valid fake base URL")
    }

    /// `key` header values received so far, in request order.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn received_keys(&self) -> Vec<Option<String>> {
        self.state
            .received_keys
            .lock()
            .expect("received_keys lock")
            .clone()
    }

    /// Client configured for this fake with the given API key.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn client_with_key(&self, api_key: &str) -> HoldedClient {
        let config =
            HoldedConfig::new(SecretString::from(api_key.to_string())).with_base_url(&self.base_url());
        HoldedClient::new(&config).expect("Failed to build Holded client")
    }

    /// Client configured for this fake with no API key at all.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn client_without_key(&self) -> HoldedClient {
        let config = HoldedConfig::without_api_key().with_base_url(&self.base_url());
        HoldedClient::new(&config).expect("Failed to build Holded client")
    }

    /// Client configured for this fake with [`TEST_API_KEY`].
    #[must_use]
    pub fn client(&self) -> HoldedClient {
        self.client_with_key(TEST_API_KEY)
    }
}

async fn fake_contacts(State(state): State<Arc<FakeState>>, headers: HeaderMap) -> Response {
    let key = headers
        .get("key")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let authorized = key.as_deref() == Some(TEST_API_KEY);
    state
        .received_keys
        .lock()
        .expect("received_keys lock")
        .push(key);

    if !authorized {
        return (StatusCode::UNAUTHORIZED, "invalid api key").into_response();
    }

    match &state.response {
        FakeResponse::Json(body) => Json(body.clone()).into_response(),
        FakeResponse::Raw(body) => (StatusCode::OK, body.clone()).into_response(),
        FakeResponse::Status {
            status,
            body,
            retry_after,
        } => {
            let mut response = (*status, body.clone()).into_response();
            if let Some(secs) = retry_after {
                response
                    .headers_mut()
                    .insert("Retry-After", HeaderValue::from(*secs));
            }
            response
        }
    }
}

/// Serve a router on an ephemeral local port and return its address.
///
/// # Panics
///
/// Panics if the listener cannot be bound.
pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server error");
    });

    addr
}

/// Run the dashboard against the given client and return its base URL.
pub async fn spawn_dashboard(client: HoldedClient) -> String {
    let app = routes::app(AppState::with_source(Arc::new(client)));
    let addr = serve(app).await;
    format!("http://{addr}")
}

/// An address nothing listens on.
///
/// # Panics
///
/// Panics if the probe listener cannot be bound.
pub async fn closed_port_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    Url::parse(&format!("http://{addr}")).expect("valid URL")
}
