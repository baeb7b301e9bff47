#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use roam_core::{HttpItineraryClient, ServiceConfig};
use tokio::net::TcpListener;

/// Canned reply served by the mock service.
#[derive(Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 201,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Clone)]
struct MockState {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockState {
    /// Serves queued replies in order; the last one repeats.
    fn next_reply(&self) -> Reply {
        let mut replies = self.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.pop_front().expect("queue is not empty")
        } else {
            replies.front().cloned().expect("at least one reply")
        }
    }
}

/// Local stand-in for the itinerary service.
pub struct MockService {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockService {
    /// Requests received so far: JSON bodies for POST, `GET <id>` for GET.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn client(&self) -> HttpItineraryClient {
        client_for(&self.url)
    }
}

async fn create_itinerary(
    State(state): State<MockState>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    state.requests.lock().unwrap().push(body.to_string());
    reply(&state.next_reply())
}

async fn get_itinerary(State(state): State<MockState>, Path(id): Path<String>) -> Response {
    state.requests.lock().unwrap().push(format!("GET {id}"));
    reply(&state.next_reply())
}

fn reply(reply: &Reply) -> Response {
    (
        StatusCode::from_u16(reply.status).expect("valid status code"),
        [(header::CONTENT_TYPE, "application/json")],
        reply.body.clone(),
    )
        .into_response()
}

/// Starts a mock itinerary service answering every request with `reply`.
pub async fn spawn_service(reply: Reply) -> MockService {
    spawn_service_with(vec![reply]).await
}

/// Starts a mock itinerary service answering with `replies` in order.
pub async fn spawn_service_with(replies: Vec<Reply>) -> MockService {
    assert!(!replies.is_empty(), "mock service needs a reply");
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock service");
    let addr = listener.local_addr().expect("Failed to read local address");
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        replies: Arc::new(Mutex::new(replies.into())),
        requests: requests.clone(),
    };
    let app = Router::new()
        .route("/itinerary/", post(create_itinerary))
        .route("/itinerary/:id", get(get_itinerary))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockService {
        url: format!("http://{addr}"),
        requests,
    }
}

/// URL of a port nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind throwaway listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    format!("http://{addr}")
}

/// HTTP client for `url` that bypasses any proxy settings.
pub fn client_for(url: &str) -> HttpItineraryClient {
    let config = ServiceConfig::new(url).expect("valid mock URL");
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build HTTP client");
    HttpItineraryClient::with_client(config, client)
}
