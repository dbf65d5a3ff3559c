//! In-process HTTP stub serving canned JSON, standing in for the live API.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;

use crate::config::ClientConfig;
use crate::model::Region;

pub(crate) const PUBLIC_PROFILE: &str = r#"{
    "icon": "https://d1u1mce87gyfbn.cloudfront.net/game/unlocks/0x02500000000002F7.png",
    "name": "Jayne#1447",
    "level": 47,
    "prestige": 5,
    "endorsement": 3,
    "private": false,
    "ratings": [
        {"group": "Diamond", "tier": 3, "role": "tank", "roleIcon": "", "rankIcon": ""},
        {"group": "Master", "tier": 5, "role": "support", "roleIcon": "", "rankIcon": ""}
    ],
    "competitiveStats": {
        "awards": {"cards": 41, "medals": 650, "medalsBronze": 210, "medalsSilver": 280, "medalsGold": 160},
        "games": {"played": 214, "won": 112}
    },
    "quickPlayStats": {
        "awards": {"cards": 300, "medals": 4100, "medalsBronze": 1200, "medalsSilver": 1400, "medalsGold": 1500},
        "games": {"won": 980}
    }
}"#;

pub(crate) const PRIVATE_PROFILE: &str = r#"{
    "icon": "https://d1u1mce87gyfbn.cloudfront.net/game/unlocks/0x0250000000000EF7.png",
    "name": "Hidden#2121",
    "level": 8,
    "prestige": 1,
    "endorsement": 2,
    "private": true
}"#;

/// What the stub answers for one path.
#[derive(Debug, Clone)]
pub(crate) struct Reply {
    status: u16,
    body: String,
    delay: Duration,
}

impl Reply {
    pub(crate) fn json(body: &str) -> Self {
        Self::status(200, body)
    }

    pub(crate) fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub(crate) fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone)]
struct StubState {
    routes: Arc<HashMap<String, Reply>>,
    requests: Arc<Mutex<Vec<String>>>,
}

pub(crate) struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Serve `routes` (raw request path to reply). Unknown paths get a 404
    /// with the API's "not found" payload.
    pub(crate) async fn start<'a>(routes: impl IntoIterator<Item = (&'a str, Reply)>) -> Self {
        let state = StubState {
            routes: Arc::new(
                routes
                    .into_iter()
                    .map(|(path, reply)| (path.to_string(), reply))
                    .collect(),
            ),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let requests = Arc::clone(&state.requests);
        let app = Router::new().fallback(reply).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let base_url = format!("http://{}", listener.local_addr().expect("stub address"));
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });

        Self { base_url, requests }
    }

    /// Config pointing both endpoints at the stub.
    pub(crate) fn config(&self) -> ClientConfig {
        ClientConfig {
            stats_base_url: format!("{}/v1", self.base_url),
            search_base_url: format!("{}/en-us", self.base_url),
            region: Region::Eu,
            timeout: Duration::from_secs(2),
        }
    }

    pub(crate) fn http(&self) -> reqwest::Client {
        reqwest::Client::builder().no_proxy().build().unwrap()
    }

    /// Paths requested so far, in arrival order.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Logs the raw (still percent-encoded) path and answers from the route table.
async fn reply(State(state): State<StubState>, uri: Uri) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(path.clone());

    let reply = state
        .routes
        .get(&path)
        .cloned()
        .unwrap_or_else(|| Reply::status(404, r#"{"error": "Player not found"}"#));
    tokio::time::sleep(reply.delay).await;

    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], reply.body).into_response()
}
