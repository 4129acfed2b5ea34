use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::Mutex,
    time::{Duration, Instant},
};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Sliding-window request counter keyed by client.
#[derive(Debug)]
pub struct RateLimiter {
    requests: Mutex<HashMap<String, Vec<Instant>>>,
    max_requests: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            requests: Mutex::new(HashMap::new()),
            max_requests,
            window,
        }
    }

    pub fn is_allowed(&self, client_id: &str) -> bool {
        self.is_allowed_at(client_id, Instant::now())
    }

    fn is_allowed_at(&self, client_id: &str, now: Instant) -> bool {
        let mut requests = match self.requests.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        // forget clients whose whole window has expired
        requests.retain(|_, times| {
            times
                .last()
                .is_some_and(|&last| now.duration_since(last) <= self.window)
        });

        let entry = requests.entry(client_id.to_string()).or_default();
        entry.retain(|&time| now.duration_since(time) <= self.window);

        if entry.len() < self.max_requests {
            entry.push(now);
            true
        } else {
            false
        }
    }
}

fn client_id(req: &Request) -> String {
    if let Some(ConnectInfo(addr)) = req.extensions().get::<ConnectInfo<SocketAddr>>() {
        return addr.ip().to_string();
    }

    req.headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Rejects callers that exceeded the configured request budget with 429.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let client = client_id(&req);

    if !state.rate_limiter.is_allowed(&client) {
        warn!(client = %client, "Rate limit exceeded");
        return ApiError::TooManyRequests.into_response();
    }

    next.run(req).await
}
