use crate::messaging::Narrator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Incoming request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Request {
    pub user: Option<String>,
    pub token: Option<String>,
}

impl Request {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "user={} token={}",
            self.user.as_deref().unwrap_or("-"),
            if self.token.is_some() { "***" } else { "-" }
        )
    }
}

/// Response with an HTTP-like status code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status: u16,
    pub message: String,
}

impl Response {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self::new(401, "Unauthorized")
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.message)
    }
}

/// Something that can answer a request
pub trait Handler {
    fn handle(&mut self, request: &Request, narrator: &mut Narrator) -> Response;
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn handle(&mut self, request: &Request, narrator: &mut Narrator) -> Response {
        (**self).handle(request, narrator)
    }
}

/// Innermost handler: greets the user
#[derive(Debug, Default)]
pub struct BaseHandler;

impl Handler for BaseHandler {
    fn handle(&mut self, request: &Request, _narrator: &mut Narrator) -> Response {
        let user = request.user.as_deref().unwrap_or("Guest");
        Response::new(200, format!("Welcome, {}!", user))
    }
}

/// Narrates each request and its response with elapsed time
pub struct LoggingDecorator<H> {
    inner: H,
}

impl<H: Handler> LoggingDecorator<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: Handler> Handler for LoggingDecorator<H> {
    fn handle(&mut self, request: &Request, narrator: &mut Narrator) -> Response {
        narrator.info(format!("[LOG] Request started: {}", request));
        let start = Instant::now();
        let response = self.inner.handle(request, narrator);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        narrator.info(format!(
            "[LOG] Response: {} | Time: {:.2}ms",
            response, elapsed_ms
        ));
        response
    }
}

/// Rejects requests that do not carry the expected token
pub struct AuthDecorator<H> {
    inner: H,
    expected_token: String,
}

impl<H: Handler> AuthDecorator<H> {
    pub fn new(inner: H, expected_token: impl Into<String>) -> Self {
        Self {
            inner,
            expected_token: expected_token.into(),
        }
    }
}

impl<H: Handler> Handler for AuthDecorator<H> {
    fn handle(&mut self, request: &Request, narrator: &mut Narrator) -> Response {
        match request.token.as_deref() {
            Some(token) if token == self.expected_token => {
                narrator.info("[AUTH] User authenticated successfully.");
                self.inner.handle(request, narrator)
            }
            _ => {
                tracing::warn!(user = ?request.user, "rejected request without valid token");
                narrator.warning("[AUTH] Unauthorized access attempt!");
                Response::unauthorized()
            }
        }
    }
}
