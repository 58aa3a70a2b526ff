// Response caching decorator

use super::handler::{Handler, Request, Response};
use crate::messaging::Narrator;
use std::collections::HashMap;

/// Responses keyed by the JSON encoding of their request
///
/// Owned by exactly one `CacheDecorator`; two decorators never share entries.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<String, Response>,
    hits: usize,
    misses: usize,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache key for a request
    pub fn key(request: &Request) -> String {
        // Two Option<String> fields always serialize
        serde_json::to_string(request).unwrap_or_else(|_| format!("{:?}", request))
    }

    pub fn get(&mut self, request: &Request) -> Option<Response> {
        let found = self.entries.get(&Self::key(request)).cloned();
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    pub fn insert(&mut self, request: &Request, response: Response) {
        self.entries.insert(Self::key(request), response);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Returns cached responses for repeated requests
pub struct CacheDecorator<H> {
    inner: H,
    cache: ResponseCache,
}

impl<H: Handler> CacheDecorator<H> {
    pub fn new(inner: H) -> Self {
        Self::with_cache(inner, ResponseCache::new())
    }

    /// Wrap `inner` using a cache built elsewhere (e.g. pre-warmed in tests)
    pub fn with_cache(inner: H, cache: ResponseCache) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub fn into_cache(self) -> ResponseCache {
        self.cache
    }
}

impl<H: Handler> Handler for CacheDecorator<H> {
    fn handle(&mut self, request: &Request, narrator: &mut Narrator) -> Response {
        if let Some(response) = self.cache.get(request) {
            tracing::debug!(%request, "cache hit");
            narrator.info("[CACHE] Returning cached response.");
            return response;
        }

        let response = self.inner.handle(request, narrator);
        self.cache.insert(request, response.clone());
        narrator.info("[CACHE] Response cached.");
        response
    }
}
