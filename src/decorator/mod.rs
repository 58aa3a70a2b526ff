// Decorator Pattern - request handlers wrapped in logging, auth and caching layers
//
// Each decorator owns the handler it wraps. The cache decorator owns an
// injected `ResponseCache`; there is no shared global cache.

pub mod cache;
pub mod handler;

pub use cache::{CacheDecorator, ResponseCache};
pub use handler::{AuthDecorator, BaseHandler, Handler, LoggingDecorator, Request, Response};
