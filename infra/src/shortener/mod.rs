//! URL shortener clients
//!
//! [`UrlShortenerService`] walks a fixed chain of free shortening endpoints
//! (TinyURL, then is.gd) until one returns a usable short URL.
//! [`MockUrlShortener`] backs handler tests.

pub mod fallback;
pub mod mock;

pub use fallback::UrlShortenerService;
pub use mock::MockUrlShortener;
