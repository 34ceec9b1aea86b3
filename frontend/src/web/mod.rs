//! Thin wrappers over browser APIs (`fetch`, `localStorage`, History).

mod http;
pub mod router;
mod storage;

pub use http::FetchClient;
pub use storage::WebStorage;
