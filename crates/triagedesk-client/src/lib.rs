pub mod api;
mod envelope;
pub mod error;
mod http;

pub use api::MessageApi;
pub use error::{Error, Result};
pub use http::ApiClient;
