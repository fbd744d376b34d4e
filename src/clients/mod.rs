//! HTTP client functionality for the Outofbox API.
//!
//! [`Transport`] is the thin reqwest-backed collaborator that issues one
//! request and hands back the raw status and body; [`decode`] turns raw
//! bodies into checked JSON payloads; [`ApiClient`] orchestrates the full
//! dispatch pipeline on top of both.

mod api_client;
pub mod decode;
mod transport;

pub use api_client::ApiClient;
pub use transport::{HttpMethod, RawResponse, RequestParams, Transport};
