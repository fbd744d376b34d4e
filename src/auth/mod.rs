//! Authentication support for the Outofbox API.
//!
//! The API authenticates requests with a WSSE `UsernameToken` header; see
//! [`wsse`] for the derivation algorithm.

pub mod wsse;
