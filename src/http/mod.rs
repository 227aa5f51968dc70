//! HTTP layer used to reach the IP-reporting services.
//!
//! This module provides:
//! - Request and response value types ([`HttpRequest`], [`HttpResponse`])
//! - The network capability trait ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])

mod client;
mod error;
mod types;


pub use client::ReqwestClient;
pub use error::HttpError;
pub use types::{HttpClient, HttpRequest, HttpResponse};
