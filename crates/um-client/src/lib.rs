//! # um-client
//!
//! Transport client for the user-management API.
//!
//! This crate provides the foundational HTTP client with:
//! - Endpoint configuration (base URL + credentials), dependency-injected
//! - Secret-key acquisition against the `auth` endpoint
//! - Form-encoded POST bodies with insertion-ordered parameters
//! - Explicit request and connection timeouts
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (um-users)                                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    HttpApiClient                            │
//! │  - Holds endpoint config + shared HTTP client               │
//! │  - GET / authenticated POST against the base URL            │
//! │  - Fetches a secret key per write and injects it            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use um_client::{EndpointConfig, HttpApiClient, ParamSet};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), um_client::Error> {
//!     let endpoint = EndpointConfig::from_env()?;
//!     let client = HttpApiClient::new(endpoint)?;
//!
//!     let mut params = ParamSet::new();
//!     params.insert("firstName", "Ann");
//!     let response = client.post_authenticated("createUser", params).await?;
//!     println!("{}", response.status());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod endpoint;
mod error;
mod params;
mod response;

pub use client::HttpApiClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use endpoint::EndpointConfig;
pub use error::{Error, ErrorKind, Result};
pub use params::{ParamSet, ParamValue};
pub use response::ApiResponse;

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("um-api/", env!("CARGO_PKG_VERSION"));

/// Reserved parameter name the secret key is injected under on
/// authenticated writes.
pub const SECRET_KEY_PARAM: &str = "secretKey";

/// Relative path of the credential-acquisition endpoint.
pub const AUTH_PATH: &str = "auth";
