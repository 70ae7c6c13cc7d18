//! # um-api
//!
//! A user-management API client library for Rust.
//!
//! This library talks to a remote user-management HTTP service: it acquires
//! a secret key per write, submits form-encoded requests, and exposes the
//! domain operations (create user, fetch by id, fetch by name) on top of
//! that transport.
//!
//! ## Security
//!
//! - Passwords are redacted in Debug output
//! - Credential parameters are skipped in tracing spans
//! - Error messages carry the target URL, status, and body for diagnostics
//!   without requiring a re-run with added instrumentation
//!
//! ## Crates
//!
//! - **um-client** - Transport: endpoint config, form encoding, secret-key
//!   acquisition, GET / authenticated POST
//! - **um-users** - Domain operations: create user, fetch by id, fetch by
//!   name, with derived email, generated SSN, and date formatting
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use um_api::{EndpointConfig, NewUser, UserClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let endpoint = EndpointConfig::from_env()?;
//!     let client = UserClient::new(endpoint)?;
//!
//!     client
//!         .create_user(&NewUser {
//!             first_name: "Ann".into(),
//!             last_name: "Lee".into(),
//!             address: "1 Main St".into(),
//!             date_of_birth: 19900115,
//!             customer_type: um_api::CUSTOMER_TYPE_SPONSOR,
//!             relationship: um_api::RELATIONSHIP_PARENT,
//!         })
//!         .await?;
//!
//!     let record = client.user_by_name("Ann", "Lee").await?;
//!     println!("{:?}", record);
//!
//!     Ok(())
//! }
//! ```

// Re-export member crates for convenient access
#[cfg(feature = "client")]
pub use um_client as client;
#[cfg(feature = "users")]
pub use um_users as users;

// Re-export commonly used types at the top level
#[cfg(feature = "client")]
pub use um_client::{ClientConfig, EndpointConfig, HttpApiClient, ParamSet};
#[cfg(feature = "users")]
pub use um_users::{
    NewUser, UserClient, UserRecord, CUSTOMER_TYPE_MINOR, CUSTOMER_TYPE_SPONSOR,
    RELATIONSHIP_CHILD, RELATIONSHIP_OTHER, RELATIONSHIP_PARENT,
};
