//! # um-users
//!
//! User-management API domain operations on top of `um-client`.
//!
//! ## Features
//!
//! - **Create user** - Assembles the creation request (derived email,
//!   generated SSN, reformatted birth date) and submits it as an
//!   authenticated form POST
//! - **Fetch by id** - `GET user/{id}` returning a generic field mapping
//! - **Fetch by name** - `GET user?firstName=...&lastName=...` with
//!   percent-encoded query values
//!
//! ## Example
//!
//! ```rust,ignore
//! use um_client::EndpointConfig;
//! use um_users::{NewUser, UserClient, CUSTOMER_TYPE_SPONSOR, RELATIONSHIP_PARENT};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), um_users::Error> {
//!     let endpoint = EndpointConfig::from_env()?;
//!     let client = UserClient::new(endpoint)?;
//!
//!     client
//!         .create_user(&NewUser {
//!             first_name: "Ann".into(),
//!             last_name: "Lee".into(),
//!             address: "1 Main St".into(),
//!             date_of_birth: 19900115,
//!             customer_type: CUSTOMER_TYPE_SPONSOR,
//!             relationship: RELATIONSHIP_PARENT,
//!         })
//!         .await?;
//!
//!     let record = client.user_by_name("Ann", "Lee").await?;
//!     println!("{:?}", record);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{format_birth_date, random_ssn, UserClient};
pub use error::{Error, ErrorKind, Result};
pub use types::{
    NewUser, UserRecord, CUSTOMER_TYPE_MINOR, CUSTOMER_TYPE_SPONSOR, RELATIONSHIP_CHILD,
    RELATIONSHIP_OTHER, RELATIONSHIP_PARENT,
};

// Re-export um-client types that users might need
pub use um_client::{ClientConfig, ClientConfigBuilder, EndpointConfig, HttpApiClient};
