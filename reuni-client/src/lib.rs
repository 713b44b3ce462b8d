//! # reuni-client
//!
//! Client for the remote configuration service. Every configuration set is
//! addressed by an organization/service/namespace [`Scope`] and kept as a
//! sequence of immutable versions on the server.
//!
//! ## Endpoints
//!
//! - `GET  {base}/{org}/{service}/{namespace}/versions`
//! - `GET  {base}/{org}/{service}/{namespace}/latest`
//! - `GET  {base}/{org}/{service}/{namespace}/{version}`
//! - `POST {base}/{org}/{service}/{namespace}` with `{"configuration": {...}}`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use reuni_client::{ConfigurationClient, Scope};
//!
//! # async fn example() -> Result<(), reuni_client::ClientError> {
//! let client = ConfigurationClient::new("http://127.0.0.1:8080", "token");
//! let scope = Scope::new("acme", "api", "prod");
//! let latest = client.latest_version(&scope).await?;
//! let current = client.fetch_configuration(&scope, latest).await?;
//! println!("{} keys at version {}", current.configuration.len(), current.version);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http;
#[cfg(any(test, feature = "mock-server"))]
pub mod mock_server;
pub mod types;

pub use client::ConfigurationClient;
pub use error::{ClientError, Result};
pub use types::{ConfigurationMap, ConfigurationVersion, Scope, SubmitOutcome};
