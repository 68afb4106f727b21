//! HTTP transport infrastructure.
//!
//! This crate provides the transport capability used by the request
//! dispatcher:
//!
//! - `HttpTransport`, a substitutable single-exchange trait
//! - `HttpRequest` / `HttpResponse` value types
//! - `RestClient`, the default implementation on top of `reqwest`
//! - Consistent transport error handling via `RestError`
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::{HttpMethod, HttpRequest, HttpTransport, RestClient};
//!
//! let client = RestClient::new()?;
//! let response = client
//!     .execute(HttpRequest {
//!         method: HttpMethod::Get,
//!         url: "https://api.accessgrid.com/v1/key-cards/0xc4rd1d".into(),
//!         headers: vec![],
//!         body: None,
//!     })
//!     .await?;
//! ```

mod client;
mod error;
mod transport;

pub use client::RestClient;
pub use error::RestError;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
