//! AccessGrid REST API client.
//!
//! This crate provides a typed client for the AccessGrid API with:
//!
//! - **Signed requests**: Every call is signed with HMAC-SHA256 and carries the
//!   account id; bodiless calls sign the id of the resource they act on
//! - **Key cards**: Provision, update, list, suspend, resume, unlink and delete
//! - **Console**: Create, update and read card templates, and fetch event logs
//! - **Error handling**: Typed errors that separate rejected credentials and
//!   service failures from transport problems
//!
//! # Example
//!
//! ```rust,ignore
//! use accessgrid_rest::AccessGridClient;
//! use model::{CardState, ListCardsParams};
//!
//! let client = AccessGridClient::new("your-account-id", "your-secret-key")?;
//!
//! // Suspend a card
//! let card = client.access_cards.suspend("0xc4rd1d").await?;
//!
//! // List active cards for a template
//! let cards = client
//!     .access_cards
//!     .list(&ListCardsParams::new("0xd3adb00b5").with_state(CardState::Active))
//!     .await?;
//! ```

mod access_cards;
mod client;
mod console;
mod dispatcher;
mod error;
pub mod payload;
mod request;

pub use access_cards::AccessCards;
pub use client::{AccessGridClient, AccessGridClientBuilder};
pub use console::Console;
pub use dispatcher::{
    RequestDispatcher, ACCOUNT_ID_HEADER, SIGNATURE_HEADER, SIG_PAYLOAD_PARAM, USER_AGENT,
};
pub use error::{AccessGridError, INSUFFICIENT_BALANCE, INVALID_CREDENTIALS, REQUEST_FAILED};
pub use request::ApiRequest;

pub use auth::{ApiCredentials, HmacSigner, PayloadSigner};
pub use common::Endpoint;
pub use rest_client::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, RestClient, RestError};
