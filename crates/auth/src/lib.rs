//! Authentication and signing for the AccessGrid API.
//!
//! This crate provides secure credential management and payload signing
//! for authenticated API calls.
//!
//! # Features
//!
//! - **Secure Credentials**: The secret key is wrapped in `SecretString` to prevent
//!   accidental logging and ensure memory is zeroed on drop.
//! - **HMAC-SHA256 Signing**: Signs the base64 form of a payload and renders the
//!   digest as lowercase hex.
//! - **Environment Loading**: Credentials can be loaded from environment variables
//!   or a `.env` file.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{ApiCredentials, HmacSigner, PayloadSigner};
//!
//! let credentials = ApiCredentials::from_env()?;
//! let signature = HmacSigner::new().sign(credentials.expose_secret(), r#"{"id":"0xc4rd1d"}"#)?;
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::{ApiCredentials, ACCOUNT_ID_ENV, SECRET_KEY_ENV};
pub use error::AuthError;
pub use signer::{sign_payload, HmacSigner, PayloadSigner};
