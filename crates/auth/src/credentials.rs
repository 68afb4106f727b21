//! Account credential management.
//!
//! Uses the `secrecy` crate to prevent accidental logging of the secret key
//! and ensures memory is zeroed on drop.

use crate::error::AuthError;
use secrecy::{ExposeSecret, SecretString};

/// Environment variable holding the account id.
pub const ACCOUNT_ID_ENV: &str = "ACCESSGRID_ACCOUNT_ID";

/// Environment variable holding the secret key.
pub const SECRET_KEY_ENV: &str = "ACCESSGRID_SECRET_KEY";

/// Account credentials for authenticated requests.
///
/// The account id travels with every request in the `X-ACCT-ID` header.
/// The secret key is only ever used as the MAC key and is wrapped in
/// `SecretString` which:
/// - Prevents accidental Debug/Display printing
/// - Zeros memory on drop via zeroize
#[derive(Clone)]
pub struct ApiCredentials {
    account_id: String,
    secret_key: SecretString,
}

impl ApiCredentials {
    /// Load credentials from environment variables.
    ///
    /// Looks for:
    /// - `ACCESSGRID_ACCOUNT_ID` - The account id (public)
    /// - `ACCESSGRID_SECRET_KEY` - The secret key (private)
    ///
    /// # Errors
    /// Returns `AuthError::MissingEnvVar` if either variable is not set.
    pub fn from_env() -> Result<Self, AuthError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        let account_id = std::env::var(ACCOUNT_ID_ENV)
            .map_err(|_| AuthError::MissingEnvVar(ACCOUNT_ID_ENV.into()))?;

        let secret_key = std::env::var(SECRET_KEY_ENV)
            .map_err(|_| AuthError::MissingEnvVar(SECRET_KEY_ENV.into()))?;

        Self::new(account_id, secret_key)
    }

    /// Create credentials from explicit values.
    ///
    /// # Errors
    /// Returns `AuthError::MissingAccountId` or `AuthError::MissingSecretKey`
    /// when the corresponding value is empty. The account id is checked first.
    pub fn new(
        account_id: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, AuthError> {
        let account_id = account_id.into();
        let secret_key = secret_key.into();

        if account_id.is_empty() {
            return Err(AuthError::MissingAccountId);
        }
        if secret_key.is_empty() {
            return Err(AuthError::MissingSecretKey);
        }

        Ok(Self {
            account_id,
            secret_key: SecretString::from(secret_key),
        })
    }

    /// Get the account id (public, safe to log).
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Expose the secret key for signing.
    ///
    /// **WARNING**: Only use this for cryptographic operations.
    /// Never log or display the return value.
    pub fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("account_id", &self.account_id)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
