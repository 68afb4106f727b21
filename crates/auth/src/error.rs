use thiserror::Error;

/// Errors that can occur while building credentials or signing payloads.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No account id was supplied.
    #[error("Account ID is required")]
    MissingAccountId,

    /// No secret key was supplied.
    #[error("Secret Key is required")]
    MissingSecretKey,

    /// A required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The MAC primitive rejected the key or input.
    #[error("Signing failed: {0}")]
    Signing(String),
}
