//! Top-level AccessGrid client.

use crate::access_cards::AccessCards;
use crate::console::Console;
use crate::dispatcher::RequestDispatcher;
use crate::error::AccessGridError;
use auth::{ApiCredentials, HmacSigner, PayloadSigner};
use common::Endpoint;
use rest_client::{HttpTransport, RestClient};
use std::sync::Arc;
use std::time::Duration;

/// AccessGrid API client.
///
/// Both resource clients share one [`RequestDispatcher`].
#[derive(Debug, Clone)]
pub struct AccessGridClient {
    /// Key-card operations.
    pub access_cards: AccessCards,
    /// Template and event-log operations.
    pub console: Console,
    dispatcher: Arc<RequestDispatcher>,
}

impl AccessGridClient {
    /// Create a client for the production endpoint.
    ///
    /// # Errors
    /// Returns `AccessGridError::Config` if the account id or secret key is
    /// empty, or an API error if the HTTP client cannot be built.
    pub fn new(
        account_id: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, AccessGridError> {
        let credentials = ApiCredentials::new(account_id, secret_key)?;
        Self::builder(credentials).build()
    }

    /// Create a client from `ACCESSGRID_*` environment variables.
    ///
    /// # Errors
    /// Returns `AccessGridError::Config` if credentials are missing, or
    /// `AccessGridError::Endpoint` if `ACCESSGRID_BASE_URL` is set but invalid.
    pub fn from_env() -> Result<Self, AccessGridError> {
        let credentials = ApiCredentials::from_env()?;
        let endpoint = Endpoint::from_env()?;
        Self::builder(credentials).endpoint(endpoint).build()
    }

    /// Start building a client with custom collaborators.
    pub fn builder(credentials: ApiCredentials) -> AccessGridClientBuilder {
        AccessGridClientBuilder::new(credentials)
    }

    /// The shared dispatcher, for calls not covered by the resource clients.
    pub fn dispatcher(&self) -> &Arc<RequestDispatcher> {
        &self.dispatcher
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &Endpoint {
        self.dispatcher.endpoint()
    }
}

/// Builder for [`AccessGridClient`].
pub struct AccessGridClientBuilder {
    credentials: ApiCredentials,
    endpoint: Endpoint,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn HttpTransport>>,
    signer: Option<Arc<dyn PayloadSigner>>,
}

impl AccessGridClientBuilder {
    fn new(credentials: ApiCredentials) -> Self {
        Self {
            credentials,
            endpoint: Endpoint::default(),
            timeout: None,
            transport: None,
            signer: None,
        }
    }

    /// Send requests to `endpoint` instead of production.
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Parse and use `base_url`.
    pub fn base_url(mut self, base_url: &str) -> Result<Self, AccessGridError> {
        self.endpoint = Endpoint::new(base_url)?;
        Ok(self)
    }

    /// Timeout for the default transport. Ignored with a custom transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Substitute the HTTP transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Substitute the payload signer.
    pub fn signer(mut self, signer: Arc<dyn PayloadSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<AccessGridClient, AccessGridError> {
        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => {
                let client = match self.timeout {
                    Some(timeout) => RestClient::with_timeout(timeout),
                    None => RestClient::new(),
                }
                .map_err(AccessGridError::wrap)?;
                Arc::new(client)
            }
        };

        let signer: Arc<dyn PayloadSigner> = match self.signer {
            Some(signer) => signer,
            None => Arc::new(HmacSigner::new()),
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            account_id = %self.credentials.account_id(),
            "Building AccessGrid client"
        );

        let dispatcher = Arc::new(RequestDispatcher::new(
            self.credentials,
            self.endpoint,
            transport,
            signer,
        ));

        Ok(AccessGridClient {
            access_cards: AccessCards::new(dispatcher.clone()),
            console: Console::new(dispatcher.clone()),
            dispatcher,
        })
    }
}

impl std::fmt::Debug for AccessGridClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGridClientBuilder")
            .field("credentials", &self.credentials)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("custom_transport", &self.transport.is_some())
            .field("custom_signer", &self.signer.is_some())
            .finish()
    }
}
