//! Signed request dispatch.
//!
//! Every resource call funnels through [`RequestDispatcher::dispatch`], which
//! resolves the signable payload, signs it, attaches the account headers,
//! performs the exchange and maps the outcome onto [`AccessGridError`].

use crate::error::AccessGridError;
use crate::payload;
use crate::request::ApiRequest;
use auth::{ApiCredentials, PayloadSigner};
use common::Endpoint;
use rest_client::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Header carrying the account id.
pub const ACCOUNT_ID_HEADER: &str = "X-ACCT-ID";

/// Header carrying the payload signature.
pub const SIGNATURE_HEADER: &str = "X-PAYLOAD-SIG";

/// Query parameter carrying the signed payload of bodiless requests.
pub const SIG_PAYLOAD_PARAM: &str = "sig_payload";

/// Client identification sent as `User-Agent`.
pub const USER_AGENT: &str = concat!("accessgrid-rust @ v", env!("CARGO_PKG_VERSION"));

const CONTENT_TYPE: &str = "Content-Type";
const USER_AGENT_HEADER: &str = "User-Agent";

/// Signs and sends API requests.
///
/// Holds only read-only state, so one instance can serve concurrent calls
/// through a shared reference or an `Arc`. Dropping a `dispatch` future
/// abandons the exchange; nothing needs cleaning up.
pub struct RequestDispatcher {
    credentials: ApiCredentials,
    endpoint: Endpoint,
    transport: Arc<dyn HttpTransport>,
    signer: Arc<dyn PayloadSigner>,
}

impl RequestDispatcher {
    /// Create a dispatcher from its collaborators.
    pub fn new(
        credentials: ApiCredentials,
        endpoint: Endpoint,
        transport: Arc<dyn HttpTransport>,
        signer: Arc<dyn PayloadSigner>,
    ) -> Self {
        Self {
            credentials,
            endpoint,
            transport,
            signer,
        }
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// The account id sent with every request.
    pub fn account_id(&self) -> &str {
        self.credentials.account_id()
    }

    /// Sign and send a request, returning the parsed JSON body.
    ///
    /// An empty success body is returned as `Value::Null`.
    ///
    /// # Errors
    /// - `AccessGridError::Authentication` for HTTP 401
    /// - `AccessGridError::Api` for any other non-2xx status, and for
    ///   signing, transport or JSON failures (wrapped with their message)
    pub async fn dispatch(&self, request: ApiRequest) -> Result<Value, AccessGridError> {
        let http_request = self.prepare(request)?;

        tracing::debug!(
            method = %http_request.method,
            url = %http_request.url,
            has_body = http_request.body.is_some(),
            "Dispatching signed request"
        );

        let response = self
            .transport
            .execute(http_request)
            .await
            .map_err(AccessGridError::wrap)?;

        tracing::debug!(status = response.status, "Received response");

        interpret_response(response)
    }

    /// Dispatch and deserialize the body into `T`.
    pub async fn dispatch_as<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, AccessGridError> {
        let value = self.dispatch(request).await?;
        serde_json::from_value(value).map_err(AccessGridError::wrap)
    }

    /// Turn a request descriptor into a signed wire request.
    fn prepare(&self, request: ApiRequest) -> Result<HttpRequest, AccessGridError> {
        let ApiRequest {
            method,
            path,
            query,
            body,
            headers,
        } = request;

        let mut url = self.endpoint.url_for(&path);
        for (key, value) in &query {
            append_query_param(&mut url, key, value);
        }

        let resolved =
            payload::resolve(method, &path, body.as_ref()).map_err(AccessGridError::wrap)?;

        let signature = self
            .signer
            .sign(self.credentials.expose_secret(), &resolved.payload_to_sign)
            .map_err(AccessGridError::wrap)?;

        if resolved.resource_id.is_some() && matches!(method, HttpMethod::Get | HttpMethod::Post) {
            append_query_param(&mut url, SIG_PAYLOAD_PARAM, &resolved.payload_to_sign);
        }

        let headers = self.build_headers(headers, signature);

        let body = match method {
            HttpMethod::Get => None,
            _ => resolved.payload_to_send,
        };

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Caller headers first, then the mandatory ones.
    ///
    /// A caller header sharing a name with a mandatory header is dropped.
    fn build_headers(
        &self,
        caller: Vec<(String, String)>,
        signature: String,
    ) -> Vec<(String, String)> {
        let mandatory = [
            (CONTENT_TYPE, "application/json".to_string()),
            (ACCOUNT_ID_HEADER, self.credentials.account_id().to_string()),
            (SIGNATURE_HEADER, signature),
            (USER_AGENT_HEADER, USER_AGENT.to_string()),
        ];

        let mut headers: Vec<(String, String)> = caller
            .into_iter()
            .filter(|(name, _)| {
                let reserved = mandatory
                    .iter()
                    .any(|(m, _)| m.eq_ignore_ascii_case(name));
                if reserved {
                    tracing::warn!(
                        header = %name,
                        "Ignoring caller header that shadows a mandatory header"
                    );
                }
                !reserved
            })
            .collect();

        headers.extend(
            mandatory
                .into_iter()
                .map(|(name, value)| (name.to_string(), value)),
        );
        headers
    }
}

impl std::fmt::Debug for RequestDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestDispatcher")
            .field("endpoint", &self.endpoint.base_url())
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

/// Append `key=value`, percent-encoding both, after any existing query.
fn append_query_param(url: &mut String, key: &str, value: &str) {
    url.push(if url.contains('?') { '&' } else { '?' });
    url.push_str(&urlencoding::encode(key));
    url.push('=');
    url.push_str(&urlencoding::encode(value));
}

/// Parse the body as JSON and classify the status.
///
/// On a non-2xx status the status decides the error; a body that is not
/// JSON only loses its `message`, it is never reported as a parse failure.
fn interpret_response(response: HttpResponse) -> Result<Value, AccessGridError> {
    let parsed = parse_body(&response.body);

    if response.is_success() {
        return parsed.map_err(AccessGridError::wrap);
    }

    let error = AccessGridError::from_response(response.status, parsed.ok().as_ref());
    tracing::debug!(status = response.status, error = %error, "Request rejected");
    Err(error)
}

fn parse_body(body: &str) -> Result<Value, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body)
}
