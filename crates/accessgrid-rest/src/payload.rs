//! Signable payload resolution.
//!
//! Requests that carry a JSON body sign that body. Requests without one
//! sign `{"id":"<resource id>"}`, where the resource id is read off the
//! path, so a signature for one resource cannot be replayed against
//! another.

use rest_client::HttpMethod;
use serde_json::Value;

/// Trailing path segments that name an action on the preceding resource.
pub const ACTION_SEGMENTS: [&str; 4] = ["suspend", "resume", "unlink", "delete"];

/// Payload signed when no resource id can be derived.
pub const EMPTY_PAYLOAD: &str = "{}";

/// What a request sends and what it signs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPayload {
    /// Request body. `None` means nothing is transmitted.
    pub payload_to_send: Option<String>,
    /// The exact string the signature is computed over.
    pub payload_to_sign: String,
    /// Resource id the signature covers, for bodiless requests.
    pub resource_id: Option<String>,
}

/// Decide what a request sends and signs.
///
/// A body is used only when it is non-empty and the method is not GET.
///
/// # Errors
/// Returns the serialization error if `body` cannot be rendered as JSON.
pub fn resolve(
    method: HttpMethod,
    path: &str,
    body: Option<&Value>,
) -> Result<ResolvedPayload, serde_json::Error> {
    if let Some(body) = body.filter(|b| method != HttpMethod::Get && !is_empty_body(b)) {
        let serialized = serde_json::to_string(body)?;
        return Ok(ResolvedPayload {
            payload_to_send: Some(serialized.clone()),
            payload_to_sign: serialized,
            resource_id: None,
        });
    }

    let resource_id = resource_id_from_path(path);
    let payload_to_sign = match &resource_id {
        Some(id) => id_payload(id)?,
        None => EMPTY_PAYLOAD.to_string(),
    };

    Ok(ResolvedPayload {
        payload_to_send: None,
        payload_to_sign,
        resource_id,
    })
}

/// Derive the targeted resource id from a request path.
///
/// Any query string is ignored. With an action suffix the id is the
/// second-to-last segment; otherwise it is the last segment when at least
/// two segments exist.
pub fn resource_id_from_path(path: &str) -> Option<String> {
    let path = path.split('?').next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let last = *segments.last()?;
    if ACTION_SEGMENTS.contains(&last) {
        segments
            .len()
            .checked_sub(2)
            .map(|i| segments[i].to_string())
    } else if segments.len() >= 2 {
        Some(last.to_string())
    } else {
        None
    }
}

/// `{"id":"<resource_id>"}` as compact JSON.
pub fn id_payload(resource_id: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string(&serde_json::json!({ "id": resource_id }))
}

fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
