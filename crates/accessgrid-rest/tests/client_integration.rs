//! End-to-end tests against a mock AccessGrid server.

use accessgrid_rest::{AccessGridClient, AccessGridError, ApiCredentials, ApiRequest};
use model::{
    CardState, CreateTemplateParams, EventLogFilters, ListCardsParams, Platform, Protocol,
    ProvisionCardParams, SupportInfo, UpdateCardParams, UpdateTemplateParams, UseCase,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const ACCOUNT_ID: &str = "acct_123";
const SECRET_KEY: &str = "secret";

fn client_for(server: &MockServer) -> AccessGridClient {
    let credentials = ApiCredentials::new(ACCOUNT_ID, SECRET_KEY).unwrap();
    AccessGridClient::builder(credentials)
        .base_url(&server.uri())
        .unwrap()
        .build()
        .unwrap()
}

fn card_json(id: &str, state: &str) -> Value {
    json!({
        "id": id,
        "install_url": format!("https://accessgrid.com/install/{id}"),
        "state": state,
        "full_name": "Employee Name",
        "expiration_date": "2025-02-22T21:04:03.664Z"
    })
}

fn template_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Employee NFC key",
        "platform": "apple",
        "use_case": "employee_badge",
        "protocol": "desfire",
        "created_at": "2025-01-01T00:00:00Z",
        "last_published_at": "2025-01-02T00:00:00Z",
        "issued_keys_count": 12,
        "active_keys_count": 10
    })
}

async fn only_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests.remove(0)
}

fn expected_signature(payload: &str) -> String {
    auth::sign_payload(SECRET_KEY, payload).unwrap()
}

// ============================================================================
// Key cards
// ============================================================================

#[tokio::test]
async fn suspend_posts_to_action_path_with_signed_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/key-cards/0xc4rd1d/suspend"))
        .and(query_param("sig_payload", r#"{"id":"0xc4rd1d"}"#))
        .and(header("X-ACCT-ID", ACCOUNT_ID))
        .and(header_exists("X-PAYLOAD-SIG"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(card_json("0xc4rd1d", "suspended")))
        .expect(1)
        .mount(&server)
        .await;

    let card = client_for(&server)
        .access_cards
        .suspend("0xc4rd1d")
        .await
        .unwrap();

    assert_eq!(card.state, Some(CardState::Suspended));

    let request = only_request(&server).await;
    assert!(request.body.is_empty());
    assert!(request
        .url
        .query()
        .unwrap()
        .contains("sig_payload=%7B%22id%22%3A%220xc4rd1d%22%7D"));
    assert_eq!(
        request.headers.get("X-PAYLOAD-SIG").unwrap(),
        expected_signature(r#"{"id":"0xc4rd1d"}"#).as_str()
    );
    assert!(request
        .headers
        .get("User-Agent")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("accessgrid-rust @ v"));
}

#[tokio::test]
async fn resume_unlink_delete_use_their_action_paths() {
    let server = MockServer::start().await;

    for action in ["resume", "unlink", "delete"] {
        Mock::given(method("POST"))
            .and(path(format!("/v1/key-cards/card_9/{action}")))
            .and(query_param("sig_payload", r#"{"id":"card_9"}"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(card_json("card_9", "active")))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    client.access_cards.resume("card_9").await.unwrap();
    client.access_cards.unlink("card_9").await.unwrap();
    client.access_cards.delete("card_9").await.unwrap();
}

#[tokio::test]
async fn list_sends_template_and_state_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/key-cards"))
        .and(query_param("template_id", "0xtemplate"))
        .and(query_param("state", "active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "keys": [card_json("a", "active"), card_json("b", "active")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cards = client_for(&server)
        .access_cards
        .list(&ListCardsParams::new("0xtemplate").with_state(CardState::Active))
        .await
        .unwrap();

    assert_eq!(cards.len(), 2);

    let request = only_request(&server).await;
    let query = request.url.query().unwrap();
    assert!(query.contains("template_id=0xtemplate"));
    assert!(query.contains("state=active"));
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn provision_signs_the_json_body() {
    let server = MockServer::start().await;

    let params = ProvisionCardParams {
        card_template_id: "0xd3adb00b5".into(),
        employee_id: Some("123456789".into()),
        full_name: "Employee Name".into(),
        email: Some("employee@yourwebsite.com".into()),
        start_date: "2025-01-31T22:46:25.601Z".into(),
        expiration_date: "2025-04-30T22:46:25.601Z".into(),
        ..Default::default()
    };

    Mock::given(method("POST"))
        .and(path("/v1/key-cards"))
        .and(body_json(serde_json::to_value(&params).unwrap()))
        .respond_with(ResponseTemplate::new(200).set_body_json(card_json("0xnew", "active")))
        .expect(1)
        .mount(&server)
        .await;

    let card = client_for(&server)
        .access_cards
        .provision(&params)
        .await
        .unwrap();

    assert_eq!(card.id, "0xnew");
    assert!(card.install_url.is_some());

    let request = only_request(&server).await;
    let sent = String::from_utf8(request.body.clone()).unwrap();
    assert_eq!(
        request.headers.get("X-PAYLOAD-SIG").unwrap(),
        expected_signature(&sent).as_str()
    );
    assert!(request.url.query().is_none());
}

#[tokio::test]
async fn update_patches_card_without_id_in_body() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/key-cards/0xc4rd1d"))
        .and(body_json(json!({"full_name": "Updated Name", "title": "CTO"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(card_json("0xc4rd1d", "active")))
        .expect(1)
        .mount(&server)
        .await;

    let params = UpdateCardParams {
        card_id: "0xc4rd1d".into(),
        full_name: Some("Updated Name".into()),
        title: Some("CTO".into()),
        ..Default::default()
    };

    client_for(&server).access_cards.update(&params).await.unwrap();
}

#[tokio::test]
async fn get_card_signs_card_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/key-cards/0xc4rd1d"))
        .and(query_param("sig_payload", r#"{"id":"0xc4rd1d"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(card_json("0xc4rd1d", "active")))
        .expect(1)
        .mount(&server)
        .await;

    let card = client_for(&server).access_cards.get("0xc4rd1d").await.unwrap();
    assert_eq!(card.full_name.as_deref(), Some("Employee Name"));
}

// ============================================================================
// Console
// ============================================================================

#[tokio::test]
async fn create_template_posts_nested_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/console/card-templates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(template_json("0xt3mpl4t3")))
        .expect(1)
        .mount(&server)
        .await;

    let params = CreateTemplateParams {
        name: "Employee NFC key".into(),
        platform: Platform::Apple,
        use_case: UseCase::EmployeeBadge,
        protocol: Protocol::Desfire,
        allow_on_multiple_devices: Some(true),
        watch_count: Some(2),
        iphone_count: Some(3),
        design: None,
        support_info: Some(SupportInfo {
            support_email: Some("support@yourcompany.com".into()),
            ..Default::default()
        }),
    };

    let template = client_for(&server)
        .console
        .create_template(&params)
        .await
        .unwrap();

    assert_eq!(template.id, "0xt3mpl4t3");
    assert_eq!(template.active_keys_count, Some(10));

    let request = only_request(&server).await;
    let body: Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(body["support_info"]["support_email"], "support@yourcompany.com");
    assert_eq!(body["platform"], "apple");
}

#[tokio::test]
async fn update_template_puts_to_template_path() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/console/card-templates/0xt3mpl4t3"))
        .and(body_json(json!({"name": "Renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(template_json("0xt3mpl4t3")))
        .expect(1)
        .mount(&server)
        .await;

    let params = UpdateTemplateParams {
        template_id: "0xt3mpl4t3".into(),
        name: Some("Renamed".into()),
        ..Default::default()
    };

    client_for(&server)
        .console
        .update_template(&params)
        .await
        .unwrap();

    // PUT carries its body, so no sig_payload is added.
    assert!(only_request(&server).await.url.query().is_none());
}

#[tokio::test]
async fn read_template_maps_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/console/card-templates/0xt3mpl4t3"))
        .and(query_param("sig_payload", r#"{"id":"0xt3mpl4t3"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(template_json("0xt3mpl4t3")))
        .mount(&server)
        .await;

    let template = client_for(&server)
        .console
        .read_template("0xt3mpl4t3")
        .await
        .unwrap();

    assert_eq!(template.name.as_deref(), Some("Employee NFC key"));
    assert_eq!(template.protocol.as_deref(), Some("desfire"));
    assert_eq!(template.issued_keys_count, Some(12));
}

#[tokio::test]
async fn event_logs_send_bracketed_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/console/card-templates/0xt3mpl4t3/logs"))
        .and(query_param("filters[device]", "mobile"))
        .and(query_param("filters[event_type]", "install"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "logs": [{"type": "install", "timestamp": "2025-01-01T00:00:00Z"}],
            "pagination": {"current_page": 1, "total_pages": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filters = EventLogFilters {
        device: Some("mobile".into()),
        event_type: Some("install".into()),
        ..Default::default()
    };

    let page = client_for(&server)
        .console
        .get_event_logs("0xt3mpl4t3", &filters)
        .await
        .unwrap();

    assert_eq!(page.logs.len(), 1);

    let request = only_request(&server).await;
    let query = request.url.query().unwrap();
    assert!(query.contains("filters%5Bdevice%5D=mobile"));
    assert!(!query.contains("start_date"));
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn unauthorized_is_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "bad signature"})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .access_cards
        .get("0xc4rd1d")
        .await
        .unwrap_err();

    assert!(matches!(err, AccessGridError::Authentication { .. }));
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn payment_required_is_balance_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(402).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .access_cards
        .suspend("0xc4rd1d")
        .await
        .unwrap_err();

    assert!(err.is_insufficient_balance());
    assert_eq!(err.to_string(), "Insufficient account balance");
}

#[tokio::test]
async fn other_failures_surface_body_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/console/card-templates/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Template not found"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/console/card-templates/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client.console.read_template("missing").await.unwrap_err();
    assert_eq!(err.to_string(), "Template not found");
    assert_eq!(err.http_status(), Some(404));

    let err = client.console.read_template("broken").await.unwrap_err();
    assert_eq!(err.to_string(), "Request failed");
    assert_eq!(err.http_status(), Some(500));
}

#[tokio::test]
async fn unreachable_server_is_wrapped_api_error() {
    let credentials = ApiCredentials::new(ACCOUNT_ID, SECRET_KEY).unwrap();
    let client = AccessGridClient::builder(credentials)
        .base_url("http://127.0.0.1:1")
        .unwrap()
        .build()
        .unwrap();

    let err = client.access_cards.get("0xc4rd1d").await.unwrap_err();

    assert!(matches!(err, AccessGridError::Api { status: None, .. }));
    assert!(err.to_string().starts_with("Request failed: "));
}

#[tokio::test]
async fn raw_dispatch_passes_caller_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/key-cards/abc"))
        .and(header("X-Request-Id", "req-42"))
        .and(header("X-ACCT-ID", ACCOUNT_ID))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc", "extra": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = client
        .dispatcher()
        .dispatch(
            ApiRequest::get("/v1/key-cards/abc")
                .with_header("X-Request-Id", "req-42")
                .with_header("X-ACCT-ID", "spoofed"),
        )
        .await
        .unwrap();

    // The raw body comes back untouched.
    assert_eq!(body, json!({"id": "abc", "extra": 1}));
}
