mod harness;

use stayrate::api::ApiClient;
use stayrate::availability::AvailabilitySource;
use stayrate::config::{ApiConfig, Credentials};
use stayrate::domain::PropertyId;
use stayrate::error::{ApiError, Error};

use harness::http_server::ScriptedHttpServer;

const BOOKINGS: &str = r#"[
  {"id": 1, "property": 1, "check_in_date": "2024-07-01", "check_out_date": "2024-07-04", "status": "confirmed"},
  {"id": 2, "property_id": "2", "check_in_date": "2024-07-01", "check_out_date": "2024-07-04", "status": "pending"}
]"#;

fn client(server: &ScriptedHttpServer, access: Option<&str>, refresh: Option<&str>) -> ApiClient {
    let config = ApiConfig {
        base_url: server.base_url(),
        timeout_secs: 5,
        ..ApiConfig::default()
    };
    let credentials = Credentials {
        access_token: access.map(str::to_string),
        refresh_token: refresh.map(str::to_string),
    };
    ApiClient::new(&config, &credentials).expect("client")
}

#[tokio::test]
async fn fetches_with_bearer_token_and_filters_property() {
    let server = ScriptedHttpServer::start(vec![(200, BOOKINGS)]).await;
    let api = client(&server, Some("tok"), None);

    let bookings = api.bookings(&PropertyId::from(1)).await.unwrap();

    assert_eq!(bookings.len(), 1);
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].target, "/api/bookings/?property=1");
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer tok"));
}

#[tokio::test]
async fn unauthorized_request_is_refreshed_and_replayed_once() {
    let server = ScriptedHttpServer::start(vec![
        (401, r#"{"detail": "token expired"}"#),
        (200, r#"{"access": "fresh"}"#),
        (200, BOOKINGS),
    ])
    .await;
    let api = client(&server, Some("stale"), Some("r1"));

    let bookings = api.bookings(&PropertyId::from(1)).await.unwrap();

    assert_eq!(bookings.len(), 1);
    let requests = server.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer stale"));
    assert_eq!(requests[1].method, "POST");
    assert_eq!(requests[1].target, "/api/auth/token/refresh/");
    assert!(requests[1].body.contains("r1"));
    assert_eq!(requests[2].authorization.as_deref(), Some("Bearer fresh"));
    assert_eq!(api.tokens().access().as_deref(), Some("fresh"));
}

#[tokio::test]
async fn second_unauthorized_response_is_an_error() {
    let server = ScriptedHttpServer::start(vec![
        (401, "{}"),
        (200, r#"{"access": "fresh"}"#),
        (401, "{}"),
    ])
    .await;
    let api = client(&server, Some("stale"), Some("r1"));

    let result = api.blocks(&PropertyId::from(1)).await;

    assert!(matches!(result, Err(Error::Api(ApiError::Unauthorized { .. }))));
    assert_eq!(server.requests().len(), 3);
}

#[tokio::test]
async fn missing_refresh_token_fails_without_replay() {
    let server = ScriptedHttpServer::start(vec![(401, "{}")]).await;
    let api = client(&server, Some("stale"), None);

    let result = api.pricing_rules(&PropertyId::from(1)).await;

    assert!(matches!(result, Err(Error::Api(ApiError::RefreshFailed(_)))));
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn rejected_refresh_is_reported() {
    let server = ScriptedHttpServer::start(vec![(401, "{}"), (400, r#"{"detail": "bad"}"#)]).await;
    let api = client(&server, Some("stale"), Some("revoked"));

    let result = api.bookings(&PropertyId::from(1)).await;

    assert!(matches!(result, Err(Error::Api(ApiError::RefreshFailed(_)))));
}

#[tokio::test]
async fn server_errors_surface_status() {
    let server = ScriptedHttpServer::start(vec![(500, "{}")]).await;
    let api = client(&server, Some("tok"), None);

    let result = api.properties().await;

    assert!(matches!(
        result,
        Err(Error::Api(ApiError::Status { status: 500, .. }))
    ));
}

#[tokio::test]
async fn paginated_properties_are_unwrapped() {
    let server = ScriptedHttpServer::start(vec![(
        200,
        r#"{"count": 2, "next": null, "results": [
            {"id": 1, "title": "Seaside Villa", "base_price_per_night": "100.00"},
            {"id": "2", "name": "Mountain Cabin", "price_per_night": 80}
        ]}"#,
    )])
    .await;
    let api = client(&server, None, None);

    let properties = api.properties().await.unwrap();

    assert_eq!(properties.len(), 2);
    assert_eq!(properties[1].id, PropertyId::from(2));
    assert_eq!(properties[1].title, "Mountain Cabin");
    assert!(server.requests()[0].authorization.is_none());
}

#[tokio::test]
async fn single_property_endpoint() {
    let server = ScriptedHttpServer::start(vec![(
        200,
        r#"{"id": 7, "title": "Loft", "base_price_per_night": "95.50"}"#,
    )])
    .await;
    let api = client(&server, Some("tok"), None);

    let property = api.property(&PropertyId::from(7)).await.unwrap();

    assert_eq!(property.title, "Loft");
    assert_eq!(server.requests()[0].target, "/api/properties/7/");
}

#[tokio::test]
async fn paginated_collections_follow_next_links() {
    let server = ScriptedHttpServer::start(vec![
        (
            200,
            r#"{"count": 3, "next": "/api/blocks/?page=2&property=1", "results": [
                {"id": 20, "property": 1, "check_in_date": "2024-07-01", "check_out_date": "2024-07-02"},
                {"id": 21, "property": 1, "check_in_date": "2024-07-05", "check_out_date": "2024-07-06"}
            ]}"#,
        ),
        (
            200,
            r#"{"count": 3, "next": null, "results": [
                {"id": 22, "property": 1, "check_in_date": "2024-08-10", "check_out_date": "2024-08-12"}
            ]}"#,
        ),
    ])
    .await;
    let api = client(&server, Some("tok"), None);

    let blocks = api.blocks(&PropertyId::from(1)).await.unwrap();

    let ids: Vec<_> = blocks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["20", "21", "22"]);
    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].target, "/api/blocks/?page=2&property=1");
    assert_eq!(requests[1].authorization.as_deref(), Some("Bearer tok"));
}

#[tokio::test]
async fn failing_later_page_fails_the_collection() {
    let server = ScriptedHttpServer::start(vec![
        (200, r#"{"next": "/api/bookings/?page=2", "results": []}"#),
        (503, "{}"),
    ])
    .await;
    let api = client(&server, Some("tok"), None);

    let result = api.bookings(&PropertyId::from(1)).await;

    assert!(matches!(
        result,
        Err(Error::Api(ApiError::Status { status: 503, .. }))
    ));
}
