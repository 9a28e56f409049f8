use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lnmetrics_client::errors::LNMetricsError;
use lnmetrics_client::{LNMetricsClient, GET_METRIC_ONE, GET_NODE};

async fn mock_endpoint(reply: Value) -> (MockServer, LNMetricsClient) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply))
        .mount(&server)
        .await;
    let client = LNMetricsClient::new(server.uri()).unwrap();
    (server, client)
}

fn request_body(server_requests: &[wiremock::Request]) -> Value {
    assert_eq!(server_requests.len(), 1, "expected exactly one request");
    serde_json::from_slice(&server_requests[0].body).unwrap()
}

#[tokio::test]
async fn get_node_returns_the_node_record() {
    let (_server, client) = mock_endpoint(json!({
        "data": {
            "getNode": {
                "node_id": "02aa",
                "alias": "miner-of-the-north",
                "color": "#ff0000",
                "network": "bitcoin",
                "address": [{ "type": "ipv4", "host": "1.2.3.4", "port": 9735 }],
                "node_info": { "implementation": "core-lightning", "version": "23.02" },
                "last_update": 1672531200
            }
        }
    }))
    .await;

    let node = client.get_node("bitcoin", "02aa").await.unwrap();
    assert_eq!(node.node_id.as_deref(), Some("02aa"));
    assert_eq!(node.alias.as_deref(), Some("miner-of-the-north"));
    assert_eq!(node.address[0].port, Some(9735));
    assert_eq!(node.last_update, Some(1672531200));
    // fields the server left out decode as absent
    assert!(node.os_info.is_none());
    assert!(node.timezone.is_none());
}

#[tokio::test]
async fn get_node_binds_network_and_node_id() {
    let (server, client) = mock_endpoint(json!({ "data": { "getNode": {} } })).await;

    client.get_node("mainnet", "02ab").await.unwrap();

    let body = request_body(&server.received_requests().await.unwrap());
    assert_eq!(body["operationName"], "GetNode");
    assert_eq!(
        body["variables"],
        json!({ "network": "mainnet", "node_id": "02ab" })
    );
    assert_eq!(body["query"], Value::String(GET_NODE.document.to_owned()));
}

#[tokio::test]
async fn get_nodes_returns_the_sequence_unmodified() {
    let (_server, client) = mock_endpoint(json!({
        "data": { "getNodes": [{ "node_id": "02aa", "alias": "x" }] }
    }))
    .await;

    let nodes = client.get_nodes("testnet").await.unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].node_id.as_deref(), Some("02aa"));
    assert_eq!(nodes[0].alias.as_deref(), Some("x"));
}

#[tokio::test]
async fn metric_one_binds_without_the_network() {
    let (server, client) = mock_endpoint(json!({
        "data": { "metricOne": { "page_info": { "start": 100, "end": 200, "hash_next_page": false } } }
    }))
    .await;

    let page = client
        .get_metric_one("mainnet", "02ab", 100, 200)
        .await
        .unwrap();
    assert_eq!(page.page_info.start, Some(100));
    assert_eq!(page.page_info.hash_next_page, Some(false));
    assert!(page.up_time.is_empty());

    let body = request_body(&server.received_requests().await.unwrap());
    assert_eq!(body["operationName"], "MetricOne");
    // the remote operation takes no network argument, so none may be sent
    assert_eq!(
        body["variables"],
        json!({ "node_id": "02ab", "first": 100, "last": 200 })
    );
    assert!(body["variables"].get("network").is_none());
    assert_eq!(
        body["query"],
        Value::String(GET_METRIC_ONE.document.to_owned())
    );
}

#[tokio::test]
async fn metric_one_coerces_numeric_strings() {
    let (server, client) = mock_endpoint(json!({
        "data": { "metricOne": {} }
    }))
    .await;

    client
        .get_metric_one("mainnet", "02ab", "100", "200")
        .await
        .unwrap();

    let body = request_body(&server.received_requests().await.unwrap());
    assert_eq!(body["variables"]["first"], json!(100));
    assert_eq!(body["variables"]["last"], json!(200));
}

#[tokio::test]
async fn metric_one_coercion_fails_before_any_request() {
    let (server, client) = mock_endpoint(json!({ "data": { "metricOne": {} } })).await;

    let err = client
        .get_metric_one("mainnet", "02ab", "abc", 200)
        .await
        .unwrap_err();
    assert!(matches!(err, LNMetricsError::Coercion { name: "first", .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn error_envelope_fails_every_method() {
    let (_server, client) = mock_endpoint(json!({ "data": { "error": "boom" } })).await;

    let err = client.get_node("mainnet", "02ab").await.unwrap_err();
    assert!(err.to_string().contains("boom"));

    let err = client.get_nodes("mainnet").await.unwrap_err();
    assert!(matches!(err, LNMetricsError::ErrorEnvelope(msg) if msg.contains("boom")));

    let err = client
        .get_metric_one("mainnet", "02ab", 1, 2)
        .await
        .unwrap_err();
    assert!(matches!(err, LNMetricsError::ErrorEnvelope(msg) if msg.contains("boom")));
}

#[tokio::test]
async fn missing_result_key_is_a_contract_violation() {
    let (_server, client) = mock_endpoint(json!({ "data": { "unrelated": 42 } })).await;

    for err in [
        client.get_node("mainnet", "02ab").await.unwrap_err(),
        client.get_nodes("mainnet").await.unwrap_err(),
        client
            .get_metric_one("mainnet", "02ab", 1, 2)
            .await
            .unwrap_err(),
    ] {
        assert!(matches!(err, LNMetricsError::ContractViolation(_)));
    }
}

#[tokio::test]
async fn top_level_errors_are_propagated() {
    let (_server, client) = mock_endpoint(json!({
        "data": null,
        "errors": [{ "message": "Cannot query field \"getNode\"" }]
    }))
    .await;

    let err = client.get_node("mainnet", "02ab").await.unwrap_err();
    assert!(matches!(err, LNMetricsError::Graphql(msg) if msg.contains("Cannot query field")));
}

#[tokio::test]
async fn http_failure_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let client = LNMetricsClient::new(server.uri()).unwrap();

    let err = client.get_nodes("mainnet").await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn builder_rejects_a_bad_service_url() {
    let err = LNMetricsClient::builder()
        .service_url("not a url")
        .build()
        .unwrap_err();
    assert!(matches!(err, LNMetricsError::UrlParse(_)));
}
