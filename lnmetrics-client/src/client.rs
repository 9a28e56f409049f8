use std::time::Duration;

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;
use url::Url;

use crate::{
    errors::{LNMetricsError, Result},
    models::{MetricPage, NodeRecord},
    queries::{QueryDocument, GET_METRIC_ONE, GET_NODE, GET_NODES},
};

/// The main client for interacting with an Open LN metrics service.
///
/// The `LNMetricsClient` holds one HTTP transport bound to the service
/// endpoint for its whole lifetime and exposes one method per query in the
/// catalog. Each method binds the variables, executes the query through the
/// transport and unwraps the response envelope into the result field or an
/// error. This layer adds no retries, no caching and no synchronization of
/// its own; concurrent use relies on the connection pooling of the
/// underlying transport.
#[derive(Debug, Clone)]
pub struct LNMetricsClient {
    endpoint: Url,
    http: reqwest::Client,
}

/// The `{data, errors}` envelope every GraphQL response arrives in.
#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    #[serde(default)]
    message: String,
}

impl LNMetricsClient {
    /// Initializes a new `LNMetricsClientBuilder` instance.
    pub fn builder() -> LNMetricsClientBuilder {
        LNMetricsClientBuilder::default()
    }

    /// Builds a client bound to `service_url` with default transport options.
    pub fn new(service_url: impl Into<String>) -> Result<Self> {
        LNMetricsClient::builder().service_url(service_url).build()
    }

    /// Generic method to make a query to the GraphQL server.
    ///
    /// Executes `document` with `variables` bound and returns the raw
    /// decoded `data` payload. Transport faults and errors reported in the
    /// top level `errors` array are propagated unchanged to the caller.
    pub async fn call(&self, document: &QueryDocument, variables: Value) -> Result<Value> {
        debug!(operation = document.operation, "executing query");
        let body = json!({
            "operationName": document.operation,
            "query": document.document,
            "variables": variables,
        });

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let envelope: ResponseEnvelope = response.json().await?;
        if !envelope.errors.is_empty() {
            let messages: Vec<String> = envelope
                .errors
                .into_iter()
                .map(|entry| entry.message)
                .collect();
            return Err(LNMetricsError::Graphql(messages.join("; ")));
        }

        Ok(envelope.data.unwrap_or(Value::Null))
    }

    /// Retrieves the node information for `node_id` on `network`.
    pub async fn get_node(&self, network: &str, node_id: &str) -> Result<NodeRecord> {
        let variables = json!({ "network": network, "node_id": node_id });
        let payload = self.call(&GET_NODE, variables).await?;
        let node = unwrap_payload(GET_NODE.result_key, payload)?;
        Ok(serde_json::from_value(node)?)
    }

    /// Gets the list of all the nodes the server tracks on `network`.
    pub async fn get_nodes(&self, network: &str) -> Result<Vec<NodeRecord>> {
        let variables = json!({ "network": network });
        let payload = self.call(&GET_NODES, variables).await?;
        let nodes = unwrap_payload(GET_NODES.result_key, payload)?;
        Ok(serde_json::from_value(nodes)?)
    }

    /// Gets the metrics collected in the time window between `first` and
    /// `last`, as one page plus the cursors to iterate further.
    ///
    /// `first` and `last` accept any JSON-compatible value and are coerced
    /// to integer timestamps before the request is built; a value that does
    /// not coerce fails without touching the network.
    pub async fn get_metric_one(
        &self,
        network: &str,
        node_id: &str,
        first: impl Into<Value>,
        last: impl Into<Value>,
    ) -> Result<MetricPage> {
        // The remote MetricOne operation declares no network parameter;
        // the value is accepted for API symmetry but never transmitted.
        debug!(network, "network is not part of the MetricOne variables");
        let first = coerce_timestamp("first", first.into())?;
        let last = coerce_timestamp("last", last.into())?;
        let variables = json!({ "node_id": node_id, "first": first, "last": last });
        let payload = self.call(&GET_METRIC_ONE, variables).await?;
        let page = unwrap_payload(GET_METRIC_ONE.result_key, payload)?;
        Ok(serde_json::from_value(page)?)
    }
}

/// Checks the payload for an `error` field before extracting the result
/// field the query was answered under.
///
/// A payload carrying neither field means the server answered a query it
/// does not implement the way the catalog expects, which is a contract
/// violation rather than a recoverable condition.
fn unwrap_payload(result_key: &str, payload: Value) -> Result<Value> {
    let Value::Object(mut fields) = payload else {
        return Err(LNMetricsError::ContractViolation(result_key.to_owned()));
    };

    if let Some(error) = fields.get("error") {
        let message = match error {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        return Err(LNMetricsError::ErrorEnvelope(message));
    }

    fields
        .remove(result_key)
        .ok_or_else(|| LNMetricsError::ContractViolation(result_key.to_owned()))
}

fn coerce_timestamp(name: &'static str, value: Value) -> Result<i64> {
    match value {
        Value::Number(number) => number.as_i64().ok_or_else(|| LNMetricsError::Coercion {
            name,
            value: number.to_string(),
        }),
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| LNMetricsError::Coercion { name, value: text }),
        other => Err(LNMetricsError::Coercion {
            name,
            value: other.to_string(),
        }),
    }
}

/// A builder for configuring and creating a `LNMetricsClient` instance.
///
/// `service_url` is the only required field; the remaining options are
/// handed to the underlying HTTP transport, which is where timeouts belong,
/// the client layer itself has none.
#[derive(Debug, Clone, Default)]
pub struct LNMetricsClientBuilder {
    service_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl LNMetricsClientBuilder {
    /// Sets the URL of the GraphQL endpoint the client will talk to.
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = url.into();
        self
    }

    /// Sets a request timeout on the underlying transport.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the User-Agent header the transport sends with every request.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Constructs the `LNMetricsClient` based on the configured options.
    ///
    /// Fails when the service URL does not parse or the transport cannot
    /// be initialized.
    pub fn build(self) -> Result<LNMetricsClient> {
        let endpoint = self.service_url.parse::<Url>()?;

        let mut http = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            http = http.user_agent(user_agent);
        }

        Ok(LNMetricsClient {
            endpoint,
            http: http.build()?,
        })
    }
}
