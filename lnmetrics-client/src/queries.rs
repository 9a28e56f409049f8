//! Static queries for the LN metrics server.

/// A fixed GraphQL document together with its operation name and the
/// field key the server answers under.
///
/// The set of operations is closed, so the catalog is plain constants
/// rather than generated bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDocument {
    /// Operation name as declared in the document.
    pub operation: &'static str,
    /// Key of the result field inside the `data` payload.
    pub result_key: &'static str,
    /// The query text itself, never built dynamically.
    pub document: &'static str,
}

pub const GET_NODE: QueryDocument = QueryDocument {
    operation: "GetNode",
    result_key: "getNode",
    document: r#"query GetNode($network: String!, $node_id: String!){
  getNode(network: $network, node_id: $node_id) {
    version
    node_id
    alias
    color
    network
    address {
      type
      host
      port
    }
    os_info {
      os
      version
      architecture
    }
    node_info {
      implementation
      version
    }
    timezone
    last_update
  }
}"#,
};

pub const GET_NODES: QueryDocument = QueryDocument {
    operation: "GetNodes",
    result_key: "getNodes",
    document: r#"query GetNodes($network: String!){
  getNodes(network: $network) {
    version
    node_id
    alias
    color
    network
    address {
      type
      host
      port
    }
    os_info {
      os
      version
      architecture
    }
    node_info {
      implementation
      version
    }
    timezone
    last_update
  }
}"#,
};

pub const GET_METRIC_ONE: QueryDocument = QueryDocument {
    operation: "MetricOne",
    result_key: "metricOne",
    document: r#"query MetricOne($node_id: String!, $first: Int!, $last: Int!){
  metricOne(node_id: $node_id, first: $first, last: $last) {
    page_info {
      start
      end
      hash_next_page
    }
    up_time {
      event
      channels {
        tot_channels
        summary {
          node_id
          alias
          color
          channel_id
          state
        }
      }
      forwards {
        completed
        failed
      }
      timestamp
      fee {
        base
        per_msat
      }
      limits {
        min
        max
      }
    }
  }
}"#,
};
