//! Response shapes reported by the LN metrics server.
//!
//! The server owns the schema; these structs only mirror the fields the
//! query catalog selects, and every field is optional or defaulted so a
//! partially populated record still decodes.

use serde::{Deserialize, Serialize};

/// A Lightning Network node known to the metrics server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeRecord {
    pub version: Option<i64>,
    pub node_id: Option<String>,
    pub alias: Option<String>,
    pub color: Option<String>,
    pub network: Option<String>,
    pub address: Vec<NodeAddress>,
    pub os_info: Option<OsInfo>,
    pub node_info: Option<NodeImplInfo>,
    pub timezone: Option<String>,
    pub last_update: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeAddress {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OsInfo {
    pub os: Option<String>,
    pub version: Option<String>,
    pub architecture: Option<String>,
}

/// Which node implementation is reporting, e.g. core-lightning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeImplInfo {
    pub implementation: Option<String>,
    pub version: Option<String>,
}

/// One page of the `metricOne` time series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricPage {
    pub page_info: PageInfo,
    pub up_time: Vec<UpTimeEvent>,
}

/// Pagination cursors for the metric iteration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub hash_next_page: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpTimeEvent {
    pub event: Option<String>,
    pub channels: Option<ChannelsInfo>,
    pub forwards: Option<ForwardsInfo>,
    pub timestamp: Option<i64>,
    pub fee: Option<FeeInfo>,
    pub limits: Option<ChannelLimits>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelsInfo {
    pub tot_channels: Option<i64>,
    pub summary: Vec<ChannelSummary>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelSummary {
    pub node_id: Option<String>,
    pub alias: Option<String>,
    pub color: Option<String>,
    pub channel_id: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForwardsInfo {
    pub completed: Option<i64>,
    pub failed: Option<i64>,
}

/// Fee settings reported with an up-time event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeInfo {
    pub base: Option<i64>,
    pub per_msat: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelLimits {
    pub min: Option<i64>,
    pub max: Option<i64>,
}
