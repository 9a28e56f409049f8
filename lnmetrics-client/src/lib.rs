//! LNMetrics-Client
//!
//! LNMetrics-Client -- client for the Open LN metrics services

mod client;
pub use client::{LNMetricsClient, LNMetricsClientBuilder};

pub mod errors;

mod models;
pub use models::{
    ChannelLimits, ChannelSummary, ChannelsInfo, FeeInfo, ForwardsInfo, MetricPage, NodeAddress,
    NodeImplInfo, NodeRecord, OsInfo, PageInfo, UpTimeEvent,
};

mod queries;
pub use queries::{QueryDocument, GET_METRIC_ONE, GET_NODE, GET_NODES};
