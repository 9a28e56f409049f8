use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use lnmetrics_client::LNMetricsClient;

#[tokio::main]
async fn main() -> Result<()> {
    let node_id = std::env::args()
        .nth(1)
        .expect("usage: metric_one <node_id>");

    let client = LNMetricsClient::builder()
        .service_url("https://api.lnmetrics.info/query")
        .with_timeout(Duration::from_secs(30))
        .build()?;

    let node = client.get_node("bitcoin", &node_id).await?;
    println!(
        "Metrics for {} ({})",
        node.alias.as_deref().unwrap_or("<no alias>"),
        node_id
    );

    // last six hours of up-time events
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64;
    let page = client
        .get_metric_one("bitcoin", &node_id, now - 6 * 3600, now)
        .await?;

    println!(
        "page [{:?} - {:?}], more pages: {:?}",
        page.page_info.start, page.page_info.end, page.page_info.hash_next_page
    );
    for event in page.up_time {
        println!(
            "{:?}\t{}\tforwards ok/failed: {:?}/{:?}",
            event.timestamp,
            event.event.as_deref().unwrap_or("-"),
            event.forwards.as_ref().and_then(|f| f.completed),
            event.forwards.as_ref().and_then(|f| f.failed),
        );
    }

    Ok(())
}
