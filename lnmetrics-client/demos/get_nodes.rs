use anyhow::Result;
use lnmetrics_client::LNMetricsClient;

#[tokio::main]
async fn main() -> Result<()> {
    let client = LNMetricsClient::builder()
        .service_url("https://api.lnmetrics.info/query")
        .with_user_agent("lnmetrics-client demo")
        .build()?;

    let nodes = client.get_nodes("bitcoin").await?;
    println!("The server tracks {} nodes", nodes.len());

    for node in nodes {
        println!(
            "{}\t{}",
            node.node_id.as_deref().unwrap_or("<unknown>"),
            node.alias.as_deref().unwrap_or("<no alias>")
        );
    }

    Ok(())
}
