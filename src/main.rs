use anyhow::Context;
use restmapper::configuration::get_configuration;
use restmapper::demo::run_demo;
use restmapper::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to read configuration.")?;
    let subscriber = get_subscriber(
        configuration.application.name.clone(),
        configuration.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let report = run_demo(configuration).await?;
    tracing::info!(
        post_id = report.post.id,
        entity_status = %report.entity_status,
        "Demo completed"
    );
    Ok(())
}
