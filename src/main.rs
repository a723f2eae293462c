mod telemetry;

use mu_events_api::Application;
use mu_events_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("mu_events_server".into(), "info".into());
    init_subscriber(subscriber)?;

    let context = setup_context().await?;

    let app = Application::new(context).await?;
    info!("Event board listening on port {}", app.port());
    app.start().await?;
    Ok(())
}
