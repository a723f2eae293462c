use mu_events_api::Application;
use mu_events_domain::GameEvent;
use mu_events_infra::{Config, MuEventsContext, StaticTimeSys};
use mu_events_sdk::MuEventsSDK;
use std::sync::Arc;

pub const HAPPENING_NOW: &str = "Happening now";

pub struct TestApp {
    pub config: Config,
}

// Launch the application as a background task with a frozen clock
pub async fn spawn_app(now_ts: i64, events: Vec<GameEvent>) -> (TestApp, MuEventsSDK, String) {
    let mut ctx = MuEventsContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.config.timezone = chrono_tz::UTC;
    ctx.config.happening_now_text = HAPPENING_NOW.into();
    ctx.sys = Arc::new(StaticTimeSys {
        timestamp_millis: now_ts,
    });
    ctx.insert_events(&events).await;

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { config };
    let sdk = MuEventsSDK::new(address.clone());
    (app, sdk, address)
}
