mod config;
mod loader;
mod repos;
mod system;

pub use config::Config;
pub use loader::{load_events_file, parse_events};
pub use repos::{IEventRepo, InMemoryEventRepo, Repos};
use mu_events_domain::{GameEvent, ScheduleLabels};
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::warn;

#[derive(Clone)]
pub struct MuEventsContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub labels: ScheduleLabels,
}

impl MuEventsContext {
    fn create(config: Config) -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config,
            sys: Arc::new(RealSys {}),
            labels: ScheduleLabels::new(),
        }
    }

    /// Context without any events, configured from the environment
    pub fn create_inmemory() -> Self {
        Self::create(Config::new())
    }

    /// Stores the given events, skipping those whose id is already taken
    pub async fn insert_events(&self, events: &[GameEvent]) {
        for event in events {
            if let Err(e) = self.repos.event_repo.insert(event).await {
                warn!("Skipping event: {}. Error: {}", event.name, e);
            }
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<MuEventsContext> {
    let context = MuEventsContext::create(Config::new());

    if let Some(events_file) = &context.config.events_file {
        let events = load_events_file(events_file, &context.labels)?;
        context.insert_events(&events).await;
    }

    Ok(context)
}
