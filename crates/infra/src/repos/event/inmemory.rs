use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use mu_events_domain::{GameEvent, ID};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<GameEvent>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryEventRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, e: &GameEvent) -> anyhow::Result<()> {
        if !insert(e, &self.events) {
            return Err(anyhow::anyhow!("Event with id: {} already exists", e.id));
        }
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<GameEvent> {
        find(event_id, &self.events)
    }

    async fn find_enabled(&self) -> Vec<GameEvent> {
        find_by(&self.events, |event| event.enabled)
    }
}
