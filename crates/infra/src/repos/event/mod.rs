mod inmemory;

pub use inmemory::InMemoryEventRepo;
use mu_events_domain::{GameEvent, ID};

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, e: &GameEvent) -> anyhow::Result<()>;
    async fn find(&self, event_id: &ID) -> Option<GameEvent>;
    async fn find_enabled(&self) -> Vec<GameEvent>;
}
