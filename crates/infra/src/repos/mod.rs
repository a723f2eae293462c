mod event;
mod shared;

pub use event::{IEventRepo, InMemoryEventRepo};
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub event_repo: Arc<dyn IEventRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            event_repo: Arc::new(InMemoryEventRepo::new()),
        }
    }
}
