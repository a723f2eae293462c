use crate::dtos::EventCountdownDTO;
use mu_events_domain::ID;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCountdownResponse {
    pub event: EventCountdownDTO,
}

impl EventCountdownResponse {
    pub fn new(event: EventCountdownDTO) -> Self {
        Self { event }
    }
}

pub mod get_events {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub events: Vec<EventCountdownDTO>,
    }

    impl APIResponse {
        pub fn new(events: Vec<EventCountdownDTO>) -> Self {
            Self { events }
        }
    }
}

pub mod get_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = EventCountdownResponse;
}

pub mod get_event_occurrences {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    #[derive(Serialize, Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub count: Option<usize>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub event: EventCountdownDTO,
        pub occurrences: Vec<i64>,
    }

    impl APIResponse {
        pub fn new(event: EventCountdownDTO, occurrences: Vec<i64>) -> Self {
            Self { event, occurrences }
        }
    }
}
