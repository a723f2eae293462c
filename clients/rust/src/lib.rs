mod base;
mod event;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use event::EventClient;
pub use event::GetEventOccurrencesInput;
use status::StatusClient;
use std::sync::Arc;

pub use mu_events_api_structs::dtos::EventCountdownDTO as EventCountdown;
pub use mu_events_domain::{RecurrenceDescriptor, ScheduleType, TimeOfDay, ID};

/// MU Events Server SDK
///
/// The SDK contains methods for reading the event board of a MU Events
/// server.
#[derive(Clone)]
pub struct MuEventsSDK {
    pub event: EventClient,
    pub status: StatusClient,
}

impl MuEventsSDK {
    /// `address` is the base url of the api, e.g. `http://localhost:5000/api/v1`
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let event = EventClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { event, status }
    }
}
