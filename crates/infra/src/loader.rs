use anyhow::Context;
use mu_events_domain::{GameEvent, RecurrenceDescriptor, ScheduleLabels, ID};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

/// Fields of an events file entry besides its recurrence descriptor,
/// which is stored flat on the same object.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventEntry {
    id: Option<String>,
    name: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default = "enabled_by_default")]
    enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

/// Reads the events file at `path`
pub fn load_events_file(path: &Path, labels: &ScheduleLabels) -> anyhow::Result<Vec<GameEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Unable to read events file: {}", path.display()))?;
    let events = parse_events(&content, labels)
        .with_context(|| format!("Malformed events file: {}", path.display()))?;
    info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Parses a JSON array of events.
///
/// Every entry is checked here, once. Entries without a name are skipped. A
/// recurrence descriptor that can not be parsed is replaced by
/// `RecurrenceDescriptor::Unknown`, and one that parses but is invalid is
/// kept as is. Both resolve with the fallback delay.
pub fn parse_events(json: &str, labels: &ScheduleLabels) -> anyhow::Result<Vec<GameEvent>> {
    let entries: Vec<Value> =
        serde_json::from_str(json).context("Expected a JSON array of events")?;

    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| parse_entry(index, entry, labels))
        .collect())
}

fn parse_entry(index: usize, entry: Value, labels: &ScheduleLabels) -> Option<GameEvent> {
    let fields = match EventEntry::deserialize(&entry) {
        Ok(fields) => fields,
        Err(e) => {
            warn!("Skipping event entry #{}: {}", index, e);
            return None;
        }
    };
    let name = match fields.name {
        Some(name) if !name.trim().is_empty() => name,
        _ => {
            warn!("Skipping event entry #{} as it has no name", index);
            return None;
        }
    };

    let recurrence = match RecurrenceDescriptor::deserialize(&entry) {
        Ok(recurrence) => {
            if let Err(e) = recurrence.validate() {
                warn!(
                    "Event: {} has an invalid schedule and will fall back to hourly countdowns: {}",
                    name, e
                );
            }
            recurrence
        }
        Err(e) => {
            warn!(
                "Event: {} has a malformed schedule and will fall back to hourly countdowns: {}",
                name, e
            );
            RecurrenceDescriptor::Unknown
        }
    };

    let mut event = GameEvent::new(name, recurrence, labels);
    event.description = fields.description;
    event.enabled = fields.enabled;
    if let Some(id) = fields.id {
        match id.parse::<ID>() {
            Ok(id) => event.id = id,
            Err(e) => warn!("{}, generated id: {} for event: {}", e, event.id, event.name),
        }
    }

    Some(event)
}

#[cfg(test)]
mod test {
    use super::*;
    use mu_events_domain::{ScheduleType, TimeOfDay};

    const EVENTS: &str = r#"[
        {
            "id": "0b7c6a43-0a8e-4f8e-9d7b-3c1f5e2a9b10",
            "name": "Blood Castle",
            "description": "Rescue the archangel's weapon",
            "scheduleType": "recurring",
            "intervalHours": 2,
            "intervalMinutes": 0
        },
        {
            "name": "Chaos Castle",
            "scheduleType": "daily",
            "dailyTimes": ["08:00", "20:00"]
        },
        {
            "name": "Castle Siege",
            "scheduleType": "weekly",
            "weeklyDay": 6,
            "weeklyTime": "20:00",
            "enabled": false
        },
        {
            "name": "Golden Invasion",
            "scheduleType": "daily",
            "dailyTimes": ["25:00"]
        },
        {
            "name": "Kanturu",
            "scheduleType": "recurring",
            "intervalHours": 0,
            "intervalMinutes": 0
        },
        {
            "name": "Summer Festival",
            "scheduleType": "seasonal"
        },
        {
            "description": "No name"
        },
        {
            "id": "not-a-uuid",
            "name": "Kalima",
            "scheduleType": "recurring",
            "intervalHours": 1
        },
        {
            "id": 5,
            "name": "Illusion Temple",
            "scheduleType": "recurring",
            "intervalMinutes": 30
        }
    ]"#;

    #[test]
    fn it_parses_event_entries() {
        let labels = ScheduleLabels::new();
        let events = parse_events(EVENTS, &labels).unwrap();
        // Entries without a name or with a non string id are skipped
        assert_eq!(events.len(), 7);
        assert!(events.iter().all(|e| e.name != "Illusion Temple"));

        let blood_castle = &events[0];
        assert_eq!(
            blood_castle.id.to_string(),
            "0b7c6a43-0a8e-4f8e-9d7b-3c1f5e2a9b10"
        );
        assert_eq!(blood_castle.description, "Rescue the archangel's weapon");
        assert_eq!(
            blood_castle.recurrence,
            RecurrenceDescriptor::Recurring {
                interval_hours: 2,
                interval_minutes: 0
            }
        );
        assert!(blood_castle.enabled);

        assert_eq!(
            events[1].recurrence,
            RecurrenceDescriptor::Daily {
                daily_times: vec![
                    TimeOfDay::new(8, 0).unwrap(),
                    TimeOfDay::new(20, 0).unwrap()
                ]
            }
        );
        assert_eq!(events[1].schedule_label.as_str(), "events.schedule.daily");
        assert!(!events[2].enabled);
    }

    #[test]
    fn it_generates_ids_for_malformed_ones() {
        let labels = ScheduleLabels::new();
        let events = parse_events(EVENTS, &labels).unwrap();

        let kalima = &events[6];
        assert_eq!(kalima.name, "Kalima");
        assert_ne!(kalima.id.to_string(), "not-a-uuid");
        assert_eq!(kalima.id.to_string().parse::<ID>().unwrap(), kalima.id);
        assert_eq!(
            kalima.recurrence,
            RecurrenceDescriptor::Recurring {
                interval_hours: 1,
                interval_minutes: 0
            }
        );
        assert!(kalima.enabled);
    }

    #[test]
    fn it_degrades_bad_schedules() {
        let labels = ScheduleLabels::new();
        let events = parse_events(EVENTS, &labels).unwrap();

        // Malformed time of day
        assert_eq!(events[3].recurrence, RecurrenceDescriptor::Unknown);
        assert_eq!(events[3].schedule_type(), ScheduleType::Unknown);
        // Zero interval is kept but not valid
        assert!(events[4].recurrence.validate().is_err());
        // Unrecognized schedule type
        assert_eq!(events[5].recurrence, RecurrenceDescriptor::Unknown);
        assert_eq!(events[5].schedule_label.as_str(), "events.schedule.unknown");
    }

    #[test]
    fn it_rejects_non_array_files() {
        let labels = ScheduleLabels::new();
        assert!(parse_events(r#"{ "name": "Blood Castle" }"#, &labels).is_err());
        assert!(parse_events("not json", &labels).is_err());
        assert!(parse_events("[]", &labels).unwrap().is_empty());
    }

    #[test]
    fn it_loads_the_shipped_events_file() {
        let labels = ScheduleLabels::new();
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/events.json");
        let events = load_events_file(&path, &labels).unwrap();
        assert_eq!(events.len(), 6);
        assert!(events.iter().all(|e| e.recurrence.validate().is_ok()));
    }

    #[test]
    fn it_fails_on_missing_file() {
        let labels = ScheduleLabels::new();
        assert!(load_events_file(Path::new("does/not/exist.json"), &labels).is_err());
    }
}
