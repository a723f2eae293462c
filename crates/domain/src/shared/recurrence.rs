use chrono::{DateTime, Utc};
use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InvalidRecurrenceError {
    #[error("Recurring interval must be longer than zero minutes")]
    ZeroInterval,
    #[error("Invalid time of day: {0}")]
    InvalidTimeOfDay(String),
    #[error("Invalid weekday: {0}, expected a value between 0 (sunday) and 6 (saturday)")]
    InvalidWeekday(u8),
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Unrecognized schedule type")]
    UnknownScheduleType,
}

/// A wall clock time within a day, serialized as `HH:MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hours: u32,
    minutes: u32,
}

impl TimeOfDay {
    pub fn new(hours: u32, minutes: u32) -> Result<Self, InvalidRecurrenceError> {
        if hours > 23 || minutes > 59 {
            return Err(InvalidRecurrenceError::InvalidTimeOfDay(format!(
                "{}:{}",
                hours, minutes
            )));
        }
        Ok(Self { hours, minutes })
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

fn parse_time_component(component: &str) -> Option<u32> {
    if component.is_empty() || component.len() > 2 {
        return None;
    }
    if !component.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    component.parse::<u32>().ok()
}

impl FromStr for TimeOfDay {
    type Err = InvalidRecurrenceError;

    fn from_str(time: &str) -> Result<Self, Self::Err> {
        let e = || InvalidRecurrenceError::InvalidTimeOfDay(time.to_string());
        let (hours, minutes) = time.trim().split_once(':').ok_or_else(e)?;
        let hours = parse_time_component(hours).ok_or_else(e)?;
        let minutes = parse_time_component(minutes).ok_or_else(e)?;
        Self::new(hours, minutes).map_err(|_| e())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TimeOfDayVisitor;

        impl<'de> Visitor<'de> for TimeOfDayVisitor {
            type Value = TimeOfDay;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A time of day in the format HH:MM")
            }

            fn visit_str<E>(self, value: &str) -> Result<TimeOfDay, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<TimeOfDay>()
                    .map_err(|_| E::custom(format!("Malformed time of day: {}", value)))
            }
        }

        deserializer.deserialize_str(TimeOfDayVisitor)
    }
}

/// Describes how often a game event happens.
///
/// Fields that a hand written events file may leave out are optional here,
/// the resolver treats a missing field as a degenerate descriptor and falls
/// back instead of failing. An unrecognized `scheduleType` deserializes into
/// `Unknown` for the same reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scheduleType", rename_all = "camelCase")]
pub enum RecurrenceDescriptor {
    /// Repeats every `interval_hours` + `interval_minutes`, counted from
    /// local midnight
    #[serde(rename_all = "camelCase")]
    Recurring {
        #[serde(default)]
        interval_hours: u32,
        #[serde(default)]
        interval_minutes: u32,
    },
    /// Fires at each of the given times every day
    #[serde(rename_all = "camelCase")]
    Daily {
        #[serde(default)]
        daily_times: Vec<TimeOfDay>,
    },
    /// Fires once a week, `weekly_day` 0 is sunday
    #[serde(rename_all = "camelCase")]
    Weekly {
        weekly_day: Option<u8>,
        weekly_time: Option<TimeOfDay>,
    },
    /// Fires exactly once
    #[serde(rename_all = "camelCase")]
    Specific {
        specific_instant: Option<DateTime<Utc>>,
    },
    #[serde(other)]
    Unknown,
}

impl RecurrenceDescriptor {
    /// Checks the descriptor for misconfigurations. This is meant to be called
    /// once when the descriptor is loaded, resolving never fails.
    pub fn validate(&self) -> Result<(), InvalidRecurrenceError> {
        match self {
            Self::Recurring {
                interval_hours,
                interval_minutes,
            } => {
                if *interval_hours == 0 && *interval_minutes == 0 {
                    return Err(InvalidRecurrenceError::ZeroInterval);
                }
                Ok(())
            }
            // An empty list is allowed and resolves with the fallback
            Self::Daily { .. } => Ok(()),
            Self::Weekly {
                weekly_day,
                weekly_time,
            } => {
                let weekly_day =
                    weekly_day.ok_or(InvalidRecurrenceError::MissingField("weeklyDay"))?;
                if weekly_day > 6 {
                    return Err(InvalidRecurrenceError::InvalidWeekday(weekly_day));
                }
                if weekly_time.is_none() {
                    return Err(InvalidRecurrenceError::MissingField("weeklyTime"));
                }
                Ok(())
            }
            Self::Specific { specific_instant } => match specific_instant {
                Some(_) => Ok(()),
                None => Err(InvalidRecurrenceError::MissingField("specificInstant")),
            },
            Self::Unknown => Err(InvalidRecurrenceError::UnknownScheduleType),
        }
    }

    pub fn schedule_type(&self) -> ScheduleType {
        match self {
            Self::Recurring { .. } => ScheduleType::Recurring,
            Self::Daily { .. } => ScheduleType::Daily,
            Self::Weekly { .. } => ScheduleType::Weekly,
            Self::Specific { .. } => ScheduleType::Specific,
            Self::Unknown => ScheduleType::Unknown,
        }
    }

    /// Whether resolving again from an occurrence yields a later occurrence
    pub fn is_repeating(&self) -> bool {
        match self {
            Self::Recurring {
                interval_hours,
                interval_minutes,
            } => *interval_hours > 0 || *interval_minutes > 0,
            Self::Daily { daily_times } => !daily_times.is_empty(),
            Self::Weekly { .. } => self.validate().is_ok(),
            Self::Specific { .. } | Self::Unknown => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScheduleType {
    Recurring,
    Daily,
    Weekly,
    Specific,
    Unknown,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_valid_time_of_day_str_correctly() {
        assert_eq!(
            "08:00".parse::<TimeOfDay>().unwrap(),
            TimeOfDay::new(8, 0).unwrap()
        );
        assert_eq!(
            "8:05".parse::<TimeOfDay>().unwrap(),
            TimeOfDay::new(8, 5).unwrap()
        );
        assert_eq!(
            "23:59".parse::<TimeOfDay>().unwrap(),
            TimeOfDay::new(23, 59).unwrap()
        );
        assert_eq!(
            "00:00".parse::<TimeOfDay>().unwrap(),
            TimeOfDay::new(0, 0).unwrap()
        );
    }

    #[test]
    fn parses_invalid_time_of_day_str_correctly() {
        assert!("".parse::<TimeOfDay>().is_err());
        assert!("8".parse::<TimeOfDay>().is_err());
        assert!("24:00".parse::<TimeOfDay>().is_err());
        assert!("12:60".parse::<TimeOfDay>().is_err());
        assert!("-1:00".parse::<TimeOfDay>().is_err());
        assert!("+1:00".parse::<TimeOfDay>().is_err());
        assert!("012:00".parse::<TimeOfDay>().is_err());
        assert!("12:".parse::<TimeOfDay>().is_err());
        assert!("ab:cd".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn serializes_time_of_day() {
        assert_eq!(TimeOfDay::new(8, 0).unwrap().to_string(), "08:00");
        assert_eq!(TimeOfDay::new(20, 30).unwrap().to_string(), "20:30");
    }

    #[test]
    fn deserializes_descriptors() {
        let recurring: RecurrenceDescriptor = serde_json::from_str(
            r#"{ "scheduleType": "recurring", "intervalHours": 2, "intervalMinutes": 30 }"#,
        )
        .unwrap();
        assert_eq!(
            recurring,
            RecurrenceDescriptor::Recurring {
                interval_hours: 2,
                interval_minutes: 30
            }
        );

        let daily: RecurrenceDescriptor = serde_json::from_str(
            r#"{ "scheduleType": "daily", "dailyTimes": ["08:00", "20:00"] }"#,
        )
        .unwrap();
        assert_eq!(
            daily,
            RecurrenceDescriptor::Daily {
                daily_times: vec![
                    TimeOfDay::new(8, 0).unwrap(),
                    TimeOfDay::new(20, 0).unwrap()
                ]
            }
        );

        let weekly: RecurrenceDescriptor =
            serde_json::from_str(r#"{ "scheduleType": "weekly", "weeklyDay": 6 }"#).unwrap();
        assert_eq!(
            weekly,
            RecurrenceDescriptor::Weekly {
                weekly_day: Some(6),
                weekly_time: None
            }
        );

        let specific: RecurrenceDescriptor = serde_json::from_str(
            r#"{ "scheduleType": "specific", "specificInstant": "2021-03-01T20:00:00Z" }"#,
        )
        .unwrap();
        assert_eq!(specific.schedule_type(), ScheduleType::Specific);
    }

    #[test]
    fn unrecognized_schedule_type_is_unknown() {
        let descriptor: RecurrenceDescriptor =
            serde_json::from_str(r#"{ "scheduleType": "monthly" }"#).unwrap();
        assert_eq!(descriptor, RecurrenceDescriptor::Unknown);
    }

    #[test]
    fn validates_descriptors() {
        let zero = RecurrenceDescriptor::Recurring {
            interval_hours: 0,
            interval_minutes: 0,
        };
        assert_eq!(zero.validate(), Err(InvalidRecurrenceError::ZeroInterval));
        assert!(!zero.is_repeating());

        let missing_time = RecurrenceDescriptor::Weekly {
            weekly_day: Some(3),
            weekly_time: None,
        };
        assert_eq!(
            missing_time.validate(),
            Err(InvalidRecurrenceError::MissingField("weeklyTime"))
        );

        let bad_day = RecurrenceDescriptor::Weekly {
            weekly_day: Some(7),
            weekly_time: Some(TimeOfDay::new(20, 0).unwrap()),
        };
        assert_eq!(
            bad_day.validate(),
            Err(InvalidRecurrenceError::InvalidWeekday(7))
        );

        let empty_daily = RecurrenceDescriptor::Daily {
            daily_times: vec![],
        };
        assert!(empty_daily.validate().is_ok());
        assert!(!empty_daily.is_repeating());

        assert!(RecurrenceDescriptor::Unknown.validate().is_err());
    }
}
