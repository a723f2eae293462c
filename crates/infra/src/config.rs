use chrono_tz::Tz;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// JSON file with the events shown on the event board. When it is not set
    /// the board starts out empty.
    pub events_file: Option<PathBuf>,
    /// Timezone the game server runs in. Daily and weekly schedules and the
    /// midnight anchor of recurring schedules are all local to this timezone.
    pub timezone: Tz,
    /// Text shown instead of a countdown when an event is happening
    pub happening_now_text: String,
    /// How often the countdown ticker re-resolves events
    pub countdown_tick_interval_millis: u64,
}

const DEFAULT_PORT: usize = 5000;
const DEFAULT_TIMEZONE: Tz = chrono_tz::UTC;
const DEFAULT_HAPPENING_NOW_TEXT: &str = "Happening now";

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from the given key lookup, usually the environment
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let port = match lookup("PORT") {
            Some(port) => match port.parse::<usize>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given PORT: {} is not valid, falling back to the default port: {}.",
                        port, DEFAULT_PORT
                    );
                    DEFAULT_PORT
                }
            },
            None => DEFAULT_PORT,
        };

        let events_file = match lookup("EVENTS_FILE") {
            Some(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
            _ => {
                info!("Did not find EVENTS_FILE environment variable. Starting with no events.");
                None
            }
        };

        let timezone = match lookup("EVENTS_TIMEZONE") {
            Some(tz) => match tz.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    warn!(
                        "The given EVENTS_TIMEZONE: {} is not a valid IANA timezone, falling back to {}.",
                        tz, DEFAULT_TIMEZONE
                    );
                    DEFAULT_TIMEZONE
                }
            },
            None => DEFAULT_TIMEZONE,
        };

        let happening_now_text =
            lookup("HAPPENING_NOW_TEXT").unwrap_or_else(|| DEFAULT_HAPPENING_NOW_TEXT.into());

        Self {
            port,
            events_file,
            timezone,
            happening_now_text,
            countdown_tick_interval_millis: 1000,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn it_uses_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.port, 5000);
        assert!(config.events_file.is_none());
        assert_eq!(config.timezone, chrono_tz::UTC);
        assert_eq!(config.happening_now_text, "Happening now");
        assert_eq!(config.countdown_tick_interval_millis, 1000);
    }

    #[test]
    fn it_reads_values() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("EVENTS_FILE", "config/events.json"),
            ("EVENTS_TIMEZONE", "America/Sao_Paulo"),
            ("HAPPENING_NOW_TEXT", "Em andamento"),
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.events_file,
            Some(PathBuf::from("config/events.json"))
        );
        assert_eq!(config.timezone, chrono_tz::America::Sao_Paulo);
        assert_eq!(config.happening_now_text, "Em andamento");
    }

    #[test]
    fn it_falls_back_on_invalid_values() {
        let config = config_from(&[("PORT", "eighty"), ("EVENTS_TIMEZONE", "Lorencia/Noria")]);
        assert_eq!(config.port, 5000);
        assert_eq!(config.timezone, chrono_tz::UTC);
    }
}
