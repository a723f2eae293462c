/// Time left until an occurrence, truncated to whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// The occurrence is now or has passed
    HappeningNow,
    /// Hours are not wrapped into days
    Remaining {
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
}

impl Countdown {
    pub fn between(occurrence_ts: i64, now_ts: i64) -> Self {
        if occurrence_ts <= now_ts {
            return Self::HappeningNow;
        }
        let total_seconds = (occurrence_ts - now_ts) / 1000;
        Self::Remaining {
            hours: total_seconds / 3600,
            minutes: (total_seconds / 60) % 60,
            seconds: total_seconds % 60,
        }
    }

    pub fn is_happening_now(&self) -> bool {
        matches!(self, Self::HappeningNow)
    }

    pub fn seconds_remaining(&self) -> i64 {
        match self {
            Self::HappeningNow => 0,
            Self::Remaining {
                hours,
                minutes,
                seconds,
            } => hours * 3600 + minutes * 60 + seconds,
        }
    }

    /// Renders `HH:MM:SS`, or `happening_now` once the occurrence is reached
    pub fn format(&self, happening_now: &str) -> String {
        match self {
            Self::HappeningNow => happening_now.to_string(),
            Self::Remaining {
                hours,
                minutes,
                seconds,
            } => format!("{:02}:{:02}:{:02}", hours, minutes, seconds),
        }
    }
}

pub fn format_countdown(occurrence_ts: i64, now_ts: i64, happening_now: &str) -> String {
    Countdown::between(occurrence_ts, now_ts).format(happening_now)
}
