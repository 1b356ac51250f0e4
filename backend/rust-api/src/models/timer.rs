use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Countdown events published by a running quiz attempt.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TimerEvent {
    TimerTick(TimerTick),
    TimeExpired(TimeExpired),
    TimerStopped(TimerStopped),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimerTick {
    pub attempt_id: String,
    pub remaining_seconds: u32,
    pub elapsed_seconds: u32,
    pub total_seconds: u32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeExpired {
    pub attempt_id: String,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

/// Published when the countdown is cancelled by a submit or an abandon.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimerStopped {
    pub attempt_id: String,
    pub remaining_seconds: u32,
    pub timestamp: DateTime<Utc>,
}

impl TimerEvent {
    pub fn to_sse_data(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn event_name(&self) -> &'static str {
        match self {
            TimerEvent::TimerTick(_) => "timer-tick",
            TimerEvent::TimeExpired(_) => "time-expired",
            TimerEvent::TimerStopped(_) => "timer-stopped",
        }
    }

    /// Whether the stream ends after this event.
    pub fn is_final(&self) -> bool {
        !matches!(self, TimerEvent::TimerTick(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_event_carries_type_tag() {
        let event = TimerEvent::TimerTick(TimerTick {
            attempt_id: "a1".to_string(),
            remaining_seconds: 59,
            elapsed_seconds: 1,
            total_seconds: 60,
            timestamp: Utc::now(),
        });

        let json: serde_json::Value = serde_json::from_str(&event.to_sse_data()).unwrap();
        assert_eq!(json["type"], "timer-tick");
        assert_eq!(json["remainingSeconds"], 59);
        assert_eq!(event.event_name(), "timer-tick");
        assert!(!event.is_final());
    }

    #[test]
    fn stop_event_ends_the_stream() {
        let event = TimerEvent::TimerStopped(TimerStopped {
            attempt_id: "a1".to_string(),
            remaining_seconds: 12,
            timestamp: Utc::now(),
        });
        assert_eq!(event.event_name(), "timer-stopped");
        assert!(event.is_final());
    }
}
