//! Activity events
//!
//! Timestamped records of what happened on the auth card, shown in the
//! activity panel next to the phone frame.

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// Accepted keyboard or pointer input.
    Input,
    /// Input filtered out (non-digit PIN characters).
    Rejected,
    /// Fade transition progress.
    Transition,
    /// Role menu activity.
    Selection,
    /// Card mounted or torn down.
    Lifecycle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn input(msg: impl Into<String>) -> Self {
        Self::new(msg.into(), EventType::Input, LogLevel::Debug)
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::new(msg.into(), EventType::Rejected, LogLevel::Debug)
    }

    pub fn transition(msg: impl Into<String>) -> Self {
        Self::new(msg.into(), EventType::Transition, LogLevel::Info)
    }

    pub fn selection(msg: impl Into<String>) -> Self {
        Self::new(msg.into(), EventType::Selection, LogLevel::Info)
    }

    pub fn lifecycle(msg: impl Into<String>) -> Self {
        Self::new(msg.into(), EventType::Lifecycle, LogLevel::Info)
    }

    pub fn should_display(&self) -> bool {
        if self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
