//! Transient alerts
//!
//! A single-slot alert with a dismissal deadline. Showing a new alert
//! replaces the current one and restarts the deadline, so an earlier alert
//! can never hide a later one.

use std::time::{Duration, Instant};

use crate::error::ValidationError;
use crate::models::Tone;

/// Default time an alert stays visible
pub const DEFAULT_ALERT_DURATION: Duration = Duration::from_secs(4);

/// An alert on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub tone: Tone,
    /// When the alert was shown
    pub shown_at: Instant,
    /// How long it stays visible
    pub duration: Duration,
}

impl Notification {
    /// Whether the alert should be hidden at `now`
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }

    /// Remaining time as a fraction (0.0 to 1.0)
    pub fn remaining_fraction(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.shown_at).as_secs_f64();
        (1.0 - elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}

/// Holds at most one alert
#[derive(Debug, Clone)]
pub struct AlertChannel {
    current: Option<Notification>,
    duration: Duration,
}

impl Default for AlertChannel {
    fn default() -> Self {
        Self::new(DEFAULT_ALERT_DURATION)
    }
}

impl AlertChannel {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    /// Show an alert now
    pub fn show(&mut self, message: impl Into<String>, tone: Tone) {
        self.show_at(message, tone, Instant::now());
    }

    /// Show an alert as of `now`, replacing any current one
    pub fn show_at(&mut self, message: impl Into<String>, tone: Tone, now: Instant) {
        self.current = Some(Notification {
            message: message.into(),
            tone,
            shown_at: now,
            duration: self.duration,
        });
    }

    /// Show a validation failure with its tone
    pub fn show_validation(&mut self, error: &ValidationError) {
        self.show(error.to_string(), error.tone());
    }

    /// Hide the alert once its deadline has passed
    ///
    /// Returns true when an alert was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(n) if n.is_expired(now) => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Hide the alert immediately
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}
