//! Transient notices shown over the form

use std::time::{Duration, Instant};

/// A short message with a dismiss label that disappears on its own
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub action_label: String,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, action_label: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            action_label: action_label.into(),
            shown_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_toast_is_not_expired() {
        let toast = Toast::new("JSON copied to clipboard!", "Close", Duration::from_secs(3));
        assert!(!toast.is_expired());
        assert_eq!(toast.action_label, "Close");
    }

    #[test]
    fn test_toast_expires_after_duration() {
        let mut toast = Toast::new("msg", "Close", Duration::from_millis(100));
        toast.shown_at = Instant::now() - Duration::from_millis(200);
        assert!(toast.is_expired());
    }

    #[test]
    fn test_zero_duration_expires_immediately() {
        let toast = Toast::new("msg", "Close", Duration::ZERO);
        assert!(toast.is_expired());
    }
}
