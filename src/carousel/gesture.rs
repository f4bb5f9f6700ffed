use crate::foundation::core::{Millis, SWIPE_DEBOUNCE_INTERVAL};

/// Direction of an already-classified swipe gesture, as reported by the
/// host's recognizer. A left swipe advances to the next slide, a right swipe
/// returns to the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SwipeDirection {
    /// Finger moved left; content advances forward.
    Left,
    /// Finger moved right; content moves backward.
    Right,
}

/// Suppresses gesture bursts: recognizers can fire several events for one
/// physical swipe, and each accepted event becomes a navigation command.
#[derive(Clone, Copy, Debug)]
pub struct GestureDebouncer {
    min_interval: Millis,
    last_accepted: Option<Millis>,
}

impl Default for GestureDebouncer {
    fn default() -> Self {
        Self::new(SWIPE_DEBOUNCE_INTERVAL)
    }
}

impl GestureDebouncer {
    /// Debouncer accepting at most one event per `min_interval`.
    pub fn new(min_interval: Millis) -> Self {
        Self {
            min_interval,
            last_accepted: None,
        }
    }

    /// Decide whether the event at `timestamp` is accepted. Events within
    /// `min_interval` of the last accepted one (boundary included) are
    /// rejected and do not move the window.
    pub fn accept(&mut self, timestamp: Millis) -> bool {
        if let Some(last) = self.last_accepted
            && timestamp.saturating_sub(last) <= self.min_interval
        {
            return false;
        }
        self.last_accepted = Some(timestamp);
        true
    }

    /// Forget the last accepted event. The next event is always accepted.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}
