pub use kurbo::{Point, Vec2};

/// Milliseconds on the host-supplied monotonic clock.
///
/// The engine never reads a clock of its own; every operation that starts or
/// advances an animation takes the current timestamp from the caller, which
/// keeps behavior fully reproducible in tests.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    /// The zero timestamp.
    pub const ZERO: Self = Millis(0);

    /// Saturating addition.
    pub fn saturating_add(self, rhs: Millis) -> Millis {
        Millis(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction (clamps at zero).
    pub fn saturating_sub(self, rhs: Millis) -> Millis {
        Millis(self.0.saturating_sub(rhs.0))
    }

    /// Value as `f64`, for progress arithmetic.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

/// Default sampling interval between animation property updates.
pub const DEFAULT_SAMPLE_RATE: Millis = Millis(16);

/// Default length of one slide-in or slide-out animation part.
pub const DEFAULT_PART_DURATION: Millis = Millis(250);

/// Minimum interval between two accepted swipe gestures.
pub const SWIPE_DEBOUNCE_INTERVAL: Millis = Millis(100);
