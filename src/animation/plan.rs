use smallvec::{SmallVec, smallvec};

use crate::{
    animation::descriptor::Descriptor,
    foundation::core::{DEFAULT_PART_DURATION, DEFAULT_SAMPLE_RATE, Millis, Vec2},
};

/// Descriptor list for one animation part. Two entries cover the built-in
/// plans without spilling to the heap.
pub type DescriptorList = SmallVec<[Descriptor; 2]>;

/// Named bundle of slide-in/slide-out animation descriptors and timing.
///
/// A plan is immutable once attached to the orchestrator and is evaluated
/// lazily per transition: the runner clones the relevant part when a
/// transition starts, so editing a plan never affects runs already in
/// flight.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionPlan {
    /// Descriptors applied to the incoming slide.
    #[serde(default)]
    pub slide_in: DescriptorList,
    /// Descriptors applied to the outgoing slide.
    #[serde(default)]
    pub slide_out: DescriptorList,
    /// Sampling interval of the slide-in part.
    #[serde(default = "default_rate")]
    pub in_rate: Millis,
    /// Sampling interval of the slide-out part.
    #[serde(default = "default_rate")]
    pub out_rate: Millis,
    /// Duration of the slide-in part.
    #[serde(default = "default_duration")]
    pub in_duration: Millis,
    /// Duration of the slide-out part.
    #[serde(default = "default_duration")]
    pub out_duration: Millis,
}

fn default_rate() -> Millis {
    DEFAULT_SAMPLE_RATE
}

fn default_duration() -> Millis {
    DEFAULT_PART_DURATION
}

impl Default for TransitionPlan {
    fn default() -> Self {
        Self {
            slide_in: SmallVec::new(),
            slide_out: SmallVec::new(),
            in_rate: DEFAULT_SAMPLE_RATE,
            out_rate: DEFAULT_SAMPLE_RATE,
            in_duration: DEFAULT_PART_DURATION,
            out_duration: DEFAULT_PART_DURATION,
        }
    }
}

impl TransitionPlan {
    /// Built-in forward plan: the incoming slide translates in from the
    /// leading edge while scaling up, the outgoing slide translates toward
    /// the trailing edge while scaling down.
    pub fn forward_default() -> Self {
        Self {
            slide_in: smallvec![
                Descriptor::translate(Vec2::new(1.0, 0.0), Vec2::ZERO),
                Descriptor::scale(0.0, 1.0),
            ],
            slide_out: smallvec![
                Descriptor::translate(Vec2::ZERO, Vec2::new(-1.0, 0.0)),
                Descriptor::scale(1.0, 0.0),
            ],
            ..Self::default()
        }
    }

    /// Built-in backward plan: mirror image of [`Self::forward_default`].
    pub fn backward_default() -> Self {
        Self {
            slide_in: smallvec![
                Descriptor::translate(Vec2::new(-1.0, 0.0), Vec2::ZERO),
                Descriptor::scale(0.0, 1.0),
            ],
            slide_out: smallvec![
                Descriptor::translate(Vec2::ZERO, Vec2::new(1.0, 0.0)),
                Descriptor::scale(1.0, 0.0),
            ],
            ..Self::default()
        }
    }
}
