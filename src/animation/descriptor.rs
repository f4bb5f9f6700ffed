use crate::{
    animation::ease::Ease,
    carousel::slide::VisualState,
    foundation::core::{Millis, Vec2},
};

/// Whether a descriptor is evaluated with its authored endpoints or with the
/// endpoints reversed.
///
/// Only kinds that define a backward variant actually reverse; the rest fall
/// back to the forward evaluation. Translation is the one kind with a
/// backward definition of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PlayDirection {
    /// Evaluate `from -> to`.
    Forward,
    /// Evaluate `to -> from` where the kind defines it.
    Backward,
}

/// The property a descriptor animates, with its endpoints.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "params")]
pub enum DescriptorKind {
    /// Animates [`VisualState::opacity`]; rests at 1.
    Fade {
        /// Start opacity.
        from: f64,
        /// End opacity.
        to: f64,
    },
    /// Animates [`VisualState::scale`]; rests at 1.
    Scale {
        /// Start scale.
        from: f64,
        /// End scale.
        to: f64,
    },
    /// Animates [`VisualState::translation`] in fractions of the slide
    /// extent; rests at `(0, 0)`.
    Translate {
        /// Start offset.
        from: Vec2,
        /// End offset.
        to: Vec2,
    },
    /// Animates [`VisualState::rotation`] in degrees; rests at 0.
    Rotate {
        /// Start angle.
        from: f64,
        /// End angle.
        to: f64,
    },
    /// Animates [`VisualState::axis_rotation`] (x/y axis degrees); rests at
    /// `(0, 0)`.
    AxisRotate {
        /// Start angles.
        from: Vec2,
        /// End angles.
        to: Vec2,
    },
}

/// A single declarative property transform.
///
/// Descriptors are stateless and reusable across slides: evaluation writes
/// into a [`VisualState`] handed in by the runner, so a descriptor never
/// holds a reference to any particular slide.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Descriptor {
    /// The animated property and its endpoints. Flattened so an authored
    /// descriptor object carries `kind`/`params` at its top level.
    #[serde(flatten)]
    pub kind: DescriptorKind,
    /// Easing curve applied to this descriptor's progress.
    #[serde(default)]
    pub ease: Ease,
    /// Optional duration override. When set, this descriptor reaches its end
    /// value after `duration` elapsed instead of spanning the whole part.
    #[serde(default)]
    pub duration: Option<Millis>,
}

impl Descriptor {
    /// Descriptor with linear easing and no duration override.
    pub fn new(kind: DescriptorKind) -> Self {
        Self {
            kind,
            ease: Ease::Linear,
            duration: None,
        }
    }

    /// Opacity transform.
    pub fn fade(from: f64, to: f64) -> Self {
        Self::new(DescriptorKind::Fade { from, to })
    }

    /// Uniform scale transform.
    pub fn scale(from: f64, to: f64) -> Self {
        Self::new(DescriptorKind::Scale { from, to })
    }

    /// Translation transform in fractions of the slide extent.
    pub fn translate(from: Vec2, to: Vec2) -> Self {
        Self::new(DescriptorKind::Translate { from, to })
    }

    /// In-plane rotation transform in degrees.
    pub fn rotate(from: f64, to: f64) -> Self {
        Self::new(DescriptorKind::Rotate { from, to })
    }

    /// Axis rotation transform in degrees per axis.
    pub fn axis_rotate(from: Vec2, to: Vec2) -> Self {
        Self::new(DescriptorKind::AxisRotate { from, to })
    }

    /// Replace the easing curve.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Set a duration override.
    pub fn with_duration(mut self, duration: Millis) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Whether this kind defines a backward evaluation of its own.
    pub fn has_backward(&self) -> bool {
        matches!(self.kind, DescriptorKind::Translate { .. })
    }

    /// Evaluate at progress `t` (clamped to `[0, 1]`) and write the animated
    /// property into `visual`.
    pub fn apply(&self, t: f64, direction: PlayDirection, visual: &mut VisualState) {
        let t = self.ease.apply(t);
        match self.kind {
            DescriptorKind::Fade { from, to } => {
                visual.opacity = lerp(from, to, t);
            }
            DescriptorKind::Scale { from, to } => {
                visual.scale = lerp(from, to, t);
            }
            DescriptorKind::Translate { from, to } => {
                let (a, b) = match direction {
                    PlayDirection::Forward => (from, to),
                    PlayDirection::Backward => (to, from),
                };
                visual.translation = lerp_vec(a, b, t);
            }
            DescriptorKind::Rotate { from, to } => {
                visual.rotation = lerp(from, to, t);
            }
            DescriptorKind::AxisRotate { from, to } => {
                visual.axis_rotation = lerp_vec(from, to, t);
            }
        }
    }

    /// Restore the animated property to its canonical resting value. The
    /// runner calls this exactly once per run, on completion or abort.
    pub fn finish(&self, visual: &mut VisualState) {
        match self.kind {
            DescriptorKind::Fade { .. } => visual.opacity = 1.0,
            DescriptorKind::Scale { .. } => visual.scale = 1.0,
            DescriptorKind::Translate { .. } => visual.translation = Vec2::ZERO,
            DescriptorKind::Rotate { .. } => visual.rotation = 0.0,
            DescriptorKind::AxisRotate { .. } => visual.axis_rotation = Vec2::ZERO,
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_vec(a: Vec2, b: Vec2, t: f64) -> Vec2 {
    Vec2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}
