use crate::foundation::core::Vec2;

/// Stable identity of a slide within one engine instance.
///
/// Ids are allocated monotonically and never reused, so a destroyed slide's
/// id can safely be held by in-flight animation runs: lookups simply fail and
/// the run degrades to a no-op instead of touching a recycled slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId(pub u64);

/// Opaque renderer token for a slide's content, produced by the host's slide
/// factory. The engine only carries it back to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContentHandle(pub u64);

/// Animatable presentation properties of a slide.
///
/// Translation is expressed in fractions of the slide extent (1.0 = one full
/// width/height), rotations in degrees. The `Default` value is the canonical
/// resting state every finish-hook restores.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualState {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Offset in fractions of the slide extent.
    pub translation: Vec2,
    /// In-plane rotation in degrees.
    pub rotation: f64,
    /// Rotation around the x/y axes in degrees.
    pub axis_rotation: Vec2,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            translation: Vec2::ZERO,
            rotation: 0.0,
            axis_rotation: Vec2::ZERO,
        }
    }
}

impl VisualState {
    /// Whether every property holds its canonical resting value.
    pub fn is_resting(&self) -> bool {
        *self == Self::default()
    }
}

/// One navigable content unit: an opaque content handle plus the item it was
/// materialized from. Owned by value inside the registry; external code only
/// ever borrows it.
#[derive(Clone, Debug)]
pub struct Slide<C> {
    pub(crate) id: SlideId,
    pub(crate) content: ContentHandle,
    pub(crate) context: C,
    pub(crate) visible: bool,
    pub(crate) visual: VisualState,
}

impl<C> Slide<C> {
    /// Wrap a content handle with its originating item. Slides start
    /// invisible; the orchestrator decides what becomes visible and when.
    pub fn new(id: SlideId, content: ContentHandle, context: C) -> Self {
        Self {
            id,
            content,
            context,
            visible: false,
            visual: VisualState::default(),
        }
    }

    /// Slide identity.
    pub fn id(&self) -> SlideId {
        self.id
    }

    /// Renderer token for this slide's content.
    pub fn content(&self) -> ContentHandle {
        self.content
    }

    /// The item this slide represents.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Current visibility flag.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current animatable presentation state.
    pub fn visual(&self) -> &VisualState {
        &self.visual
    }
}
