use crate::carousel::slide::{ContentHandle, SlideId, VisualState};

/// Rendering/layout host boundary.
///
/// The engine decides membership, visibility and animated visual state; the
/// host turns those decisions into pixels. Every method has a no-op default
/// so hosts implement only what they render.
pub trait SlideHost {
    /// A slide joined the display tree.
    fn child_added(&mut self, slide: SlideId, content: ContentHandle) {
        let _ = (slide, content);
    }

    /// A slide left the display tree and its content can be released.
    fn child_removed(&mut self, slide: SlideId) {
        let _ = slide;
    }

    /// A slide's visibility flag changed.
    fn set_visible(&mut self, slide: SlideId, visible: bool) {
        let _ = (slide, visible);
    }

    /// A slide's animatable presentation state changed (one animation
    /// sample, a finish-hook restore, or an abort).
    fn apply_visual(&mut self, slide: SlideId, visual: &VisualState) {
        let _ = (slide, visual);
    }

    /// The empty-state placeholder should be shown or hidden. Fired when the
    /// registry transitions between empty and non-empty.
    fn set_empty_visible(&mut self, visible: bool) {
        let _ = visible;
    }
}

/// Host that renders nothing. Useful for tests and headless use.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullHost;

impl SlideHost for NullHost {}

/// Materializes an item into renderable content. The engine wraps the
/// returned handle together with the item into a slide.
pub trait SlideFactory<C> {
    /// Produce the content handle for `item`.
    fn create_slide(&mut self, item: &C) -> ContentHandle;
}

impl<C, F> SlideFactory<C> for F
where
    F: FnMut(&C) -> ContentHandle,
{
    fn create_slide(&mut self, item: &C) -> ContentHandle {
        self(item)
    }
}
