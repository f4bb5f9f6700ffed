use crate::{
    carousel::slide::{Slide, SlideId, VisualState},
    foundation::error::{GlissadeError, GlissadeResult},
};

/// The ordered collection of slides. Insertion order is display order.
///
/// The registry is a pure owned collection: it enforces identity uniqueness
/// and provides lookup, but holds no notion of a current position. Position
/// bookkeeping and repair live in the orchestrator, which is the single
/// source of truth and the only mutator of this collection.
#[derive(Debug, Default)]
pub struct SlideRegistry<C> {
    slides: Vec<Slide<C>>,
}

impl<C> SlideRegistry<C> {
    /// Empty registry.
    pub fn new() -> Self {
        Self { slides: Vec::new() }
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the registry holds no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Insert `slide` at `index`, shifting later slides right.
    ///
    /// Fails with [`GlissadeError::DuplicateSlide`] if a slide with the same
    /// identity is already registered, and with
    /// [`GlissadeError::IndexOutOfRange`] if `index > len`.
    pub fn insert(&mut self, index: usize, slide: Slide<C>) -> GlissadeResult<()> {
        if self.by_id(slide.id()).is_some() {
            return Err(GlissadeError::DuplicateSlide(slide.id()));
        }
        if index > self.slides.len() {
            return Err(GlissadeError::out_of_range(index as i32, self.slides.len()));
        }
        self.slides.insert(index, slide);
        Ok(())
    }

    /// Append `slide` at the end of the display order.
    pub fn push(&mut self, slide: Slide<C>) -> GlissadeResult<()> {
        self.insert(self.slides.len(), slide)
    }

    /// Remove the slide with identity `id`, returning it if present.
    pub fn remove(&mut self, id: SlideId) -> Option<Slide<C>> {
        let index = self.index_of(id)?;
        Some(self.slides.remove(index))
    }

    /// Remove every slide, returning them in display order.
    pub fn clear(&mut self) -> Vec<Slide<C>> {
        std::mem::take(&mut self.slides)
    }

    /// Slide at display position `index`.
    pub fn get(&self, index: usize) -> Option<&Slide<C>> {
        self.slides.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Slide<C>> {
        self.slides.get_mut(index)
    }

    /// Slide with identity `id`.
    pub fn by_id(&self, id: SlideId) -> Option<&Slide<C>> {
        self.slides.iter().find(|s| s.id() == id)
    }

    pub(crate) fn by_id_mut(&mut self, id: SlideId) -> Option<&mut Slide<C>> {
        self.slides.iter_mut().find(|s| s.id() == id)
    }

    /// Display position of the slide with identity `id`.
    pub fn index_of(&self, id: SlideId) -> Option<usize> {
        self.slides.iter().position(|s| s.id() == id)
    }

    /// Mutable access to the animatable state of the slide with identity
    /// `id`. Animation runs go through this so a destroyed slide turns the
    /// remaining samples into no-ops.
    pub fn visual_mut(&mut self, id: SlideId) -> Option<&mut VisualState> {
        self.by_id_mut(id).map(|s| &mut s.visual)
    }

    /// Iterate the slides in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Slide<C>> {
        self.slides.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Slide<C>> {
        self.slides.iter_mut()
    }
}

impl<C: PartialEq> SlideRegistry<C> {
    /// Display position of the first slide whose context equals `item`.
    pub fn index_of_item(&self, item: &C) -> Option<usize> {
        self.slides.iter().position(|s| s.context() == item)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/registry.rs"]
mod tests;
