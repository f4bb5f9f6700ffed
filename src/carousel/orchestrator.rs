use crate::{
    animation::descriptor::PlayDirection,
    animation::plan::TransitionPlan,
    animation::runner::{AnimationRunner, RunCompletion, RunHandle},
    carousel::gesture::{GestureDebouncer, SwipeDirection},
    carousel::host::{NullHost, SlideFactory, SlideHost},
    carousel::observable::{Observable, Subscription},
    carousel::registry::SlideRegistry,
    carousel::slide::{ContentHandle, Slide, SlideId},
    foundation::core::{Millis, SWIPE_DEBOUNCE_INTERVAL},
    foundation::error::{GlissadeError, GlissadeResult},
};

/// Navigation direction of a transition. Decides which plan applies and how
/// the built-in defaults orient their motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    /// Toward higher positions.
    Forward,
    /// Toward lower positions.
    Backward,
}

/// Behavior switches of the carousel, consumed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CarouselConfig {
    /// Wrap around at the edges when swiping.
    #[serde(default = "default_true")]
    pub loop_enabled: bool,
    /// Fall back to the built-in plans when no explicit plan is assigned.
    #[serde(default = "default_true")]
    pub allow_default_animations: bool,
    /// React to swipe gesture events at all.
    #[serde(default = "default_true")]
    pub allow_swipe_gestures: bool,
    /// Minimum interval between two accepted swipe gestures.
    #[serde(default = "default_debounce")]
    pub swipe_debounce: Millis,
}

fn default_true() -> bool {
    true
}

fn default_debounce() -> Millis {
    SWIPE_DEBOUNCE_INTERVAL
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            loop_enabled: true,
            allow_default_animations: true,
            allow_swipe_gestures: true,
            swipe_debounce: SWIPE_DEBOUNCE_INTERVAL,
        }
    }
}

/// Token identifying one navigation request. Settlement is observed through
/// [`Carousel::is_settled`]; requests that finish synchronously hand back an
/// already-settled token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    generation: u64,
}

impl Transition {
    /// Monotonic generation counter value of this request. Later requests
    /// always carry larger generations.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
struct PendingTransition {
    generation: u64,
    out_run: Option<RunHandle>,
    in_run: Option<RunHandle>,
}

impl PendingTransition {
    fn is_settled(&self) -> bool {
        self.out_run.is_none() && self.in_run.is_none()
    }
}

/// The slide transition engine.
///
/// Owns the ordered slide registry, the animation runner and the logical
/// position, and guarantees the engine invariants:
///
/// - `position` is `-1` exactly when the registry is empty, otherwise a
///   valid index; removing the active slide repairs the position to the
///   nearest neighbor (preferring the predecessor) before anything else
///   observes it.
/// - Logical position and current item are published synchronously with the
///   navigation call, independent of animation duration.
/// - At most one animation runs per slide; a navigation aborts whatever was
///   running on its two endpoint slides, so the most recent request wins.
/// - Once all transitions settle, exactly one slide is visible.
///
/// Everything is single-threaded and clock-driven: the host calls
/// [`Carousel::tick`] with its current timestamp to advance animations.
pub struct Carousel<C> {
    registry: SlideRegistry<C>,
    runner: AnimationRunner,
    host: Box<dyn SlideHost>,
    config: CarouselConfig,
    debouncer: GestureDebouncer,
    forward_plan: Option<TransitionPlan>,
    backward_plan: Option<TransitionPlan>,
    /// Logical position; `-1` when no slide is current.
    current: i32,
    position: Observable<i32>,
    current_item: Observable<Option<C>>,
    generation: u64,
    pending: Vec<PendingTransition>,
    next_slide_id: u64,
    empty_visible: bool,
}

impl<C: Clone + PartialEq> Carousel<C> {
    /// Engine with the given configuration and no rendering host.
    pub fn new(config: CarouselConfig) -> Self {
        Self::with_host(config, Box::new(NullHost))
    }

    /// Engine rendering through `host`.
    pub fn with_host(config: CarouselConfig, mut host: Box<dyn SlideHost>) -> Self {
        host.set_empty_visible(true);
        Self {
            registry: SlideRegistry::new(),
            runner: AnimationRunner::new(),
            host,
            debouncer: GestureDebouncer::new(config.swipe_debounce),
            config,
            forward_plan: None,
            backward_plan: None,
            current: -1,
            position: Observable::new(-1),
            current_item: Observable::new(None),
            generation: 0,
            pending: Vec::new(),
            next_slide_id: 0,
            empty_visible: true,
        }
    }

    // ---- navigation -----------------------------------------------------

    /// Navigate to `index` (`-1` clears the current slide).
    ///
    /// The logical position and current item are updated before this
    /// returns; the visual transition settles over subsequent [`tick`]s.
    /// When `direction` is omitted it is inferred from the index ordering.
    ///
    /// Errors: [`GlissadeError::NoSlides`] when the registry is empty (the
    /// `-1 -> -1` case excepted), [`GlissadeError::IndexOutOfRange`] for any
    /// other invalid index.
    ///
    /// [`tick`]: Carousel::tick
    #[tracing::instrument(skip(self))]
    pub fn navigate_to(
        &mut self,
        index: i32,
        direction: Option<Direction>,
        animate: bool,
        now: Millis,
    ) -> GlissadeResult<Transition> {
        let len = self.registry.len() as i32;
        if index < -1 {
            return Err(GlissadeError::out_of_range(index, self.registry.len()));
        }
        if index >= 0 {
            if len == 0 {
                return Err(GlissadeError::NoSlides);
            }
            if index >= len {
                return Err(GlissadeError::out_of_range(index, self.registry.len()));
            }
        }

        self.generation += 1;
        let generation = self.generation;

        if index == self.current {
            return Ok(Transition { generation });
        }

        let from_index = self.current;
        let direction = direction.unwrap_or(if index > from_index {
            Direction::Forward
        } else {
            Direction::Backward
        });
        let from_id = self.slide_id_at(from_index);
        let to_id = self.slide_id_at(index);

        tracing::debug!(from = from_index, to = index, ?direction, generation, "navigating");

        // The most recent request wins: stop whatever is animating on the
        // two endpoint slides before touching state.
        for id in [from_id, to_id].into_iter().flatten() {
            if let Some(c) = self.runner.abort_for_slide(id, &mut self.registry, &mut *self.host) {
                self.note_completion(c);
            }
        }

        // Publish the logical position synchronously; observers must not
        // have to wait for the animation.
        self.current = index;
        self.position.set(index);
        let item = (index >= 0)
            .then(|| self.registry.get(index as usize).map(|s| s.context().clone()))
            .flatten();
        self.current_item.set(item);

        if from_id == to_id {
            // Both endpoints resolve to the same slide (or to none), e.g.
            // after a registry repair. Nothing to animate.
            self.process_settlements();
            return Ok(Transition { generation });
        }

        let plan = if animate { self.resolve_plan(direction) } else { None };
        let Some(plan) = plan else {
            self.set_slide_visible(to_id, true);
            self.set_slide_visible(from_id, false);
            self.process_settlements();
            return Ok(Transition { generation });
        };

        // The incoming slide becomes visible before its animation starts.
        self.set_slide_visible(to_id, true);

        let out_run = from_id.and_then(|id| {
            self.runner.start(
                id,
                &plan.slide_out,
                PlayDirection::Forward,
                plan.out_rate,
                plan.out_duration,
                now,
                &mut self.registry,
                &mut *self.host,
            )
        });
        let in_run = to_id.and_then(|id| {
            self.runner.start(
                id,
                &plan.slide_in,
                PlayDirection::Forward,
                plan.in_rate,
                plan.in_duration,
                now,
                &mut self.registry,
                &mut *self.host,
            )
        });

        if out_run.is_none() && in_run.is_none() {
            // Both parts were empty; there is nothing that could settle
            // later, so finalize visibility immediately.
            self.set_slide_visible(from_id, false);
            self.process_settlements();
            return Ok(Transition { generation });
        }

        self.pending.push(PendingTransition {
            generation,
            out_run,
            in_run,
        });
        self.process_settlements();
        Ok(Transition { generation })
    }

    /// Advance to the next slide. At the trailing edge this wraps when
    /// looping is enabled and otherwise returns `false` without effect.
    pub fn swipe_next(&mut self, animate: bool, now: Millis) -> bool {
        self.swipe(true, animate, now)
    }

    /// Return to the previous slide. At the leading edge this wraps when
    /// looping is enabled and otherwise returns `false` without effect.
    pub fn swipe_prev(&mut self, animate: bool, now: Millis) -> bool {
        self.swipe(false, animate, now)
    }

    fn swipe(&mut self, forward: bool, animate: bool, now: Millis) -> bool {
        if self.registry.is_empty() {
            return false;
        }
        let len = self.registry.len() as i32;
        let mut next = if forward { self.current + 1 } else { self.current - 1 };
        if next < 0 {
            if !self.config.loop_enabled {
                return false;
            }
            next = len - 1;
        } else if next >= len {
            if !self.config.loop_enabled {
                return false;
            }
            next = 0;
        }

        let direction = if forward {
            Direction::Forward
        } else {
            Direction::Backward
        };
        match self.navigate_to(next, Some(direction), animate, now) {
            Ok(_) => true,
            Err(err) => {
                tracing::error!(error = %err, "swipe navigation rejected");
                false
            }
        }
    }

    /// Gesture entry point: an already-classified swipe event from the
    /// host's recognizer. Gated by the configuration flag and the
    /// debouncer; returns whether a navigation was performed.
    pub fn on_swipe(&mut self, direction: SwipeDirection, timestamp: Millis) -> bool {
        if !self.config.allow_swipe_gestures {
            return false;
        }
        if !self.debouncer.accept(timestamp) {
            return false;
        }
        match direction {
            SwipeDirection::Left => self.swipe_next(true, timestamp),
            SwipeDirection::Right => self.swipe_prev(true, timestamp),
        }
    }

    /// Bindable-property setter for the position. The first assignment on a
    /// freshly populated carousel is unanimated, like the initial
    /// transition; later assignments animate with inferred direction.
    pub fn set_position(&mut self, index: i32, now: Millis) -> GlissadeResult<Transition> {
        if self.current == -1 {
            self.navigate_to(index, Some(Direction::Forward), false, now)
        } else {
            self.navigate_to(index, None, true, now)
        }
    }

    /// Bindable-property setter for the current item: navigate to the slide
    /// representing `item`. On an empty carousel the current item is cleared
    /// instead. An item without a slide is a validation error.
    pub fn set_current_item(&mut self, item: &C, now: Millis) -> GlissadeResult<()> {
        if self.registry.is_empty() {
            self.current_item.set(None);
            return Ok(());
        }
        let Some(index) = self.registry.index_of_item(item) else {
            return Err(GlissadeError::validation("no slide represents this item"));
        };
        if index as i32 != self.current {
            self.navigate_to(index as i32, None, true, now)?;
        }
        Ok(())
    }

    // ---- registry mutation ----------------------------------------------

    /// Append a slide. Appending the first slide triggers the unanimated
    /// initial transition to position 0.
    pub fn push_slide(
        &mut self,
        content: ContentHandle,
        context: C,
        now: Millis,
    ) -> GlissadeResult<SlideId> {
        self.insert_slide(self.registry.len(), content, context, now)
    }

    /// Insert a slide at `index`. Inserting at or before the current
    /// position shifts the position right; the same slide stays current and
    /// observers see the new index.
    pub fn insert_slide(
        &mut self,
        index: usize,
        content: ContentHandle,
        context: C,
        now: Millis,
    ) -> GlissadeResult<SlideId> {
        self.next_slide_id += 1;
        let id = SlideId(self.next_slide_id);
        self.registry.insert(index, Slide::new(id, content, context))?;
        self.host.child_added(id, content);
        self.update_empty_view();

        if self.current == -1 {
            self.navigate_to(0, Some(Direction::Forward), false, now)?;
        } else if (index as i32) <= self.current {
            self.current += 1;
            self.position.set(self.current);
        }
        Ok(id)
    }

    /// Materialize `item` through the factory and append its slide.
    pub fn push_item(
        &mut self,
        item: C,
        factory: &mut dyn SlideFactory<C>,
        now: Millis,
    ) -> GlissadeResult<SlideId> {
        let content = factory.create_slide(&item);
        self.push_slide(content, item, now)
    }

    /// Remove the slide with identity `id`, repairing the position:
    /// removal before the current position shifts it left; removing the
    /// active slide navigates to the nearest neighbor (preferring the
    /// predecessor, backward-animated), or clears the carousel state when it
    /// was the last slide.
    pub fn remove_slide(&mut self, id: SlideId, now: Millis) -> GlissadeResult<()> {
        let Some(index) = self.registry.index_of(id) else {
            return Err(GlissadeError::validation("slide is not registered"));
        };

        // End any run before the slide is destroyed so its transition part
        // settles now instead of at the next tick.
        if let Some(c) = self.runner.abort_for_slide(id, &mut self.registry, &mut *self.host) {
            self.note_completion(c);
        }

        self.registry.remove(id);
        self.host.child_removed(id);
        self.update_empty_view();

        let removed = index as i32;
        if removed < self.current {
            self.current -= 1;
            self.position.set(self.current);
        } else if removed == self.current {
            if self.registry.is_empty() {
                self.navigate_to(-1, Some(Direction::Backward), false, now)?;
            } else {
                let repaired = (self.current - 1).clamp(0, self.registry.len() as i32 - 1);
                // The active slide is gone; there is no outgoing endpoint.
                self.current = -1;
                self.navigate_to(repaired, Some(Direction::Backward), true, now)?;
            }
        }
        self.process_settlements();
        Ok(())
    }

    /// Remove the slide representing `item`.
    pub fn remove_item(&mut self, item: &C, now: Millis) -> GlissadeResult<()> {
        let Some(index) = self.registry.index_of_item(item) else {
            return Err(GlissadeError::validation("no slide represents this item"));
        };
        let id = self.registry.get(index).map(|s| s.id());
        match id {
            Some(id) => self.remove_slide(id, now),
            None => Err(GlissadeError::validation("no slide represents this item")),
        }
    }

    /// Destroy every slide and reset to the empty state.
    pub fn clear(&mut self) {
        self.runner.clear();
        self.pending.clear();
        for slide in self.registry.clear() {
            self.host.child_removed(slide.id());
        }
        self.current = -1;
        self.position.set(-1);
        self.current_item.set(None);
        self.update_empty_view();
    }

    /// Replace the whole slide set: clear, then materialize `items` through
    /// the factory. A non-empty replacement ends with the unanimated initial
    /// transition to position 0.
    pub fn replace_all<I>(
        &mut self,
        items: I,
        factory: &mut dyn SlideFactory<C>,
        now: Millis,
    ) -> GlissadeResult<()>
    where
        I: IntoIterator<Item = C>,
    {
        self.clear();
        for item in items {
            self.push_item(item, factory, now)?;
        }
        Ok(())
    }

    // ---- clock ----------------------------------------------------------

    /// Advance animations to `now` and settle transitions whose runs all
    /// ended. Settlement cleanup hides every slide that is neither current
    /// nor still animating, which repairs intermediate states left behind by
    /// superseded transitions.
    pub fn tick(&mut self, now: Millis) {
        let completions = self.runner.tick(now, &mut self.registry, &mut *self.host);
        for c in completions {
            self.note_completion(c);
        }
        self.process_settlements();
    }

    // ---- plans & configuration ------------------------------------------

    /// Assign or clear the explicit forward plan.
    pub fn set_forward_plan(&mut self, plan: Option<TransitionPlan>) {
        self.forward_plan = plan;
    }

    /// Assign or clear the explicit backward plan.
    pub fn set_backward_plan(&mut self, plan: Option<TransitionPlan>) {
        self.backward_plan = plan;
    }

    /// The explicit forward plan, if assigned.
    pub fn forward_plan(&self) -> Option<&TransitionPlan> {
        self.forward_plan.as_ref()
    }

    /// The explicit backward plan, if assigned.
    pub fn backward_plan(&self) -> Option<&TransitionPlan> {
        self.backward_plan.as_ref()
    }

    /// Current configuration.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Enable or disable edge wrapping for swipes.
    pub fn set_loop_enabled(&mut self, enabled: bool) {
        self.config.loop_enabled = enabled;
    }

    /// Enable or disable the built-in fallback plans.
    pub fn set_allow_default_animations(&mut self, allowed: bool) {
        self.config.allow_default_animations = allowed;
    }

    /// Enable or disable gesture handling.
    pub fn set_allow_swipe_gestures(&mut self, allowed: bool) {
        self.config.allow_swipe_gestures = allowed;
    }

    // ---- observation ----------------------------------------------------

    /// Logical position; `-1` when no slide is current.
    pub fn position(&self) -> i32 {
        self.current
    }

    /// The item of the current slide.
    pub fn current_item(&self) -> Option<&C> {
        self.current_item.get().as_ref()
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether there are no slides.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Whether any transition is still in flight.
    pub fn is_transitioning(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Whether the given navigation request has settled (all its animations
    /// completed or were aborted, and cleanup ran).
    pub fn is_settled(&self, transition: Transition) -> bool {
        !self
            .pending
            .iter()
            .any(|p| p.generation == transition.generation)
    }

    /// Read access to the slide collection.
    pub fn registry(&self) -> &SlideRegistry<C> {
        &self.registry
    }

    /// Slide at display position `index`.
    pub fn slide(&self, index: usize) -> Option<&Slide<C>> {
        self.registry.get(index)
    }

    /// Observe position changes.
    pub fn subscribe_position(&mut self, f: impl FnMut(&i32) + 'static) -> Subscription {
        self.position.subscribe(f)
    }

    /// Stop observing position changes.
    pub fn unsubscribe_position(&mut self, subscription: Subscription) -> bool {
        self.position.unsubscribe(subscription)
    }

    /// Observe current-item changes.
    pub fn subscribe_current_item(
        &mut self,
        f: impl FnMut(&Option<C>) + 'static,
    ) -> Subscription {
        self.current_item.subscribe(f)
    }

    /// Stop observing current-item changes.
    pub fn unsubscribe_current_item(&mut self, subscription: Subscription) -> bool {
        self.current_item.unsubscribe(subscription)
    }

    // ---- internals ------------------------------------------------------

    fn slide_id_at(&self, index: i32) -> Option<SlideId> {
        if index < 0 {
            return None;
        }
        self.registry.get(index as usize).map(|s| s.id())
    }

    /// Explicit plan for the direction, else the built-in default unless
    /// defaults are disabled.
    fn resolve_plan(&self, direction: Direction) -> Option<TransitionPlan> {
        let explicit = match direction {
            Direction::Forward => self.forward_plan.as_ref(),
            Direction::Backward => self.backward_plan.as_ref(),
        };
        if let Some(plan) = explicit {
            return Some(plan.clone());
        }
        if !self.config.allow_default_animations {
            return None;
        }
        Some(match direction {
            Direction::Forward => TransitionPlan::forward_default(),
            Direction::Backward => TransitionPlan::backward_default(),
        })
    }

    fn set_slide_visible(&mut self, id: Option<SlideId>, visible: bool) {
        let Some(id) = id else { return };
        if let Some(slide) = self.registry.by_id_mut(id)
            && slide.visible != visible
        {
            slide.visible = visible;
            self.host.set_visible(id, visible);
        }
    }

    fn note_completion(&mut self, completion: RunCompletion) {
        for p in &mut self.pending {
            if p.out_run == Some(completion.handle) {
                p.out_run = None;
            }
            if p.in_run == Some(completion.handle) {
                p.in_run = None;
            }
        }
    }

    /// Drop settled transitions and run the visibility cleanup for them.
    /// Cleanup only checks present-tense state ("not current, not
    /// animating"), so settlements of superseded transitions are harmless.
    fn process_settlements(&mut self) {
        let mut settled = false;
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].is_settled() {
                let p = self.pending.remove(i);
                tracing::debug!(generation = p.generation, "transition settled");
                settled = true;
            } else {
                i += 1;
            }
        }
        if settled {
            self.cleanup_visibility();
        }
    }

    /// Hide every slide that is neither current nor running an animation.
    fn cleanup_visibility(&mut self) {
        let current_id = self.slide_id_at(self.current);
        for slide in self.registry.iter_mut() {
            let id = slide.id();
            if Some(id) == current_id {
                continue;
            }
            if self.runner.is_running_for(id) {
                continue;
            }
            if slide.visible {
                slide.visible = false;
                self.host.set_visible(id, false);
            }
        }
    }

    fn update_empty_view(&mut self) {
        let empty = self.registry.is_empty();
        if empty != self.empty_visible {
            self.empty_visible = empty;
            self.host.set_empty_visible(empty);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/orchestrator.rs"]
mod tests;
