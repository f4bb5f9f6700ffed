use crate::{
    animation::descriptor::{Descriptor, PlayDirection},
    animation::plan::DescriptorList,
    carousel::host::SlideHost,
    carousel::registry::SlideRegistry,
    carousel::slide::SlideId,
    foundation::core::Millis,
};

/// Identity of one animation run. Handles are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RunHandle(u64);

/// Outcome of a run that ended, reported from [`AnimationRunner::tick`] or
/// [`AnimationRunner::abort_for_slide`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunCompletion {
    /// The run that ended.
    pub handle: RunHandle,
    /// The slide it was animating.
    pub slide: SlideId,
    /// `true` for natural completion, `false` for abort or a vanished slide.
    pub completed: bool,
}

#[derive(Clone, Debug)]
struct ActiveRun {
    handle: RunHandle,
    slide: SlideId,
    descriptors: DescriptorList,
    direction: PlayDirection,
    rate: Millis,
    duration: Millis,
    started: Millis,
    next_sample: Millis,
}

impl ActiveRun {
    fn elapsed(&self, now: Millis) -> Millis {
        now.saturating_sub(self.started)
    }
}

/// Executes descriptor lists against live slides on a host-driven clock.
///
/// The runner is the engine's only notion of "animation in progress": at most
/// one run exists per slide, starting a new run for a slide supersedes any
/// prior one, and ending a run (naturally or by abort) fires each
/// descriptor's finish-hook exactly once, restoring the slide's resting
/// visual state.
///
/// Runs address slides by [`SlideId`] only. If a slide is destroyed mid-run
/// the remaining samples and the finish-hook become no-ops, and the run is
/// reported as not completed.
#[derive(Debug, Default)]
pub struct AnimationRunner {
    runs: Vec<ActiveRun>,
    next_handle: u64,
}

impl AnimationRunner {
    /// Runner with no active runs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a run over `part` for `slide`.
    ///
    /// An empty `part` resolves immediately without side effects and returns
    /// `None` (nothing ran). A slide unknown to the registry also returns
    /// `None`. Any prior run for the slide is aborted first, finish-hooks
    /// included, but its [`RunCompletion`] is not reported here: callers
    /// that track run handles must call [`Self::abort_for_slide`] themselves
    /// before starting a superseding run, or the old handle is silently
    /// orphaned. The `t = 0` sample is applied synchronously so the slide
    /// holds its starting pose before the first tick.
    pub fn start<C>(
        &mut self,
        slide: SlideId,
        part: &[Descriptor],
        direction: PlayDirection,
        rate: Millis,
        duration: Millis,
        now: Millis,
        registry: &mut SlideRegistry<C>,
        host: &mut dyn SlideHost,
    ) -> Option<RunHandle> {
        if part.is_empty() || registry.by_id(slide).is_none() {
            return None;
        }

        let _ = self.abort_for_slide(slide, registry, host);

        self.next_handle += 1;
        let handle = RunHandle(self.next_handle);
        let run = ActiveRun {
            handle,
            slide,
            descriptors: part.iter().copied().collect(),
            direction,
            rate,
            duration,
            started: now,
            next_sample: now.saturating_add(rate),
        };

        if let Some(visual) = registry.visual_mut(slide) {
            for d in &run.descriptors {
                d.apply(descriptor_progress(d, Millis::ZERO, duration), direction, visual);
            }
            host.apply_visual(slide, visual);
        }

        tracing::trace!(?slide, handle = handle.0, ?duration, "animation run started");
        self.runs.push(run);
        Some(handle)
    }

    /// Advance every run that is due at `now`. Returns the runs that ended.
    pub fn tick<C>(
        &mut self,
        now: Millis,
        registry: &mut SlideRegistry<C>,
        host: &mut dyn SlideHost,
    ) -> Vec<RunCompletion> {
        let mut completions = Vec::new();
        let mut i = 0;
        while i < self.runs.len() {
            let due = now >= self.runs[i].next_sample;
            let finished = self.runs[i].elapsed(now) >= self.runs[i].duration;
            if !due && !finished {
                i += 1;
                continue;
            }

            let slide = self.runs[i].slide;
            let Some(visual) = registry.visual_mut(slide) else {
                let run = self.runs.remove(i);
                completions.push(RunCompletion {
                    handle: run.handle,
                    slide: run.slide,
                    completed: false,
                });
                continue;
            };

            let elapsed = self.runs[i].elapsed(now);
            for d in &self.runs[i].descriptors {
                d.apply(
                    descriptor_progress(d, elapsed, self.runs[i].duration),
                    self.runs[i].direction,
                    visual,
                );
            }

            if finished {
                let run = self.runs.remove(i);
                for d in &run.descriptors {
                    d.finish(visual);
                }
                host.apply_visual(slide, visual);
                tracing::trace!(?slide, handle = run.handle.0, "animation run completed");
                completions.push(RunCompletion {
                    handle: run.handle,
                    slide,
                    completed: true,
                });
            } else {
                self.runs[i].next_sample = now.saturating_add(self.runs[i].rate);
                host.apply_visual(slide, visual);
                i += 1;
            }
        }
        completions
    }

    /// Abort the run animating `slide`, if any. Idempotent: aborting a slide
    /// with no run (or one that already ended) is a no-op returning `None`.
    /// The finish-hooks restore the slide's resting visual state before this
    /// returns, so a superseding run starts from a defined pose.
    pub fn abort_for_slide<C>(
        &mut self,
        slide: SlideId,
        registry: &mut SlideRegistry<C>,
        host: &mut dyn SlideHost,
    ) -> Option<RunCompletion> {
        let i = self.runs.iter().position(|r| r.slide == slide)?;
        let run = self.runs.remove(i);
        if let Some(visual) = registry.visual_mut(slide) {
            for d in &run.descriptors {
                d.finish(visual);
            }
            host.apply_visual(slide, visual);
        }
        tracing::debug!(?slide, handle = run.handle.0, "animation run aborted");
        Some(RunCompletion {
            handle: run.handle,
            slide,
            completed: false,
        })
    }

    /// Whether a run is animating `slide`.
    pub fn is_running_for(&self, slide: SlideId) -> bool {
        self.runs.iter().any(|r| r.slide == slide)
    }

    /// Whether `handle` is still running.
    pub fn is_running(&self, handle: RunHandle) -> bool {
        self.runs.iter().any(|r| r.handle == handle)
    }

    /// Number of active runs.
    pub fn active_count(&self) -> usize {
        self.runs.len()
    }

    /// Drop every run without firing finish-hooks. Used when the registry is
    /// being destroyed wholesale and there is nothing left to restore.
    pub fn clear(&mut self) {
        self.runs.clear();
    }
}

/// Per-descriptor progress: a duration override makes the descriptor reach
/// its end value early instead of spanning the whole part.
fn descriptor_progress(d: &Descriptor, elapsed: Millis, part_duration: Millis) -> f64 {
    let duration = d.duration.unwrap_or(part_duration);
    if duration == Millis::ZERO {
        return 1.0;
    }
    (elapsed.as_f64() / duration.as_f64()).min(1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/runner.rs"]
mod tests;
