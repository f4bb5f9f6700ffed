//! Glissade is a slide transition engine for retained-mode UI hosts.
//!
//! The engine manages an ordered set of content slides, tracks the currently
//! visible one, and drives animated transitions between them in response to
//! programmatic navigation or swipe gestures. It renders nothing itself:
//! membership, visibility and animated visual state are pushed across the
//! [`SlideHost`] boundary, and the host turns them into pixels.
//!
//! # Architecture
//!
//! 1. **Describe**: a [`TransitionPlan`] bundles slide-in/slide-out
//!    [`Descriptor`]s (fade, scale, translate, rotate) with timing.
//! 2. **Orchestrate**: [`Carousel`] owns the slide registry and the logical
//!    position, picks the plan for each navigation (explicit forward/backward
//!    plan or built-in default) and guarantees the most recent request wins.
//! 3. **Run**: the [`AnimationRunner`] samples descriptors against live
//!    slides on the host's clock, with abort-safe finish-hooks.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Host-driven clock**: the engine never reads time; every entry point
//!   takes the caller's timestamp and [`Carousel::tick`] advances
//!   animations, which makes behavior fully deterministic in tests.
//! - **Synchronous logical state**: position and current item are published
//!   when navigation is requested, not when its animation settles.
//! - **Single-threaded**: all state lives on one logical thread; overlapping
//!   transitions are resolved by aborting shared endpoint animations, never
//!   by queueing.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod carousel;
mod foundation;

pub use animation::descriptor::{Descriptor, DescriptorKind, PlayDirection};
pub use animation::ease::Ease;
pub use animation::plan::{DescriptorList, TransitionPlan};
pub use animation::runner::{AnimationRunner, RunCompletion, RunHandle};
pub use carousel::gesture::{GestureDebouncer, SwipeDirection};
pub use carousel::host::{NullHost, SlideFactory, SlideHost};
pub use carousel::observable::{Observable, Subscription};
pub use carousel::orchestrator::{Carousel, CarouselConfig, Direction, Transition};
pub use carousel::registry::SlideRegistry;
pub use carousel::slide::{ContentHandle, Slide, SlideId, VisualState};
pub use foundation::core::{
    DEFAULT_PART_DURATION, DEFAULT_SAMPLE_RATE, Millis, Point, SWIPE_DEBOUNCE_INTERVAL, Vec2,
};
pub use foundation::error::{GlissadeError, GlissadeResult};
