//! The selection wheel.
//!
//! A [`Wheel`] owns its labels, its rotation angle and an explicit
//! `Idle → Spinning → Idle` state machine. It paints onto a [`Surface`] and
//! is driven by a [`FrameScheduler`]: [`Wheel::spin`] requests a frame, the
//! host calls [`Wheel::on_frame`] with the frame timestamp, and the wheel
//! either requests the next frame or settles, picks the winner and calls the
//! completion callback exactly once.
//!
//! ```
//! use fridgewheel_core::{ManualScheduler, RecordingCanvas, Size, Wheel};
//! use std::{cell::RefCell, rc::Rc};
//!
//! let canvas = RecordingCanvas::with_size(Size::square(320.0));
//! let mut wheel = Wheel::new(canvas, ManualScheduler::new(), ["Tacos", "Ramen"]).with_seed(7);
//!
//! let winner = Rc::new(RefCell::new(None));
//! let slot = Rc::clone(&winner);
//! assert!(wheel.spin(move |meal| *slot.borrow_mut() = Some(meal.to_string())));
//!
//! while wheel.scheduler_mut().take_pending().is_some() {
//!     let now = wheel.scheduler_mut().advance(16.0);
//!     wheel.on_frame(now);
//! }
//! assert!(!wheel.is_spinning());
//! assert!(winner.borrow().is_some());
//! ```

pub mod geometry;
pub mod label;
pub mod render;

use crate::animation::Tween;
use crate::canvas::Surface;
use crate::config::{SpinConfig, WheelConfig};
use crate::scheduler::{FrameHandle, FrameScheduler};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;
use std::fmt;
use tracing::{debug, info, trace, warn};

pub use geometry::{winner_index, POINTER_ANGLE};

/// Completion callback receiving the winning label.
pub type SpinCallback = Box<dyn FnOnce(&str)>;

/// Rotation and timing of one spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    /// Total forward rotation in radians
    pub total_delta: f64,
    /// Duration in ms
    pub duration_ms: f64,
}

impl SpinPlan {
    /// Create a plan from an explicit rotation and duration.
    #[must_use]
    pub const fn new(total_delta: f64, duration_ms: f64) -> Self {
        Self {
            total_delta,
            duration_ms,
        }
    }

    /// Whether the plan can drive an animation: a finite rotation over a
    /// finite, non-negative duration.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.total_delta.is_finite() && self.duration_ms.is_finite() && self.duration_ms >= 0.0
    }

    /// Draw a plan from the configured ranges: a whole number of turns, plus
    /// an offset inside one more turn, over a random duration.
    pub fn sample<R: Rng>(config: &SpinConfig, rng: &mut R) -> Self {
        let turns = between(rng, config.min_turns.floor(), config.max_turns.floor() + 1.0).floor();
        let offset = rng.gen_range(0.0..TAU);
        let duration_ms = between(rng, config.min_duration_ms, config.max_duration_ms);
        Self {
            total_delta: TAU.mul_add(turns, offset),
            duration_ms,
        }
    }
}

/// Result of handling one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No spin was running; nothing happened.
    Idle,
    /// The spin advanced and another frame was requested.
    Continued,
    /// The spin settled on the segment at `index`.
    Finished {
        /// Winning segment index
        index: usize,
    },
}

struct SpinSession {
    tween: Tween,
    frame: FrameHandle,
    on_complete: SpinCallback,
}

enum Phase {
    Idle,
    Spinning(SpinSession),
}

/// Spinning selection wheel over a list of labels.
pub struct Wheel<C: Surface, S: FrameScheduler> {
    surface: C,
    scheduler: S,
    segments: Vec<String>,
    angle: f64,
    phase: Phase,
    config: WheelConfig,
    rng: StdRng,
}

impl<C: Surface, S: FrameScheduler> Wheel<C, S> {
    /// Create an idle wheel with default configuration and paint it once.
    pub fn new<I, L>(surface: C, scheduler: S, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self::with_config(surface, scheduler, labels, WheelConfig::default())
    }

    /// Create an idle wheel with the given configuration and paint it once.
    pub fn with_config<I, L>(surface: C, scheduler: S, labels: I, config: WheelConfig) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let mut wheel = Self {
            surface,
            scheduler,
            segments: collect_labels(labels),
            angle: 0.0,
            phase: Phase::Idle,
            config,
            rng: StdRng::from_entropy(),
        };
        wheel.render();
        wheel
    }

    /// Replace the random source with a seeded one.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Replace the labels and repaint. The rotation angle is kept.
    ///
    /// Empty labels are skipped. A spin in flight is abandoned: its frame is
    /// cancelled and its callback dropped without being called.
    pub fn set_segments<I, L>(&mut self, labels: I)
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        if self.is_spinning() {
            warn!(angle = self.angle, "segments replaced mid-spin, abandoning spin");
            self.cancel_spin();
        }
        self.segments = collect_labels(labels);
        self.render();
    }

    /// Stop a spin in flight where it is. Its pending frame is cancelled and
    /// its callback dropped. Returns whether a spin was running.
    pub fn cancel_spin(&mut self) -> bool {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Spinning(session) => {
                self.scheduler.cancel_frame(session.frame);
                true
            }
            Phase::Idle => false,
        }
    }

    /// Current labels in angular order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Cumulative rotation in radians.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Whether a spin is in flight.
    #[must_use]
    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, Phase::Spinning(_))
    }

    /// Label under the pointer at the current angle.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        winner_index(self.angle, self.segments.len()).map(|i| self.segments[i].as_str())
    }

    /// Paint the current state onto the surface.
    pub fn render(&mut self) {
        let size = self.surface.size();
        render::paint(
            &mut self.surface,
            size,
            &self.segments,
            self.angle,
            &self.config.style,
        );
    }

    /// Start a spin with randomly sampled rotation and duration.
    ///
    /// Returns `false`, and never calls `on_complete`, when a spin is already
    /// running or there are no segments.
    pub fn spin<F>(&mut self, on_complete: F) -> bool
    where
        F: FnOnce(&str) + 'static,
    {
        if !self.can_spin() {
            return false;
        }
        let plan = SpinPlan::sample(&self.config.spin, &mut self.rng);
        self.start(plan, Box::new(on_complete));
        true
    }

    /// Start a spin with an explicit plan. Same preconditions as
    /// [`spin`](Self::spin), and the plan must be
    /// [playable](SpinPlan::is_playable).
    pub fn spin_with_plan<F>(&mut self, plan: SpinPlan, on_complete: F) -> bool
    where
        F: FnOnce(&str) + 'static,
    {
        if !plan.is_playable() {
            warn!(?plan, "spin plan rejected");
            return false;
        }
        if !self.can_spin() {
            return false;
        }
        self.start(plan, Box::new(on_complete));
        true
    }

    /// Advance the animation to host time `now` (ms).
    ///
    /// On the frame where the spin completes, the wheel goes idle, paints its
    /// final position and calls the completion callback before returning.
    pub fn on_frame(&mut self, now: f64) -> FrameOutcome {
        let tween = match &self.phase {
            Phase::Spinning(session) => session.tween,
            Phase::Idle => return FrameOutcome::Idle,
        };

        self.angle = tween.value(now);
        self.render();

        if !tween.is_complete(now) {
            let frame = self.scheduler.request_frame();
            if let Phase::Spinning(session) = &mut self.phase {
                session.frame = frame;
            }
            return FrameOutcome::Continued;
        }

        let Phase::Spinning(session) = std::mem::replace(&mut self.phase, Phase::Idle) else {
            return FrameOutcome::Idle;
        };
        match winner_index(self.angle, self.segments.len()) {
            Some(index) => {
                let label = &self.segments[index];
                info!(index, label = %label, angle = self.angle, "wheel settled");
                (session.on_complete)(label);
                FrameOutcome::Finished { index }
            }
            None => FrameOutcome::Idle,
        }
    }

    /// Wheel configuration.
    #[must_use]
    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Drawing surface.
    #[must_use]
    pub fn surface(&self) -> &C {
        &self.surface
    }

    /// Mutable drawing surface. Call [`render`](Self::render) after resizing.
    pub fn surface_mut(&mut self) -> &mut C {
        &mut self.surface
    }

    /// Frame scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable frame scheduler.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn can_spin(&self) -> bool {
        if self.is_spinning() {
            trace!("spin rejected: already spinning");
            return false;
        }
        if self.segments.is_empty() {
            trace!("spin rejected: no segments");
            return false;
        }
        true
    }

    fn start(&mut self, plan: SpinPlan, on_complete: SpinCallback) {
        let now = self.scheduler.now();
        let tween = Tween::new(self.angle, plan.total_delta, now, plan.duration_ms);
        debug!(
            from = self.angle,
            delta = plan.total_delta,
            duration_ms = plan.duration_ms,
            segments = self.segments.len(),
            "spin started"
        );
        let frame = self.scheduler.request_frame();
        self.phase = Phase::Spinning(SpinSession {
            tween,
            frame,
            on_complete,
        });
    }
}

impl<C: Surface, S: FrameScheduler> fmt::Debug for Wheel<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wheel")
            .field("segments", &self.segments)
            .field("angle", &self.angle)
            .field("spinning", &self.is_spinning())
            .finish_non_exhaustive()
    }
}

fn between<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    (hi - lo).mul_add(rng.gen::<f64>(), lo)
}

fn collect_labels<I, L>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = L>,
    L: Into<String>,
{
    labels
        .into_iter()
        .map(Into::into)
        .filter(|label: &String| !label.is_empty())
        .collect()
}
