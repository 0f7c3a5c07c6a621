//! Frame scheduling.
//!
//! The wheel never drives its own loop. It asks a [`FrameScheduler`] for one
//! callback before the next repaint, and the host calls
//! [`Wheel::on_frame`](crate::Wheel::on_frame) when that frame fires. In a
//! browser this is `requestAnimationFrame`; in tests it is
//! [`ManualScheduler`], which only moves when told to.

/// Handle identifying a requested frame, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Host facility that calls back once before the next repaint.
pub trait FrameScheduler {
    /// Current host time in milliseconds. Must share its time origin with the
    /// timestamps passed to frame callbacks.
    fn now(&self) -> f64;

    /// Request a single frame callback.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a previously requested frame. Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Deterministic scheduler with a hand-advanced clock.
///
/// Requests are recorded instead of dispatched; the caller drains them with
/// [`take_pending`](Self::take_pending) and feeds the wheel itself.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    clock: f64,
    next_handle: i32,
    pending: Option<FrameHandle>,
    requested: usize,
    cancelled: usize,
}

impl ManualScheduler {
    /// Create a scheduler with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scheduler with its clock at `now` ms.
    #[must_use]
    pub fn starting_at(now: f64) -> Self {
        Self {
            clock: now,
            ..Self::default()
        }
    }

    /// Move the clock forward by `dt` ms and return the new time.
    pub fn advance(&mut self, dt: f64) -> f64 {
        self.clock += dt;
        self.clock
    }

    /// Take the outstanding frame request, if any.
    pub fn take_pending(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    /// Whether a frame request is outstanding.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Total frames requested so far.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Total frames cancelled so far.
    #[must_use]
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn now(&self) -> f64 {
        self.clock
    }

    fn request_frame(&mut self) -> FrameHandle {
        self.next_handle += 1;
        let handle = FrameHandle(self.next_handle);
        self.pending = Some(handle);
        self.requested += 1;
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}
