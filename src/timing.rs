//! Time-windowed wrappers: debounce, throttle, deferred one-shot calls.
//!
//! Each wrapper is a small stateful struct owning its private timer state;
//! callers only see the invoke surface plus explicit cancel/flush/reset
//! operations. Scheduling uses plain threads with condvar deadlines, so a
//! superseded or cancelled timer wakes up early instead of sleeping out its
//! window. All timestamps are monotonic (`Instant`).

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// Trailing-edge debounce: only the most recent invocation inside the quiet
/// window executes, with its own arguments.
pub struct Debouncer<A: Send + 'static> {
    inner: Arc<DebounceInner<A>>,
}

struct DebounceInner<A> {
    op: Box<dyn Fn(A) + Send + Sync>,
    wait: Duration,
    state: Mutex<DebounceState<A>>,
    wake: Condvar,
}

struct DebounceState<A> {
    // Bumped on every call/cancel/flush; a timer only fires if its
    // generation is still current at the deadline.
    generation: u64,
    pending: Option<A>,
}

impl<A: Send + 'static> Debouncer<A> {
    pub fn new(wait: Duration, op: impl Fn(A) + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(DebounceInner {
                op: Box::new(op),
                wait,
                state: Mutex::new(DebounceState {
                    generation: 0,
                    pending: None,
                }),
                wake: Condvar::new(),
            }),
        }
    }

    /// Supersedes any pending execution and restarts the quiet window with
    /// these arguments.
    pub fn call(&self, args: A) {
        let generation = {
            let mut state = self.inner.state.lock();
            state.generation += 1;
            state.pending = Some(args);
            state.generation
        };
        self.inner.wake.notify_all();
        let inner = Arc::clone(&self.inner);
        thread::spawn(move || run_after_quiet(&inner, generation));
    }

    /// Drops the pending execution. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        let had_pending = {
            let mut state = self.inner.state.lock();
            state.generation += 1;
            state.pending.take().is_some()
        };
        self.inner.wake.notify_all();
        had_pending
    }

    /// Runs the pending execution immediately instead of waiting out the
    /// window. Returns whether one was pending.
    pub fn flush(&self) -> bool {
        let pending = {
            let mut state = self.inner.state.lock();
            state.generation += 1;
            state.pending.take()
        };
        self.inner.wake.notify_all();
        match pending {
            Some(args) => {
                (self.inner.op)(args);
                true
            }
            None => false,
        }
    }
}

fn run_after_quiet<A: Send>(inner: &DebounceInner<A>, generation: u64) {
    let deadline = Instant::now() + inner.wait;
    let mut state = inner.state.lock();
    while state.generation == generation {
        if inner.wake.wait_until(&mut state, deadline).timed_out() {
            break;
        }
    }
    if state.generation != generation {
        return;
    }
    if let Some(args) = state.pending.take() {
        drop(state);
        (inner.op)(args);
    }
}

/// Leading-edge throttle: executes immediately when the window has elapsed
/// since the last execution, otherwise drops the call. No queuing, no
/// trailing call.
pub struct Throttler<A> {
    op: Box<dyn Fn(A) + Send + Sync>,
    wait: Duration,
    last_run: Mutex<Option<Instant>>,
}

impl<A> Throttler<A> {
    pub fn new(wait: Duration, op: impl Fn(A) + Send + Sync + 'static) -> Self {
        Self {
            op: Box::new(op),
            wait,
            last_run: Mutex::new(None),
        }
    }

    /// Reports whether the call executed or was dropped.
    pub fn call(&self, args: A) -> bool {
        let now = Instant::now();
        {
            let mut last_run = self.last_run.lock();
            match *last_run {
                Some(at) if now.duration_since(at) < self.wait => return false,
                _ => *last_run = Some(now),
            }
        }
        (self.op)(args);
        true
    }

    /// Forgets the last execution, so the next call runs immediately.
    pub fn reset(&self) {
        *self.last_run.lock() = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeferredState {
    Pending,
    Cancelled,
    Fired,
}

struct DeferredShared {
    state: Mutex<DeferredState>,
    wake: Condvar,
}

/// Cancellation handle for a deferred call.
pub struct Deferred {
    shared: Arc<DeferredShared>,
}

impl Deferred {
    /// Wins only while the timer has not fired. Returns whether the
    /// execution was prevented.
    pub fn cancel(&self) -> bool {
        let mut state = self.shared.state.lock();
        if *state == DeferredState::Pending {
            *state = DeferredState::Cancelled;
            self.shared.wake.notify_all();
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        *self.shared.state.lock() == DeferredState::Pending
    }
}

/// Schedules a single execution of `op(args)` after `delay`.
pub fn defer<A: Send + 'static>(
    op: impl FnOnce(A) + Send + 'static,
    delay: Duration,
    args: A,
) -> Deferred {
    let shared = Arc::new(DeferredShared {
        state: Mutex::new(DeferredState::Pending),
        wake: Condvar::new(),
    });
    let timer = Arc::clone(&shared);
    thread::spawn(move || {
        let deadline = Instant::now() + delay;
        let mut state = timer.state.lock();
        while *state == DeferredState::Pending {
            if timer.wake.wait_until(&mut state, deadline).timed_out() {
                break;
            }
        }
        if *state != DeferredState::Pending {
            return;
        }
        *state = DeferredState::Fired;
        drop(state);
        op(args);
    });
    Deferred { shared }
}
