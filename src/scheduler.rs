//=========================================================================
// Deferred Queue
//=========================================================================
//
// Single-shot deferred tasks scheduled on the frame clock.
//
// Tasks are plain typed values, not callbacks. The owner schedules a task
// with a delay, keeps the returned handle if it may need to cancel it, and
// advances the queue once per frame. Due tasks come back to the owner,
// which applies them.
//
// Flow:
//   schedule(delay, task) → TaskHandle
//   tick(dt)              → moves the clock
//   take_due()            → Vec<T>   (due tasks, by due time then FIFO)
//   advance(dt)           → tick(dt) + take_due()
//   cancel(handle)        → bool
//
// Owners that receive work during a frame tick first, schedule, then take
// due tasks, so the frame's delta never counts toward work scheduled in it.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};

/// Slack applied when comparing due times, so that delays and frame
/// deltas given as `f32` land on the frame where they add up.
const DUE_EPSILON: f64 = 1e-6;

//=== TaskHandle ==========================================================

/// Identifies a scheduled task so it can be cancelled or queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

//=== DeferredQueue =======================================================

struct Pending<T> {
    handle: TaskHandle,
    due: f64,
    task: T,
}

/// Queue of tasks that become due after a delay on the frame clock.
///
/// The queue keeps its own clock, advanced only by [`DeferredQueue::tick`]
/// (or [`DeferredQueue::advance`]).
/// Nothing runs between frames.
pub struct DeferredQueue<T> {
    pending: Vec<Pending<T>>,
    clock: f64,
    next_id: u64,
}

impl<T> DeferredQueue<T> {
    /// Creates an empty queue with its clock at zero.
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            clock: 0.0,
            next_id: 0,
        }
    }

    /// Schedules `task` to become due `delay` time units from now.
    ///
    /// A zero delay makes the task due on the next
    /// [`take_due`](Self::take_due).
    ///
    /// # Panics
    ///
    /// Panics if `delay` is negative or not finite.
    pub fn schedule(&mut self, delay: f32, task: T) -> TaskHandle {
        assert!(
            delay.is_finite() && delay >= 0.0,
            "Task delay must be a non-negative number, got {}",
            delay
        );

        let handle = TaskHandle(self.next_id);
        self.next_id += 1;

        self.pending.push(Pending {
            handle,
            due: self.clock + f64::from(delay),
            task,
        });

        debug!("Scheduled task {:?} in {}s", handle, delay);
        handle
    }

    /// Cancels a pending task. Returns `false` if it already ran or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        match self.pending.iter().position(|p| p.handle == handle) {
            Some(index) => {
                self.pending.remove(index);
                debug!("Cancelled task {:?}", handle);
                true
            }
            None => {
                warn!("Task {:?} is not pending; nothing to cancel", handle);
                false
            }
        }
    }

    /// Returns `true` if the task has neither run nor been cancelled.
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.iter().any(|p| p.handle == handle)
    }

    /// Moves the clock forward by `dt` and takes every task now due.
    pub fn advance(&mut self, dt: f32) -> Vec<T> {
        self.tick(dt);
        self.take_due()
    }

    /// Moves the clock forward by `dt` without taking due tasks.
    pub fn tick(&mut self, dt: f32) {
        self.clock += f64::from(dt.max(0.0));
    }

    /// Takes every task whose due time has been reached.
    ///
    /// Returned tasks are ordered by due time; ties keep scheduling order.
    pub fn take_due(&mut self) -> Vec<T> {
        let horizon = self.clock + DUE_EPSILON;
        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= horizon);
        self.pending = waiting;

        // Handles grow monotonically, so they break ties in FIFO order.
        due.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.handle.0.cmp(&b.handle.0)));
        due.into_iter().map(|p| p.task).collect()
    }

    /// Returns the number of pending tasks.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if no task is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drops every pending task. The clock keeps running.
    pub fn clear(&mut self) {
        self.pending.clear()
    }
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
