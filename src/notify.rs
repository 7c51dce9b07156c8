//=========================================================================
// State Change Notifications
//=========================================================================
//
// Broadcast hub for game-state-changed notifications.
//
// Architecture:
//   StateChangeHub ──publish()──> Sender<StateChange> (one per subscriber)
//                                        │
//   Subscription  <──drain()───  Receiver<StateChange>
//
// A `Subscription` is the registration itself: dropping it removes the
// subscriber from the hub. Everything runs on the frame loop thread, so
// the registry is shared through `Rc<RefCell<_>>`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::state::StateChange;

//=== Registry ============================================================

struct Registry {
    subscribers: Vec<(u64, Sender<StateChange>)>,
    next_id: u64,
}

//=== StateChangeHub ======================================================

/// Emits [`StateChange`] notifications to every live subscriber.
///
/// Cloning the hub yields another handle to the same subscriber list, so
/// the game-state source and the composition root can each hold one.
#[derive(Clone)]
pub struct StateChangeHub {
    registry: Rc<RefCell<Registry>>,
}

impl StateChangeHub {
    /// Creates a hub with no subscribers.
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                subscribers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Registers a new subscriber.
    ///
    /// The subscriber stays registered until the returned [`Subscription`]
    /// is dropped.
    pub fn subscribe(&self) -> Subscription {
        let (sender, receiver) = unbounded();

        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.subscribers.push((id, sender));

        debug!("Subscriber {} registered", id);

        Subscription {
            id,
            receiver,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Delivers `change` to every subscriber, in subscription order.
    pub fn publish(&self, change: StateChange) {
        debug!("Publishing {:?} -> {:?}", change.old, change.new);

        self.registry
            .borrow_mut()
            .subscribers
            .retain(|(id, sender)| match sender.send(change) {
                Ok(()) => true,
                Err(_) => {
                    warn!("Subscriber {} disconnected; pruning", id);
                    false
                }
            });
    }

    /// Returns the number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().subscribers.len()
    }
}

impl Default for StateChangeHub {
    fn default() -> Self {
        Self::new()
    }
}

//=== Subscription ========================================================

/// Registration guard for one subscriber of a [`StateChangeHub`].
///
/// Notifications queue up until drained. Dropping the guard deregisters
/// it from the hub.
pub struct Subscription {
    id: u64,
    receiver: Receiver<StateChange>,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Takes every notification received since the last drain, oldest first.
    pub fn drain(&self) -> impl Iterator<Item = StateChange> + '_ {
        self.receiver.try_iter()
    }

    /// Returns the number of notifications waiting to be drained.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .subscribers
                .retain(|(id, _)| *id != self.id);
            debug!("Subscriber {} deregistered", self.id);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
