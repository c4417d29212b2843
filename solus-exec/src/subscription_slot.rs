// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use solus_core::{trace, warn, SingleSubscription, SubscriptionRef};

enum SlotState {
    Empty,
    Held(SubscriptionRef),
    Cancelled,
    Released,
}

/// Cancellation handle a consumer can hand out before the producer has called
/// `on_subscribe`.
///
/// A cancel that arrives first is remembered and applied to the producer's handle
/// the moment it is attached.
pub(crate) struct SubscriptionSlot {
    state: Mutex<SlotState>,
}

impl SubscriptionSlot {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(SlotState::Empty),
        }
    }

    /// Stores the producer's handle, or cancels it if the slot can no longer hold one.
    pub(crate) fn attach(&self, subscription: SubscriptionRef) {
        let mut state = self.state.lock();
        match *state {
            SlotState::Empty => *state = SlotState::Held(subscription),
            SlotState::Cancelled => {
                drop(state);
                trace!("subscription: handle attached after cancel; cancelling it");
                subscription.cancel();
            }
            SlotState::Held(_) => {
                drop(state);
                warn!("subscription: duplicate on_subscribe; cancelling the extra handle");
                subscription.cancel();
            }
            SlotState::Released => {
                drop(state);
                warn!("subscription: on_subscribe after a terminal signal; ignoring handle");
            }
        }
    }

    /// Drops the producer's handle once a terminal signal has been received.
    ///
    /// Returns `false`, leaving the slot untouched, if it was cancelled first. The
    /// check and the release happen under one lock, so exactly one of a racing
    /// `cancel` and a terminal signal takes effect.
    pub(crate) fn try_release(&self) -> bool {
        let mut state = self.state.lock();
        if matches!(*state, SlotState::Cancelled) {
            return false;
        }
        let previous = core::mem::replace(&mut *state, SlotState::Released);
        drop(state);
        drop(previous);
        true
    }

    #[cfg(test)]
    fn is_cancelled(&self) -> bool {
        matches!(*self.state.lock(), SlotState::Cancelled)
    }
}

impl SingleSubscription for SubscriptionSlot {
    fn cancel(&self) {
        let mut state = self.state.lock();
        if matches!(*state, SlotState::Cancelled | SlotState::Released) {
            return;
        }
        let previous = core::mem::replace(&mut *state, SlotState::Cancelled);
        drop(state);

        if let SlotState::Held(subscription) = previous {
            subscription.cancel();
        }
    }
}
