use crate::errors::PoolError;
use crate::storage::{get_is_locked, set_is_locked};
use soroban_sdk::{panic_with_error, Env};

// Held for the whole span of a state-mutating operation. A nested entry
// into the same instance while it is held aborts the call.
// An aborted call rolls the lock back together with every other write.
#[must_use]
pub struct ReentrancyGuard {
    env: Env,
}

impl ReentrancyGuard {
    pub fn acquire(e: &Env) -> Self {
        if get_is_locked(e) {
            panic_with_error!(e, PoolError::Reentrancy);
        }
        set_is_locked(e, &true);
        ReentrancyGuard { env: e.clone() }
    }

    pub fn release(self) {
        set_is_locked(&self.env, &false);
    }
}
