//! Single-slot in-flight guard.
//!
//! One user action may be outstanding at a time; further triggers fail
//! fast with [`ChainError::Busy`] instead of issuing overlapping wallet
//! or network requests. The slot releases on drop, including on error
//! paths.

use el_chain_client::ChainError;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct InFlight {
    busy: AtomicBool,
}

/// RAII token for the occupied slot.
pub struct InFlightSlot<'a> {
    owner: &'a AtomicBool,
}

impl InFlight {
    pub fn try_begin(&self) -> Result<InFlightSlot<'_>, ChainError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ChainError::Busy);
        }
        Ok(InFlightSlot { owner: &self.busy })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for InFlightSlot<'_> {
    fn drop(&mut self) {
        self.owner.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_second_action_while_one_is_outstanding() {
        let guard = InFlight::default();

        let slot = guard.try_begin().unwrap();
        assert!(guard.is_busy());
        assert!(matches!(guard.try_begin(), Err(ChainError::Busy)));

        drop(slot);
        assert!(!guard.is_busy());
        assert!(guard.try_begin().is_ok());
    }
}
