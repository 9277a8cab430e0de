//! Duplicate-submit guard for mutations.
//!
//! A logical operation (e.g. "save contact") is admitted once until it
//! finishes. Submit buttons read [`InFlight::is_pending`] to disable
//! themselves; a second click while pending is dropped.

#[cfg(test)]
#[path = "inflight_test.rs"]
mod inflight_test;

use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Login,
    VerifyOtp,
    Logout,
    SaveContact,
    DeleteContact,
    SaveMeasurement,
    DeleteMeasurement,
    SaveTailoringItem,
    DeleteTailoringItem,
    SaveUser,
    DeleteUser,
    SaveRights,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InFlight {
    pending: HashSet<Operation>,
}

impl InFlight {
    /// Admit `op` unless it is already running.
    pub fn try_begin(&mut self, op: Operation) -> bool {
        let admitted = self.pending.insert(op);
        if !admitted {
            log::debug!("{op:?} already in flight; dropped");
        }
        admitted
    }

    pub fn finish(&mut self, op: Operation) {
        self.pending.remove(&op);
    }

    pub fn is_pending(&self, op: Operation) -> bool {
        self.pending.contains(&op)
    }
}
