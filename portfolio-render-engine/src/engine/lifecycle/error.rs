use std::fmt;

use thiserror::Error;

/// Identity of one mount of one page. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(pub u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Uninitialized,
    Active,
    Disposed,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("input listeners are still registered to scene {owner}")]
    ListenersAlreadyRegistered { owner: InstanceId },

    #[error("cannot {action} a scene that is {phase:?}")]
    InvalidTransition {
        phase: LifecyclePhase,
        action: &'static str,
    },
}
