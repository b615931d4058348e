use bevy::prelude::*;

use super::error::{InstanceId, LifecycleError};

/// Pointer-move and resize listener ownership for the whole process.
///
/// At most one scene instance is registered. Registration hands out a
/// [`ListenerRegistration`] that must be given back to unregister, so a
/// registration can be released exactly once.
#[derive(Resource, Debug, Default)]
pub struct InputSurface {
    owner: Option<InstanceId>,
}

/// Proof that an instance holds the listeners. Deliberately not `Clone`.
#[derive(Debug, PartialEq, Eq)]
pub struct ListenerRegistration {
    owner: InstanceId,
}

impl ListenerRegistration {
    pub fn owner(&self) -> InstanceId {
        self.owner
    }
}

impl InputSurface {
    pub fn register(&mut self, id: InstanceId) -> Result<ListenerRegistration, LifecycleError> {
        if let Some(owner) = self.owner {
            return Err(LifecycleError::ListenersAlreadyRegistered { owner });
        }

        self.owner = Some(id);
        Ok(ListenerRegistration { owner: id })
    }

    /// Release a registration. Returns false if it no longer owns the surface.
    pub fn unregister(&mut self, registration: ListenerRegistration) -> bool {
        if self.owner == Some(registration.owner) {
            self.owner = None;
            true
        } else {
            false
        }
    }

    pub fn owner(&self) -> Option<InstanceId> {
        self.owner
    }

    pub fn is_listening(&self, id: InstanceId) -> bool {
        self.owner == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_registration_is_rejected() {
        let mut surface = InputSurface::default();
        let first = surface.register(InstanceId(1)).unwrap();

        assert_eq!(
            surface.register(InstanceId(2)),
            Err(LifecycleError::ListenersAlreadyRegistered {
                owner: InstanceId(1)
            })
        );
        assert_eq!(
            surface.register(InstanceId(1)),
            Err(LifecycleError::ListenersAlreadyRegistered {
                owner: InstanceId(1)
            })
        );

        assert!(surface.unregister(first));
        assert_eq!(surface.owner(), None);
        assert!(surface.register(InstanceId(2)).is_ok());
        assert!(surface.is_listening(InstanceId(2)));
    }
}
