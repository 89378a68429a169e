//! Liveness tokens for callbacks that may outlive their page.
//!
//! The owner keeps a [`Liveness`]; callbacks capture a [`LivenessWatch`].
//! Once the owner revokes (or is dropped), every watch reports dead.

use std::rc::{Rc, Weak};

#[derive(Debug)]
pub struct Liveness {
    token: Rc<()>,
}

#[derive(Debug, Clone)]
pub struct LivenessWatch {
    token: Weak<()>,
}

impl Liveness {
    pub fn new() -> Self {
        Self { token: Rc::new(()) }
    }

    pub fn watch(&self) -> LivenessWatch {
        LivenessWatch {
            token: Rc::downgrade(&self.token),
        }
    }

    pub fn revoke(self) {
        drop(self);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl LivenessWatch {
    pub fn is_alive(&self) -> bool {
        self.token.strong_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_follows_owner() {
        let owner = Liveness::new();
        let a = owner.watch();
        let b = a.clone();
        assert!(a.is_alive() && b.is_alive());
        owner.revoke();
        assert!(!a.is_alive());
        assert!(!b.is_alive());
    }

    #[test]
    fn test_drop_revokes() {
        let watch = {
            let owner = Liveness::default();
            owner.watch()
        };
        assert!(!watch.is_alive());
    }
}
