use crate::domain::matching::QueryProfile;
use parking_lot::RwLock;
use std::sync::Arc;

/// The last profile submitted through the generator
///
/// Handles are cloned into the views that need it; every clone sees the same slot.
/// Starts empty and is only ever replaced by a newer submission.
#[derive(Debug, Clone, Default)]
pub struct UserJourney {
    profile: Arc<RwLock<Option<QueryProfile>>>,
}

impl UserJourney {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_profile(&self, profile: QueryProfile) {
        *self.profile.write() = Some(profile);
    }

    pub fn profile(&self) -> Option<QueryProfile> {
        self.profile.read().clone()
    }

    pub fn has_profile(&self) -> bool {
        self.profile.read().is_some()
    }
}
