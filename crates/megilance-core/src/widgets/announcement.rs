//! Dismissible announcement flag persisted by id.

use crate::storage::ClientStorage;

/// Prefix of the storage key; the caller-supplied id is appended.
pub const ANNOUNCEMENT_KEY_PREFIX: &str = "ml_announce_dismissed_";

/// Storage key for an announcement id.
pub fn announcement_key(id: &str) -> String {
    format!("{ANNOUNCEMENT_KEY_PREFIX}{id}")
}

/// Visibility of one announcement.
///
/// Shown by default; hidden from the start when its key is already present.
/// Storage failures read as "not dismissed" and dismissals that cannot be
/// written still hide the banner for this session.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Announcement {
    id: String,
    visible: bool,
}

impl Announcement {
    pub fn load(id: impl Into<String>, storage: &dyn ClientStorage) -> Self {
        let id = id.into();
        let dismissed = storage.get_or_absent(&announcement_key(&id)).is_some();
        Self {
            id,
            visible: !dismissed,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn dismiss(&mut self, storage: &dyn ClientStorage) {
        storage.set_or_skip(&announcement_key(&self.id), "1");
        self.visible = false;
        tracing::debug!(id = %self.id, "announcement dismissed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiError;
    use crate::storage::MemoryStorage;

    struct BrokenStorage;

    impl ClientStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, UiError> {
            Err(UiError::Storage("unavailable".into()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), UiError> {
            Err(UiError::Storage("unavailable".into()))
        }
        fn remove(&self, _key: &str) -> Result<(), UiError> {
            Err(UiError::Storage("unavailable".into()))
        }
    }

    #[test]
    fn key_format() {
        assert_eq!(announcement_key("welcome"), "ml_announce_dismissed_welcome");
    }

    #[test]
    fn dismissal_survives_remount_for_same_id_only() {
        let storage = MemoryStorage::new();

        let mut welcome = Announcement::load("welcome", &storage);
        assert!(welcome.is_visible());
        welcome.dismiss(&storage);
        assert!(!welcome.is_visible());
        assert_eq!(storage.get("ml_announce_dismissed_welcome").unwrap().as_deref(), Some("1"));

        assert!(!Announcement::load("welcome", &storage).is_visible());
        assert!(Announcement::load("promo", &storage).is_visible());
    }

    #[test]
    fn storage_failures_are_swallowed() {
        let mut banner = Announcement::load("welcome", &BrokenStorage);
        assert!(banner.is_visible());
        banner.dismiss(&BrokenStorage);
        assert!(!banner.is_visible());
    }
}
