//! Shared "what is the user looking at" store.
//!
//! Host pages publish a [`PageContextData`] snapshot; chat sessions read it
//! when composing a request. One snapshot at a time, last write wins.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use askthom_types::PageContextData;

#[derive(Debug, Default)]
struct Slot {
    data: Option<PageContextData>,
    /// Bumped on every write, including clears
    revision: u64,
    /// Change key of the last snapshot that was logged
    last_key: Option<String>,
}

/// Cloneable handle to the page context store
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    inner: Arc<RwLock<Slot>>,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Slot> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Slot> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the current snapshot. Returns the revision of this write.
    pub fn set(&self, data: PageContextData) -> u64 {
        let mut slot = self.write();

        let key = data.change_key();
        if slot.last_key.as_deref() != Some(key.as_str()) {
            log::info!(
                "Page context changed: {} (viewing {})",
                data.page_name,
                data.viewing().unwrap_or_else(|| "none".to_string())
            );
            slot.last_key = Some(key);
        }

        slot.data = Some(data);
        slot.revision += 1;
        slot.revision
    }

    pub fn clear(&self) {
        let mut slot = self.write();
        log::debug!("Clearing page context");
        slot.data = None;
        slot.revision += 1;
    }

    /// Clear only if nothing was written since `revision`
    fn clear_if_current(&self, revision: u64) -> bool {
        let mut slot = self.write();
        if slot.revision != revision {
            return false;
        }
        log::debug!("Clearing page context");
        slot.data = None;
        slot.revision += 1;
        true
    }

    pub fn snapshot(&self) -> Option<PageContextData> {
        self.read().data.clone()
    }

    pub fn is_set(&self) -> bool {
        self.read().data.is_some()
    }

    /// Publish `data` for as long as the returned registration lives
    pub fn register(&self, data: PageContextData) -> PageContextRegistration {
        let revision = self.set(data);
        PageContextRegistration {
            context: self.clone(),
            revision,
        }
    }
}

/// Set-on-mount / clear-on-drop registration of a page's context.
///
/// Dropping it clears the store unless another page has written since,
/// so a late unmount cannot wipe the next page's snapshot.
#[derive(Debug)]
pub struct PageContextRegistration {
    context: PageContext,
    revision: u64,
}

impl PageContextRegistration {
    /// Republish after the page's data changed
    pub fn update(&mut self, data: PageContextData) {
        self.revision = self.context.set(data);
    }
}

impl Drop for PageContextRegistration {
    fn drop(&mut self) {
        self.context.clear_if_current(self.revision);
    }
}
