//! Inquiry cart shared by the catalog, the contact form and the navbar badge

use contracts::shared::inquiry_cart::{compose_inquiry_message, strip_inquiry_block, InquiryCartStore};
use leptos::prelude::*;

use super::storage::LocalStorage;

/// Reactive view of the persisted inquiry cart.
///
/// Storage stays the source of truth; `count` mirrors it. Writes made through
/// this context update the mirror at once, writes made elsewhere (another
/// tab) are picked up by [`InquiryContext::refresh`], which the navbar runs
/// on an interval.
#[derive(Clone, Copy)]
pub struct InquiryContext {
    count: RwSignal<usize>,
    items: RwSignal<Vec<String>>,
}

impl InquiryContext {
    pub fn new() -> Self {
        let items = Self::store().items();
        Self {
            count: RwSignal::new(items.len()),
            items: RwSignal::new(items),
        }
    }

    pub fn store() -> InquiryCartStore<LocalStorage> {
        InquiryCartStore::new(LocalStorage)
    }

    pub fn count(&self) -> Signal<usize> {
        self.count.into()
    }

    pub fn items(&self) -> Signal<Vec<String>> {
        self.items.into()
    }

    pub fn add(&self, name: &str) -> bool {
        let changed = Self::store().add(name);
        if changed {
            log::debug!("inquiry cart: added {}", name);
        }
        self.refresh();
        changed
    }

    pub fn remove(&self, name: &str) -> bool {
        let changed = Self::store().remove(name);
        self.refresh();
        changed
    }

    pub fn clear(&self) {
        Self::store().clear();
        self.refresh();
    }

    /// `message` with the current cart merged in; an empty cart strips any
    /// block left from earlier items
    pub fn merge_into_message(&self, message: &str) -> String {
        let items = self.items.get_untracked();
        if items.is_empty() {
            strip_inquiry_block(message)
        } else {
            compose_inquiry_message(message, &items)
        }
    }

    /// Re-read storage; signals are written only when the set changed
    pub fn refresh(&self) {
        let items = Self::store().items();
        if self.items.with_untracked(|current| *current != items) {
            self.count.set(items.len());
            self.items.set(items);
        }
    }
}

impl Default for InquiryContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_inquiry_cart() -> InquiryContext {
    use_context::<InquiryContext>().expect("InquiryContext not found in context")
}
