//! Write-through cart store.
//!
//! Every mutation serializes the next selection, writes it to durable
//! storage, and only then commits it in memory and notifies subscribers. A
//! failed write leaves the in-memory selection untouched, so the persisted
//! slot and the in-memory set never diverge.

use indexmap::IndexSet;
use tokio::sync::watch;

use crate::error::CartError;
use crate::notifier::{CartChange, CartEvent, CartNotifier, SubscriptionId};
use crate::storage::DurableStorage;

/// Storage key holding the JSON-encoded selection.
pub const CART_STORAGE_KEY: &str = "tripdesk.cart";

/// The visitor's selected activity ids, in the order they were added.
///
/// Created once per browsing session via [`CartStore::hydrate`] and passed to
/// whatever needs it; there is no global instance.
#[derive(Debug)]
pub struct CartStore<S: DurableStorage> {
    storage: S,
    key: String,
    items: IndexSet<String>,
    notifier: CartNotifier,
}

impl<S: DurableStorage> CartStore<S> {
    /// Load the selection from the default slot.
    pub fn hydrate(storage: S) -> Result<Self, CartError> {
        Self::hydrate_with_key(storage, CART_STORAGE_KEY)
    }

    /// Load the selection from `key`.
    ///
    /// Absent or unparseable state becomes the empty selection, which is
    /// written back. Only a storage outage is an error.
    pub fn hydrate_with_key(storage: S, key: &str) -> Result<Self, CartError> {
        let items = load(&storage, key)?;
        Ok(Self {
            notifier: CartNotifier::new(items.iter().cloned().collect()),
            storage,
            key: key.to_string(),
            items,
        })
    }

    /// Re-read the slot, replacing the in-memory selection, and notify.
    pub fn rehydrate(&mut self) -> Result<(), CartError> {
        self.items = load(&self.storage, &self.key)?;
        self.publish(CartChange::Hydrated);
        Ok(())
    }

    /// Select an activity. Returns `true` if it was not already selected.
    pub fn add(&mut self, activity_id: impl Into<String>) -> Result<bool, CartError> {
        let activity_id = activity_id.into();
        let mut next = self.items.clone();
        let inserted = next.insert(activity_id.clone());
        self.commit(next)?;
        if inserted {
            tracing::debug!(activity_id = %activity_id, "Activity added to cart");
            self.publish(CartChange::Added(activity_id));
        }
        Ok(inserted)
    }

    /// Deselect an activity. Returns `true` if it was selected.
    pub fn remove(&mut self, activity_id: &str) -> Result<bool, CartError> {
        let mut next = self.items.clone();
        let removed = next.shift_remove(activity_id);
        self.commit(next)?;
        if removed {
            tracing::debug!(activity_id = %activity_id, "Activity removed from cart");
            self.publish(CartChange::Removed(activity_id.to_string()));
        }
        Ok(removed)
    }

    /// Empty the selection.
    ///
    /// Always emits [`CartChange::Cleared`], even when the cart was already
    /// empty, so observers see an explicit empty state.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.commit(IndexSet::new())?;
        tracing::debug!("Cart cleared");
        self.publish(CartChange::Cleared);
        Ok(())
    }

    /// Selected ids in insertion order.
    pub fn snapshot(&self) -> Vec<String> {
        self.items.iter().cloned().collect()
    }

    pub fn contains(&self, activity_id: &str) -> bool {
        self.items.contains(activity_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// See [`CartNotifier::subscribe`].
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&CartEvent) + 'static,
    {
        self.notifier.subscribe(handler)
    }

    /// See [`CartNotifier::unsubscribe`].
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// See [`CartNotifier::watch`].
    pub fn watch(&self) -> watch::Receiver<Vec<String>> {
        self.notifier.watch()
    }

    /// Tear the store down, returning its storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn commit(&mut self, next: IndexSet<String>) -> Result<(), CartError> {
        write_slot(&self.storage, &self.key, &next)?;
        self.items = next;
        Ok(())
    }

    fn publish(&mut self, change: CartChange) {
        let snapshot = self.snapshot();
        self.notifier.publish(CartEvent { change, snapshot });
    }
}

fn load<S: DurableStorage>(storage: &S, key: &str) -> Result<IndexSet<String>, CartError> {
    let Some(raw) = storage.get(key)? else {
        tracing::debug!(key, "No persisted cart, starting empty");
        let empty = IndexSet::new();
        write_slot(storage, key, &empty)?;
        return Ok(empty);
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
        // The slot may hold duplicates; IndexSet keeps the first occurrence.
        Ok(ids) => Ok(ids.into_iter().collect()),
        Err(e) => {
            tracing::warn!(key, error = %e, "Persisted cart is corrupt, resetting to empty");
            let empty = IndexSet::new();
            write_slot(storage, key, &empty)?;
            Ok(empty)
        }
    }
}

fn write_slot<S: DurableStorage>(
    storage: &S,
    key: &str,
    items: &IndexSet<String>,
) -> Result<(), CartError> {
    let encoded = serde_json::to_string(items)?;
    storage.set(key, &encoded)?;
    Ok(())
}
