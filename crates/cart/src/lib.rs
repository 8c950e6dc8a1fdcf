//! Client-side activity selection ("cart").
//!
//! - [`CartStore`]: write-through set of selected activity ids, rehydrated
//!   from a [`DurableStorage`] slot at startup.
//! - [`CartNotifier`]: publish/subscribe fan-out of cart changes to UI
//!   surfaces such as the drawer.
//! - [`storage`]: durable storage backends (in-memory, file-per-key).
//! - [`visibility`]: route policy deciding where the cart drawer shows.
//!
//! The cart never leaves the device; it is folded into a trip request only
//! when the visitor submits.

pub mod error;
pub mod notifier;
pub mod storage;
pub mod store;
pub mod visibility;

pub use error::{CartError, StorageError};
pub use notifier::{CartChange, CartEvent, CartNotifier, SubscriptionId};
pub use storage::{DurableStorage, FileStorage, MemoryStorage};
pub use store::{CartStore, CART_STORAGE_KEY};
