pub mod storage;
pub mod listing_cache;
pub mod identity_provider;

pub use storage::{KeyValueStore, BrowserStorage, MemoryStorage};
pub use listing_cache::ListingCache;
pub use identity_provider::{IdentityProvider, MockIdentityProvider};
