//! Client-side product store for Inventrix: an in-memory, fetch-replace
//! cache over the gateway API with derived statistics, filtering,
//! pagination, and selection state. All mutations are pessimistic: the
//! call is awaited, then the product list is refetched in full.

pub mod abstract_trait;
pub mod error;
pub mod session;
pub mod store;
pub mod views;

pub use self::abstract_trait::{DynInventoryApi, InventoryApi};
pub use self::error::StoreError;
pub use self::session::SessionContext;
pub use self::store::ProductStore;
pub use self::views::{ProductFilter, ProductStats};
