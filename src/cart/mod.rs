//! Cart domain: items, the persistent store, and its errors.
//!
//! - [`item`] - [`CartItem`] and id generation
//! - [`store`] - [`CartStore`], the single owner of cart state
//! - [`error`] - [`CartError`]

pub mod error;
pub mod item;
pub mod store;

pub use error::CartError;
pub use item::CartItem;
pub use store::{CART_STORAGE_KEY, CartStore};
