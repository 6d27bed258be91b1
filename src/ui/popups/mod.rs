//! Modal popups drawn over the cart list.

pub mod add_item;
pub mod item_details;
