//! Command implementations

mod items;
mod lists;
mod saved;
mod session;

pub use items::{add, reorder, toggle};
pub use lists::{delete, lists, new_list, rename, show};
pub use saved::saved;
