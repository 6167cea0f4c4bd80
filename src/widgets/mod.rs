//! Reusable UI widgets.

mod list;

pub use list::{ListItem, ListItemState, ListMenu, Neighbors};
