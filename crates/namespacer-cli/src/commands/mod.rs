pub mod check;
pub mod map_catalog;
pub mod map_messages;
