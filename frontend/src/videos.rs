pub mod api;
pub mod components;
pub mod cursor;
pub mod error;
pub mod state;
