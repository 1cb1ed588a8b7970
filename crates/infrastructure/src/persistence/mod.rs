//! File-backed persistence.

mod kv;
mod theme;
mod token_store;

pub use kv::FileKeyValueStore;
pub use theme::{THEME_KEY, ThemeRepository};
pub use token_store::{FileTokenStore, TOKEN_KEY};
