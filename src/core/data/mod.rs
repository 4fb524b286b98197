//! Core data types shared by the extractor, registry and session.
//!
//! ## Module Structure
//!
//! - `key_path`: KeyPath, the `(key, inner)` address of a translation entry
//! - `layout`: Layout, the locales root and the language directories below it

pub mod key_path;
pub mod layout;

pub use key_path::{DiscoveredKeys, KeyPath};
pub use layout::Layout;
