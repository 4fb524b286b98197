//! Core synchronization engine.
//!
//! ## Module Structure
//!
//! - `data`: KeyPath, DiscoveredKeys and the locale Layout
//! - `extract`: Extractor trait and the regex-based PatternExtractor
//! - `registry`: NamespaceRegistry, the namespaces backed by files
//! - `store`: canonical reading and writing of namespace JSON files
//! - `reconcile`: merging discovered keys into a document
//! - `prune`: removing undiscovered keys from a document
//! - `walk`: one-shot enumeration of source files
//! - `watch`: file-system subscription for live updates
//! - `session`: Session, which drives all of the above for one run

pub mod data;
pub mod extract;
pub mod prune;
pub mod reconcile;
pub mod registry;
pub mod session;
pub mod store;
pub mod walk;
pub mod watch;

pub use data::{DiscoveredKeys, KeyPath, Layout};
pub use registry::NamespaceRegistry;
pub use session::Session;
pub use walk::SourceFilter;
pub use watch::{StopHandle, Subscription, WatchEvent};
