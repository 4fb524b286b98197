//! locsync - keep i18next locale files in sync with the source code
//!
//! locsync scans source files for `react-i18next` lookups, adds every key it
//! finds to the JSON file of its namespace in each language directory, and
//! can remove translations that are no longer used. A watch mode keeps the
//! files up to date while you edit.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, driver, console output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, namespace registry, reconciliation, pruning, walking and watching
//! - `issues`: Issue and change definitions produced by the core

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
