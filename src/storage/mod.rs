//! # Storage Layer
//!
//! Record storage, export and configuration for FarmTech.
//!
//! ## Where Data Lives
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Records | In memory only | lost on exit |
//! | Export | CSV, unquoted | `dados_agricultura.csv` (configurable) |
//! | Config | TOML | `farmtech.toml` or `~/.config/farmtech/config.toml` |
//!
//! Nothing is loaded at startup: every session begins with an empty store.
//!
//! ## Key Types
//!
//! - [`RecordStore`] - Ordered planting records with stable identifiers
//! - [`CsvExporter`] - Writes the export file (temp file + lock + rename)
//! - [`Config`] - Optional settings

mod records;
pub mod csv;
mod config;

pub use records::{RecordStore, StoreError};
pub use csv::{CsvExporter, DEFAULT_EXPORT_FILE};
pub use config::{Config, ConfigError, FarmConfig};
