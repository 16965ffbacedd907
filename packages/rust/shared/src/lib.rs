//! Shared types, error model, and configuration for tocify.
//!
//! This crate is the foundation depended on by all other tocify crates.
//! It provides:
//! - [`TocifyError`] — the unified error type
//! - Domain types ([`ClassifiedLine`], [`SectionEntry`], [`BodyItem`], [`Document`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, ParserConfig, ServerConfig, config_dir, config_file_path, init_config,
    load_config, load_config_from,
};
pub use error::{Result, TocifyError};
pub use types::{BodyItem, ClassifiedLine, DEFAULT_MARKER, Document, SectionEntry};
