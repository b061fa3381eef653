//! # Configuration
//!
//! Stickyq configuration is managed by [`confique`], layered from environment
//! variables, a TOML file and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `STICKYQ_DEFAULT_SORT_KEY`.
//! 2. **Config file**: `stickyq.toml`, or the path given to [`StickyConfig::load`].
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `content_types` | none | Content types that get the pinned flag |
//! | `default_sort_key` | `date` | Secondary sort key when the caller sent none |
//! | `default_sort_direction` | `DESC` when absent | Direction of the default sort key |
//!
//! The list of content types is injected into [`crate::registry::ContentTypeRegistry`]
//! at startup. Nothing discovers or mutates it afterwards.

use crate::error::Result;
use crate::query::{Direction, SortEntry};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name.
pub const CONFIG_FILE: &str = "stickyq.toml";

/// Configuration for stickyq, stored in `stickyq.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StickyConfig {
    /// Content types whose listings and edits support the pinned flag.
    /// When absent, no content type is targeted.
    pub content_types: Option<Vec<String>>,

    /// Sort key kept as the secondary key when pinned-first ordering is
    /// requested without a caller sort.
    #[config(default = "date", env = "STICKYQ_DEFAULT_SORT_KEY")]
    pub default_sort_key: String,

    /// Direction for `default_sort_key` ("ASC" or "DESC").
    /// When absent, defaults to "DESC".
    pub default_sort_direction: Option<Direction>,
}

impl Default for StickyConfig {
    fn default() -> Self {
        Self {
            content_types: None,
            default_sort_key: "date".to_string(),
            default_sort_direction: None,
        }
    }
}

impl StickyConfig {
    /// Load configuration: environment, then `path` if given and present, then defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// A commented sample `stickyq.toml`.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }

    /// Targeted content types, empty when none are configured.
    pub fn content_types(&self) -> &[String] {
        self.content_types.as_deref().unwrap_or(&[])
    }

    /// The default sort as a sort entry.
    pub fn default_sort(&self) -> SortEntry {
        SortEntry::field(
            self.default_sort_key.clone(),
            self.default_sort_direction.unwrap_or_default(),
        )
    }
}
