//! Configuration errors.
//!
//! Route tables and reveal timings are static, so anything wrong with them is
//! a programmer error and is reported once, at construction.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::routes::RouteGroup;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{group} route has an empty id")]
    EmptyId { group: RouteGroup },

    #[error("duplicate id '{id}' in {group} routes")]
    DuplicateId { group: RouteGroup, id: String },

    #[error("{group} route '{id}' has an empty path")]
    EmptyPath { group: RouteGroup, id: String },

    #[error("duplicate path '{path}' in {group} routes")]
    DuplicatePath { group: RouteGroup, path: String },

    #[error("top reveal delay {top:?} must be shorter than bottom reveal delay {bottom:?}")]
    RevealOrder { top: Duration, bottom: Duration },

    #[error("read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
