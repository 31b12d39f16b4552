//! CLI サブコマンドの実装

pub mod export_diff;
pub mod snapshot;

use thiserror::Error;

use crate::catalog::{
    CatalogError,
    SnapshotError,
};
use crate::config::ConfigError;
use crate::export::ExportError;

/// Defines errors that may occur while executing a command.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
