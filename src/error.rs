//! Error types.
//!
//! Each stage of a run has its own error enum; [`Error`] wraps them for the
//! run entry point.

use crate::models::{CidrError, Ipv4};
use std::path::PathBuf;
use thiserror::Error;

/// Bad command-line input or request file, detected before allocation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base CIDR network format '{input}': {source}")]
    InvalidBaseNetwork {
        input: String,
        #[source]
        source: CidrError,
    },
    #[error("JSON file does not exist: {}", .0.display())]
    MissingInputFile(PathBuf),
    #[error("location code must be exactly 3 characters, got '{0}'")]
    InvalidLocationCode(String),
    #[error("company name must not be empty")]
    EmptyCompanyName,
    #[error("error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error parsing {} at '{json_path}': {message}", .path.display())]
    ParseInput {
        path: PathBuf,
        json_path: String,
        message: String,
    },
}

/// A request could not be satisfied, or was not valid for the base network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocationError {
    #[error("base network {0} has host bits set")]
    InvalidBaseNetwork(Ipv4),
    #[error("no subnet requests to allocate")]
    NoRequests,
    #[error("invalid request '{name}': {reason}")]
    InvalidRequest { name: String, reason: String },
    #[error("no free /{requested_prefix_length} subnet left in {base} for request '{name}'")]
    Exhausted {
        name: String,
        requested_prefix_length: u8,
        base: Ipv4,
    },
}

/// Writing an export artifact failed.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("error writing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error serializing allocation set: {0}")]
    Json(#[from] serde_json::Error),
}

/// Terminal outcome of a failed run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Allocation(#[from] AllocationError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
