//! Resolution of the snap environment roots.
//!
//! snapd hands every service the three roots as environment variables:
//! `SNAP` is the read-only package payload, `SNAP_DATA` the versioned data
//! directory, `SNAP_COMMON` the shared state surviving refreshes. The
//! launcher resolves them once, up front, and fails fatally when one is
//! absent.

use std::env;
use std::path::{Path, PathBuf};

use utils::error::{Error, Result};

/// Environment variable naming the read-only package root.
pub const SNAP: &str = "SNAP";
/// Environment variable naming the versioned data root.
pub const SNAP_DATA: &str = "SNAP_DATA";
/// Environment variable naming the shared-state root.
pub const SNAP_COMMON: &str = "SNAP_COMMON";

/// Resolved snap roots the launcher operates under.
#[derive(Debug, Clone)]
pub struct SnapContext {
    snap: PathBuf,
    snap_data: PathBuf,
    snap_common: PathBuf,
}

impl SnapContext {
    /// Build a context from explicit roots.
    pub fn new(
        snap: impl Into<PathBuf>,
        snap_data: impl Into<PathBuf>,
        snap_common: impl Into<PathBuf>,
    ) -> Self {
        Self {
            snap: snap.into(),
            snap_data: snap_data.into(),
            snap_common: snap_common.into(),
        }
    }

    /// Resolve the context from the snap environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            snap: required_var(SNAP)?,
            snap_data: required_var(SNAP_DATA)?,
            snap_common: required_var(SNAP_COMMON)?,
        })
    }

    pub fn snap(&self) -> &Path {
        &self.snap
    }

    pub fn snap_data(&self) -> &Path {
        &self.snap_data
    }

    pub fn snap_common(&self) -> &Path {
        &self.snap_common
    }

    /// Join a relative path onto $SNAP.
    pub fn snap_path<P: AsRef<Path>>(&self, rel: P) -> PathBuf {
        self.snap.join(rel)
    }

    /// Join a relative path onto $SNAP_DATA.
    pub fn data_path<P: AsRef<Path>>(&self, rel: P) -> PathBuf {
        self.snap_data.join(rel)
    }

    /// Join a relative path onto $SNAP_COMMON.
    pub fn common_path<P: AsRef<Path>>(&self, rel: P) -> PathBuf {
        self.snap_common.join(rel)
    }
}

/// Read a mandatory environment variable. Empty counts as missing.
fn required_var(name: &str) -> Result<PathBuf> {
    match env::var_os(name) {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Err(Error::Environment(name.to_string())),
    }
}
