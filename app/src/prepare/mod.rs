//! Runtime layout preparation: directory creation and configuration install.

use std::fs;
use std::path::{Path, PathBuf};

use utils::app_config::LayoutConfig;
use utils::error::{Error, Result};

use crate::context::SnapContext;


/// Create every path in `paths`, including missing ancestors.
///
/// Already existing directories are left untouched, so repeated runs are
/// idempotent. Any creation failure aborts the whole sequence.
pub fn ensure_directories<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path).map_err(|e| Error::Filesystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Ensured directory {}", path.display());
    }

    Ok(())
}

/// Overwrite `dst` with the contents of `src`, unconditionally.
///
/// Returns the number of bytes copied. Permission bits of `src` carry over,
/// matching a plain `cp`.
pub fn install_config(src: &Path, dst: &Path) -> Result<u64> {
    let bytes = fs::copy(src, dst).map_err(|e| {
        // Point at the side that failed; a missing or unreadable template
        // is the common case.
        let path = if src.exists() { dst } else { src };
        Error::Filesystem {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    log::info!(
        "Installed {} to {} ({} bytes)",
        src.display(),
        dst.display(),
        bytes
    );

    Ok(bytes)
}

/// Prepare the runtime layout for the daemon.
///
/// Creates the configured directories under the data and common roots, then
/// installs the packaged configuration template. Returns the path of the
/// installed configuration file.
pub fn prepare(context: &SnapContext, layout: &LayoutConfig) -> Result<PathBuf> {
    let data_dirs: Vec<PathBuf> = layout
        .data_dirs
        .iter()
        .map(|dir| context.data_path(dir))
        .collect();
    let common_dirs: Vec<PathBuf> = layout
        .common_dirs
        .iter()
        .map(|dir| context.common_path(dir))
        .collect();

    ensure_directories(&data_dirs)?;
    ensure_directories(&common_dirs)?;

    let template = context.snap_path(&layout.config_template);
    let config_file = context.data_path(&layout.config_file);
    install_config(&template, &config_file)?;

    Ok(config_file)
}
