//! Assembly of the daemon option list.

use std::ffi::OsString;
use std::fmt;
use std::path::Path;

#[cfg(test)]
mod tests;

/// Argument list handed to the daemon.
///
/// The fixed base is `-u <user> -d -f <config-file>`: drop to the given
/// user, stay in the foreground, read the installed configuration. The
/// conditional `-x` suffix disables clock stepping.
///
/// Arguments are kept as OS strings so the config path reaches exec
/// byte-for-byte even when it is not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonOptions {
    args: Vec<OsString>,
}

impl DaemonOptions {
    /// Build the fixed base options.
    pub fn new(user: &str, config_file: &Path) -> Self {
        let args = vec![
            OsString::from("-u"),
            OsString::from(user),
            OsString::from("-d"),
            OsString::from("-f"),
            config_file.as_os_str().to_os_string(),
        ];

        Self { args }
    }

    /// Append `-x` when `marker` exists at call time.
    ///
    /// Containers must not step the host clock, so the marker's presence
    /// switches the daemon to leave the clock alone.
    pub fn with_marker(mut self, marker: &Path) -> Self {
        if marker.exists() {
            log::info!(
                "Container marker {} present, disabling clock set",
                marker.display()
            );
            self.args.push(OsString::from("-x"));
        }

        self
    }

    /// Whether the options carry the no-clock-set flag.
    pub fn skips_clock_set(&self) -> bool {
        self.args.iter().any(|arg| arg == "-x")
    }

    /// The assembled argument list, in order.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

impl fmt::Display for DaemonOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, arg) in self.args.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", arg.to_string_lossy())?;
        }

        Ok(())
    }
}
