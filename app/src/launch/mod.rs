//! Process replacement with the configured daemon.

use std::os::unix::process::CommandExt;
use std::process::Command;

use utils::error::{Error, Result};

use crate::options::DaemonOptions;

/// Replace the current process image with `binary`.
///
/// On success this function never returns: the daemon takes over the
/// process and its exit status becomes ours. An `Err` therefore always
/// means the exec itself failed, typically because the binary is missing
/// or not executable.
pub fn launch(binary: &str, options: &DaemonOptions) -> Result<()> {
    log::info!("Launching {} {}", binary, options);

    let source = Command::new(binary).args(options.args()).exec();

    Err(Error::Exec {
        binary: binary.to_string(),
        source,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_missing_binary_reports_exec_error() {
        let options = DaemonOptions::new("root", Path::new("/tmp/c.conf"));

        let err = launch("/nonexistent/daemon-binary", &options)
            .expect_err("exec of a missing binary must fail");

        match err {
            Error::Exec { ref binary, .. } => {
                assert_eq!(binary, "/nonexistent/daemon-binary");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }

        assert!(err.to_string().contains("/nonexistent/daemon-binary"));
    }
}
