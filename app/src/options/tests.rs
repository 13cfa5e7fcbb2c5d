#[cfg(test)]
mod tests {
    use crate::options::DaemonOptions;
    use std::ffi::{OsStr, OsString};
    use std::fs;
    use std::os::unix::ffi::OsStrExt;
    use std::path::Path;
    use tempfile::tempdir;

    #[test]
    fn test_base_options() {
        let options = DaemonOptions::new("root", Path::new("/tmp/c.conf"));

        assert_eq!(options.args(), &["-u", "root", "-d", "-f", "/tmp/c.conf"]);
        assert_eq!(options.to_string(), "-u root -d -f /tmp/c.conf");
        assert!(!options.skips_clock_set());
    }

    #[test]
    fn test_user_is_not_hardcoded() {
        let options = DaemonOptions::new("ntp", Path::new("/var/lib/ntp/ntp.conf"));

        assert_eq!(options.to_string(), "-u ntp -d -f /var/lib/ntp/ntp.conf");
    }

    #[test]
    fn test_non_utf8_config_path_is_preserved() {
        let raw = OsStr::from_bytes(b"/tmp/chron\xffy.conf");

        let options = DaemonOptions::new("root", Path::new(raw));

        // The path survives byte-for-byte; only the rendering is lossy.
        assert_eq!(options.args().last().map(OsString::as_os_str), Some(raw));
        assert_eq!(options.to_string(), "-u root -d -f /tmp/chron\u{fffd}y.conf");
    }

    #[test]
    fn test_absent_marker_leaves_options_unchanged() {
        let temp_dir = tempdir().unwrap();
        let marker = temp_dir.path().join("container");

        let options =
            DaemonOptions::new("root", Path::new("/tmp/c.conf")).with_marker(&marker);

        assert_eq!(options.to_string(), "-u root -d -f /tmp/c.conf");
        assert!(!options.skips_clock_set());
    }

    #[test]
    fn test_present_marker_appends_no_clock_set() {
        let temp_dir = tempdir().unwrap();
        let marker = temp_dir.path().join("container");
        fs::write(&marker, "").unwrap();

        let options =
            DaemonOptions::new("root", Path::new("/tmp/c.conf")).with_marker(&marker);

        assert_eq!(options.to_string(), "-u root -d -f /tmp/c.conf -x");
        assert_eq!(
            options.args().last().map(OsString::as_os_str),
            Some(OsStr::new("-x"))
        );
        assert!(options.skips_clock_set());
    }

    #[test]
    fn test_marker_is_checked_at_call_time() {
        let temp_dir = tempdir().unwrap();
        let marker = temp_dir.path().join("container");

        let before = DaemonOptions::new("root", Path::new("/tmp/c.conf")).with_marker(&marker);
        fs::write(&marker, "").unwrap();
        let after = DaemonOptions::new("root", Path::new("/tmp/c.conf")).with_marker(&marker);

        assert!(!before.skips_clock_set());
        assert!(after.skips_clock_set());
    }

    #[test]
    fn test_marker_directory_counts_as_present() {
        let temp_dir = tempdir().unwrap();
        let marker = temp_dir.path().join("container");
        fs::create_dir(&marker).unwrap();

        let options =
            DaemonOptions::new("root", Path::new("/tmp/c.conf")).with_marker(&marker);

        assert!(options.skips_clock_set());
    }
}
