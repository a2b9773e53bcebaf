//! File access used by the loader.
//!
//! The loader needs two things from the filesystem: the permission bits of the
//! netrc file and its contents. [`FileAccess`] abstracts both so other sources
//! (or tests) can stand in for the local disk.

use std::io;
use std::path::Path;

/// Owner read and write. The only bits a netrc file may carry.
pub const ALLOWED_MODE: u32 = 0o600;

/// Mask selecting the permission bits of a file mode.
const PERMISSION_BITS: u32 = 0o777;

/// Read access to netrc files.
pub trait FileAccess {
    /// Permission bits of the file at `path`, as Unix mode bits.
    fn mode(&self, path: &Path) -> io::Result<u32>;

    /// Whole file contents as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// [`FileAccess`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileAccess;

impl FileAccess for LocalFileAccess {
    #[cfg(unix)]
    fn mode(&self, path: &Path) -> io::Result<u32> {
        use std::os::unix::fs::PermissionsExt;
        Ok(std::fs::metadata(path)?.permissions().mode())
    }

    #[cfg(not(unix))]
    fn mode(&self, _path: &Path) -> io::Result<u32> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "permission bits are only available on Unix",
        ))
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Whether `mode` grants nothing beyond owner read/write.
///
/// File-type bits above the permission bits are ignored.
pub fn is_safe_mode(mode: u32) -> bool {
    ((mode & PERMISSION_BITS) | ALLOWED_MODE) == ALLOWED_MODE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_modes() {
        assert!(is_safe_mode(0o600));
        assert!(is_safe_mode(0o400));
        assert!(is_safe_mode(0o200));
        assert!(is_safe_mode(0o000));
        // Regular file type bits
        assert!(is_safe_mode(0o100600));
    }

    #[test]
    fn test_unsafe_modes() {
        assert!(!is_safe_mode(0o640));
        assert!(!is_safe_mode(0o604));
        assert!(!is_safe_mode(0o660));
        assert!(!is_safe_mode(0o644));
        assert!(!is_safe_mode(0o700));
        assert!(!is_safe_mode(0o610));
        assert!(!is_safe_mode(0o601));
        assert!(!is_safe_mode(0o100644));
    }

    #[cfg(unix)]
    #[test]
    fn test_local_file_access_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join(".netrc");
        std::fs::write(&path, "machine m").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();

        let mode = LocalFileAccess.mode(&path).unwrap();
        assert_eq!(mode & 0o777, 0o640);
        assert_eq!(LocalFileAccess.read_to_string(&path).unwrap(), "machine m");
    }
}
