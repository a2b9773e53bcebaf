//! Path resolution for .netrc files.

use std::path::{Path, PathBuf};

/// File name of the netrc file inside the home directory.
pub const NETRC_FILE_NAME: &str = ".netrc";

/// Get the netrc path inside the given home directory (`{home}/.netrc`).
pub fn default_netrc_path(home: &Path) -> PathBuf {
    home.join(NETRC_FILE_NAME)
}

/// Get the path to the current user's netrc file (`~/.netrc`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn user_netrc_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| default_netrc_path(&home))
}

/// Expand `~` at the start of a path to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_netrc_path() {
        let home = PathBuf::from("/home/user");
        assert_eq!(
            default_netrc_path(&home),
            PathBuf::from("/home/user/.netrc")
        );
    }

    #[test]
    fn test_user_netrc_path() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(user_netrc_path(), Some(home.join(".netrc")));
    }

    #[test]
    fn test_expand_tilde() {
        let home = dirs::home_dir().unwrap();

        assert_eq!(expand_tilde("~/secrets/netrc"), home.join("secrets/netrc"));
        assert_eq!(expand_tilde("~"), home);
        assert_eq!(expand_tilde("/etc/netrc"), PathBuf::from("/etc/netrc"));
        assert_eq!(expand_tilde("relative/netrc"), PathBuf::from("relative/netrc"));
    }
}
