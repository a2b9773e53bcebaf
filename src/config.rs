//! Netrc loading and lookup.
//!
//! This module contains the main `Netrc` struct, which ties together path
//! resolution, the permission check and the parser.

use crate::access::{is_safe_mode, FileAccess, LocalFileAccess};
use crate::error::{Error, Result};
use crate::machine::{Machine, MachineTable};
use crate::parser::parse_into;
use crate::paths::{default_netrc_path, user_netrc_path};
use log::debug;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Options for loading a netrc file.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit netrc path. Takes precedence over `home`.
    pub path: Option<PathBuf>,
    /// Home directory used to derive `{home}/.netrc` (default: the current
    /// user's home directory).
    pub home: Option<PathBuf>,
}

impl LoadOptions {
    /// Resolve the netrc path these options point at.
    pub fn resolve_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.path {
            return Ok(path.clone());
        }
        match self.home {
            Some(ref home) => Ok(default_netrc_path(home)),
            None => user_netrc_path().ok_or(Error::HomeDirNotFound),
        }
    }
}

/// Credentials loaded from a netrc file.
///
/// # Examples
///
/// ```no_run
/// use netrc_config_rs::Netrc;
///
/// // Load ~/.netrc
/// let netrc = Netrc::load().unwrap();
///
/// if let Some(machine) = netrc.get("ftp.example.com") {
///     println!("login: {:?}", machine.login());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Netrc {
    /// Source file. Empty for netrc content parsed from a string.
    path: PathBuf,
    machines: MachineTable,
}

impl Netrc {
    /// Create an unloaded `Netrc` for `path` with no machines.
    ///
    /// Call [`Netrc::reload`] to read the file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Netrc {
            path: path.into(),
            machines: MachineTable::new(),
        }
    }

    /// Load the current user's `~/.netrc`.
    pub fn load() -> Result<Self> {
        Self::load_with_options(LoadOptions::default())
    }

    /// Load a netrc file from an explicit path.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use netrc_config_rs::Netrc;
    /// use std::path::Path;
    ///
    /// let netrc = Netrc::load_from_file(Path::new("/path/to/netrc"))?;
    /// # Ok::<(), netrc_config_rs::Error>(())
    /// ```
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::load_with_access(path, &LocalFileAccess)
    }

    /// Load a netrc file with custom options.
    pub fn load_with_options(opts: LoadOptions) -> Result<Self> {
        let path = opts.resolve_path()?;
        Self::load_with_access(path, &LocalFileAccess)
    }

    /// Load a netrc file through the given file access.
    pub fn load_with_access(path: impl Into<PathBuf>, access: &dyn FileAccess) -> Result<Self> {
        let mut netrc = Netrc::new(path);
        netrc.reload_with_access(access)?;
        Ok(netrc)
    }

    /// Re-read the file from disk, replacing every loaded machine.
    ///
    /// If parsing fails, machines read before the failing token remain
    /// visible through [`Netrc::get`].
    pub fn reload(&mut self) -> Result<()> {
        self.reload_with_access(&LocalFileAccess)
    }

    /// Re-read the file through the given file access.
    pub fn reload_with_access(&mut self, access: &dyn FileAccess) -> Result<()> {
        self.machines.clear();
        let content = read_netrc(&self.path, access)?;
        parse_into(&content, &mut self.machines)?;
        debug!(
            "loaded {} machine(s) from {}",
            self.machines.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Get the entry for a machine name.
    pub fn get(&self, name: &str) -> Option<&Machine> {
        self.machines.get(name)
    }

    /// Iterate over all machines, in no particular order.
    pub fn machines(&self) -> impl Iterator<Item = &Machine> {
        self.machines.values()
    }

    /// Number of machines loaded.
    pub fn len(&self) -> usize {
        self.machines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }

    /// Path of the netrc file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FromStr for Netrc {
    type Err = Error;

    /// Parse netrc content held in memory. No permission check is done.
    fn from_str(content: &str) -> Result<Self> {
        let mut netrc = Netrc::new(PathBuf::new());
        parse_into(content, &mut netrc.machines)?;
        Ok(netrc)
    }
}

/// Check the permission bits of `path` and read it.
fn read_netrc(path: &Path, access: &dyn FileAccess) -> Result<String> {
    let mode = access.mode(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        io::ErrorKind::Unsupported => Error::UnsupportedPlatform,
        _ => Error::Metadata {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    debug!("{} has mode {:o}", path.display(), mode & 0o777);

    if !is_safe_mode(mode) {
        return Err(Error::UnsafePermissions {
            path: path.to_path_buf(),
            mode: mode & 0o777,
        });
    }

    access.read_to_string(path).map_err(|e| Error::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })
}
