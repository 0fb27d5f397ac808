//! Destination for a written diagram.

use std::{
    ffi::OsStr,
    fmt,
    path::{Path, PathBuf},
};

use directories::UserDirs;
use log::debug;

/// File name used when no destination is given.
pub const DEFAULT_FILE_NAME: &str = "class_diagram.puml";

/// A filesystem path identifying where a diagram is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    path: PathBuf,
}

impl OutputTarget {
    /// Creates a target for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns `<Desktop>/class_diagram.puml` for the current user.
    ///
    /// Falls back to `<home>/Desktop` when the platform reports no desktop
    /// directory, and to a bare relative file name when there is no home
    /// directory at all.
    pub fn default_location() -> Self {
        let path = match UserDirs::new() {
            Some(dirs) => dirs
                .desktop_dir()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| dirs.home_dir().join("Desktop"))
                .join(DEFAULT_FILE_NAME),
            None => {
                debug!("Could not determine user directories");
                PathBuf::from(DEFAULT_FILE_NAME)
            }
        };

        Self { path }
    }

    /// Returns the full destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the final component of the path, if any.
    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    /// Returns the directory the file is written into, if any.
    pub fn parent(&self) -> Option<&Path> {
        self.path.parent()
    }
}

impl Default for OutputTarget {
    fn default() -> Self {
        Self::default_location()
    }
}

impl From<PathBuf> for OutputTarget {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_location_file_name() {
        let target = OutputTarget::default_location();

        assert_eq!(target.file_name(), Some(OsStr::new(DEFAULT_FILE_NAME)));
    }

    #[test]
    fn test_path_parts() {
        let target = OutputTarget::new("/srv/docs/diagram.puml");

        assert_eq!(target.path(), Path::new("/srv/docs/diagram.puml"));
        assert_eq!(target.file_name(), Some(OsStr::new("diagram.puml")));
        assert_eq!(target.parent(), Some(Path::new("/srv/docs")));
        assert_eq!(target.to_string(), "/srv/docs/diagram.puml");
    }
}
