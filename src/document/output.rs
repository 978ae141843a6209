use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, TranslateError};
use crate::fs::atomic_write;

/// Where a translated document is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdout => None,
            Self::File(path) => Some(path),
        }
    }

    pub fn write(&self, content: &str) -> Result<()> {
        let written = match self {
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(content.as_bytes())
                    .and_then(|()| stdout.flush())
            }
            Self::File(path) => atomic_write(path, content),
        };

        written.map_err(|source| TranslateError::Write {
            target: self.to_string(),
            source,
        })
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("standard output"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_path() {
        assert_eq!(OutputTarget::from_path(None), OutputTarget::Stdout);
        let target = OutputTarget::from_path(Some(PathBuf::from("out.json")));
        assert_eq!(target.path(), Some(Path::new("out.json")));
    }

    #[test]
    fn test_write_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.html");

        OutputTarget::File(path.clone()).write("<p>Salut</p>").unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "<p>Salut</p>");
    }

    #[test]
    fn test_write_missing_directory_is_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.json");

        let result = OutputTarget::File(path).write("{}");

        let Err(TranslateError::Write { target, .. }) = result else {
            panic!("expected a write error");
        };
        assert!(target.ends_with("out.json"));
    }

    #[test]
    fn test_write_read_only_file_is_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("locked.json");
        std::fs::write(&path, "old").unwrap();
        let mut permissions = std::fs::metadata(&path).unwrap().permissions();
        permissions.set_readonly(true);
        std::fs::set_permissions(&path, permissions).unwrap();

        let result = OutputTarget::File(path.clone()).write("{}");

        let Err(TranslateError::Write { source, .. }) = result else {
            panic!("expected a write error");
        };
        assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(std::fs::read_to_string(path).unwrap(), "old");
    }
}
