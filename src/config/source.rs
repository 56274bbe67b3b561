//! Where config files are read from

use std::io;
use std::path::PathBuf;

/// Read access to a set of named config files.
pub trait ConfigSource {
    /// Whether `name` is present. Anything that cannot be stat'ed counts as absent.
    fn exists(&self, name: &str) -> bool;

    fn read(&self, name: &str) -> io::Result<String>;

    /// Human-readable location of `name`, used in error messages.
    fn describe(&self, name: &str) -> String {
        name.to_string()
    }
}

/// Config files living in a directory on disk.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Source rooted at the process working directory.
    pub fn current_dir() -> io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }
}

impl ConfigSource for DirSource {
    fn exists(&self, name: &str) -> bool {
        self.root.join(name).exists()
    }

    fn read(&self, name: &str) -> io::Result<String> {
        std::fs::read_to_string(self.root.join(name))
    }

    fn describe(&self, name: &str) -> String {
        self.root.join(name).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dir_source_reports_missing_file() {
        let tmp = TempDir::new().expect("tmp");
        let source = DirSource::new(tmp.path());
        assert!(!source.exists("config.json"));
        assert!(source.read("config.json").is_err());
    }

    #[test]
    fn test_dir_source_reads_file() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("config.yaml"), "all: true\n").expect("write");

        let source = DirSource::new(tmp.path());
        assert!(source.exists("config.yaml"));
        assert_eq!(source.read("config.yaml").expect("read"), "all: true\n");
        assert!(source.describe("config.yaml").ends_with("config.yaml"));
    }
}
