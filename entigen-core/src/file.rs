//! Writing generated files to disk.

use std::{
    io,
    path::{Path, PathBuf},
};

/// Outcome of [`File::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// The file already existed and the policy kept it.
    Skipped,
}

/// What to do when the target already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Regenerated output.
    #[default]
    Always,
    /// Hand-edited output and project configs.
    IfMissing,
}

/// A rendered file together with its write policy.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl File {
    /// A file that replaces whatever is at `path`.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::Always,
        }
    }

    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Write the file, creating missing parent directories.
    ///
    /// An existing file is left byte-identical under [`Overwrite::IfMissing`].
    pub fn write(&self) -> io::Result<WriteResult> {
        if self.overwrite == Overwrite::IfMissing && self.path.exists() {
            return Ok(WriteResult::Skipped);
        }
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        // create_dir_all succeeds when another writer created the directory first
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("src").join("entities").join("User.ts");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("User.ts");

        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "updated").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tsconfig.json");

        let result = File::new(&path, "{}")
            .overwrite(Overwrite::IfMissing)
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_file_write_if_missing_leaves_existing_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("User.ts");

        fs::write(&path, "// hand edited\r\n").unwrap();
        let before = fs::read(&path).unwrap();

        let result = File::new(&path, "should not write")
            .overwrite(Overwrite::IfMissing)
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn test_concurrent_writers_share_a_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a").join("b");

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let path = dir.join(format!("file{i}.ts"));
                    scope.spawn(move || File::new(path, "x").write())
                })
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap().unwrap(), WriteResult::Written);
            }
        });

        assert_eq!(fs::read_dir(&dir).unwrap().count(), 8);
    }

    #[test]
    fn test_write_fails_when_parent_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("entities");
        fs::write(&blocker, "not a dir").unwrap();

        assert!(File::new(blocker.join("User.ts"), "x").write().is_err());
    }
}
