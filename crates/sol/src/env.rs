use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use home::home_dir;
use semver::Version;

/// Resolved store layout for this invocation.
///
/// The root defaults to `~/.sol` and can be redirected with `SOL_ROOT`.
#[derive(Debug, Clone)]
pub struct SolEnv {
    store: Store,
}

impl SolEnv {
    pub fn new() -> Result<Self> {
        let root = match std::env::var_os("SOL_ROOT") {
            Some(root) => PathBuf::from(root),
            None => home_dir()
                .context("failed to locate home directory")?
                .join(".sol"),
        };

        Ok(Self {
            store: Store::from_root(&root),
        })
    }

    pub fn ensure_layout(&self) -> Result<()> {
        for dir in [self.store.root(), self.store.versions(), self.store.tmp()] {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        Ok(())
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}

#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
    bin: PathBuf,
    versions: PathBuf,
    tmp: PathBuf,
}

impl Store {
    pub fn from_root(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            bin: root.join("bin"),
            versions: root.join("versions"),
            tmp: root.join("tmp"),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The active-version link. Points at `<version_dir>/bin` when set.
    pub fn bin(&self) -> &Path {
        &self.bin
    }

    pub fn versions(&self) -> &Path {
        &self.versions
    }

    pub fn tmp(&self) -> &Path {
        &self.tmp
    }

    pub fn version_dir(&self, version: &Version) -> PathBuf {
        self.versions.join(format!("v{version}"))
    }

    pub fn is_installed(&self, version: &Version) -> bool {
        self.version_dir(version).is_dir()
    }

    pub fn active_target(&self) -> Option<PathBuf> {
        std::fs::read_link(&self.bin).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_layout_under_root() {
        let store = Store::from_root(Path::new("/tmp/solroot"));
        assert_eq!(store.bin(), Path::new("/tmp/solroot/bin"));
        assert_eq!(store.versions(), Path::new("/tmp/solroot/versions"));
        assert_eq!(store.tmp(), Path::new("/tmp/solroot/tmp"));
    }

    #[test]
    fn version_dir_carries_v_prefix() {
        let store = Store::from_root(Path::new("/tmp/solroot"));
        let version = Version::parse("18.20.0").unwrap();
        assert_eq!(
            store.version_dir(&version),
            Path::new("/tmp/solroot/versions/v18.20.0")
        );
    }
}
