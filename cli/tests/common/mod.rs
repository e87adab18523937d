#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A fake `$HOME` holding `Curbcut/cc_app` and a config file that swaps the
/// browser for `true`.
pub struct Home {
    pub dir: TempDir,
}

impl Home {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Curbcut/cc_app")).unwrap();
        fs::write(
            dir.path().join("ccfind.toml"),
            "[browser]\nprogram = \"true\"\nargs = []\n",
        )
        .unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> PathBuf {
        self.dir.path().join("ccfind.toml")
    }

    pub fn workspace(&self) -> PathBuf {
        self.dir.path().join("Curbcut/cc_app")
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.workspace().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}
