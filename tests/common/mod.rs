#![allow(dead_code)]

#[path = "../../src/daf/test_fixtures.rs"]
mod test_fixtures;

use camino::Utf8PathBuf;
use tempfile::TempDir;

pub use test_fixtures::{patch_control_word, FixtureEndian, SpkFixture};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Temporary directory holding synthetic kernels, removed on drop.
pub struct KernelDir {
    dir: TempDir,
}

impl KernelDir {
    pub fn new() -> Self {
        init_logger();
        KernelDir {
            dir: tempfile::tempdir().expect("Failed to create a temporary directory"),
        }
    }

    pub fn path(&self, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(self.dir.path().join(name))
            .expect("Temporary directory path is not UTF-8")
    }

    pub fn write(&self, name: &str, fixture: &SpkFixture) -> Utf8PathBuf {
        let path = self.path(name);
        fixture
            .write_to(&path)
            .expect("Failed to write the SPK fixture");
        path
    }

    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> Utf8PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("Failed to write the kernel bytes");
        path
    }

    /// `demo.bsp`: body 399 over `[0, 1e8]`.
    pub fn demo(&self) -> Utf8PathBuf {
        self.write("demo.bsp", &SpkFixture::new().with_segment(399, 0.0, 1e8))
    }
}
