//! Recording helper for persisting raw HTTP bodies as fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub(crate) fn get_fixture_dir() -> PathBuf {
    env::var("QT_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// Bodies are written byte-for-byte: quote responses are GBK, not UTF-8.
pub(crate) fn record_fixture(endpoint: &str, body: &[u8]) -> Result<(), std::io::Error> {
    let dir = get_fixture_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    let path = dir.join(format!("{endpoint}.txt"));

    let mut file = fs::File::create(&path)?;
    file.write_all(body)?;

    if env::var("QT_DEBUG").ok().as_deref() == Some("1") {
        eprintln!("QT_RECORD: wrote fixture to {}", path.display());
    }
    Ok(())
}
