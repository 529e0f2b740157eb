use camino::{Utf8Path, Utf8PathBuf};

/// Path of a catalog fixture under `tests/data`.
pub fn fixture(name: &str) -> Utf8PathBuf {
    Utf8Path::new("tests/data").join(name)
}
