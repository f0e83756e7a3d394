//! File and stream output helpers.

pub mod output;

use std::fs;
use std::path::Path;

pub use output::{create_writer, OutputFormat, OutputWriter};

/// Write string content to a file, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_file_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/dir/report.json");
        write_file(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
