//! Plain-text summary persistence.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::AppError;

/// Write `text` to `path`, replacing any existing file.
pub fn write_summary(path: &Path, text: &str) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::load(format!(
            "Failed to create summary file '{}': {e}",
            path.display()
        ))
    })?;
    file.write_all(text.as_bytes()).map_err(|e| {
        AppError::load(format!(
            "Failed to write summary file '{}': {e}",
            path.display()
        ))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writing_twice_replaces_the_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fit_result.txt");

        write_summary(&path, "first\n").unwrap();
        write_summary(&path, "second\n").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "second\n");
    }
}
