use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a transcript from a plain-text file.
pub fn read_transcript_file(path: &Path) -> Result<String> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path:?}"))?;
    Ok(content.trim_end().to_string())
}

/// Read a transcript from standard input, for piped usage.
pub fn read_transcript_stdin() -> Result<String> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read transcript from stdin")?;
    Ok(content.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_transcript_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Call John about the meeting.").unwrap();

        let transcript = read_transcript_file(file.path()).unwrap();
        assert_eq!(transcript, "Call John about the meeting.");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = read_transcript_file(Path::new("/nonexistent/transcript.txt"));
        assert!(result.is_err());
    }
}
