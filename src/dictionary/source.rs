//! Dictionary source texts.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// One dictionary text, named for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionarySource {
    /// Where the text came from (file path or a caller supplied label).
    pub name: String,
    /// The raw dictionary text.
    pub text: String,
}

impl DictionarySource {
    /// Create a source from an in-memory text.
    pub fn new<N: Into<String>, T: Into<String>>(name: N, text: T) -> Self {
        DictionarySource {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Read a source from a file. The path becomes the source name.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Ok(DictionarySource::new(path.display().to_string(), text))
    }

    /// Number of lines in the text.
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, ";;; test dictionary").unwrap();
        writeln!(file, "CAT  K AE1 T").unwrap();

        let source = DictionarySource::from_file(file.path()).unwrap();
        assert_eq!(source.name, file.path().display().to_string());
        assert_eq!(source.line_count(), 2);
        assert!(source.text.contains("CAT  K AE1 T"));
    }

    #[test]
    fn test_missing_file() {
        let result = DictionarySource::from_file("/nonexistent/cadence/dictionary.txt");
        assert!(result.is_err());
    }
}
