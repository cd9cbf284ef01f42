//! JSON / YAML document loading.
//!
//! Session configs and material manifests share one entry point: the file
//! extension picks the format (`.json` is JSON, anything else YAML) and a
//! blank document yields the type's default.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Result, TexlensError};

/// Serialization format of a document on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Chooses the format from a path's extension.
    pub fn from_path(path: &Path) -> Self {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            DocumentFormat::Json
        } else {
            DocumentFormat::Yaml
        }
    }
}

/// Parses document text in the given format.
pub fn parse_document<T>(content: &str, format: DocumentFormat) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(content)?),
        DocumentFormat::Yaml => Ok(serde_yaml::from_str(content)?),
    }
}

/// Reads and parses a document, choosing the format from the extension.
pub fn load_document<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let content = std::fs::read_to_string(path).map_err(|source| TexlensError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = DocumentFormat::from_path(path);
    tracing::trace!(?format, "loading {}", path.display());
    parse_document(&content, format)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Doc {
        name: String,
        #[serde(default)]
        size: u32,
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("a.JSON")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("a.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.yml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("noext")), DocumentFormat::Yaml);
    }

    #[test]
    fn parse_both_formats() {
        let json: Doc = parse_document(r#"{"name": "rock", "size": 4}"#, DocumentFormat::Json).unwrap();
        let yaml: Doc = parse_document("name: rock\nsize: 4\n", DocumentFormat::Yaml).unwrap();
        assert_eq!(json, yaml);
        assert_eq!(json.size, 4);
    }

    #[test]
    fn blank_is_default() {
        let doc: Doc = parse_document("  \n", DocumentFormat::Json).unwrap();
        assert_eq!(doc, Doc::default());
        let doc: Doc = parse_document("", DocumentFormat::Yaml).unwrap();
        assert_eq!(doc, Doc::default());
    }

    #[test]
    fn parse_errors_keep_their_format() {
        let err = parse_document::<Doc>("{", DocumentFormat::Json).unwrap_err();
        assert!(matches!(err, TexlensError::Json(_)));
        let err = parse_document::<Doc>("name: [", DocumentFormat::Yaml).unwrap_err();
        assert!(matches!(err, TexlensError::Yaml(_)));
    }

    #[test]
    fn load_from_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "name: cliff").unwrap();
        let doc: Doc = load_document(file.path()).unwrap();
        assert_eq!(doc.name, "cliff");
    }

    #[test]
    fn load_missing_file() {
        let err = load_document::<Doc>(Path::new("/nonexistent/doc.json")).unwrap_err();
        assert!(matches!(err, TexlensError::Io { .. }));
    }
}
