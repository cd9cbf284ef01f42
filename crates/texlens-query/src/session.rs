//! Search sessions.
//!
//! A [`SearchSession`] bundles the text query and structured filters a
//! caller keeps between refreshes. It replaces any global UI state: the
//! caller owns it, mutates it between passes, and hands it to [`apply`].
//!
//! [`apply`]: SearchSession::apply

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::{load_document, parse_document, DocumentFormat};
use crate::error::Result;
use crate::query::TextQuery;
use crate::record::TextureRecord;
use crate::structured::{filter_structured, StructuredFilterConfig};

/// Query text plus structured filter settings.
///
/// # Example
///
/// ```
/// use texlens_query::{ColorSpaceClass, SearchSession, TextureRecord, Toggle};
///
/// let mut session = SearchSession::new("albedo|diffuse");
/// session.filters.color_space = Toggle::on(ColorSpaceClass::Srgb);
///
/// let records: Vec<TextureRecord> = Vec::new();
/// assert!(session.apply(&records).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSession {
    pub query: String,
    pub filters: StructuredFilterConfig,
}

impl SearchSession {
    pub fn new(query: impl Into<String>) -> Self {
        SearchSession {
            query: query.into(),
            filters: StructuredFilterConfig::default(),
        }
    }

    /// Runs the text query, then the structured filters, preserving order.
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a TextureRecord>
    where
        I: IntoIterator<Item = &'a TextureRecord>,
    {
        let text_matches = TextQuery::parse(&self.query).filter(records);
        let after_text = text_matches.len();
        let result = filter_structured(text_matches, &self.filters);
        tracing::debug!(after_text, after_filters = result.len(), "search pass");
        result
    }

    /// Loads a session from a YAML or JSON file, chosen by extension.
    /// Anything other than `.json` is read as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        load_document(path)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        parse_document(content, DocumentFormat::Json)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        parse_document(content, DocumentFormat::Yaml)
    }
}
