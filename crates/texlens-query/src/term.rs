//! Single search terms.
//!
//! A [`Term`] is one piece of a query after splitting on `|` or `,`. It is
//! either a resolution comparison or free text matched case-insensitively
//! against a fixed list of record fields, optionally negated with `!`.

use std::borrow::Cow;

use crate::comparison::Comparison;
use crate::record::TextureRecord;

/// Extracts one searchable text from a record. `None` contributes nothing.
pub type FieldFn = for<'a> fn(&'a TextureRecord) -> Option<Cow<'a, str>>;

/// The fields a text term is matched against, in inspection order.
pub const SEARCH_FIELDS: &[(&str, FieldFn)] = &[
    ("texture_name", texture_name),
    ("asset_path", asset_path),
    ("display_name", display_name),
    ("property_name", property_name),
    ("format", format),
    ("dimensions", dimensions),
    ("width", width),
    ("height", height),
    ("color_space", color_space),
    ("crunched", crunched),
    ("normal_map", normal_map),
    ("compression", compression),
];

fn texture_name(r: &TextureRecord) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(&r.texture_name))
}

fn asset_path(r: &TextureRecord) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(&r.asset_path))
}

fn display_name(r: &TextureRecord) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(&r.display_name))
}

fn property_name(r: &TextureRecord) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(&r.property_name))
}

fn format(r: &TextureRecord) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(&r.format))
}

fn dimensions(r: &TextureRecord) -> Option<Cow<'_, str>> {
    Some(Cow::Owned(r.dimensions()))
}

fn width(r: &TextureRecord) -> Option<Cow<'_, str>> {
    Some(Cow::Owned(r.width.to_string()))
}

fn height(r: &TextureRecord) -> Option<Cow<'_, str>> {
    Some(Cow::Owned(r.height.to_string()))
}

// Exactly one of "linear" / "srgb".
fn color_space(r: &TextureRecord) -> Option<Cow<'_, str>> {
    let label = if r.import.is_linear { "linear" } else { "srgb" };
    Some(Cow::Borrowed(label))
}

fn crunched(r: &TextureRecord) -> Option<Cow<'_, str>> {
    r.import.is_crunched.then_some(Cow::Borrowed("crunched"))
}

fn normal_map(r: &TextureRecord) -> Option<Cow<'_, str>> {
    r.import.is_normal_map.then_some(Cow::Borrowed("normal"))
}

fn compression(r: &TextureRecord) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(r.import.compression.label()))
}

/// What a term tests once negation has been stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermKind {
    /// Resolution comparison against `max(width, height)`.
    Compare(Comparison),
    /// Lowercased substring searched across [`SEARCH_FIELDS`].
    Text(String),
}

/// One parsed search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub negate: bool,
    pub kind: TermKind,
}

impl Term {
    /// Parses a trimmed term.
    ///
    /// Whitespace between `!` and the term is ignored, so `! >2048` is the
    /// same as `!>2048`. Returns `None` when nothing is left after removing
    /// a leading `!`; such a term carries no constraint and is dropped by
    /// the caller.
    pub fn parse(raw: &str) -> Option<Term> {
        let (negate, actual) = match raw.strip_prefix('!') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, raw),
        };

        if actual.is_empty() {
            return None;
        }

        let kind = match Comparison::parse(actual) {
            Some(cmp) => TermKind::Compare(cmp),
            None => TermKind::Text(actual.to_lowercase()),
        };

        Some(Term { negate, kind })
    }

    /// Returns `true` if the record satisfies this term, negation applied.
    pub fn matches(&self, record: &TextureRecord) -> bool {
        let found = match &self.kind {
            TermKind::Compare(cmp) => cmp.matches(record.size_measure()),
            TermKind::Text(needle) => SEARCH_FIELDS
                .iter()
                .any(|(_, field)| field_contains(record, *field, needle)),
        };
        found != self.negate
    }

    /// Names of the search fields a text term was found in, ignoring
    /// negation. Comparison terms report `size` when they hold.
    pub fn matching_fields(&self, record: &TextureRecord) -> Vec<&'static str> {
        match &self.kind {
            TermKind::Compare(cmp) => {
                if cmp.matches(record.size_measure()) {
                    vec!["size"]
                } else {
                    Vec::new()
                }
            }
            TermKind::Text(needle) => SEARCH_FIELDS
                .iter()
                .filter(|(_, field)| field_contains(record, *field, needle))
                .map(|(name, _)| *name)
                .collect(),
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negate {
            f.write_str("!")?;
        }
        match &self.kind {
            TermKind::Compare(cmp) => write!(f, "{cmp}"),
            TermKind::Text(text) => f.write_str(text),
        }
    }
}

fn field_contains(record: &TextureRecord, field: FieldFn, needle: &str) -> bool {
    field(record).is_some_and(|text| text.to_lowercase().contains(needle))
}
