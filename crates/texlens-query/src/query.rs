//! Text query parsing and evaluation.
//!
//! A query is a flat list of [`Term`]s combined one way:
//!
//! ```text
//! rock|>=2048        any term matches     (pipe present)
//! rock,!crunched     all terms match      (otherwise, split on comma)
//! ```
//!
//! A pipe anywhere in the query switches it to OR mode and commas are then
//! just part of the terms. Groups cannot be nested or mixed.

use crate::record::TextureRecord;
use crate::term::Term;

/// How the terms of a query are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Combinator {
    /// At least one term must match (`|`).
    Any,
    /// Every term must match (`,`).
    #[default]
    All,
}

impl Combinator {
    pub fn separator(self) -> char {
        match self {
            Combinator::Any => '|',
            Combinator::All => ',',
        }
    }
}

/// A parsed text query.
///
/// A query without terms matches every record. That covers blank input as
/// well as input made only of separators and bare `!` markers.
///
/// # Example
///
/// ```
/// use texlens_query::{Combinator, TextQuery};
///
/// let query = TextQuery::parse(">=2048 | <512");
/// assert_eq!(query.combinator(), Combinator::Any);
/// assert_eq!(query.terms().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    combinator: Combinator,
    terms: Vec<Term>,
}

impl TextQuery {
    /// Parses a raw query string. Never fails.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return TextQuery::default();
        }

        let combinator = if raw.contains('|') {
            Combinator::Any
        } else {
            Combinator::All
        };

        let terms: Vec<Term> = raw
            .split(combinator.separator())
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .filter_map(Term::parse)
            .collect();

        tracing::debug!(
            ?combinator,
            terms = terms.len(),
            "parsed text query {raw:?}"
        );

        TextQuery { combinator, terms }
    }

    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns `true` if the query has no terms and so matches everything.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Checks whether a single record matches the query.
    pub fn matches(&self, record: &TextureRecord) -> bool {
        if self.terms.is_empty() {
            return true;
        }
        match self.combinator {
            Combinator::Any => self.terms.iter().any(|t| t.matches(record)),
            Combinator::All => self.terms.iter().all(|t| t.matches(record)),
        }
    }

    /// Filters records, preserving their relative order.
    pub fn filter<'a, I>(&self, records: I) -> Vec<&'a TextureRecord>
    where
        I: IntoIterator<Item = &'a TextureRecord>,
    {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }

    /// Counts matching records.
    pub fn count<'a, I>(&self, records: I) -> usize
    where
        I: IntoIterator<Item = &'a TextureRecord>,
    {
        records.into_iter().filter(|r| self.matches(r)).count()
    }
}

impl std::fmt::Display for TextQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = self.combinator.separator();
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, "{sep}")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

/// Filters records by a raw query string.
///
/// Blank queries return every record. The result is always an
/// order-preserving subsequence of the input.
pub fn filter_by_text<'a, I>(records: I, query: &str) -> Vec<&'a TextureRecord>
where
    I: IntoIterator<Item = &'a TextureRecord>,
{
    TextQuery::parse(query).filter(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ImportInfo, TextureId};
    use crate::term::TermKind;

    fn texture(id: u64, name: &str, size: u32, linear: bool, crunched: bool) -> TextureRecord {
        TextureRecord {
            id: TextureId(id),
            display_name: format!("{name} Map"),
            property_name: format!("_{name}"),
            texture_name: name.to_string(),
            asset_path: format!("Assets/{name}.png"),
            width: size,
            height: size,
            format: "BC7".into(),
            import: ImportInfo {
                is_crunched: crunched,
                is_linear: linear,
                ..ImportInfo::default()
            },
        }
    }

    fn sample() -> Vec<TextureRecord> {
        vec![
            texture(1, "Albedo", 1024, false, true),
            texture(2, "Mask", 512, true, false),
            texture(3, "Detail", 2048, false, false),
            texture(4, "Emission", 256, false, true),
        ]
    }

    fn names(records: &[&TextureRecord]) -> Vec<String> {
        records.iter().map(|r| r.texture_name.clone()).collect()
    }

    #[test]
    fn blank_query_is_identity() {
        let records = sample();
        for q in ["", "   ", "\t\n"] {
            let query = TextQuery::parse(q);
            assert!(query.is_empty());
            assert_eq!(query.filter(&records).len(), records.len());
        }
    }

    #[test]
    fn comma_means_all() {
        let records = sample();
        let query = TextQuery::parse("srgb, crunched");
        assert_eq!(query.combinator(), Combinator::All);
        assert_eq!(names(&query.filter(&records)), ["Albedo", "Emission"]);

        let query = TextQuery::parse("srgb,crunched,>=1024");
        assert_eq!(names(&query.filter(&records)), ["Albedo"]);
    }

    #[test]
    fn pipe_means_any() {
        let records = sample();
        let query = TextQuery::parse("mask | detail");
        assert_eq!(query.combinator(), Combinator::Any);
        assert_eq!(names(&query.filter(&records)), ["Mask", "Detail"]);
    }

    #[test]
    fn pipe_overrides_comma() {
        let records = sample();
        let query = TextQuery::parse("mask,x|detail");
        assert_eq!(query.combinator(), Combinator::Any);
        assert_eq!(
            query.terms()[0].kind,
            TermKind::Text("mask,x".into()),
            "comma is literal text in OR mode"
        );
        assert_eq!(names(&query.filter(&records)), ["Detail"]);
    }

    #[test]
    fn empty_pieces_are_discarded() {
        let query = TextQuery::parse(",mask,, ,");
        assert_eq!(query.terms().len(), 1);

        let query = TextQuery::parse("|mask||");
        assert_eq!(query.terms().len(), 1);
    }

    #[test]
    fn all_empty_split_matches_everything() {
        let records = sample();
        for q in ["|", ",", " | | ", ",,", "!", "!|!", "!, !"] {
            let query = TextQuery::parse(q);
            assert!(query.is_empty(), "query {q:?}");
            assert_eq!(query.filter(&records).len(), records.len(), "query {q:?}");
        }
    }

    #[test]
    fn bare_negation_in_or_list_is_ignored() {
        let records = sample();
        let query = TextQuery::parse("albedo|!");
        assert_eq!(query.terms().len(), 1);
        assert_eq!(names(&query.filter(&records)), ["Albedo"]);
        assert_eq!(names(&filter_by_text(&records, "! |albedo")), ["Albedo"]);
    }

    #[test]
    fn negation_with_space_before_comparison() {
        let records = sample();
        assert_eq!(
            names(&filter_by_text(&records, "! >=1024")),
            names(&filter_by_text(&records, "!>=1024"))
        );
        assert_eq!(names(&filter_by_text(&records, "! >=1024")), ["Mask", "Emission"]);
    }

    #[test]
    fn negated_terms() {
        let records = sample();
        assert_eq!(
            names(&filter_by_text(&records, "!crunched")),
            ["Mask", "Detail"]
        );
        assert_eq!(
            names(&filter_by_text(&records, "!crunched,!mask")),
            ["Detail"]
        );
    }

    #[test]
    fn comparisons_in_groups() {
        let records = sample();
        assert_eq!(
            names(&filter_by_text(&records, ">=2048|<512")),
            ["Detail", "Emission"]
        );
        assert_eq!(
            names(&filter_by_text(&records, "512<,2048>")),
            ["Albedo"]
        );
    }

    #[test]
    fn order_is_preserved() {
        let records = sample();
        let result = filter_by_text(&records, "assets");
        let ids: Vec<u64> = result.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn count_matches_filter() {
        let records = sample();
        let query = TextQuery::parse("srgb");
        assert_eq!(query.count(&records), query.filter(&records).len());
    }

    #[test]
    fn composes_over_references() {
        let records = sample();
        let first = filter_by_text(&records, "srgb");
        let second = filter_by_text(first.iter().copied(), "crunched");
        assert_eq!(names(&second), ["Albedo", "Emission"]);
    }

    #[test]
    fn display_normalizes() {
        assert_eq!(TextQuery::parse(" Rock , !2048< ").to_string(), "rock,!>2048");
        assert_eq!(TextQuery::parse("a||b").to_string(), "a|b");
    }
}
