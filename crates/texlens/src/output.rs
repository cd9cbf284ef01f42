//! Rendering of search results.
//!
//! Text output is a fixed-width table meant for terminals. JSON, YAML and
//! CSV serialize one flat row per record.

use clap::ValueEnum;
use serde::Serialize;
use texlens_query::{TextQuery, TextureRecord};
use thiserror::Error;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const PROPERTY_WIDTH: usize = 20;
const TEXTURE_WIDTH: usize = 24;
const SIZE_WIDTH: usize = 11;
const FORMAT_WIDTH: usize = 14;

/// Errors that can occur during rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(String),
}

/// Controls how results are printed. Backs the `--output` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Aligned plain-text table
    #[default]
    Text,
    Json,
    Yaml,
    Csv,
}

impl OutputMode {
    pub fn is_structured(&self) -> bool {
        !matches!(self, OutputMode::Text)
    }
}

/// One record flattened for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextureRow {
    pub id: u64,
    pub property: String,
    pub display_name: String,
    pub texture: String,
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub format: String,
    pub color_space: &'static str,
    pub normal_map: bool,
    pub crunched: bool,
    pub crunch_quality: u8,
    pub compression: &'static str,
}

impl From<&TextureRecord> for TextureRow {
    fn from(r: &TextureRecord) -> Self {
        TextureRow {
            id: r.id.0,
            property: r.property_name.clone(),
            display_name: r.display_name.clone(),
            texture: r.texture_name.clone(),
            path: r.asset_path.clone(),
            width: r.width,
            height: r.height,
            format: r.format.clone(),
            color_space: if r.import.is_linear { "linear" } else { "srgb" },
            normal_map: r.import.is_normal_map,
            crunched: r.import.is_crunched,
            crunch_quality: r.import.crunch_quality,
            compression: r.import.compression.label(),
        }
    }
}

/// Renders records in the requested mode.
///
/// `explain` adds, in text mode, the search fields each term was found in.
pub fn render(
    records: &[&TextureRecord],
    mode: OutputMode,
    explain: Option<&TextQuery>,
) -> Result<String, RenderError> {
    let rows: Vec<TextureRow> = records.iter().map(|r| TextureRow::from(*r)).collect();
    match mode {
        OutputMode::Text => Ok(render_text(records, &rows, explain)),
        OutputMode::Json => Ok(serde_json::to_string_pretty(&rows)?),
        OutputMode::Yaml => Ok(serde_yaml::to_string(&rows)?),
        OutputMode::Csv => render_csv(&rows),
    }
}

fn render_csv(rows: &[TextureRow]) -> Result<String, RenderError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for row in rows {
        wtr.serialize(row)
            .map_err(|e| RenderError::Csv(e.to_string()))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| RenderError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| RenderError::Csv(e.to_string()))
}

fn render_text(
    records: &[&TextureRecord],
    rows: &[TextureRow],
    explain: Option<&TextQuery>,
) -> String {
    let mut out = String::new();
    for (record, row) in records.iter().zip(rows) {
        let mut flags = vec![row.color_space];
        if row.normal_map {
            flags.push("normal");
        }
        if row.crunched {
            flags.push("crunched");
        }
        out.push_str(&format!(
            "{} {} {}  {} {}\n",
            pad_right(&row.property, PROPERTY_WIDTH),
            pad_right(&row.texture, TEXTURE_WIDTH),
            pad_left(&format!("{}x{}", row.width, row.height), SIZE_WIDTH),
            pad_right(&row.format, FORMAT_WIDTH),
            flags.join(" "),
        ));

        if let Some(query) = explain {
            for term in query.terms() {
                let fields = term.matching_fields(record);
                let hits = if fields.is_empty() {
                    "-".to_string()
                } else {
                    fields.join(", ")
                };
                out.push_str(&format!("    {term}: {hits}\n"));
            }
        }
    }
    out.push_str(&format!("{} texture(s)\n", records.len()));
    out
}

/// Truncates to `max_width` terminal columns, ending in `…` when cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Left-aligns a cell to exactly `width` terminal columns.
fn pad_right(s: &str, width: usize) -> String {
    let mut cell = truncate_to_width(s, width);
    let fill = width.saturating_sub(cell.width());
    cell.extend(std::iter::repeat(' ').take(fill));
    cell
}

/// Right-aligns a cell to exactly `width` terminal columns.
fn pad_left(s: &str, width: usize) -> String {
    let cell = truncate_to_width(s, width);
    let fill = width.saturating_sub(cell.width());
    format!("{}{cell}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use texlens_query::{CompressionQuality, ImportInfo, TextureId};

    fn record() -> TextureRecord {
        TextureRecord {
            id: TextureId(3),
            display_name: "Albedo".into(),
            property_name: "_MainTex".into(),
            texture_name: "Rock_Albedo".into(),
            asset_path: "Assets/Rock_Albedo.png".into(),
            width: 2048,
            height: 1024,
            format: "DXT5".into(),
            import: ImportInfo {
                is_crunched: true,
                compression: CompressionQuality::Normal,
                ..ImportInfo::default()
            },
        }
    }

    #[test]
    fn text_table() {
        let r = record();
        let out = render(&[&r], OutputMode::Text, None).unwrap();
        assert!(out.contains("_MainTex"));
        assert!(out.contains("2048x1024"));
        assert!(out.contains("srgb crunched"));
        assert!(out.ends_with("1 texture(s)\n"));
    }

    #[test]
    fn wide_names_keep_columns_aligned() {
        let narrow = record();
        let mut wide = record();
        wide.texture_name = "岩石_アルベド".into();

        let out = render(&[&narrow, &wide], OutputMode::Text, None).unwrap();
        let columns: Vec<usize> = out
            .lines()
            .take(2)
            .map(|line| {
                let at = line.find("x1024").unwrap();
                line[..at].width()
            })
            .collect();
        assert_eq!(columns[0], columns[1]);
        assert!(out.contains("岩石_アルベド"));
    }

    #[test]
    fn overlong_cells_are_truncated() {
        let mut r = record();
        r.texture_name = "Very_Long_Texture_Name_That_Overflows".into();
        let out = render(&[&r], OutputMode::Text, None).unwrap();
        assert!(out.contains("Very_Long_Texture_Name_… "));
        assert_eq!(pad_right("岩石", 5), "岩石 ");
        assert_eq!(pad_left("64x64", 7), "  64x64");
        assert_eq!(truncate_to_width("岩石岩石", 5), "岩石…");
    }

    #[test]
    fn text_explain() {
        let r = record();
        let query = TextQuery::parse("rock,>=2048,!metal");
        let out = render(&[&r], OutputMode::Text, Some(&query)).unwrap();
        assert!(out.contains("    rock: texture_name, asset_path\n"));
        assert!(out.contains("    >=2048: size\n"));
        assert!(out.contains("    !metal: -\n"));
    }

    #[test]
    fn empty_result() {
        let out = render(&[], OutputMode::Text, None).unwrap();
        assert_eq!(out, "0 texture(s)\n");
        assert_eq!(render(&[], OutputMode::Json, None).unwrap(), "[]");
    }

    #[test]
    fn json_rows() {
        let r = record();
        let out = render(&[&r], OutputMode::Json, None).unwrap();
        assert!(out.contains("\"texture\": \"Rock_Albedo\""));
        assert!(out.contains("\"compression\": \"Normal Quality\""));
        assert!(out.contains("\"crunched\": true"));
    }

    #[test]
    fn yaml_rows() {
        let r = record();
        let out = render(&[&r], OutputMode::Yaml, None).unwrap();
        assert!(out.contains("property: _MainTex"));
        assert!(out.contains("color_space: srgb"));
    }

    #[test]
    fn csv_rows() {
        let r = record();
        let out = render(&[&r], OutputMode::Csv, None).unwrap();
        let mut lines = out.lines();
        assert!(lines.next().unwrap().starts_with("id,property,display_name,texture"));
        assert!(lines.next().unwrap().starts_with("3,_MainTex,Albedo,Rock_Albedo"));
    }

    #[test]
    fn structured_modes() {
        assert!(!OutputMode::Text.is_structured());
        assert!(OutputMode::Json.is_structured());
        assert!(OutputMode::Csv.is_structured());
    }
}
