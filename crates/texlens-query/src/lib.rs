//! texlens-query - Search engine for the textures referenced by a material.
//!
//! The engine takes a list of [`TextureRecord`]s and returns the ones that
//! survive two stages, in their original order:
//!
//! 1. A **text query** combining substring terms, resolution comparisons
//!    and negation.
//! 2. **Structured filters**: resolution range, crunch state, colour-space
//!    class and pixel-format substring, each switched on independently.
//!
//! A record is kept only if it passes both.
//!
//! # Quick Start
//!
//! ```rust
//! use texlens_query::{
//!     filter_by_text, filter_structured, ImportInfo, ResolutionRange,
//!     StructuredFilterConfig, TextureId, TextureRecord, Toggle,
//! };
//!
//! let records = vec![
//!     TextureRecord {
//!         id: TextureId(1),
//!         display_name: "Albedo".into(),
//!         property_name: "_MainTex".into(),
//!         texture_name: "Albedo_01".into(),
//!         asset_path: "Assets/Albedo_01.png".into(),
//!         width: 1024,
//!         height: 1024,
//!         format: "DXT1Crunched".into(),
//!         import: ImportInfo { is_crunched: true, ..ImportInfo::default() },
//!     },
//!     TextureRecord {
//!         id: TextureId(2),
//!         display_name: "Normal Map".into(),
//!         property_name: "_BumpMap".into(),
//!         texture_name: "Normal_01".into(),
//!         asset_path: "Assets/Normal_01.png".into(),
//!         width: 2048,
//!         height: 2048,
//!         format: "BC5".into(),
//!         import: ImportInfo { is_linear: true, is_normal_map: true, ..ImportInfo::default() },
//!     },
//! ];
//!
//! let found = filter_by_text(&records, "!crunched");
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].texture_name, "Normal_01");
//!
//! let config = StructuredFilterConfig {
//!     resolution: Toggle::on(ResolutionRange::new(0, 1024)),
//!     ..StructuredFilterConfig::default()
//! };
//! assert!(filter_structured(found, &config).is_empty());
//! ```
//!
//! # Query Grammar
//!
//! ```text
//! query  = blank | term ("|" term)* | term ("," term)*
//! term   = ["!"] (comparison | text)
//! comparison = (">=" | "<=" | ">" | "<" | "=") digits     measure OP n
//!            | digits ("<" | ">")                        reversed: "n<" = "> n"
//! ```
//!
//! - A pipe anywhere makes the query an OR list; otherwise commas make it an
//!   AND list. The two never mix.
//! - `measure` is `max(width, height)`.
//! - Text terms are case-insensitive substrings searched across the names,
//!   path, format, dimensions, colour space (`linear`/`srgb`), `crunched`,
//!   `normal` and the compression label of each record.
//! - Empty pieces and bare `!` markers are dropped. A query left without
//!   terms matches every record.

mod comparison;
mod document;
mod error;
mod op;
mod query;
mod record;
mod session;
mod structured;
mod term;

// Re-export public API
pub use comparison::Comparison;
pub use document::{load_document, parse_document, DocumentFormat};
pub use error::{Result, TexlensError};
pub use op::CompareOp;
pub use query::{filter_by_text, Combinator, TextQuery};
pub use record::{
    looks_like_normal_map, CompressionQuality, ImportInfo, ImporterSettings, TextureId,
    TextureRecord, TextureType,
};
pub use session::SearchSession;
pub use structured::{
    filter_structured, ColorSpaceClass, ResolutionRange, StructuredFilterConfig, Toggle,
    DEFAULT_MAX_RESOLUTION,
};
pub use term::{FieldFn, Term, TermKind, SEARCH_FIELDS};
