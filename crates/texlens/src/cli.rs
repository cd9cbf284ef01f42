//! Command-line arguments and the search command.
//!
//! Settings are layered: a session config file (if given) provides the
//! starting point, and each flag overrides the part of it it names.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use texlens_query::{ColorSpaceClass, ResolutionRange, SearchSession, TextQuery, Toggle};

use crate::manifest::MaterialManifest;
use crate::output::{render, OutputMode};

/// Search the textures referenced by a material.
///
/// QUERY terms are separated by `,` (all must match) or `|` (any may
/// match). Prefix a term with `!` to negate it. Resolution terms compare
/// the larger side: `>=2048`, `<512`, `=1024`, or postfix `1024<` (bigger
/// than 1024) and `1024>` (smaller than 1024).
#[derive(Debug, Parser)]
#[command(name = "texlens", version, about)]
pub struct Cli {
    /// Search query
    pub query: Option<String>,

    /// Material manifest (JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    pub manifest: PathBuf,

    /// Session config with query and filter settings (JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Lower bound on the larger side; enables the resolution filter
    #[arg(long, value_name = "PX", allow_negative_numbers = true)]
    pub min: Option<i64>,

    /// Upper bound on the larger side; enables the resolution filter
    #[arg(long, value_name = "PX", allow_negative_numbers = true)]
    pub max: Option<i64>,

    /// Keep only crunched textures
    #[arg(long, conflicts_with = "uncrunched")]
    pub crunched: bool,

    /// Keep only textures that are not crunched
    #[arg(long)]
    pub uncrunched: bool,

    /// Colour-space class: all, srgb, linear or normal_maps
    #[arg(long, value_name = "CLASS")]
    pub color_space: Option<ColorSpaceClass>,

    /// Keep textures whose pixel format contains this text
    #[arg(long, value_name = "TEXT")]
    pub format: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputMode::Text)]
    pub output: OutputMode,

    /// Show which fields each query term matched (text output only)
    #[arg(long)]
    pub explain: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the effective session from the config file and flags.
    pub fn session(&self) -> Result<SearchSession> {
        let mut session = match &self.config {
            Some(path) => SearchSession::load(path)
                .with_context(|| format!("loading session config {}", path.display()))?,
            None => SearchSession::default(),
        };

        if let Some(query) = &self.query {
            session.query = query.clone();
        }

        if self.min.is_some() || self.max.is_some() {
            let current = session.filters.resolution.value;
            let min = self.min.unwrap_or(i64::from(current.min()));
            let max = self.max.unwrap_or(i64::from(current.max()));
            session.filters.resolution = Toggle::on(ResolutionRange::new(min, max));
        }

        if self.crunched || self.uncrunched {
            session.filters.crunched = Toggle::on(self.crunched);
        }

        if let Some(class) = self.color_space {
            session.filters.color_space = Toggle::on(class);
        }

        if let Some(format) = &self.format {
            session.filters.format = Toggle::on(format.clone());
        }

        Ok(session)
    }
}

/// Runs a search and returns the rendered output.
pub fn run(cli: &Cli) -> Result<String> {
    let manifest = MaterialManifest::load(&cli.manifest)?;
    let session = cli.session()?;
    let records = manifest.records();

    let found = session.apply(&records);
    tracing::info!(
        material = %manifest.material,
        total = records.len(),
        found = found.len(),
        "search complete"
    );

    if cli.explain && cli.output.is_structured() {
        tracing::warn!("--explain only applies to text output");
    }
    let query = TextQuery::parse(&session.query);
    let explain = (cli.explain && !query.is_empty()).then_some(&query);

    Ok(render(&found, cli.output, explain)?)
}
