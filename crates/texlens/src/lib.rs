//! texlens - Command-line browser for the textures referenced by a material.
//!
//! Loads a material manifest, turns its slots into texture records and runs
//! them through the `texlens-query` engine:
//!
//! ```text
//! texlens -m rock.yaml '!crunched'
//! texlens -m rock.yaml '>=2048|<512' --color-space normal_maps -o json
//! texlens -m rock.yaml -c session.yaml --explain
//! ```

pub mod cli;
pub mod manifest;
pub mod output;

pub use cli::{run, Cli};
pub use manifest::{ManifestError, MaterialManifest, Slot, SlotTexture};
pub use output::{render, OutputMode, RenderError, TextureRow};
