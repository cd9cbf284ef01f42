//! Texture records and their import metadata.
//!
//! A [`TextureRecord`] describes one texture reference found on a material.
//! Records are built fresh by the caller for every filter pass; the engine
//! only ever reads them.

use serde::{Deserialize, Serialize};

/// Opaque handle identifying a texture asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextureId(pub u64);

impl std::fmt::Display for TextureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One texture reference on a material, as seen by the search engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureRecord {
    /// Identity of the referenced texture. Never absent: properties without
    /// a texture are dropped before records are built.
    pub id: TextureId,
    /// Human label of the shader property.
    pub display_name: String,
    /// Shader property identifier, e.g. `_MainTex`.
    pub property_name: String,
    /// Name of the texture asset.
    pub texture_name: String,
    /// Asset path. Empty for textures that do not live in an asset file.
    #[serde(default)]
    pub asset_path: String,
    pub width: u32,
    pub height: u32,
    /// Rendered pixel format, e.g. `DXT5` or `RGBA32`.
    pub format: String,
    #[serde(default)]
    pub import: ImportInfo,
}

impl TextureRecord {
    /// The size used by resolution comparisons: the larger side.
    pub fn size_measure(&self) -> u32 {
        self.width.max(self.height)
    }

    /// Resolution rendered as `{width}x{height}`.
    pub fn dimensions(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// Compression quality reported by the texture importer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompressionQuality {
    None,
    Low,
    Normal,
    High,
    /// No importer information available.
    #[default]
    Unknown,
}

impl CompressionQuality {
    /// The label shown to users and searched by text terms.
    pub fn label(self) -> &'static str {
        match self {
            CompressionQuality::None => "None",
            CompressionQuality::Low => "Low Quality",
            CompressionQuality::Normal => "Normal Quality",
            CompressionQuality::High => "High Quality",
            CompressionQuality::Unknown => "",
        }
    }
}

impl std::fmt::Display for CompressionQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Texture type explicitly configured on an importer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureType {
    Default,
    NormalMap,
    Sprite,
    Lightmap,
    SingleChannel,
    Cursor,
}

/// Raw importer settings as reported by the asset system.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImporterSettings {
    /// Explicit texture type. `None` when the importer does not say.
    pub texture_type: Option<TextureType>,
    /// Declared colour-space flag; `false` means linear.
    pub srgb: bool,
    pub crunched: bool,
    pub crunch_quality: u8,
    pub compression: CompressionQuality,
}

/// Metadata describing how a texture is imported.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportInfo {
    pub is_crunched: bool,
    pub is_normal_map: bool,
    /// `true` for linear colour space, `false` for sRGB.
    pub is_linear: bool,
    /// Crunch quality, 0 to 100.
    pub crunch_quality: u8,
    pub compression: CompressionQuality,
}

impl ImportInfo {
    /// Derives import metadata for a texture.
    ///
    /// An explicit texture type on the importer decides whether the texture
    /// is a normal map. Without one, the name and path are inspected; a
    /// texture detected that way is always treated as linear, whatever its
    /// declared colour-space flag says.
    pub fn derive(
        importer: Option<&ImporterSettings>,
        texture_name: &str,
        asset_path: &str,
    ) -> Self {
        let mut info = match importer {
            Some(settings) => ImportInfo {
                is_crunched: settings.crunched,
                is_normal_map: false,
                is_linear: !settings.srgb,
                crunch_quality: settings.crunch_quality.min(100),
                compression: settings.compression,
            },
            None => ImportInfo::default(),
        };

        match importer.and_then(|s| s.texture_type) {
            Some(texture_type) => {
                info.is_normal_map = texture_type == TextureType::NormalMap;
            }
            None => {
                if looks_like_normal_map(texture_name, asset_path) {
                    tracing::trace!(texture_name, asset_path, "normal map detected by name");
                    info.is_normal_map = true;
                    info.is_linear = true;
                }
            }
        }

        info
    }
}

/// Name/path heuristic for textures whose importer does not declare a type.
pub fn looks_like_normal_map(texture_name: &str, asset_path: &str) -> bool {
    let name = texture_name.to_lowercase();
    let path = asset_path.to_lowercase();
    name.contains("normal")
        || name.contains("bump")
        || path.contains("_n.")
        || name.ends_with("_n")
}
