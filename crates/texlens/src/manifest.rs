//! Material manifests.
//!
//! A manifest lists the texture slots of one material the way the asset
//! system reports them. Converting it to [`TextureRecord`]s drops empty
//! slots and derives import metadata for the rest.

use std::path::Path;

use serde::{Deserialize, Serialize};
use texlens_query::{
    load_document, ImportInfo, ImporterSettings, TexlensError, TextureId, TextureRecord,
};
use thiserror::Error;

/// Errors that can occur while loading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to load manifest: {0}")]
    Load(#[from] TexlensError),
}

/// The texture slots of one material.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MaterialManifest {
    pub material: String,
    #[serde(default)]
    pub slots: Vec<Slot>,
}

/// One texture property of the material's shader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub display_name: String,
    pub property_name: String,
    /// Assigned texture, absent when the slot is empty.
    #[serde(default)]
    pub texture: Option<SlotTexture>,
}

/// A texture assigned to a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotTexture {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub format: String,
    /// Importer settings; absent for textures created at runtime.
    #[serde(default)]
    pub importer: Option<ImporterSettings>,
}

impl MaterialManifest {
    /// Loads a manifest from a JSON or YAML file, chosen by extension.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let manifest: MaterialManifest = load_document(path)?;
        tracing::debug!(
            material = %manifest.material,
            slots = manifest.slots.len(),
            "loaded manifest from {}",
            path.display()
        );
        Ok(manifest)
    }

    /// Builds searchable records, in slot order.
    pub fn records(&self) -> Vec<TextureRecord> {
        self.slots
            .iter()
            .filter_map(|slot| {
                let Some(texture) = &slot.texture else {
                    tracing::trace!(property = %slot.property_name, "skipping empty slot");
                    return None;
                };
                Some(TextureRecord {
                    id: TextureId(texture.id),
                    display_name: slot.display_name.clone(),
                    property_name: slot.property_name.clone(),
                    texture_name: texture.name.clone(),
                    asset_path: texture.path.clone(),
                    width: texture.width,
                    height: texture.height,
                    format: texture.format.clone(),
                    import: ImportInfo::derive(
                        texture.importer.as_ref(),
                        &texture.name,
                        &texture.path,
                    ),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use texlens_query::{CompressionQuality, TextureType};

    const YAML: &str = r#"
material: Rock
slots:
  - display_name: Albedo
    property_name: _MainTex
    texture:
      id: 10
      name: Rock_Albedo
      path: Assets/Rock/Rock_Albedo.png
      width: 2048
      height: 1024
      format: DXT5Crunched
      importer:
        texture_type: default
        srgb: true
        crunched: true
        crunch_quality: 75
        compression: high
  - display_name: Detail Mask
    property_name: _DetailMask
  - display_name: Normal Map
    property_name: _BumpMap
    texture:
      id: 11
      name: Rock_n
      width: 1024
      height: 1024
      format: BC5
"#;

    #[test]
    fn parses_yaml() {
        let manifest: MaterialManifest = serde_yaml::from_str(YAML).unwrap();
        assert_eq!(manifest.material, "Rock");
        assert_eq!(manifest.slots.len(), 3);
        assert!(manifest.slots[1].texture.is_none());
        let importer = manifest.slots[0]
            .texture
            .as_ref()
            .and_then(|t| t.importer.as_ref())
            .unwrap();
        assert_eq!(importer.texture_type, Some(TextureType::Default));
        assert_eq!(importer.compression, CompressionQuality::High);
    }

    #[test]
    fn load_reports_path_on_failure() {
        let err = MaterialManifest::load(Path::new("/nonexistent/rock.yaml")).unwrap_err();
        assert!(matches!(err, ManifestError::Load(TexlensError::Io { .. })));
        assert!(err.to_string().contains("/nonexistent/rock.yaml"));
    }

    #[test]
    fn records_skip_empty_slots() {
        let manifest: MaterialManifest = serde_yaml::from_str(YAML).unwrap();
        let records = manifest.records();
        let names: Vec<&str> = records.iter().map(|r| r.texture_name.as_str()).collect();
        assert_eq!(names, ["Rock_Albedo", "Rock_n"]);
    }

    #[test]
    fn records_derive_import_info() {
        let manifest: MaterialManifest = serde_yaml::from_str(YAML).unwrap();
        let records = manifest.records();

        let albedo = &records[0].import;
        assert!(albedo.is_crunched);
        assert!(!albedo.is_linear);
        assert!(!albedo.is_normal_map);
        assert_eq!(albedo.crunch_quality, 75);

        // runtime texture, detected by its "_n" suffix
        let normal = &records[1].import;
        assert!(normal.is_normal_map);
        assert!(normal.is_linear);
        assert_eq!(normal.compression, CompressionQuality::Unknown);
    }
}
