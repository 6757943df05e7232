use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, Context, Result};

pub mod bulk;

/// One preset entry from the catalogue file. Fields beyond `name` and
/// `imageDir` are carried through untouched so a load/save cycle never
/// drops data the web app relies on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetRecord {
    pub name: String,
    #[serde(rename = "imageDir", default, skip_serializing_if = "Option::is_none")]
    pub image_dir: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PresetRecord {
    /// The configured image directory, treating an absent or empty
    /// `imageDir` as "not configured".
    pub fn configured_dir(&self) -> Option<&str> {
        self.image_dir.as_deref().filter(|dir| !dir.is_empty())
    }

    pub fn set_image_dir(&mut self, dir: &str) {
        self.image_dir = Some(dir.to_string());
    }
}

/// The full presets document: an ordered list of records plus any sibling
/// keys the file happens to contain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetCatalog {
    pub presets: Vec<PresetRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PresetCatalog {
    /// Look up a preset by its exact name. First match wins when the
    /// catalogue contains duplicates.
    pub fn find(&self, name: &str) -> Option<&PresetRecord> {
        self.presets.iter().find(|preset| preset.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut PresetRecord> {
        self.presets.iter_mut().find(|preset| preset.name == name)
    }
}

/// Load the catalogue file, tolerating a UTF-8 byte-order mark.
pub fn load_catalog(path: &Path) -> Result<PresetCatalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalogue file {}", path.display()))?;
    let text = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

    let catalog: PresetCatalog = serde_json::from_str(text)
        .with_context(|| format!("Failed to parse catalogue file {}", path.display()))?;

    warn_duplicate_names(&catalog);
    Ok(catalog)
}

/// Re-serialize the whole catalogue and replace the file on disk. The new
/// content is written to a sibling temp file first and renamed into place,
/// so the original survives a failed write.
pub fn save_catalog(path: &Path, catalog: &PresetCatalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)
        .context("Failed to serialize preset catalogue")?;

    write_replacing(path, &json).map_err(|source| AppError::Persist {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write_replacing(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = std::path::PathBuf::from(tmp);

    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}

fn warn_duplicate_names(catalog: &PresetCatalog) {
    let mut seen = HashSet::new();
    for preset in &catalog.presets {
        if !seen.insert(preset.name.as_str()) {
            warn!(
                "duplicate preset name `{}` in catalogue; the first entry wins",
                preset.name
            );
        }
    }
}
