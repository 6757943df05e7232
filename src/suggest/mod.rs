use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{self, PresetCatalog};
use crate::error::{AppError, Result};

pub mod candidate;
pub mod similarity;

pub use candidate::derive_candidate;
pub use similarity::{find_similar_directories, similarity_ratio, SimilarityMatch};

/// Outcome of analyzing one preset.
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    /// The preset already has an image directory; nothing to do.
    AlreadySet { image_dir: String },
    /// No preset with the requested name exists in the catalogue.
    NotFound,
    /// The preset needs a directory; here is what we would call it.
    Suggestion(Suggestion),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub candidate: String,
    pub already_exists: bool,
    pub similar: Vec<SimilarityMatch>,
}

/// Analyze a preset: derive a directory-name candidate and score it against
/// the directories that already exist. Pure inspection, no side effects.
pub fn analyze(catalog: &PresetCatalog, images_root: &Path, preset_name: &str) -> Analysis {
    let Some(record) = catalog.find(preset_name) else {
        return Analysis::NotFound;
    };

    if let Some(dir) = record.configured_dir() {
        return Analysis::AlreadySet {
            image_dir: dir.to_string(),
        };
    }

    let candidate = derive_candidate(preset_name);
    let already_exists = images_root.join(&candidate).is_dir();
    let similar = find_similar_directories(&candidate, images_root);

    Analysis::Suggestion(Suggestion {
        candidate,
        already_exists,
        similar,
    })
}

/// Create `<images_root>/<candidate>` and record it as the preset's image
/// directory, saving the whole catalogue back to disk.
///
/// Creation and persistence form one logical step: the catalogue is only
/// written after the directory exists, so a failed `mkdir` leaves the file
/// untouched.
pub fn create_and_persist(
    catalog: &mut PresetCatalog,
    catalog_path: &Path,
    images_root: &Path,
    preset_name: &str,
    candidate: &str,
) -> Result<PathBuf> {
    let dir_path = images_root.join(candidate);
    fs::create_dir_all(&dir_path).map_err(|source| AppError::CreateDir {
        path: dir_path.clone(),
        source,
    })?;

    let record = catalog
        .find_mut(preset_name)
        .ok_or_else(|| AppError::PresetNotFound(preset_name.to_string()))?;
    record.set_image_dir(candidate);

    catalog::save_catalog(catalog_path, catalog)?;
    Ok(dir_path)
}
