use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::catalog::PresetCatalog;
use crate::error::{AppError, Result};

/// Where the web app serves preset images from.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/zartyblartfast/BeyondHorizonCalc/main/assets/images/presets";

/// Each preset carries up to four images, named `1_*` through `4_*`.
pub const IMAGE_SLOTS: u32 = 4;

/// Build the `imageURL_*` JSON fragment for a preset whose image directory
/// is already configured and populated. The first file (by name) with each
/// numeric prefix fills that slot; empty slots get empty strings, as do all
/// `_source` fields.
pub fn generate_image_urls(
    catalog: &PresetCatalog,
    images_root: &Path,
    base_url: &str,
    preset_name: &str,
) -> Result<Map<String, Value>> {
    let record = catalog
        .find(preset_name)
        .ok_or_else(|| AppError::PresetNotFound(preset_name.to_string()))?;

    let image_dir = record.configured_dir().ok_or_else(|| {
        AppError::message(format!("no imageDir set for preset `{preset_name}`"))
    })?;

    let dir_path = images_root.join(image_dir);
    if !dir_path.is_dir() {
        return Err(AppError::message(format!(
            "image directory not found: {}",
            dir_path.display()
        )));
    }

    let mut files = numbered_image_files(&dir_path)?;
    if files.is_empty() {
        return Err(AppError::message(format!(
            "no numbered image files found in {}",
            dir_path.display()
        )));
    }
    files.sort();

    let mut urls = Map::new();
    for slot in 1..=IMAGE_SLOTS {
        let prefix = format!("{slot}_");
        let url = files
            .iter()
            .find(|file| file.starts_with(&prefix))
            .map(|file| format!("{base_url}/{image_dir}/{file}"))
            .unwrap_or_default();

        urls.insert(format!("imageURL_{slot}"), Value::String(url));
        urls.insert(format!("imageURL_{slot}_source"), Value::String(String::new()));
    }

    Ok(urls)
}

fn numbered_image_files(dir_path: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir_path)? {
        let entry = entry?;
        let Some(name) = entry.file_name().to_str().map(String::from) else {
            continue;
        };
        let numbered = (1..=IMAGE_SLOTS).any(|slot| name.starts_with(&format!("{slot}_")));
        if numbered && entry.path().is_file() {
            files.push(name);
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog_with(name: &str, image_dir: &str) -> PresetCatalog {
        serde_json::from_value(json!({
            "presets": [{"name": name, "imageDir": image_dir}]
        }))
        .expect("build catalogue")
    }

    #[test]
    fn fills_slots_from_numbered_files_and_leaves_gaps_empty() {
        let root = tempfile::tempdir().expect("tempdir");
        let dir = root.path().join("dover_calais");
        fs::create_dir_all(&dir).expect("image dir");
        for file in ["1_view.jpg", "1_alt.jpg", "3_map.png", "notes.txt"] {
            fs::write(dir.join(file), b"").expect("fixture file");
        }

        let catalog = catalog_with("Dover to Calais", "dover_calais");
        let urls = generate_image_urls(&catalog, root.path(), "https://img.example", "Dover to Calais")
            .expect("generate urls");

        // Keys come out in slot order, URL then source.
        let keys: Vec<&str> = urls.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "imageURL_1",
                "imageURL_1_source",
                "imageURL_2",
                "imageURL_2_source",
                "imageURL_3",
                "imageURL_3_source",
                "imageURL_4",
                "imageURL_4_source",
            ]
        );

        assert_eq!(
            urls["imageURL_1"],
            Value::String("https://img.example/dover_calais/1_alt.jpg".to_string()),
            "first file by name wins the slot"
        );
        assert_eq!(urls["imageURL_2"], Value::String(String::new()));
        assert_eq!(
            urls["imageURL_3"],
            Value::String("https://img.example/dover_calais/3_map.png".to_string())
        );
        assert_eq!(urls["imageURL_1_source"], Value::String(String::new()));
    }

    #[test]
    fn rejects_preset_without_image_dir() {
        let root = tempfile::tempdir().expect("tempdir");
        let catalog = catalog_with("Dover to Calais", "");

        let err = generate_image_urls(&catalog, root.path(), DEFAULT_BASE_URL, "Dover to Calais")
            .expect_err("missing imageDir should fail");
        assert!(err.to_string().contains("no imageDir"), "got: {err}");
    }

    #[test]
    fn rejects_missing_directory_and_empty_directory() {
        let root = tempfile::tempdir().expect("tempdir");
        let catalog = catalog_with("Dover to Calais", "dover_calais");

        let err = generate_image_urls(&catalog, root.path(), DEFAULT_BASE_URL, "Dover to Calais")
            .expect_err("missing directory should fail");
        assert!(err.to_string().contains("not found"), "got: {err}");

        fs::create_dir_all(root.path().join("dover_calais")).expect("image dir");
        let err = generate_image_urls(&catalog, root.path(), DEFAULT_BASE_URL, "Dover to Calais")
            .expect_err("empty directory should fail");
        assert!(err.to_string().contains("no numbered image files"), "got: {err}");
    }

    #[test]
    fn unknown_preset_is_reported_as_not_found() {
        let root = tempfile::tempdir().expect("tempdir");
        let catalog = catalog_with("Dover to Calais", "dover_calais");

        let err = generate_image_urls(&catalog, root.path(), DEFAULT_BASE_URL, "Nope")
            .expect_err("unknown preset should fail");
        assert!(matches!(err, AppError::PresetNotFound(_)), "got: {err}");
    }
}
