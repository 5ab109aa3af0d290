use anyhow::{bail, Result};
use leafbridge_boundary::MarkerSet;
use leafbridge_entities::marker::Marker;
use std::{fs, path::Path};

/// Loads a marker set from a TOML or JSON file.
pub fn load_from_file(path: &Path) -> Result<Vec<Marker>> {
    let content = fs::read_to_string(path)?;
    let set: MarkerSet = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content)?,
        Some("json") => serde_json::from_str(&content)?,
        _ => bail!("Unsupported marker file format: {}", path.display()),
    };
    log::info!("Loaded {} markers from {}", set.markers.len(), path.display());
    Ok(set.markers.into_iter().map(Marker::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_toml_and_json_markers() {
        let dir = tempfile::tempdir().unwrap();

        let toml_file = dir.path().join("markers.toml");
        fs::write(
            &toml_file,
            r#"
            [[markers]]
            lat = 52.5
            lng = 13.4
            tag = "m1"
            draggable = true

            [markers.icon]
            type = "icon"
            options = { iconUrl = "pin.png" }
            "#,
        )
        .unwrap();
        let markers = load_from_file(&toml_file).unwrap();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].tag(), Some("m1"));
        assert!(markers[0].draggable());
        assert!(markers[0].icon().is_some());

        let json_file = dir.path().join("markers.json");
        fs::write(&json_file, r#"{"markers":[{"lat":1.0,"lng":2.0}]}"#).unwrap();
        let markers = load_from_file(&json_file).unwrap();
        assert_eq!(markers.len(), 1);
        assert!(markers[0].tag().is_none());
    }

    #[test]
    fn reject_unknown_format() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("markers.csv");
        fs::write(&file, "1,2").unwrap();
        assert!(load_from_file(&file).is_err());
    }
}
