// file: src/exporter/json.rs
// description: json array writer for the final record sequence

use crate::error::Result;
use crate::models::ModelRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    path: PathBuf,
}

impl JsonExporter {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the target with a 2-space indented JSON array.
    pub fn write(&self, records: &[ModelRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;

        info!("Wrote {} record(s) to {}", records.len(), self.path.display());
        Ok(())
    }

    pub fn read(&self) -> Result<Vec<ModelRecord>> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample() -> Vec<ModelRecord> {
        let mut creation = ModelRecord::new(
            "Dice Tower",
            "https://images/dice.jpg",
            vec!["dnd".to_string()],
            "https://cults3d.com/en/3d-model/game/dice-tower",
        );
        creation.downloads = Some(3);
        creation.sales_cents = Some(0);

        vec![
            ModelRecord::new(
                "Moogle",
                "https://images/moogle.png",
                vec!["final fantasy".to_string()],
                "https://cults3d.com/d/moogle",
            ),
            creation,
        ]
    }

    #[test]
    fn test_exporter_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out/models.json");
        let exporter = JsonExporter::new(&path).unwrap();
        exporter.write(&[]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path().join("models.json")).unwrap();
        exporter.write(&[]).unwrap();

        assert_eq!(fs::read_to_string(exporter.path()).unwrap(), "[]");
        assert!(exporter.read().unwrap().is_empty());
    }

    #[test]
    fn test_written_file_reads_back_identically() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path().join("models.json")).unwrap();
        let records = sample();

        exporter.write(&records).unwrap();
        assert_eq!(exporter.read().unwrap(), records);
    }

    #[test]
    fn test_output_uses_two_space_indent_and_overwrites() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path().join("models.json")).unwrap();

        exporter.write(&sample()).unwrap();
        exporter.write(&sample()[..1]).unwrap();

        let content = fs::read_to_string(exporter.path()).unwrap();
        assert!(content.starts_with("[\n  {\n    \"title\": \"Moogle\""));
        assert_eq!(exporter.read().unwrap().len(), 1);
        assert!(!content.contains("downloads"));
    }
}
