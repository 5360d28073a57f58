//! JSON file helpers with atomic writes.

use crate::domain::Result;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// A missing file reads as `T::default()`; a corrupt one is still an error.
pub fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    read_json(path)
}

/// Write to a sibling temp file, then rename over the target.
pub fn write_json_atomic<T: Serialize>(path: &Path, data: &T) -> Result {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(data)?;
    let temp_path = path.with_extension("tmp");

    let mut temp_file = fs::File::create(&temp_path)?;
    temp_file.write_all(json.as_bytes())?;
    temp_file.sync_all()?;

    fs::rename(&temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HackboardError;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_default() {
        let dir = TempDir::new().unwrap();
        let map: BTreeMap<String, u32> = read_json_or_default(&dir.path().join("none.json")).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn write_then_read_creates_parent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data.json");
        let data = BTreeMap::from([("a".to_string(), 1u32)]);

        write_json_atomic(&path, &data).unwrap();
        assert!(!path.with_extension("tmp").exists());
        let back: BTreeMap<String, u32> = read_json(&path).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let res: Result<BTreeMap<String, u32>> = read_json_or_default(&path);
        assert!(matches!(res, Err(HackboardError::Json(_))));
    }
}
