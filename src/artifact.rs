//! Loading raw items and atomically publishing the enriched artifact.

use crate::model::{EnrichedItem, RawItem};
use crate::Result;
use std::fs;
use std::path::Path;

/// Load the ordered raw item list from a JSON file.
pub fn load_items(path: &Path) -> Result<Vec<RawItem>> {
    let contents = fs::read_to_string(path)?;
    let items = serde_json::from_str(&contents)?;
    Ok(items)
}

/// Atomically replace the artifact at `path` with the enriched item list.
///
/// The JSON is written to a sibling temp file and renamed over the target, so
/// consumers either see the complete previous artifact or the complete new
/// one, never a torn write. The temp file is cleaned up on failure.
pub fn publish(path: &Path, items: &[EnrichedItem]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;

    // Same directory as the target so the rename stays on one filesystem.
    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    let temp = std::path::PathBuf::from(temp);

    if let Err(e) = fs::write(&temp, json.as_bytes()) {
        let _ = fs::remove_file(&temp);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position;

    fn enriched(id: &str) -> EnrichedItem {
        EnrichedItem::from_raw(
            RawItem::new(id, format!("text for {}", id)),
            Position::new(0.0, 0.0, 0.0),
            Vec::new(),
        )
    }

    #[test]
    fn test_publish_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");

        publish(&path, &[enriched("a"), enriched("b")]).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        let loaded: Vec<EnrichedItem> = serde_json::from_str(&contents).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "a");
    }

    #[test]
    fn test_publish_replaces_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");

        publish(&path, &[enriched("old")]).unwrap();
        publish(&path, &[enriched("new1"), enriched("new2")]).unwrap();

        let loaded: Vec<EnrichedItem> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "new1");
    }

    #[test]
    fn test_publish_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        publish(&path, &[enriched("a")]).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("items.json")]);
    }

    #[test]
    fn test_load_items() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.json");
        fs::write(
            &path,
            r#"[{"id":"a","text":"alpha","context":"first"},{"id":"b","text":"beta"}]"#,
        )
        .unwrap();

        let items = load_items(&path).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].context.as_deref(), Some("first"));
        assert!(items[1].context.is_none());
    }

    #[test]
    fn test_load_items_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_items(&dir.path().join("nope.json")).is_err());
    }
}
