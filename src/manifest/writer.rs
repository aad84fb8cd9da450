//! Manifest serialization

use std::fs;
use std::path::Path;

use crate::manifest::ManifestEntry;
use crate::manifest::error::ManifestError;

/// Serializes the manifest as pretty-printed JSON and overwrites `path`.
///
/// Output is 2-space indented with a trailing newline; equal input always
/// produces byte-identical output.
pub fn write(path: &Path, entries: &[ManifestEntry]) -> Result<(), ManifestError> {
    let mut json = serde_json::to_string_pretty(entries)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_entries() -> Vec<ManifestEntry> {
        vec![
            ManifestEntry {
                git_url: "https://example.com/a".to_string(),
                branch: "v1.2.3".to_string(),
            },
            ManifestEntry {
                git_url: "https://example.com/b".to_string(),
                branch: "main".to_string(),
            },
        ]
    }

    #[test]
    fn write_emits_two_space_indented_json_with_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("apps.json");

        write(&path, &sample_entries()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            concat!(
                "[\n",
                "  {\n",
                "    \"git_url\": \"https://example.com/a\",\n",
                "    \"branch\": \"v1.2.3\"\n",
                "  },\n",
                "  {\n",
                "    \"git_url\": \"https://example.com/b\",\n",
                "    \"branch\": \"main\"\n",
                "  }\n",
                "]\n",
            )
        );
    }

    #[test]
    fn write_replaces_previous_manifest_wholesale() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("apps.json");
        fs::write(&path, "stale content that must disappear").unwrap();

        write(&path, &sample_entries()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("[\n"));
        assert!(!written.contains("stale"));
    }

    #[test]
    fn write_is_byte_identical_across_runs() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");

        write(&first, &sample_entries()).unwrap();
        write(&second, &sample_entries()).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn write_emits_empty_array_for_no_repositories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("apps.json");

        write(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
    }
}
