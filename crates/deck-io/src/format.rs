//! Loading and saving of deck format tables as JSON.

use std::fs;
use std::path::Path;

use deck_model::DeckFormat;

use crate::error::Result;

/// Read format tables from a JSON file. Missing fields keep their Baci default.
pub fn load_format(path: impl AsRef<Path>) -> Result<DeckFormat> {
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

pub fn save_format(path: impl AsRef<Path>, format: &DeckFormat) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_vec_pretty(format)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeckError;

    #[test]
    fn saved_format_loads_back() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("format").join("baci.json");
        let mut format = DeckFormat::default();
        format.skip_sections.push("PROBLEM SIZE".to_string());

        save_format(&path, &format).expect("save should succeed");
        let loaded = load_format(&path).expect("load should succeed");
        assert_eq!(loaded, format);
    }

    #[test]
    fn load_format_fails_for_invalid_payload() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("bad.json");
        fs::write(&path, "{invalid json").expect("write invalid payload");
        let err = load_format(&path).expect_err("invalid JSON should fail");
        assert!(matches!(err, DeckError::Json(_)));

        let err = load_format(dir.path().join("missing.json")).expect_err("missing file");
        assert!(matches!(err, DeckError::Io(_)));
    }
}
