//! Loading host-provided JSON files.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use askthom_types::{ContextMap, PageContextData};

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} file: {}", what, path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} file: {}", what, path.display()))
}

/// Context data: a JSON object of arbitrary values
pub fn load_context_data(path: &Path) -> Result<ContextMap> {
    read_json(path, "context data")
}

/// Page context: `{"pageName": ..., "pageDescription": ..., ...}`
pub fn load_page_context(path: &Path) -> Result<PageContextData> {
    read_json(path, "page context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use askthom_types::ContextValue;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn json_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_context_data() {
        let file = json_file(r#"{"candidate": "Jane Doe", "matchScore": 82, "flags": ["relocation"]}"#);
        let data = load_context_data(file.path()).unwrap();

        assert_eq!(data.get("candidate"), Some(&ContextValue::from("Jane Doe")));
        assert_eq!(data.get("matchScore"), Some(&ContextValue::Integer(82)));
        assert_eq!(
            data.get("flags"),
            Some(&ContextValue::List(vec![ContextValue::from("relocation")]))
        );
    }

    #[test]
    fn test_load_page_context() {
        let file = json_file(
            r#"{"pageName": "Employee Detail", "pageDescription": "Profile view", "currentlyViewingEmployee": "E-7"}"#,
        );
        let page = load_page_context(file.path()).unwrap();

        assert_eq!(page.page_name, "Employee Detail");
        assert_eq!(page.page_description.as_deref(), Some("Profile view"));
        assert_eq!(page.viewing().as_deref(), Some("E-7"));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = load_context_data(Path::new("/nonexistent/askthom.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/askthom.json"));
    }

    #[test]
    fn test_invalid_json_is_error() {
        let file = json_file("{ not json");
        assert!(load_page_context(file.path()).is_err());
    }
}
