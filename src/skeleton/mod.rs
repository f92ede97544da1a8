//! The static hall skeleton.
//!
//! Halls pre-exist any exhibitor data: the skeleton is both the merge target
//! and the failure fallback. A built-in layout ships with the binary; a JSON
//! layout file can replace it so venue geometry changes need no rebuild.

use std::path::Path;

use crate::error::SkeletonResult;
use crate::models::Hall;

/// The built-in venue layout.
pub fn default_halls() -> Vec<Hall> {
    vec![
        Hall::new("h-1-1", "1.1", 1, "passenger"),
        Hall::new("h-2-1", "2.1", 1, "passenger"),
        Hall::new("h-3-1", "3.1", 1, "passenger"),
        Hall::new("h-4-1", "4.1", 1, "passenger"),
        Hall::new("h-5-1", "5.1", 1, "commercial"),
        Hall::new("h-9-2", "9.2", 2, "parts"),
        Hall::new("h-10-2", "10.2", 2, "parts"),
        Hall::new("h-13-2", "13.2", 2, "new-energy"),
        Hall::new("h-14-2", "14.2", 2, "new-energy"),
        Hall::new("h-17-2", "17.2", 2, "passenger"),
        Hall::new("h-20-2", "20.2", 2, "passenger"),
        Hall::new("h-21-2", "21.2", 2, "passenger"),
    ]
}

/// Load a hall skeleton from a JSON layout file (an array of halls).
pub fn load_from_file(path: impl AsRef<Path>) -> SkeletonResult<Vec<Hall>> {
    let content = std::fs::read_to_string(path)?;
    let halls: Vec<Hall> = serde_json::from_str(&content)?;
    Ok(halls)
}

/// Load the layout file when given, otherwise the built-in layout.
pub fn load_or_default(path: Option<&Path>) -> SkeletonResult<Vec<Hall>> {
    match path {
        Some(p) => load_from_file(p),
        None => Ok(default_halls()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_halls_have_unique_codes() {
        let halls = default_halls();
        let mut codes: Vec<&str> = halls.iter().map(|h| h.code.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), halls.len());
        assert!(halls.iter().all(|h| h.brands.is_empty()));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"h-17-2","code":"17.2","floor":2,"type":"passenger"}}]"#
        )
        .unwrap();

        let halls = load_from_file(file.path()).unwrap();
        assert_eq!(halls.len(), 1);
        assert_eq!(halls[0].code, "17.2");
        assert_eq!(halls[0].hall_type, "passenger");
        assert!(halls[0].brands.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_from_file("/nonexistent/layout.json").unwrap_err();
        assert!(err.to_string().contains("layout file"));
    }

    #[test]
    fn test_load_invalid_json_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_load_or_default_without_path() {
        let halls = load_or_default(None).unwrap();
        assert_eq!(halls, default_halls());
    }
}
