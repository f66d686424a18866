//! Store records and the candidate list loader.
//!
//! The data file is a JSON array of store objects. Entries that are not
//! objects or carry no non-empty string `name` are dropped; a document that
//! is not an array yields no candidates at all. Optional fields of the wrong
//! type are ignored rather than dropping the store.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{StoreError, StoreResult};
use crate::log;

/// Sample data compiled into the binary, used when no file is configured.
const BUNDLED_STORES: &str = include_str!("../data/stores.json");

/// A single selectable restaurant entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    pub name: String,
    pub address: Option<String>,
    pub image: Option<String>,
    pub favorites: Vec<String>,
}

impl Store {
    /// Image to show for this store, or `placeholder` when the store has none
    /// or the value is not something a viewer could load.
    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.image.as_deref().map(str::trim) {
            Some(url) if is_loadable_url(url) => url,
            _ => placeholder,
        }
    }

    /// Address if present and non-blank
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref().map(str::trim).filter(|a| !a.is_empty())
    }
}

fn is_loadable_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty())
}

/// Where the candidate list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSource {
    /// JSON file on disk
    File(PathBuf),
    /// The sample list shipped with the binary
    Bundled,
}

impl StoreSource {
    pub fn describe(&self) -> String {
        match self {
            StoreSource::File(path) => path.display().to_string(),
            StoreSource::Bundled => "bundled sample data".to_string(),
        }
    }
}

/// Load the candidate list from the given source.
pub fn load_candidates(source: &StoreSource) -> StoreResult<Vec<Store>> {
    match source {
        StoreSource::File(path) => load_file(path),
        StoreSource::Bundled => parse_candidates(BUNDLED_STORES),
    }
}

fn load_file(path: &Path) -> StoreResult<Vec<Store>> {
    let contents = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_candidates(&contents)
}

/// Parse a JSON document into the candidate list, dropping malformed entries.
pub fn parse_candidates(json: &str) -> StoreResult<Vec<Store>> {
    let document: Value = serde_json::from_str(json)?;

    let Value::Array(entries) = document else {
        log::log("Store data is not a JSON array, treating as empty");
        return Ok(vec![]);
    };

    let total = entries.len();
    let stores: Vec<Store> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match parse_entry(&entry) {
            Some(store) => Some(store),
            None => {
                log::log(&format!("Dropping store entry #{}: missing name", i));
                None
            }
        })
        .collect();

    log::log(&format!("Loaded {} of {} store entries", stores.len(), total));
    Ok(stores)
}

fn parse_entry(entry: &Value) -> Option<Store> {
    let name = entry.get("name").and_then(Value::as_str)?;
    if name.is_empty() {
        return None;
    }

    let text = |key: &str| entry.get(key).and_then(Value::as_str).map(String::from);
    let favorites = match entry.get("favorites") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect(),
        _ => vec![],
    };

    Some(Store {
        name: name.to_string(),
        address: text("address"),
        image: text("image"),
        favorites,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACEHOLDER: &str = "https://placehold.co/800x420?text=store";

    fn store(image: Option<&str>) -> Store {
        Store {
            name: "Test".to_string(),
            address: None,
            image: image.map(String::from),
            favorites: vec![],
        }
    }

    #[test]
    fn test_parse_keeps_order_and_fields() {
        let json = r#"[
            {"name": "A", "address": "1 Road", "image": "https://x/a.png", "favorites": ["soup", "rice"]},
            {"name": "B"}
        ]"#;

        let stores = parse_candidates(json).unwrap();
        assert_eq!(stores.len(), 2);
        assert_eq!(stores[0].name, "A");
        assert_eq!(stores[0].address.as_deref(), Some("1 Road"));
        assert_eq!(stores[0].favorites, vec!["soup", "rice"]);
        assert_eq!(stores[1].name, "B");
        assert!(stores[1].favorites.is_empty());
    }

    #[test]
    fn test_parse_drops_entries_without_name() {
        let json = r#"[
            {"name": "Keep"},
            {"address": "no name"},
            {"name": ""},
            {"name": 42},
            {"name": null},
            null,
            "just a string",
            7,
            {"name": "Also keep", "favorites": []}
        ]"#;

        let names: Vec<_> = parse_candidates(json)
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Keep", "Also keep"]);
    }

    #[test]
    fn test_parse_keeps_named_entries_with_odd_fields() {
        let json = r#"[
            {"name": "Null favorites", "favorites": null},
            {"name": "Numeric address", "address": 12, "image": false},
            {"name": "Mixed favorites", "favorites": ["soup", null, 3, "rice"]},
            {"name": "   "},
            {"name": "Fine"}
        ]"#;

        let stores = parse_candidates(json).unwrap();
        let names: Vec<_> = stores.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Null favorites", "Numeric address", "Mixed favorites", "   ", "Fine"]
        );

        assert!(stores[0].favorites.is_empty());
        assert_eq!(stores[1].address, None);
        assert_eq!(stores[1].image, None);
        assert_eq!(stores[2].favorites, vec!["soup", "rice"]);
    }

    #[test]
    fn test_parse_non_array_is_empty() {
        assert!(parse_candidates(r#"{"name": "A"}"#).unwrap().is_empty());
        assert!(parse_candidates("null").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_json_is_error() {
        assert!(matches!(parse_candidates("[{"), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let source = StoreSource::File(PathBuf::from("/definitely/not/here.json"));
        assert!(matches!(load_candidates(&source), Err(StoreError::Read { .. })));
    }

    #[test]
    fn test_bundled_data_loads() {
        let stores = load_candidates(&StoreSource::Bundled).unwrap();
        assert!(!stores.is_empty());
        assert!(stores.iter().all(|s| !s.name.is_empty()));
    }

    #[test]
    fn test_image_fallback() {
        assert_eq!(store(Some("https://img/a.jpg")).image_or(PLACEHOLDER), "https://img/a.jpg");
        assert_eq!(store(Some("http://img/a.jpg")).image_or(PLACEHOLDER), "http://img/a.jpg");
        assert_eq!(store(None).image_or(PLACEHOLDER), PLACEHOLDER);
        assert_eq!(store(Some("")).image_or(PLACEHOLDER), PLACEHOLDER);
        assert_eq!(store(Some("https://")).image_or(PLACEHOLDER), PLACEHOLDER);
        assert_eq!(store(Some("file:///etc/passwd")).image_or(PLACEHOLDER), PLACEHOLDER);
    }

    #[test]
    fn test_blank_address_is_hidden() {
        let mut s = store(None);
        s.address = Some("  ".to_string());
        assert_eq!(s.address(), None);
        s.address = Some("9 Lane".to_string());
        assert_eq!(s.address(), Some("9 Lane"));
    }
}
